//! Account-keyed persistence of wallet state documents.
//!
//! The ledger talks to storage through the [`StateStore`] trait only.
//! `load` hands back an owned, independent copy of the state, and an
//! account with no persisted document loads the seeded demo state.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::{AccountId, WalletState};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load/save of a single wallet document per account.
pub trait StateStore {
    /// Fetch the current state for `account`, or the seeded default if the
    /// account has nothing persisted yet. Callers own the returned value.
    fn load(&self, account: &AccountId) -> Result<WalletState, StoreError>;

    /// Replace the persisted state for `account`.
    fn save(&mut self, account: &AccountId, state: &WalletState) -> Result<(), StoreError>;
}

/// File-backed store: one pretty-printed JSON document per account under
/// a base directory, named `<account>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn document_path(&self, account: &AccountId) -> PathBuf {
        self.dir.join(format!("{account}.json"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl StateStore for JsonFileStore {
    fn load(&self, account: &AccountId) -> Result<WalletState, StoreError> {
        let path = self.document_path(account);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(WalletState::seeded()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(state) => Ok(state),
            Err(e) => {
                // A corrupt document is not fatal: fall back to the seed.
                warn!("discarding unreadable wallet document {}: {e}", path.display());
                Ok(WalletState::seeded())
            }
        }
    }

    fn save(&mut self, account: &AccountId, state: &WalletState) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let document = serde_json::to_string_pretty(state)?;
        fs::write(self.document_path(account), document)?;
        Ok(())
    }
}

/// Map-backed store for tests and embedded callers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    states: HashMap<AccountId, WalletState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor seeding a single account up front.
    pub fn with_state(account: AccountId, state: WalletState) -> Self {
        Self {
            states: HashMap::from([(account, state)]),
        }
    }
}

impl StateStore for MemoryStore {
    fn load(&self, account: &AccountId) -> Result<WalletState, StoreError> {
        Ok(self
            .states
            .get(account)
            .cloned()
            .unwrap_or_else(WalletState::seeded))
    }

    fn save(&mut self, account: &AccountId, state: &WalletState) -> Result<(), StoreError> {
        self.states.insert(account.clone(), state.clone());
        Ok(())
    }
}
