use pocket_wallet::{
    domain::{AccountId, WalletState},
    ledger::WalletLedger,
    store::MemoryStore,
};

pub const ACCOUNT: &str = "test-account";

#[allow(dead_code)]
pub fn account() -> AccountId {
    ACCOUNT.into()
}

/// Ledger over an empty wallet: zero balance, zero hold, no history.
#[allow(dead_code)]
pub fn empty_ledger() -> WalletLedger<MemoryStore> {
    let store = MemoryStore::with_state(account(), WalletState::default());
    WalletLedger::new(store, account())
}

/// Ledger over the seeded demo wallet (balance 5230.50, hold 120.75,
/// four transactions with ids 1 through 4).
#[allow(dead_code)]
pub fn seeded_ledger() -> WalletLedger<MemoryStore> {
    let store = MemoryStore::with_state(account(), WalletState::seeded());
    WalletLedger::new(store, account())
}
