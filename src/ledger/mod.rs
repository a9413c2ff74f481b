//! Stateful wallet ledger.
//!
//! Each operation is read-modify-write against the state store: load the
//! latest wallet document, validate, apply the balance change, prepend the
//! matching transaction, and persist. Validation happens before any write,
//! so a rejected operation leaves stored state untouched. There is no
//! compare-and-swap at the store boundary; callers needing multi-writer
//! safety must serialize access per account themselves.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::{
    domain::{AccountId, TransactionKind, WalletState},
    ledger::errors::LedgerError,
    store::StateStore,
};

pub mod errors;

pub struct WalletLedger<S> {
    store: S,
    account: AccountId,
}

/// Guard: amounts for deposit/withdraw/transfer must be strictly positive.
fn check_amount(amount: Decimal) -> Result<Decimal, LedgerError> {
    if amount <= Decimal::ZERO {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(amount)
}

/// Guard: the requested outflow may not exceed the raw balance. The
/// informational hold is deliberately not subtracted here.
fn check_funds(state: &WalletState, requested: Decimal) -> Result<(), LedgerError> {
    if requested > state.balance {
        return Err(LedgerError::InsufficientFunds {
            balance: state.balance,
            requested,
        });
    }
    Ok(())
}

/// Parse caller-supplied free text into an amount. Non-numeric input maps
/// to `InvalidAmount`; positivity is checked by the operation itself.
pub fn parse_amount(raw: &str) -> Result<Decimal, LedgerError> {
    Decimal::from_str(raw.trim()).map_err(|_| LedgerError::InvalidAmount)
}

impl<S: StateStore> WalletLedger<S> {
    pub fn new(store: S, account: AccountId) -> Self {
        Self { store, account }
    }

    pub fn account(&self) -> &AccountId {
        &self.account
    }

    /// Read-only fetch of the current wallet document.
    pub fn snapshot(&self) -> Result<WalletState, LedgerError> {
        Ok(self.store.load(&self.account)?)
    }

    /// Credit the wallet. The label names the funding source when one is
    /// given.
    pub fn deposit(
        &mut self,
        amount: Decimal,
        source: Option<&str>,
    ) -> Result<WalletState, LedgerError> {
        let amount = check_amount(amount)?;
        let mut state = self.store.load(&self.account)?;

        let label = match source.map(str::trim).filter(|s| !s.is_empty()) {
            Some(source) => format!("Top up from {source}"),
            None => "Wallet deposit".to_string(),
        };
        state.record(TransactionKind::Deposit, label, amount);

        self.store.save(&self.account, &state)?;
        Ok(state)
    }

    /// Debit the wallet towards an external destination.
    pub fn withdraw(
        &mut self,
        amount: Decimal,
        destination: &str,
    ) -> Result<WalletState, LedgerError> {
        if destination.trim().is_empty() {
            return Err(LedgerError::MissingDestination);
        }
        let amount = check_amount(amount)?;
        let mut state = self.store.load(&self.account)?;
        check_funds(&state, amount)?;

        let label = format!("Withdraw to {}", destination.trim());
        state.record(TransactionKind::Withdraw, label, -amount);

        self.store.save(&self.account, &state)?;
        Ok(state)
    }

    /// Debit the wallet towards another party.
    pub fn transfer(&mut self, to: &str, amount: Decimal) -> Result<WalletState, LedgerError> {
        if to.trim().is_empty() {
            return Err(LedgerError::MissingRecipient);
        }
        let amount = check_amount(amount)?;
        let mut state = self.store.load(&self.account)?;
        check_funds(&state, amount)?;

        state.record(TransactionKind::Transfer, format!("Sent to {to}"), -amount);

        self.store.save(&self.account, &state)?;
        Ok(state)
    }

    /// Settle a service bill. A missing or unparsable amount coerces to
    /// zero instead of failing, and the amount is not required to be
    /// positive; the funds check still applies.
    pub fn pay_bill(
        &mut self,
        service_id: &str,
        service_name: Option<&str>,
        amount: Option<Decimal>,
    ) -> Result<WalletState, LedgerError> {
        let amount = amount.unwrap_or_default();
        let mut state = self.store.load(&self.account)?;
        check_funds(&state, amount)?;

        let service = service_name.filter(|name| !name.is_empty()).unwrap_or(service_id);
        state.record(TransactionKind::Bill, format!("{service} bill"), -amount);

        self.store.save(&self.account, &state)?;
        Ok(state)
    }
}
