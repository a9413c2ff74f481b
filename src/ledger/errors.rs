use rust_decimal::Decimal;

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Withdrawal destination is required")]
    MissingDestination,
    #[error("Recipient is required")]
    MissingRecipient,
    #[error("Insufficient balance: requested {requested}, balance {balance}")]
    InsufficientFunds { balance: Decimal, requested: Decimal },
    #[error("State store error: {0}")]
    Store(#[from] StoreError),
}
