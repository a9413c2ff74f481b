//! Personal wallet core: a balance ledger with an append-only transaction
//! history persisted through an account-keyed state store, plus a bill
//! audit pipeline that parses free-text purchase/sale documents and
//! reconciles them into a comparison report.

pub mod audit;
pub mod domain;
pub mod ledger;
pub mod output;
pub mod parsing;
pub mod store;

pub use audit::{AuditReport, PriceMismatch, reconcile};
pub use domain::{AccountId, Transaction, TransactionId, TransactionKind, WalletState};
pub use ledger::{WalletLedger, errors::LedgerError};
pub use parsing::{BillItem, ParsedBill, parse_bill};
pub use store::{JsonFileStore, MemoryStore, StateStore, StoreError};
