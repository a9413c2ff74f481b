//! Core domain types: wallet state, transactions, and identifiers.

use chrono::{DateTime, Duration, Utc};
use derive_more::{Display, From, Into};
use rust_decimal::{Decimal, dec};
use serde::{Deserialize, Serialize};

/// Newtype wrapper for opaque account identifiers supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From, Into)]
pub struct AccountId(String);

impl AccountId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(account: &str) -> Self {
        Self(account.to_string())
    }
}

/// Newtype wrapper for per-wallet transaction identifiers.
/// Unique within a wallet and assigned in creation order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    From, Into,
)]
pub struct TransactionId(u64);

/// Sum type over all transaction kinds the ledger can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
    Transfer,
    Bill,
}

/// A single ledger entry. Created exactly once by one ledger operation and
/// never edited afterwards. `amount` is signed: positive for inflows,
/// negative for outflows. `date` is display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub label: String,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
}

/// The persisted wallet document for one account: balance, informational
/// hold, and the newest-first transaction history.
///
/// Invariant: `balance` equals the seed balance plus the sum of all
/// transaction amounts recorded since.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    pub balance: Decimal,
    pub available_hold: Decimal,
    pub transactions: Vec<Transaction>,
}

impl WalletState {
    /// Funds not covered by the informational hold. The ledger reflects
    /// this value but never enforces it.
    pub fn available(&self) -> Decimal {
        self.balance - self.available_hold
    }

    /// Next transaction id: one past the highest id recorded so far.
    pub fn next_transaction_id(&self) -> TransactionId {
        self.transactions
            .iter()
            .map(|tx| u64::from(tx.id))
            .max()
            .map_or(1, |highest| highest + 1)
            .into()
    }

    /// Apply a signed amount to the balance and prepend the matching
    /// transaction. The history is append-only from the ledger's side.
    pub fn record(&mut self, kind: TransactionKind, label: String, amount: Decimal) {
        let transaction = Transaction {
            id: self.next_transaction_id(),
            kind,
            label,
            amount,
            date: Utc::now(),
        };
        self.balance += amount;
        self.transactions.insert(0, transaction);
    }

    /// Demo seed state used whenever an account has no persisted document,
    /// so fresh wallets are never empty.
    pub fn seeded() -> Self {
        let day = |days_ago: i64| Utc::now() - Duration::days(days_ago);
        Self {
            balance: dec!(5230.50),
            available_hold: dec!(120.75),
            transactions: vec![
                Transaction {
                    id: 4.into(),
                    kind: TransactionKind::Deposit,
                    label: "Salary top-up".to_string(),
                    amount: dec!(2200),
                    date: day(5),
                },
                Transaction {
                    id: 3.into(),
                    kind: TransactionKind::Bill,
                    label: "Internet plan".to_string(),
                    amount: dec!(-89),
                    date: day(8),
                },
                Transaction {
                    id: 2.into(),
                    kind: TransactionKind::Transfer,
                    label: "Sent to Karen".to_string(),
                    amount: dec!(-150),
                    date: day(10),
                },
                Transaction {
                    id: 1.into(),
                    kind: TransactionKind::Deposit,
                    label: "Cashback".to_string(),
                    amount: dec!(38.50),
                    date: day(12),
                },
            ],
        }
    }
}
