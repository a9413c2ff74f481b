mod common;

use common::{empty_ledger, seeded_ledger};
use pocket_wallet::domain::TransactionKind;
use pocket_wallet::ledger::errors::LedgerError;
use rust_decimal::dec;

/// A withdrawal debits the balance and records a negative-amount
/// Withdraw transaction naming the destination.
#[test]
fn withdrawal_debits_balance() {
    let mut ledger = empty_ledger();
    ledger.deposit(dec!(100.0), None).unwrap();

    let state = ledger.withdraw(dec!(40.0), "  Checking account ").unwrap();

    assert_eq!(state.balance, dec!(60.0));
    let tx = &state.transactions[0];
    assert_eq!(tx.kind, TransactionKind::Withdraw);
    assert_eq!(tx.amount, dec!(-40.0));
    assert_eq!(tx.label, "Withdraw to Checking account");
}

/// Withdrawing the exact balance leaves zero.
#[test]
fn withdrawal_of_exact_balance_leaves_zero() {
    let mut ledger = empty_ledger();
    ledger.deposit(dec!(50.0), None).unwrap();

    let state = ledger.withdraw(dec!(50.0), "bank").unwrap();

    assert_eq!(state.balance, dec!(0.0));
}

/// A withdrawal exceeding the balance fails and the stored state does not
/// change.
#[test]
fn withdrawal_exceeding_balance_is_rejected() {
    let mut ledger = empty_ledger();
    ledger.deposit(dec!(100.0), None).unwrap();
    let before = ledger.snapshot().unwrap();

    let result = ledger.withdraw(dec!(150.0), "bank");

    assert!(matches!(result, Err(LedgerError::InsufficientFunds { .. })));
    assert_eq!(ledger.snapshot().unwrap(), before);
}

/// A blank destination is rejected before the amount is even looked at.
#[test]
fn blank_destination_is_rejected_first() {
    let mut ledger = seeded_ledger();
    let before = ledger.snapshot().unwrap();

    for destination in ["", "   "] {
        let result = ledger.withdraw(dec!(10.0), destination);
        assert!(matches!(result, Err(LedgerError::MissingDestination)));
    }
    // Invalid amount and blank destination: the destination check wins.
    let result = ledger.withdraw(dec!(-1.0), "");
    assert!(matches!(result, Err(LedgerError::MissingDestination)));

    assert_eq!(ledger.snapshot().unwrap(), before);
}

/// Zero and negative amounts are invalid.
#[test]
fn non_positive_withdrawal_is_rejected() {
    let mut ledger = seeded_ledger();

    for amount in [dec!(0), dec!(-10.0)] {
        let result = ledger.withdraw(amount, "bank");
        assert!(matches!(result, Err(LedgerError::InvalidAmount)));
    }
}

/// The funds check runs against the raw balance, not balance minus hold:
/// a withdrawal that dips into the held portion still succeeds.
#[test]
fn withdrawal_may_dip_into_held_funds() {
    // Seeded wallet: balance 5230.50, hold 120.75, available 5109.75.
    let mut ledger = seeded_ledger();

    let state = ledger.withdraw(dec!(5200.0), "bank").unwrap();

    assert_eq!(state.balance, dec!(30.50));
    assert_eq!(state.available_hold, dec!(120.75));
}
