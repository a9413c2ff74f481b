//! Rendering: wallet snapshot and audit report as text, transaction
//! history as CSV.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    audit::AuditReport,
    domain::{TransactionId, TransactionKind, WalletState},
};

/// Maps directly to the export columns: id, type, label, amount, date.
#[derive(Debug, Serialize)]
struct TransactionCsv<'a> {
    id: TransactionId,
    r#type: TransactionKind,
    label: &'a str,
    amount: Decimal,
    date: DateTime<Utc>,
}

/// Export the transaction history, newest first, as CSV.
pub fn write_transactions_csv(
    state: &WalletState,
    writer: impl std::io::Write,
) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for tx in &state.transactions {
        let row = TransactionCsv {
            id: tx.id,
            r#type: tx.kind,
            label: &tx.label,
            amount: tx.amount,
            date: tx.date,
        };
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_snapshot(state: &WalletState, mut writer: impl std::io::Write) -> anyhow::Result<()> {
    writeln!(writer, "Balance: {}", state.balance)?;
    writeln!(writer, "On hold: {}", state.available_hold)?;
    writeln!(writer, "Available: {}", state.available())?;
    writeln!(writer, "Transactions:")?;
    for tx in &state.transactions {
        writeln!(
            writer,
            "  {} [{}] {} {}",
            tx.date.format("%Y-%m-%d"),
            tx.kind,
            tx.label,
            tx.amount
        )?;
    }
    Ok(())
}

fn optional_total(total: Option<Decimal>) -> String {
    total.map_or_else(|| "N/A".to_string(), |value| value.to_string())
}

pub fn print_report(report: &AuditReport, mut writer: impl std::io::Write) -> anyhow::Result<()> {
    writeln!(writer, "Purchase total: {}", optional_total(report.purchase_total))?;
    writeln!(writer, "Sale total: {}", optional_total(report.sale_total))?;
    writeln!(
        writer,
        "Total gap (sale - purchase): {}",
        optional_total(report.total_gap)
    )?;

    writeln!(writer, "Price mismatches:")?;
    if report.price_mismatches.is_empty() {
        writeln!(writer, "  none")?;
    }
    for mismatch in &report.price_mismatches {
        writeln!(
            writer,
            "  {} - sale {} vs purchase {} (diff {})",
            mismatch.sale.description,
            mismatch.sale.amount,
            mismatch.purchase.amount,
            mismatch.diff
        )?;
    }

    writeln!(writer, "Items in sale but not in purchase:")?;
    if report.missing_in_sale.is_empty() {
        writeln!(writer, "  none")?;
    }
    for item in &report.missing_in_sale {
        writeln!(writer, "  {}", item.raw)?;
    }

    writeln!(writer, "Items in purchase but not in sale:")?;
    if report.missing_in_purchase.is_empty() {
        writeln!(writer, "  none")?;
    }
    for item in &report.missing_in_purchase {
        writeln!(writer, "  {}", item.raw)?;
    }
    Ok(())
}
