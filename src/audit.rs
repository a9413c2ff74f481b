//! Purchase-vs-sale bill reconciliation.
//!
//! Matches line items between two parsed documents by a coarse key (the
//! lower-cased description truncated to 60 characters) and reports totals,
//! the gap between them, items present on only one side, and matched items
//! whose prices disagree.

use std::collections::HashMap;

use rust_decimal::{Decimal, dec};

use crate::parsing::{BillItem, ParsedBill};

/// Rounding slack when comparing matched prices. Two-decimal currency
/// values that differ by less than a cent are considered equal.
const PRICE_TOLERANCE: Decimal = dec!(0.009);

/// A matched item pair whose amounts disagree beyond [`PRICE_TOLERANCE`].
#[derive(Debug, Clone, PartialEq)]
pub struct PriceMismatch {
    pub purchase: BillItem,
    pub sale: BillItem,
    /// Signed difference, sale minus purchase.
    pub diff: Decimal,
}

/// Structured comparison of a purchase document against a sale document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditReport {
    /// Detected document totals; absent stays absent, never zero.
    pub purchase_total: Option<Decimal>,
    pub sale_total: Option<Decimal>,
    /// Sale total minus purchase total, when both are present.
    pub total_gap: Option<Decimal>,
    /// Sale items with no purchase counterpart.
    pub missing_in_sale: Vec<BillItem>,
    /// Purchase items never matched by a sale item.
    pub missing_in_purchase: Vec<BillItem>,
    pub price_mismatches: Vec<PriceMismatch>,
}

/// Reconciliation key: full-string case-insensitive prefix, deliberately
/// coarse. Duplicate keys within one document collapse to the last item.
fn match_key(description: &str) -> String {
    description.to_lowercase().chars().take(60).collect()
}

pub fn reconcile(purchase: &ParsedBill, sale: &ParsedBill) -> AuditReport {
    // Index purchase items by key; a repeated key keeps only the later
    // item addressable, but the key retains its original position.
    let mut by_key: HashMap<String, &BillItem> = HashMap::new();
    let mut key_order: Vec<String> = Vec::new();
    for item in &purchase.items {
        let key = match_key(&item.description);
        if by_key.insert(key.clone(), item).is_none() {
            key_order.push(key);
        }
    }

    let mut missing_in_sale = Vec::new();
    let mut price_mismatches = Vec::new();
    for item in &sale.items {
        let Some(counterpart) = by_key.remove(&match_key(&item.description)) else {
            missing_in_sale.push(item.clone());
            continue;
        };
        let diff = item.amount - counterpart.amount;
        if diff.abs() > PRICE_TOLERANCE {
            price_mismatches.push(PriceMismatch {
                purchase: counterpart.clone(),
                sale: item.clone(),
                diff,
            });
        }
    }

    // Whatever was never consumed by a sale item has no sale counterpart.
    let missing_in_purchase = key_order
        .iter()
        .filter_map(|key| by_key.get(key))
        .map(|&item| item.clone())
        .collect();

    AuditReport {
        purchase_total: purchase.total,
        sale_total: sale.total,
        total_gap: match (purchase.total, sale.total) {
            (Some(purchase_total), Some(sale_total)) => Some(sale_total - purchase_total),
            _ => None,
        },
        missing_in_sale,
        missing_in_purchase,
        price_mismatches,
    }
}
