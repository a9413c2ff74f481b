//! Free-text bill parsing.
//!
//! Turns raw document text (plain text, CSV-ish, or line-delimited
//! JSON-ish — all treated as lines) into a list of priced line items plus
//! an optionally detected document total. The heuristics are best-effort:
//! a line that cannot produce a number is logged and skipped, and the
//! parser itself never fails.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

/// First signed-or-unsigned decimal number in a string.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+(?:\.\d+)?").expect("invalid number pattern"));

/// Column separators: runs of two-or-more spaces, " - ", or "|".
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}|\s-\s|\|").expect("invalid separator pattern"));

/// One priced line item extracted from a bill document.
#[derive(Debug, Clone, PartialEq)]
pub struct BillItem {
    /// The source line, unmodified.
    pub raw: String,
    /// Label with separator and leading/trailing number tokens stripped.
    pub description: String,
    pub amount: Decimal,
}

/// Structured result of parsing one bill document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedBill {
    pub items: Vec<BillItem>,
    /// Amount of the last detected total line, if any.
    pub total: Option<Decimal>,
}

/// Lines naming a document total rather than an item.
fn is_total_line(lower: &str) -> bool {
    ["total", "net amount", "amount due", "amount payable"]
        .iter()
        .any(|marker| lower.contains(marker))
}

/// Extract the first number in a line, tolerating currency symbols and
/// thousands separators.
fn extract_number(text: &str) -> Option<Decimal> {
    let cleaned = text.replace([',', '₹', '$'], "");
    let matched = NUMBER.find(&cleaned)?;
    Decimal::from_str(matched.as_str()).ok()
}

pub fn parse_bill(text: &str) -> ParsedBill {
    let mut items = Vec::new();
    let mut total = None;

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if is_total_line(&line.to_lowercase()) {
            // Later total lines overwrite earlier ones; a total line with
            // no number is still consumed and never becomes an item.
            if let Some(amount) = extract_number(line) {
                total = Some(amount);
            }
            continue;
        }

        // Columnar shape: "description   qty x price   amount".
        let segments: Vec<&str> = SEPARATOR
            .split(line)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect();
        if segments.len() >= 2 {
            if let Some(amount) = extract_number(segments[segments.len() - 1]) {
                items.push(BillItem {
                    raw: line.to_string(),
                    description: segments[..segments.len() - 1].join(" - "),
                    amount,
                });
                continue;
            }
        }

        // Fallback: any line carrying a number counts as an item.
        match extract_number(line) {
            Some(amount) => items.push(BillItem {
                raw: line.to_string(),
                description: NUMBER.replace(line, "").trim().to_string(),
                amount,
            }),
            None => debug!("skipping bill line with no amount: {line:?}"),
        }
    }

    ParsedBill { items, total }
}
