use pocket_wallet::parsing::parse_bill;
use rust_decimal::dec;

/// Columnar lines split on runs of spaces; the trailing segment supplies
/// the amount and the rest becomes the description.
#[test]
fn parses_columnar_item_line() {
    let parsed = parse_bill("Pen   10.00");

    assert_eq!(parsed.items.len(), 1);
    assert_eq!(parsed.items[0].description, "Pen");
    assert_eq!(parsed.items[0].amount, dec!(10.00));
    assert_eq!(parsed.items[0].raw, "Pen   10.00");
    assert_eq!(parsed.total, None);
}

/// " - " and "|" also act as column separators.
#[test]
fn parses_dash_and_pipe_separated_lines() {
    let parsed = parse_bill("Notebook - 25.50\nStapler|4.25");

    assert_eq!(parsed.items.len(), 2);
    assert_eq!(parsed.items[0].description, "Notebook");
    assert_eq!(parsed.items[0].amount, dec!(25.50));
    assert_eq!(parsed.items[1].description, "Stapler");
    assert_eq!(parsed.items[1].amount, dec!(4.25));
}

/// Middle segments are folded into the description.
#[test]
fn joins_middle_segments_into_description() {
    let parsed = parse_bill("Pen  2 x 5.00  10.00");

    assert_eq!(parsed.items.len(), 1);
    assert_eq!(parsed.items[0].description, "Pen - 2 x 5.00");
    assert_eq!(parsed.items[0].amount, dec!(10.00));
}

/// Currency symbols and thousands separators are tolerated.
#[test]
fn strips_currency_symbols_and_commas() {
    let parsed = parse_bill("Laptop   $1,299.99\nKeyboard   ₹2,500");

    assert_eq!(parsed.items[0].amount, dec!(1299.99));
    assert_eq!(parsed.items[1].amount, dec!(2500));
}

/// A line with a single space still yields an item through the whole-line
/// fallback, with the number stripped from the description.
#[test]
fn whole_line_fallback_extracts_first_number() {
    let parsed = parse_bill("Pen 10.00");

    assert_eq!(parsed.items.len(), 1);
    assert_eq!(parsed.items[0].description, "Pen");
    assert_eq!(parsed.items[0].amount, dec!(10.00));
}

/// Negative amounts parse through the fallback as well.
#[test]
fn fallback_handles_negative_amounts() {
    let parsed = parse_bill("Refund -5.00");

    assert_eq!(parsed.items.len(), 1);
    assert_eq!(parsed.items[0].description, "Refund");
    assert_eq!(parsed.items[0].amount, dec!(-5.00));
}

/// Total lines are detected case-insensitively, never become items, and
/// the last one wins.
#[test]
fn detects_totals_and_last_one_wins() {
    let parsed = parse_bill("Pen   10.00\nSubTOTAL  9.00\nGrand Total: 10.00");

    assert_eq!(parsed.items.len(), 1);
    assert_eq!(parsed.total, Some(dec!(10.00)));
}

/// The other total phrases are recognized too.
#[test]
fn detects_alternate_total_phrases() {
    assert_eq!(parse_bill("Amount due  99.95").total, Some(dec!(99.95)));
    assert_eq!(parse_bill("Net amount 12").total, Some(dec!(12)));
    assert_eq!(parse_bill("amount payable: 7.50").total, Some(dec!(7.50)));
}

/// A total line without a number is consumed without clobbering an
/// earlier detected total, and contributes no item.
#[test]
fn numberless_total_line_keeps_earlier_total() {
    let parsed = parse_bill("Total: 10.00\nTotal pending");

    assert_eq!(parsed.total, Some(dec!(10.00)));
    assert!(parsed.items.is_empty());
}

/// Lines with no number at all are silently skipped.
#[test]
fn numberless_lines_are_skipped() {
    let parsed = parse_bill("Unknown Item\n\n   \nStore header text");

    assert!(parsed.items.is_empty());
    assert_eq!(parsed.total, None);
}

/// Parsing is pure: the same input always yields the same result.
#[test]
fn parsing_is_deterministic() {
    let text = "Pen   10.00\nNotebook - 25.50\nTotal: 35.50";

    assert_eq!(parse_bill(text), parse_bill(text));
}
