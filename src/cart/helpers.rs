//! Shopping Cart Formatting Helpers
//!
//! Small pure functions shared by the renderers and log statements.

use super::models::LineItem;

/// Produces a human-readable one-line summary for a list of cart lines.
///
/// Example output: `"2x Laptop, 1x Camera"`.
pub fn format_item_summary<T: LineItem>(lines: &[T]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity(), l.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats a currency amount for display, rounded to cents.
///
/// Example output: `"$1399.97"`.
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Total number of units across all lines
pub fn total_units<T: LineItem>(lines: &[T]) -> u64 {
    lines.iter().map(|l| u64::from(l.quantity())).sum()
}
