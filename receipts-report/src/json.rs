use anyhow::{Context, Result};
use receipts_core::{CategoryTotals, Receipt};

/// Pretty JSON array of receipts: `date`, `amount` (decimal string), `vendor`,
/// `category`.
pub fn render_json(receipts: &[Receipt]) -> Result<String> {
    serde_json::to_string_pretty(receipts).context("serialize receipts")
}

/// Pretty JSON object of category -> total, keys in sorted order.
pub fn render_totals_json(totals: &CategoryTotals) -> Result<String> {
    serde_json::to_string_pretty(totals).context("serialize category totals")
}
