//! Expense categories offered to the extraction model.
//!
//! The aggregator treats categories as free text; this list only shapes the
//! prompt and the fallback for receipts the model could not classify.

pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Meals",
    "Transport",
    "Lodging",
    "Office Supplies",
    "Entertainment",
    "Other",
];

/// Used when the model returns no category at all.
pub const FALLBACK_CATEGORY: &str = "Other";
