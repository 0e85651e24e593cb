//! receipts-core: Receipt model and the aggregation logic behind every report.

pub mod aggregate;
pub mod categories;
pub mod dates;
pub mod receipt;

pub use aggregate::{
    CategoryTotals, DateRange, expenses_in_range, filter_by_date_range, sum_by_category,
    total_expenses,
};
pub use categories::{DEFAULT_CATEGORIES, FALLBACK_CATEGORY};
pub use dates::parse_receipt_date;
pub use receipt::{Receipt, ReceiptError};
