//! receipts-report: JSON output, expense summaries, and the category pie chart.

pub mod json;
pub mod pie_chart;
pub mod summary;

pub use json::{render_json, render_totals_json};
pub use pie_chart::{PieSlice, pie_slices, render_pie_chart, write_pie_chart};
pub use summary::format_expenses;
