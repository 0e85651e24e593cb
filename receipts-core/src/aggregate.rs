//! Aggregation over extracted receipts.
//!
//! Everything here is pure and total: no I/O, no errors. Malformed records are
//! rejected upstream at the extraction boundary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::receipt::Receipt;

/// Category label -> summed amount, iterated in lexicographic category order.
pub type CategoryTotals = BTreeMap<String, Decimal>;

/// Inclusive date range. A range whose start is after its end matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Group receipts by exact (case-sensitive) category and sum each group.
pub fn sum_by_category(receipts: &[Receipt]) -> CategoryTotals {
    let mut totals = CategoryTotals::new();
    for r in receipts {
        *totals
            .entry(r.category().to_string())
            .or_insert(Decimal::ZERO) += r.amount();
    }
    totals
}

/// Receipts dated within `[start, end]`, in input order.
pub fn filter_by_date_range(receipts: &[Receipt], start: NaiveDate, end: NaiveDate) -> Vec<Receipt> {
    let range = DateRange::new(start, end);
    if range.is_empty() {
        return Vec::new();
    }
    receipts
        .iter()
        .filter(|r| range.contains(r.date()))
        .cloned()
        .collect()
}

pub fn total_expenses(receipts: &[Receipt]) -> Decimal {
    receipts.iter().map(Receipt::amount).sum()
}

/// Total spent within `[start, end]`.
pub fn expenses_in_range(receipts: &[Receipt], start: NaiveDate, end: NaiveDate) -> Decimal {
    total_expenses(&filter_by_date_range(receipts, start, end))
}
