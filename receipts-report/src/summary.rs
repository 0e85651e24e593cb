use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// One-line total for an inclusive date range, in dollars to the cent.
pub fn format_expenses(start: NaiveDate, end: NaiveDate, total: Decimal) -> String {
    let total = total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("Total expenses from {start} to {end}: ${total:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, day).unwrap()
    }

    #[test]
    fn test_format_expenses() {
        assert_eq!(
            format_expenses(d(3, 1), d(3, 31), Decimal::new(5250, 2)),
            "Total expenses from 2025-03-01 to 2025-03-31: $52.50"
        );
    }

    #[test]
    fn test_format_pads_and_rounds() {
        assert_eq!(
            format_expenses(d(1, 1), d(1, 2), Decimal::ZERO),
            "Total expenses from 2025-01-01 to 2025-01-02: $0.00"
        );
        assert_eq!(
            format_expenses(d(1, 1), d(1, 2), Decimal::new(10005, 3)),
            "Total expenses from 2025-01-01 to 2025-01-02: $10.01"
        );
        assert_eq!(
            format_expenses(d(1, 1), d(1, 2), Decimal::new(7, 0)),
            "Total expenses from 2025-01-01 to 2025-01-02: $7.00"
        );
    }
}
