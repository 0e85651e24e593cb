use chrono::{Duration, NaiveDate};
use receipts_core::{Receipt, filter_by_date_range, sum_by_category, total_expenses};
use rust_decimal::Decimal;

const CATEGORIES: &[&str] = &["Meals", "meals", "Transport", "Lodging", "Other", ""];

/// Deterministic spread of receipts over ~3 months, several categories,
/// amounts with mixed scales.
fn fixture(n: usize) -> Vec<Receipt> {
    let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let date = base + Duration::days((i * 7 % 90) as i64);
            let amount = Decimal::new((i as i64 * 1337) % 10_000, (i % 3) as u32);
            let category = CATEGORIES[i % CATEGORIES.len()];
            Receipt::new(date, amount, format!("vendor-{i}"), category).unwrap()
        })
        .collect()
}

#[test]
fn test_total_equals_sum_of_category_totals() {
    for n in [0, 1, 2, 7, 50, 200] {
        let rs = fixture(n);
        let by_cat: Decimal = sum_by_category(&rs).values().copied().sum();
        assert_eq!(total_expenses(&rs), by_cat, "n={n}");
    }
}

#[test]
fn test_every_category_appears_exactly_once() {
    let rs = fixture(60);
    let totals = sum_by_category(&rs);
    assert_eq!(totals.len(), CATEGORIES.len());
    for c in CATEGORIES {
        assert!(totals.contains_key(*c), "missing {c:?}");
    }
}

#[test]
fn test_inverted_ranges_always_empty() {
    let rs = fixture(100);
    let base = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    for offset in 0..90 {
        let start = base + Duration::days(offset + 1);
        let end = base + Duration::days(offset);
        assert!(filter_by_date_range(&rs, start, end).is_empty());
    }
}

#[test]
fn test_filter_preserves_relative_order() {
    let rs = fixture(100);
    let start = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 2, 15).unwrap();
    let kept = filter_by_date_range(&rs, start, end);

    let expected: Vec<_> = rs
        .iter()
        .filter(|r| r.date() >= start && r.date() <= end)
        .cloned()
        .collect();
    assert!(!kept.is_empty());
    assert_eq!(kept, expected);
}

#[test]
fn test_regrouping_totals_is_idempotent() {
    let rs = fixture(80);
    let totals = sum_by_category(&rs);
    let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();

    let regrouped: Vec<Receipt> = totals
        .iter()
        .map(|(cat, amount)| Receipt::new(day, *amount, "", cat.clone()).unwrap())
        .collect();
    assert_eq!(sum_by_category(&regrouped), totals);
}

#[test]
fn test_typical_composition() {
    let rs = fixture(120);
    let start = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
    let feb = filter_by_date_range(&rs, start, end);
    let totals = sum_by_category(&feb);
    let sum: Decimal = totals.values().copied().sum();
    assert_eq!(sum, total_expenses(&feb));
    assert!(feb.iter().all(|r| r.date().format("%m").to_string() == "02"));
}

#[test]
fn test_sums_at_amount_ceiling_do_not_overflow() {
    let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let rs: Vec<Receipt> = (0..10_000)
        .map(|i| Receipt::new(day, Receipt::MAX_AMOUNT, "", CATEGORIES[i % 2]).unwrap())
        .collect();

    let expected = Receipt::MAX_AMOUNT * Decimal::from(10_000);
    assert_eq!(total_expenses(&rs), expected);
    let totals = sum_by_category(&rs);
    assert_eq!(totals["Meals"], expected / Decimal::from(2));
    assert_eq!(totals.values().copied().sum::<Decimal>(), expected);
}

#[test]
fn test_amounts_above_ceiling_never_reach_aggregation() {
    let day = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let huge = Decimal::from_str_exact("70000000000000000000000000000").unwrap();
    assert!(Receipt::new(day, huge, "", "Meals").is_err());
}
