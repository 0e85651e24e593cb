//! The Receipt record produced by extraction and consumed by the aggregator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiptError {
    #[error("receipt amount must not be negative (got {0})")]
    NegativeAmount(Decimal),

    #[error("receipt amount {0} exceeds the {max} ceiling", max = Receipt::MAX_AMOUNT)]
    AmountTooLarge(Decimal),
}

/// One extracted receipt.
///
/// Fields are private so the `0 <= amount <= MAX_AMOUNT` invariant established
/// by [`Receipt::new`] holds for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    date: NaiveDate,
    amount: Decimal,
    vendor: String,
    category: String,
}

impl Receipt {
    /// Largest accepted amount (one trillion). Keeps any realistic number of
    /// receipts far below `Decimal::MAX` when summed.
    pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

    pub fn new(
        date: NaiveDate,
        amount: Decimal,
        vendor: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ReceiptError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ReceiptError::NegativeAmount(amount));
        }
        if amount > Self::MAX_AMOUNT {
            return Err(ReceiptError::AmountTooLarge(amount));
        }
        Ok(Self {
            date,
            amount,
            vendor: vendor.into(),
            category: category.into(),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Merchant label; empty when the model could not read one.
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}
