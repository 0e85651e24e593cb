//! Turn the model's loosely shaped JSON reply into a strict `Receipt`.
//!
//! Models wrap JSON in markdown fences, return amounts as `"$43.83"`, and use
//! `null` for anything they could not read. All of that is absorbed here; the
//! aggregator only ever sees well-formed receipts.

use receipts_core::{FALLBACK_CATEGORY, Receipt, ReceiptError, parse_receipt_date};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

use crate::error::ExtractionError;

/// The reply as the model produced it. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReceipt {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl RawReceipt {
    pub fn parse(reply: &str) -> Result<Self, ExtractionError> {
        let json = json_object_slice(reply).ok_or(ExtractionError::EmptyResponse)?;
        serde_json::from_str(json).map_err(|e| ExtractionError::MalformedJson(e.to_string()))
    }

    pub fn into_receipt(self) -> Result<Receipt, ExtractionError> {
        let date_str = self.date.ok_or(ExtractionError::MissingField("date"))?;
        let date = parse_receipt_date(&date_str).ok_or(ExtractionError::InvalidDate(date_str))?;

        let amount = match self.amount {
            None | Some(Value::Null) => return Err(ExtractionError::MissingField("amount")),
            Some(v) => parse_amount(&v)?,
        };
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ExtractionError::NegativeAmount(amount));
        }

        let vendor = self.vendor.map(|v| v.trim().to_string()).unwrap_or_default();
        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());

        Receipt::new(date, amount, vendor, category).map_err(|e| match e {
            ReceiptError::NegativeAmount(a) => ExtractionError::NegativeAmount(a),
            ReceiptError::AmountTooLarge(a) => ExtractionError::InvalidAmount(a.to_string()),
        })
    }
}

/// Parse and validate a model reply in one step.
pub fn receipt_from_reply(reply: &str) -> Result<Receipt, ExtractionError> {
    RawReceipt::parse(reply)?.into_receipt()
}

/// The outermost `{ ... }` in the reply, which drops code fences and any
/// chatter around the object.
fn json_object_slice(reply: &str) -> Option<&str> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    (start < end).then(|| &reply[start..=end])
}

fn parse_amount(v: &Value) -> Result<Decimal, ExtractionError> {
    let raw = match v {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => return Err(ExtractionError::InvalidAmount(other.to_string())),
    };
    let invalid = || ExtractionError::InvalidAmount(raw.clone());

    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '$' | '€' | '£') && !c.is_whitespace())
        .collect();
    // Currency codes such as "USD12.00" or "12.00EUR".
    let cleaned = cleaned.trim_matches(|c: char| c.is_ascii_alphabetic());
    let cleaned = strip_thousands_separators(cleaned).ok_or_else(invalid)?;

    let amount = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| invalid())?;
    if amount > Receipt::MAX_AMOUNT {
        return Err(invalid());
    }
    Ok(amount)
}

/// Drop commas that separate thousands groups ("1,234.50"). Any other comma,
/// such as a decimal comma in "12,50", makes the amount unreadable.
fn strip_thousands_separators(s: &str) -> Option<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != ',' {
            out.push(c);
            continue;
        }
        let after_digit = i > 0 && chars[i - 1].is_ascii_digit();
        let group = chars.get(i + 1..i + 4).is_some_and(|g| g.iter().all(char::is_ascii_digit));
        let group_ends = !chars.get(i + 4).is_some_and(char::is_ascii_digit);
        if !(after_digit && group && group_ends) {
            return None;
        }
    }
    Some(out)
}
