use rust_decimal::Decimal;
use thiserror::Error;

/// Why a single image produced no receipt.
///
/// These never abort a run: the batch driver logs them and moves on.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("model API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("model returned an empty reply")]
    EmptyResponse,

    #[error("reply is not a JSON object: {0}")]
    MalformedJson(String),

    #[error("reply is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("unrecognized date: {0:?}")]
    InvalidDate(String),

    #[error("unrecognized amount: {0:?}")]
    InvalidAmount(String),

    #[error("negative amount: {0}")]
    NegativeAmount(Decimal),
}
