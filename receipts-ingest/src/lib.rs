//! receipts-ingest: receipt images in, validated `Receipt`s out.
//!
//! The extraction model is reached through [`ReceiptExtractor`]; the OpenAI
//! implementation lives in [`openai`], and [`batch`] drives a directory of
//! images through any extractor.

pub mod batch;
pub mod error;
pub mod images;
pub mod openai;
pub mod validate;

pub use batch::{Batch, Failure, ReceiptExtractor, process_directory, process_paths};
pub use error::ExtractionError;
pub use images::{ReceiptImage, list_image_paths};
pub use openai::{ExtractorConfig, OpenAiExtractor};
pub use validate::{RawReceipt, receipt_from_reply};
