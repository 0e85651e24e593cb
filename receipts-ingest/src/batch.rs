//! Sequential extraction over a directory of receipt images.

use anyhow::Result;
use log::{info, warn};
use receipts_core::Receipt;
use std::path::{Path, PathBuf};

use crate::error::ExtractionError;
use crate::images::{ReceiptImage, list_image_paths};

/// Anything that can turn one image into one receipt.
#[allow(async_fn_in_trait)]
pub trait ReceiptExtractor {
    async fn extract(&self, image: &ReceiptImage) -> Result<Receipt, ExtractionError>;
}

/// An image that produced no receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub file: String,
    pub reason: String,
}

/// Outcome of a run: receipts in file-name order plus the files that failed.
#[derive(Debug, Default)]
pub struct Batch {
    pub receipts: Vec<Receipt>,
    pub failures: Vec<Failure>,
}

/// List `dir` and extract every image in it.
///
/// I/O errors (missing directory, unreadable file) abort the run. Extraction
/// errors are logged and the image is left out of the batch.
pub async fn process_directory<E: ReceiptExtractor>(extractor: &E, dir: &Path) -> Result<Batch> {
    let paths = list_image_paths(dir)?;
    info!("found {} files in {}", paths.len(), dir.display());
    process_paths(extractor, &paths).await
}

pub async fn process_paths<E: ReceiptExtractor>(extractor: &E, paths: &[PathBuf]) -> Result<Batch> {
    let mut batch = Batch::default();

    for path in paths {
        let image = ReceiptImage::load(path)?;
        info!("extracting {}", image.name);
        match extractor.extract(&image).await {
            Ok(receipt) => batch.receipts.push(receipt),
            Err(e) => {
                warn!("skipping {}: {}", image.name, e);
                batch.failures.push(Failure {
                    file: image.name,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(batch)
}
