use std::path::Path;
use log::debug;

use crate::convert::error::Result;
use crate::convert::units::rewrite_pixel_bytes;
use crate::utils::file_utils;

/// Rewrites the pixel values of a single stylesheet in place.
///
/// The whole file is read, rewritten and written back in one write; there are no retries.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileProcessor;

impl FileProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Convert one file, returning the number of pixel values replaced
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        debug!("Processing file: {}", path.display());

        let content = file_utils::read_file(path)?;
        let (converted, replaced) = rewrite_pixel_bytes(&content);
        file_utils::write_file(path, &converted)?;

        debug!("Replaced {} values in {}", replaced, path.display());
        Ok(replaced)
    }

    /// Async variant of [`FileProcessor::convert_file`] on `tokio::fs`
    pub async fn convert_file_async(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        debug!("Processing file: {}", path.display());

        let content = file_utils::read_file_async(path).await?;
        let (converted, replaced) = rewrite_pixel_bytes(&content);
        file_utils::write_file_async(path, &converted).await?;

        debug!("Replaced {} values in {}", replaced, path.display());
        Ok(replaced)
    }
}
