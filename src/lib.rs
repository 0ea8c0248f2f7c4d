pub mod convert;
pub mod utils;

#[cfg(test)]
mod tests;

use std::path::Path;

// Re-export main types and functions for easier access
pub use convert::{ConversionStats, ConvertError, ConvertOptions, Coordinator};
pub use convert::{px_to_rem, rewrite_pixels, PIXEL_BASE};
pub use convert::scanner::FileCollector;
pub use convert::processor::FileProcessor;

// Re-export utility functions
pub use utils::file_utils;

/// Convert every stylesheet below `root` with the given options
pub async fn convert_directory(
    root: impl AsRef<Path>,
    options: ConvertOptions,
) -> convert::error::Result<ConversionStats> {
    Coordinator::new(options).convert_directory(root).await
}
