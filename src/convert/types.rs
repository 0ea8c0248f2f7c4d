use std::path::PathBuf;

use super::error::ConvertError;

/// Number of pixels in one rem
pub const PIXEL_BASE: f64 = 16.0;

/// Permission bits applied when a write has to create the file
pub const FILE_MODE: u32 = 0o644;

/// Extension of the files picked up by the scanner
pub const STYLESHEET_EXTENSION: &str = "css";

/// Configuration options for a conversion run
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Size of the worker pool; `None` spawns one task per file.
    /// `Some(0)` sizes the pool to the CPU count.
    pub parallel_threads: Option<usize>,

    /// Whether to draw a progress bar for larger trees
    pub show_progress: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            parallel_threads: None,
            show_progress: true,
        }
    }
}

/// Outcome of converting a single file
#[derive(Debug)]
pub struct FileOutcome {
    /// Path of the file that was processed
    pub path: PathBuf,

    /// Number of pixel values replaced on success, or the failure
    pub result: Result<usize, ConvertError>,
}
