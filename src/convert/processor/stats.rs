use std::path::PathBuf;
use serde::{Serialize, Deserialize};

use crate::convert::types::FileOutcome;

/// Statistics about a conversion run
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Number of stylesheet files discovered
    pub total_files: usize,

    /// Number of files rewritten successfully
    pub converted_files: usize,

    /// Number of files that could not be converted
    pub failed_files: usize,

    /// Paths to the files that failed
    pub failed_file_paths: Vec<PathBuf>,

    /// Pixel values replaced across all converted files
    pub replaced_values: usize,
}

impl ConversionStats {
    /// Create a new stats instance for a run over `total_files` files
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            ..Self::default()
        }
    }

    /// Fold a single file outcome into the stats
    pub fn record(&mut self, outcome: &FileOutcome) {
        match &outcome.result {
            Ok(replaced) => {
                self.converted_files += 1;
                self.replaced_values += replaced;
            }
            Err(_) => {
                self.failed_files += 1;
                self.failed_file_paths.push(outcome.path.clone());
            }
        }
    }

    /// Calculate the percentage of files that were converted
    pub fn success_rate(&self) -> f64 {
        if self.total_files == 0 {
            return 0.0;
        }

        (self.converted_files as f64 / self.total_files as f64) * 100.0
    }
}
