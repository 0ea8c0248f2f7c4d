pub mod error;
pub mod types;
pub mod units;
pub mod scanner;
pub mod processor;

// Re-export the main API for easier access
pub use error::ConvertError;
pub use types::{ConvertOptions, FileOutcome, PIXEL_BASE};
pub use units::{px_to_rem, rewrite_pixels};
pub use scanner::FileCollector;
pub use processor::{ConversionStats, Coordinator, FileProcessor};
