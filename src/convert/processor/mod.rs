mod coordinator;
mod file_processor;
mod stats;

// Re-export from submodules
pub use coordinator::Coordinator;
pub use file_processor::FileProcessor;
pub use stats::ConversionStats;
