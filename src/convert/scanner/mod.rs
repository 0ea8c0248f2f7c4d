mod file_collector;
mod progress;

// Re-export from submodules
pub use file_collector::FileCollector;
pub use progress::ProgressTracker;
