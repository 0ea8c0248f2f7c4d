use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::future::join_all;
use log::{debug, info, warn};
use rayon::prelude::*;
use tokio::task::JoinError;

use crate::convert::error::{ConvertError, Result};
use crate::convert::scanner::{FileCollector, ProgressTracker};
use crate::convert::types::{ConvertOptions, FileOutcome};
use super::{ConversionStats, FileProcessor};

/// Drives a conversion run: scan the tree, convert every file concurrently, tally the results.
///
/// By default one tokio task is spawned per file with no upper bound. Setting
/// `ConvertOptions::parallel_threads` runs the same work on a fixed-size rayon pool
/// instead; output and counting are identical in both modes.
#[derive(Debug)]
pub struct Coordinator {
    /// Configuration options for the run
    options: ConvertOptions,

    /// File collector for finding stylesheets
    file_collector: FileCollector,

    /// Per-file converter
    processor: FileProcessor,
}

impl Coordinator {
    /// Create a new coordinator with the given options
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            file_collector: FileCollector::new(),
            processor: FileProcessor::new(),
        }
    }

    /// Convert every stylesheet below `root` in place.
    ///
    /// Fails only if the tree cannot be scanned, in which case no file is touched.
    /// Per-file failures are reported on stderr and counted in the returned stats.
    pub async fn convert_directory(&self, root: impl AsRef<Path>) -> Result<ConversionStats> {
        let root = root.as_ref();
        info!("Scanning {}", root.display());

        let files = self.file_collector.collect_files(root)?;
        let total = files.len();

        let tracker = Arc::new(ProgressTracker::new(total, self.options.show_progress));
        let converted = Arc::new(AtomicUsize::new(0));

        let outcomes = match self.options.parallel_threads {
            None => {
                debug!("Spawning one task per file for {} files", total);
                self.fan_out(files, &tracker, &converted).await
            }
            Some(threads) => {
                let processor = self.processor;
                let tracker = Arc::clone(&tracker);
                let converted = Arc::clone(&converted);
                let pooled = tokio::task::spawn_blocking(move || {
                    run_pool(processor, &files, threads, &tracker, &converted)
                });
                pool_outcomes(pooled.await)?
            }
        };

        tracker.finish();

        // Every worker has been joined, so the counter is final
        let converted = converted.load(Ordering::SeqCst);
        let mut stats = ConversionStats::new(total);
        for outcome in &outcomes {
            stats.record(outcome);
        }
        debug_assert_eq!(stats.converted_files, converted);

        println!(
            "Conversion complete. Successfully converted {} of {} files.",
            converted, total
        );
        info!(
            "Converted {}/{} files ({:.1}%), replaced {} values",
            converted,
            total,
            stats.success_rate(),
            stats.replaced_values
        );

        Ok(stats)
    }

    /// Spawn a task per file and wait for all of them
    async fn fan_out(
        &self,
        files: Vec<PathBuf>,
        tracker: &Arc<ProgressTracker>,
        converted: &Arc<AtomicUsize>,
    ) -> Vec<FileOutcome> {
        let tasks = files.into_iter().map(|path| {
            let processor = self.processor;
            let task_tracker = Arc::clone(tracker);
            let converted = Arc::clone(converted);
            let task_path = path.clone();

            let handle = tokio::spawn(async move {
                let result = processor.convert_file_async(&task_path).await;
                report(&task_path, &result, &task_tracker, &converted);
                FileOutcome { path: task_path, result }
            });

            let tracker = Arc::clone(tracker);
            async move {
                match handle.await {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        let err = ConvertError::TaskFailed {
                            path: path.clone(),
                            message: e.to_string(),
                        };
                        tracker.eprintln(failure_line(&path, &err));
                        tracker.inc();
                        FileOutcome { path, result: Err(err) }
                    }
                }
            }
        });

        join_all(tasks).await
    }
}

/// Convert the files on a rayon pool of `threads` workers (0 = one per CPU)
fn run_pool(
    processor: FileProcessor,
    files: &[PathBuf],
    threads: usize,
    tracker: &ProgressTracker,
    converted: &AtomicUsize,
) -> Vec<FileOutcome> {
    let threads = if threads == 0 { num_cpus::get() } else { threads };
    debug!("Converting {} files on {} worker threads", files.len(), threads);

    let work = || {
        files
            .par_iter()
            .map(|path| {
                let result = processor.convert_file(path);
                report(path, &result, tracker, converted);
                FileOutcome { path: path.clone(), result }
            })
            .collect::<Vec<_>>()
    };

    match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
        Ok(pool) => pool.install(work),
        Err(e) => {
            warn!("Failed to configure thread pool, using the global pool: {}", e);
            work()
        }
    }
}

/// Unwrap the joined pool run, re-raising a worker panic
fn pool_outcomes(
    joined: std::result::Result<Vec<FileOutcome>, JoinError>,
) -> Result<Vec<FileOutcome>> {
    match joined {
        Ok(outcomes) => Ok(outcomes),
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        Err(e) => Err(ConvertError::WorkerPool {
            message: e.to_string(),
        }),
    }
}

/// Print the per-file line and bump the success counter
fn report(path: &Path, result: &Result<usize>, tracker: &ProgressTracker, converted: &AtomicUsize) {
    match result {
        Ok(_) => {
            converted.fetch_add(1, Ordering::SeqCst);
            tracker.println(format!("Converted file: {}", path.display()));
        }
        Err(e) => {
            debug!("Conversion of {} failed: {:?}", path.display(), e);
            tracker.eprintln(failure_line(path, e));
        }
    }
    tracker.inc();
}

fn failure_line(path: &Path, err: &ConvertError) -> String {
    format!("Error converting file {}: {}", path.display(), err)
}
