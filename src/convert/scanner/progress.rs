use indicatif::{ProgressBar, ProgressStyle};

/// Below this many files no bar is drawn
const PROGRESS_THRESHOLD: usize = 10;

/// Progress tracker for displaying progress during conversion.
///
/// Console lines emitted while the bar is visible go through [`ProgressTracker::println`]
/// and [`ProgressTracker::eprintln`] so they are printed above the bar instead of through it.
/// The tracker is shared between workers behind an `Arc`.
#[derive(Debug)]
pub struct ProgressTracker {
    progress_bar: Option<ProgressBar>,
}

impl ProgressTracker {
    /// Create a tracker for `total` items; the bar is only drawn when enabled and
    /// there are enough items to make it useful
    pub fn new(total: usize, enabled: bool) -> Self {
        let progress_bar = if enabled && total > PROGRESS_THRESHOLD {
            let pb = ProgressBar::new(total as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({eta})")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
            Some(pb)
        } else {
            None
        };

        Self { progress_bar }
    }

    /// Record one finished item
    pub fn inc(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
        }
    }

    /// Print a line to stdout without tearing the bar
    pub fn println(&self, line: impl AsRef<str>) {
        let line = line.as_ref();
        match &self.progress_bar {
            Some(pb) => pb.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }
    }

    /// Print a line to stderr without tearing the bar
    pub fn eprintln(&self, line: impl AsRef<str>) {
        let line = line.as_ref();
        match &self.progress_bar {
            Some(pb) => pb.suspend(|| eprintln!("{}", line)),
            None => eprintln!("{}", line),
        }
    }

    /// Clear the bar once every item is done
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }
}
