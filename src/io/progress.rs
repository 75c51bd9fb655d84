//! Per-file tiling progress with a rolling window for large batches

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>20} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Images: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

#[derive(Debug, Clone, Default)]
struct FileState {
    label: String,
    reached: usize,
    catalog_len: usize,
    done: bool,
}

impl FileState {
    const fn is_registered(&self) -> bool {
        !self.label.is_empty()
    }
}

/// Progress display for a batch of conversions
///
/// A file's bar advances once per catalog entry the tiling reaches. When
/// there are more files than bars, a files bar is added and the bars show
/// the most recently started files.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    files: Vec<FileState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars yet
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Create bars for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let bar = ProgressBar::new(file_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(bar));
        }

        self.file_bars = (0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS))
            .map(|_| {
                let bar = ProgressBar::new(0);
                bar.set_style(FILE_STYLE.clone());
                self.multi_progress.add(bar)
            })
            .collect();
    }

    /// Register a file about to be tiled with a catalog of `catalog_len` sizes
    pub fn start_file(&mut self, index: usize, path: &Path, catalog_len: usize) {
        if index >= self.files.len() {
            self.files.resize_with(index + 1, FileState::default);
        }
        if let Some(state) = self.files.get_mut(index) {
            *state = FileState {
                label: path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .into_owned(),
                reached: 0,
                catalog_len,
                done: false,
            };
        }
        self.refresh();
    }

    /// Report the catalog entry the tiling engine reached
    pub fn update_piece(&mut self, file_index: usize, piece_index: usize) {
        if let Some(state) = self.files.get_mut(file_index) {
            state.reached = piece_index;
        }
        self.refresh();
    }

    /// Mark a file as written
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.files.get_mut(index) {
            state.reached = state.catalog_len;
            state.done = true;
        }
        self.refresh();
    }

    /// Finish the batch bar and clear the display
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All images converted");
        }
        let _ = self.multi_progress.clear();
    }

    /// Number of files registered so far
    pub fn tracked_files(&self) -> usize {
        self.files.iter().filter(|state| state.is_registered()).count()
    }

    /// Progress of a file as (`reached`, `catalog_len`)
    pub fn file_progress(&self, index: usize) -> Option<(usize, usize)> {
        self.files
            .get(index)
            .map(|state| (state.reached, state.catalog_len))
    }

    fn refresh(&self) {
        let registered: Vec<_> = self
            .files
            .iter()
            .filter(|state| state.is_registered())
            .collect();
        let skip = registered.len().saturating_sub(self.file_bars.len());

        for (bar, state) in self.file_bars.iter().zip(registered.into_iter().skip(skip)) {
            bar.set_length(state.catalog_len as u64);
            bar.set_position(state.reached as u64);
            bar.set_prefix(if state.done {
                format!("✓ {}", state.label)
            } else {
                state.label.clone()
            });
            bar.set_message(format!("size {}/{}", state.reached, state.catalog_len));
        }
    }
}
