//! Terminal progress display for multi-file load and save steps

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{prefix}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks progress over a known number of files
///
/// A disabled reporter drives a hidden bar, so counts are still kept but
/// nothing is drawn.
pub struct ProgressReporter {
    enabled: bool,
    bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ProgressReporter {
    /// Create a reporter; `enabled = false` suppresses all drawing
    pub const fn new(enabled: bool) -> Self {
        Self { enabled, bar: None }
    }

    /// Whether progress is drawn to the terminal
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Begin a stage covering `total` files
    pub fn start(&mut self, total: usize, message: &'static str) {
        let bar = if self.enabled {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(FILE_STYLE.clone());
            bar
        } else {
            ProgressBar::hidden()
        };
        bar.set_length(total as u64);
        bar.set_message(message);
        self.bar = Some(bar);
    }

    /// Record one finished file
    pub fn advance(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_prefix(name);
            bar.inc(1);
        }
    }

    /// Files finished in the current stage
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Close the current stage
    pub fn finish(&mut self, message: &'static str) {
        if let Some(bar) = self.bar.take() {
            if self.enabled {
                bar.finish_with_message(message);
            } else {
                bar.finish_and_clear();
            }
        }
    }
}
