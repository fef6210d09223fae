//! Progress display for parallel tile assembly

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Tiles: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks finished tiles of one generation run
///
/// Safe to update from worker threads.
#[derive(Debug, Clone)]
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a bar for `tile_count` tiles
    pub fn new(tile_count: usize) -> Self {
        let bar = ProgressBar::new(tile_count as u64);
        bar.set_style(TILE_STYLE.clone());
        Self { bar }
    }

    /// Create a bar that draws nothing
    pub fn hidden(tile_count: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(tile_count as u64);
        Self { bar }
    }

    /// Record one finished tile
    pub fn complete_tile(&self, index: usize) {
        self.bar.set_message(format!("tile {index} done"));
        self.bar.inc(1);
    }

    /// Number of tiles recorded so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Close the bar with a summary
    pub fn finish(&self, failed: usize) {
        if failed == 0 {
            self.bar.finish_with_message("all tiles done");
        } else {
            self.bar
                .finish_with_message(format!("{failed} tiles failed"));
        }
    }
}
