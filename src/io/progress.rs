//! Stage progress display for a build run

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks the fixed sequence of build stages
///
/// A hidden manager accepts every call and draws nothing, so callers never
/// branch on whether progress is shown.
pub struct BuildProgress {
    bar: ProgressBar,
    completed: Vec<&'static str>,
}

impl BuildProgress {
    /// Create a visible progress bar for `stages` stages
    pub fn new(stages: usize) -> Self {
        let bar = ProgressBar::new(stages as u64);
        bar.set_style(STAGE_STYLE.clone());
        Self {
            bar,
            completed: Vec::with_capacity(stages),
        }
    }

    /// Create a manager that draws nothing
    pub fn hidden(stages: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(stages as u64);
        Self {
            bar,
            completed: Vec::with_capacity(stages),
        }
    }

    /// Announce the stage about to run
    pub fn start_stage(&self, name: &'static str) {
        self.bar.set_message(name);
    }

    /// Mark the current stage finished
    pub fn complete_stage(&mut self, name: &'static str) {
        self.completed.push(name);
        self.bar.inc(1);
    }

    /// Stages completed so far, in order
    pub fn completed(&self) -> &[&'static str] {
        &self.completed
    }

    /// Clear the display once the build is done
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
