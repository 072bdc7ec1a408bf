use crate::catalog::Language;
use crate::materializer::{ArtifactRecord, MaterializeObserver};
use crate::ui::{theme, Icons};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

/// Progress bar over all artifacts of a run; hidden when stdout is not a terminal.
pub struct ArtifactProgress {
    pb: ProgressBar,
}

impl ArtifactProgress {
    pub fn new(total_artifacts: usize) -> Self {
        let pb = if console::Term::stdout().is_term() {
            ProgressBar::new(total_artifacts as u64)
        } else {
            ProgressBar::hidden()
        };
        if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}") {
            pb.set_style(style.progress_chars("=> "));
        }
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }

    pub fn hidden() -> Self {
        Self {
            pb: ProgressBar::hidden(),
        }
    }

    pub fn finish_with_summary(&self, duration: Duration, languages: usize, artifacts: usize) {
        self.pb.finish_and_clear();
        println!(
            "{} {}",
            Icons::CHECK.style(theme().success.clone()),
            format!("Complete in {}", HumanDuration(duration)).style(theme().success.clone())
        );
        println!(
            "  {} {}  {} {}",
            Icons::FOLDER.style(theme().info.clone()),
            languages,
            Icons::FILE.style(theme().info.clone()),
            artifacts
        );
    }

    pub fn abandon(&self) {
        self.pb.abandon();
    }
}

impl MaterializeObserver for ArtifactProgress {
    fn language_started(&mut self, language: &Language) {
        self.pb.set_message(format!("Writing {}", language));
    }

    fn artifact_written(&mut self, _record: &ArtifactRecord) {
        self.pb.inc(1);
    }
}
