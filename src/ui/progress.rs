use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while an analysis request is in flight.
///
/// Started synchronously before the request is issued; the spinner is the
/// terminal rendition of the pending state.
pub struct PendingIndicator {
    spinner: Option<ProgressBar>,
    enabled: bool,
}

impl PendingIndicator {
    pub fn new(enabled: bool) -> Self {
        Self {
            spinner: None,
            enabled,
        }
    }

    /// Start the pending spinner for a submission
    pub fn start(&mut self, label: &str) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.yellow} {msg}")
                .unwrap(),
        );
        pb.set_message(format!("Analyzing {label}..."));
        pb.enable_steady_tick(Duration::from_millis(120));
        self.spinner = Some(pb);
    }

    /// Stop and erase the spinner before the result is rendered
    pub fn finish_and_clear(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}
