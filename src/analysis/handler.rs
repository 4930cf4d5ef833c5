use tokio::time::Instant;

use crate::analysis::client::AnalyzeContent;
use crate::analysis::report::AnalysisResult;
use crate::analysis::submission::Submission;
use crate::analysis::verdict::Tier;
use crate::core::constants::display;
use crate::reporting::logging;
use crate::ui::notify::Notify;
use crate::ui::progress::PendingIndicator;
use crate::ui::view::ResultsView;

/// What one submission ended as.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    /// The service returned a parseable report
    Analyzed { report: AnalysisResult, tier: Tier },
    /// Transport error, non-success status, or malformed body
    Failed,
}

impl SubmissionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed)
    }

    /// The credibility score, when the submission was analyzed
    pub fn credibility_score(&self) -> Option<f64> {
        match self {
            Self::Analyzed { report, .. } => report.credibility_score,
            Self::Failed => None,
        }
    }
}

/// The analysis request handler.
///
/// Owns the submit flow: enter the pending state, issue exactly one request,
/// then apply the result or the failure to the view. All three failure
/// causes (transport, status, parse) land in the same path: error banner,
/// fixed explanation, one diagnostic log entry, one blocking notification.
/// A failed submission leaves the handler fully usable for the next one.
pub struct Handler<'a, C: AnalyzeContent, N: Notify> {
    client: &'a C,
    notifier: &'a N,
}

impl<'a, C: AnalyzeContent, N: Notify> Handler<'a, C, N> {
    pub fn new(client: &'a C, notifier: &'a N) -> Self {
        Self { client, notifier }
    }

    /// Run one submission through the analyze-and-render flow.
    ///
    /// The view enters the pending state before the request is issued, so
    /// the pending feedback is observable even if the request never
    /// completes.
    pub async fn submit(
        &self,
        submission: &Submission,
        view: &mut ResultsView,
        progress: &mut PendingIndicator,
    ) -> SubmissionOutcome {
        view.set_pending();
        progress.start(submission.label());
        logging::log_submission_start(submission.label());

        let started = Instant::now();
        let outcome = match self.client.analyze(submission).await {
            Ok(report) => {
                logging::log_response_data(&report);
                let tier = view.apply_result(&report);
                logging::log_analysis_complete(
                    submission.label(),
                    tier,
                    started.elapsed().as_millis(),
                );
                SubmissionOutcome::Analyzed { report, tier }
            }
            Err(err) => {
                logging::log_error("Analysis request failed", Some(&err));
                view.apply_failure();
                self.notifier.alert(display::FAILURE_ALERT);
                SubmissionOutcome::Failed
            }
        };

        progress.finish_and_clear();
        outcome
    }
}
