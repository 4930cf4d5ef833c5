//! Result view-model
//!
//! The terminal stand-in for the result region of a page: a fixed set of
//! display fields the request handler mutates and the output module renders.

use crate::analysis::report::AnalysisResult;
use crate::analysis::verdict::Tier;
use crate::core::constants::display;

/// Lifecycle of the view between submissions.
///
/// `Idle → Pending → (Success | Failure)`; the next submission re-enters
/// Pending. There is no cancellation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Pending,
    Success,
    Failure,
}

/// What the verdict banner currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Empty,
    Pending,
    Error,
    Verdict(Tier),
}

impl Banner {
    /// Banner text, marker included
    pub fn label(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Pending => format!("{} {}", display::PENDING_EMOJI, display::PENDING_SCORE),
            Self::Error => format!("{} ERROR", display::ERROR_EMOJI),
            Self::Verdict(tier) => format!("{} {}", tier.marker(), tier.label()),
        }
    }

    /// Banner text without markers, for minimal output
    pub fn plain_label(&self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Pending => "ANALYZING",
            Self::Error => "ERROR",
            Self::Verdict(tier) => tier.label(),
        }
    }
}

/// The display fields the handler writes and the renderer reads.
#[derive(Debug, Clone)]
pub struct ResultsView {
    state: ViewState,
    credibility: String,
    text_score: String,
    phrases: String,
    media_score: String,
    banner: Banner,
    explanation: String,
}

impl Default for ResultsView {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsView {
    pub fn new() -> Self {
        Self {
            state: ViewState::Idle,
            credibility: String::new(),
            text_score: String::new(),
            phrases: String::new(),
            media_score: String::new(),
            banner: Banner::Empty,
            explanation: String::new(),
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn credibility(&self) -> &str {
        &self.credibility
    }

    pub fn text_score(&self) -> &str {
        &self.text_score
    }

    pub fn phrases(&self) -> &str {
        &self.phrases
    }

    pub fn media_score(&self) -> &str {
        &self.media_score
    }

    pub fn banner(&self) -> Banner {
        self.banner
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Enter the pending state: every field shows its placeholder and the
    /// banner turns neutral. Called before any network activity so the user
    /// sees immediate feedback.
    pub fn set_pending(&mut self) {
        self.state = ViewState::Pending;
        self.credibility = display::PENDING_SCORE.to_string();
        self.text_score = display::PENDING_FIELD.to_string();
        self.phrases = display::PENDING_FIELD.to_string();
        self.media_score = display::PENDING_FIELD.to_string();
        self.banner = Banner::Pending;
        self.explanation = String::new();
    }

    /// Apply a parsed analysis response: populate the display fields with
    /// their values or fallbacks, classify the verdict, and return the tier.
    pub fn apply_result(&mut self, report: &AnalysisResult) -> Tier {
        let tier = Tier::classify(report.credibility_score);

        self.state = ViewState::Success;
        self.credibility = report.credibility_display();
        self.text_score = report.text_score_display();
        self.phrases = report.phrases_display();
        self.media_score = report.media_score_display();
        self.banner = Banner::Verdict(tier);
        self.explanation = tier.explanation().to_string();

        tier
    }

    /// Apply the failure path: error banner and fixed explanation. The
    /// score fields keep whatever the pending state set them to.
    pub fn apply_failure(&mut self) {
        self.state = ViewState::Failure;
        self.banner = Banner::Error;
        self.explanation = display::ERROR_EXPLANATION.to_string();
    }
}
