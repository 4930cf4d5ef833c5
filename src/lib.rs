//! credcheck - CLI to check content credibility via an analysis service
//!
//! credcheck captures a submission (text and/or a media file), sends it as
//! multipart form data to an analysis server's `/analyze` endpoint, parses
//! the returned credibility scores, and renders a color-coded verdict
//! banner with supporting score fields.
//!
//! The flow is deliberately small: one request per submission, no retries,
//! no cancellation. The server, its scoring pipeline, and its models are
//! external collaborators.

pub mod analysis;
pub mod config;
pub mod core;
pub mod reporting;
pub mod ui;

// Re-export commonly used items at the crate root
pub use self::analysis::{
    AnalysisClient, AnalysisResult, AnalyzeContent, Handler, Submission, SubmissionOutcome, Tier,
};
pub use self::config::{CliConfig, Config};
pub use self::core::{CredCheckError, Result};
pub use self::ui::{Banner, ResultsView, ViewState};
