//! Content analysis flow
//!
//! This module contains the submission capture, the HTTP exchange with
//! the analysis service, the response record, verdict classification,
//! and the request handler that ties them together.

pub mod client;
pub mod handler;
pub mod report;
pub mod submission;
pub mod verdict;

// Re-export commonly used items
pub use client::{AnalysisClient, AnalyzeContent};
pub use handler::{Handler, SubmissionOutcome};
pub use report::AnalysisResult;
pub use submission::Submission;
pub use verdict::Tier;
