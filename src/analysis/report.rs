use serde::{Deserialize, Serialize};

use crate::core::constants::display;

/// Parsed response from the analysis service.
///
/// No field is guaranteed to be present. Absence maps to the documented
/// fallback display values, never to a parse failure. Unknown fields in
/// the response body are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall credibility score, expected range 0-100
    pub credibility_score: Option<f64>,

    /// Score of the text analysis pass
    pub text_score: Option<f64>,

    /// Phrases the analyzer flagged as red flags, in analyzer order
    pub suspicious_phrases: Option<Vec<String>>,

    /// Score of the media analysis pass
    pub media_score: Option<f64>,
}

/// Format a score the way it arrived: whole numbers without a decimal point.
pub fn format_score(score: f64) -> String {
    format!("{score}")
}

impl AnalysisResult {
    /// Display value for the credibility score field
    pub fn credibility_display(&self) -> String {
        self.credibility_score
            .map(format_score)
            .unwrap_or_else(|| display::NOT_AVAILABLE.to_string())
    }

    /// Display value for the text score field
    pub fn text_score_display(&self) -> String {
        self.text_score
            .map(format_score)
            .unwrap_or_else(|| display::NOT_AVAILABLE.to_string())
    }

    /// Display value for the suspicious phrases field
    pub fn phrases_display(&self) -> String {
        match &self.suspicious_phrases {
            Some(phrases) if !phrases.is_empty() => phrases.join(", "),
            _ => display::NO_PHRASES.to_string(),
        }
    }

    /// Display value for the media score field
    pub fn media_score_display(&self) -> String {
        self.media_score
            .map(format_score)
            .unwrap_or_else(|| display::NOT_AVAILABLE.to_string())
    }
}
