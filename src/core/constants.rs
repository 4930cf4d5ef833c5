/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings, numbers, and other literal values
/// used across the application, making them easier to maintain and modify.
/// Output format constants
pub mod output_formats {
    /// Text output format - colorful, emoji-enhanced verdict rendering
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - plain text without colors or emojis
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Analysis service endpoint constants
pub mod endpoints {
    /// Fixed relative path of the analysis endpoint
    pub const ANALYZE_PATH: &str = "/analyze";
    /// Default server base URL when none is configured
    pub const DEFAULT_SERVER: &str = "http://localhost:5000";
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default connection timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
    /// Maximum reasonable timeout in seconds (1 hour)
    pub const MAX_TIMEOUT_SECONDS: u64 = 3600;
    /// Minimum timeout in seconds
    pub const MIN_TIMEOUT_SECONDS: u64 = 1;
}

/// Credibility score band boundaries
pub mod scores {
    /// Minimum expected credibility score
    pub const MIN_SCORE: f64 = 0.0;
    /// Maximum expected credibility score
    pub const MAX_SCORE: f64 = 100.0;
    /// Scores at or above this are classified as likely authentic
    pub const AUTHENTIC_MIN: f64 = 80.0;
    /// Scores at or above this (and below AUTHENTIC_MIN) are questionable
    pub const QUESTIONABLE_MIN: f64 = 60.0;
    /// Scores at or above this (and below QUESTIONABLE_MIN) are likely misleading
    pub const MISLEADING_MIN: f64 = 40.0;
}

/// Multipart form field names sent to the analysis service
pub mod form_fields {
    /// Field name carrying the submitted text
    pub const TEXT: &str = "text";
    /// Field name carrying the uploaded media file
    pub const MEDIA: &str = "media";
}

/// Display and formatting constants
pub mod display {
    /// Placeholder shown in the credibility field while a request is in flight
    pub const PENDING_SCORE: &str = "Analyzing...";
    /// Placeholder shown in the remaining fields while a request is in flight
    pub const PENDING_FIELD: &str = "...";
    /// Shown when an optional score field is absent from the response
    pub const NOT_AVAILABLE: &str = "N/A";
    /// Shown when the suspicious phrases list is empty or absent
    pub const NO_PHRASES: &str = "None detected";
    /// Fixed explanation text for the failure path
    pub const ERROR_EXPLANATION: &str = "Analysis failed. Please try again.";
    /// Blocking notification text for the failure path
    pub const FAILURE_ALERT: &str = "Analysis failed! Check the log for details.";

    /// Emoji for the pending banner
    pub const PENDING_EMOJI: &str = "⏳";
    /// Emoji for the error banner
    pub const ERROR_EMOJI: &str = "❌";
    /// Emoji for the likely authentic verdict
    pub const AUTHENTIC_EMOJI: &str = "✅";
    /// Emoji for the questionable verdict
    pub const QUESTIONABLE_EMOJI: &str = "⚠️";
    /// Emoji for the likely misleading verdict
    pub const MISLEADING_EMOJI: &str = "❌";
    /// Emoji for the highly suspicious verdict
    pub const SUSPICIOUS_EMOJI: &str = "🚫";
}
