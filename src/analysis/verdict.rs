use std::fmt;

use crate::core::constants::{display, scores};

/// Verdict tier derived from the credibility score.
///
/// Classification is a pure function of the raw score. Bands are evaluated
/// highest first and the first match wins; a missing or non-numeric score
/// fails every comparison and lands in the lowest tier, mirroring how the
/// analysis service treats content it cannot vouch for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Authentic,
    Questionable,
    Misleading,
    Suspicious,
}

impl Tier {
    /// Classify a raw credibility score into a verdict tier
    pub fn classify(score: Option<f64>) -> Self {
        match score {
            Some(s) if s >= scores::AUTHENTIC_MIN => Self::Authentic,
            Some(s) if s >= scores::QUESTIONABLE_MIN => Self::Questionable,
            Some(s) if s >= scores::MISLEADING_MIN => Self::Misleading,
            _ => Self::Suspicious,
        }
    }

    /// Banner label for this tier
    pub fn label(&self) -> &'static str {
        match self {
            Self::Authentic => "LIKELY AUTHENTIC",
            Self::Questionable => "QUESTIONABLE",
            Self::Misleading => "LIKELY MISLEADING",
            Self::Suspicious => "HIGHLY SUSPICIOUS",
        }
    }

    /// Emoji marker shown next to the banner label
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Authentic => display::AUTHENTIC_EMOJI,
            Self::Questionable => display::QUESTIONABLE_EMOJI,
            Self::Misleading => display::MISLEADING_EMOJI,
            Self::Suspicious => display::SUSPICIOUS_EMOJI,
        }
    }

    /// Assessment sentence rendered in the explanation region
    pub fn explanation(&self) -> &'static str {
        match self {
            Self::Authentic => {
                "This content shows high credibility. Few or no suspicious patterns \
                 were detected. However, always verify important claims with multiple \
                 reliable sources."
            }
            Self::Questionable => {
                "This content shows moderate credibility concerns. Some suspicious \
                 patterns were detected. Verify claims with trusted sources before \
                 sharing."
            }
            Self::Misleading => {
                "This content shows significant credibility issues. Multiple \
                 suspicious patterns detected. Exercise caution and fact-check \
                 thoroughly."
            }
            Self::Suspicious => {
                "This content shows very low credibility with numerous red flags \
                 including clickbait, conspiracy theories, or misinformation \
                 patterns. Do not share without thorough verification."
            }
        }
    }

    /// Stable lowercase identifier for structured output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentic => "authentic",
            Self::Questionable => "questionable",
            Self::Misleading => "misleading",
            Self::Suspicious => "suspicious",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
