//! Failure taxonomy of the matching pipeline.

use std::fmt;

/// Pipeline stage that issued a network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStage {
    Extraction,
    Semantic,
}

impl fmt::Display for MatchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extraction => write!(f, "extraction"),
            Self::Semantic => write!(f, "semantic"),
        }
    }
}

/// Reasons a stage produced no book.
///
/// These are diagnostic only. Every variant is logged and absorbed by the
/// stage that raised it; none reaches an HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("network failure during {stage}: {reason}")]
    NetworkFailure { stage: MatchStage, reason: String },

    #[error("unusable completion reply: {0:?}")]
    MalformedResponse(String),

    #[error("catalog is empty")]
    NoCandidates,

    #[error("best heuristic score {best} does not exceed {threshold}")]
    NoConfidentMatch { best: usize, threshold: usize },
}
