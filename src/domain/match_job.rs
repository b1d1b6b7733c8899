//! Background matching request model.

/// A request to find the best book for a freshly created short link.
///
/// Sent from the shorten handler to the match worker through
/// [`crate::application::match_worker::MatchQueue`], so the HTTP response never
/// waits on page fetching or the completion service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchJob {
    pub code: String,
    pub url: String,
    pub keywords: String,
}

impl MatchJob {
    /// Creates a new match job.
    pub fn new(code: impl Into<String>, url: impl Into<String>, keywords: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            url: url.into(),
            keywords: keywords.into(),
        }
    }
}
