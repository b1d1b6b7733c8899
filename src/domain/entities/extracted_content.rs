//! Signal extracted from a target web page.

/// Upper bound for [`ExtractedContent::excerpt`], in characters.
pub const EXCERPT_MAX_CHARS: usize = 500;

/// Title, description, and a short plain-text excerpt of a web page.
///
/// Produced once per match attempt and never persisted. Any field may be
/// empty; [`ExtractedContent::default`] is the value used when a page could
/// not be fetched at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedContent {
    pub title: String,
    pub description: String,
    pub excerpt: String,
}

impl ExtractedContent {
    /// Returns true when nothing could be extracted.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty() && self.excerpt.is_empty()
    }
}
