//! Link-to-catalog matching pipeline.
//!
//! Given a target URL and optional user keywords, picks the catalog book that
//! best fits the page. Stages run strictly in this order and the first one
//! that produces a book wins:
//!
//! 1. [`ContentExtractor`] - fetch the page, scrape title/description/excerpt
//! 2. [`SemanticMatcher`] - ask the completion service to pick a book number
//! 3. [`heuristic`] - deterministic word-overlap scoring
//! 4. Default - the newest book (last one listed by the catalog store)
//!
//! [`MatchOrchestrator`] sequences the stages. Failures inside a stage are
//! logged and turned into "no answer from this stage"; nothing propagates.

mod error;
pub mod extractor;
pub mod heuristic;
mod orchestrator;
pub mod semantic;

pub use error::{MatchError, MatchStage};
pub use extractor::ContentExtractor;
pub use orchestrator::{MatchOrchestrator, MatchOutcome, MatchSource};
pub use semantic::SemanticMatcher;
