//! Core data types for the ZakhmVerse poem generation library.
//!
//! These types flow between every layer: the request callers build, the
//! structured output providers must honor, the outcome the pipeline hands
//! back, and the history entries callers retain.

mod history;
mod outcome;
mod poem;
mod request;

pub use history::HistoryEntry;
pub use outcome::PoemOutcome;
pub use poem::GeneratedPoem;
pub use request::{PoemRequest, PoemRequestBuilder};
