//! Poem history storage for the ZakhmVerse poem generation library.
//!
//! The generation pipeline is stateless. Callers that want a history of
//! successful poems persist [`zakhmverse_core::HistoryEntry`] values
//! through the [`HistoryStore`] trait; this crate ships the in-memory
//! implementation.

mod history;

pub use history::{HistoryStore, InMemoryHistoryStore, HISTORY_CAP};
