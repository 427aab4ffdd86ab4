//! Poem history entries.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A successfully generated poem as retained by the caller.
///
/// The pipeline never creates or touches one of these. Callers construct
/// an entry after a successful outcome and hand it to a history store.
///
/// # Examples
///
/// ```
/// use zakhmverse_core::HistoryEntry;
///
/// let entry = HistoryEntry::new("a quiet lake at dawn", "Still water holds the sky");
/// assert_eq!(entry.prompt(), "a quiet lake at dawn");
/// assert!(!entry.id().is_empty());
/// assert!(*entry.timestamp() > 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    /// Unique identifier for the entry
    id: String,
    /// The prompt that produced the poem
    prompt: String,
    /// The generated poem text
    poem: String,
    /// Creation time in milliseconds since the Unix epoch
    timestamp: i64,
}

impl HistoryEntry {
    /// Create an entry for a prompt and its poem, stamped now.
    pub fn new(prompt: impl Into<String>, poem: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            prompt: prompt.into(),
            poem: poem.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}
