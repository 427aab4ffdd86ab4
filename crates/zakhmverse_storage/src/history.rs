//! History store trait and the in-memory implementation.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use zakhmverse_core::HistoryEntry;
use zakhmverse_error::{StorageError, StorageErrorKind, ZakhmverseResult};

/// Maximum number of entries a history store retains.
pub const HISTORY_CAP: usize = 50;

/// Stores a caller's poem history, newest first.
///
/// Saving past [`HISTORY_CAP`] silently evicts the oldest entries. The
/// pipeline never writes here; callers persist successful outcomes
/// themselves.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Persist an entry as the newest item, evicting beyond the cap.
    async fn save(&self, entry: HistoryEntry) -> ZakhmverseResult<()>;

    /// Return up to `limit` entries, newest first.
    async fn recent(&self, limit: usize) -> ZakhmverseResult<Vec<HistoryEntry>>;

    /// Look up an entry by id.
    ///
    /// # Errors
    ///
    /// Fails with [`StorageErrorKind::EntryNotFound`] when no entry has
    /// the given id.
    async fn get(&self, id: &str) -> ZakhmverseResult<HistoryEntry>;

    /// Remove all entries.
    async fn clear(&self) -> ZakhmverseResult<()>;
}

/// In-memory history store.
///
/// Entries live in a `Vec` behind an async `RwLock`, newest first, and
/// vanish on drop. A persistent backend would implement the same trait.
///
/// # Examples
///
/// ```
/// use zakhmverse_core::HistoryEntry;
/// use zakhmverse_storage::{HistoryStore, InMemoryHistoryStore};
///
/// #[tokio::main]
/// async fn main() {
///     let store = InMemoryHistoryStore::new();
///     let entry = HistoryEntry::new("the sea", "Salt wind over grey water");
///     store.save(entry).await.unwrap();
///     assert_eq!(store.len().await, 1);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryStore {
    entries: Arc<RwLock<Vec<HistoryEntry>>>,
}

impl InMemoryHistoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True when the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl HistoryStore for InMemoryHistoryStore {
    async fn save(&self, entry: HistoryEntry) -> ZakhmverseResult<()> {
        let mut entries = self.entries.write().await;
        entries.insert(0, entry);
        entries.truncate(HISTORY_CAP);
        Ok(())
    }

    async fn recent(&self, limit: usize) -> ZakhmverseResult<Vec<HistoryEntry>> {
        let entries = self.entries.read().await;
        Ok(entries.iter().take(limit).cloned().collect())
    }

    async fn get(&self, id: &str) -> ZakhmverseResult<HistoryEntry> {
        let entries = self.entries.read().await;
        entries
            .iter()
            .find(|entry| entry.id() == id)
            .cloned()
            .ok_or_else(|| {
                StorageError::new(StorageErrorKind::EntryNotFound(id.to_string())).into()
            })
    }

    async fn clear(&self) -> ZakhmverseResult<()> {
        self.entries.write().await.clear();
        Ok(())
    }
}
