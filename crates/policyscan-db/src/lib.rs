//! policyscan-db — bounded analysis history.
//!
//! Entries are kept most-recent-first. Appending beyond the configured
//! capacity drops the oldest entries. Two backends are provided: an
//! in-process [`MemoryHistoryStore`] and a [`JsonFileHistoryStore`] that
//! persists the whole list as one JSON array.

pub mod error;
pub mod file;
pub mod memory;

use async_trait::async_trait;
use policyscan_common::HistoryEntry;

pub use error::{HistoryError, Result};
pub use file::JsonFileHistoryStore;
pub use memory::MemoryHistoryStore;

/// Default number of entries retained.
pub const DEFAULT_MAX_ENTRIES: usize = 50;

#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Insert at the front, then truncate to capacity.
    async fn append(&self, entry: HistoryEntry) -> Result<()>;

    /// All entries, newest first.
    async fn list(&self) -> Result<Vec<HistoryEntry>>;

    async fn clear(&self) -> Result<()>;

    /// Backend name for logs.
    fn backend_name(&self) -> &'static str;
}
