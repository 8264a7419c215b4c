use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::RwLock;

use policyscan_common::HistoryEntry;

use crate::{HistoryStore, Result};

/// History held in process memory; lost on restart.
pub struct MemoryHistoryStore {
    entries: RwLock<VecDeque<HistoryEntry>>,
    max_entries: usize,
}

impl MemoryHistoryStore {
    pub fn new(max_entries: usize) -> Self {
        Self { entries: RwLock::new(VecDeque::with_capacity(max_entries)), max_entries }
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn append(&self, entry: HistoryEntry) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.push_front(entry);
        entries.truncate(self.max_entries);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.entries.read().await.iter().cloned().collect())
    }

    async fn clear(&self) -> Result<()> {
        self.entries.write().await.clear();
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
