//! Check history
//!
//! Every completed check is appended to a process-wide history that lives
//! until the process exits. Entries are never mutated or removed.

use async_trait::async_trait;
use mailcheck_common::DomainCheckResult;
use tokio::sync::RwLock;

/// History store trait
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append `result` and return the whole history including it
    ///
    /// The append and the snapshot are atomic with respect to other callers.
    async fn append_and_snapshot(&self, result: DomainCheckResult) -> Vec<DomainCheckResult>;

    /// Current history, oldest first
    async fn snapshot(&self) -> Vec<DomainCheckResult>;

    /// Number of recorded checks
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// In-memory history, unbounded
#[derive(Default)]
pub struct MemoryHistoryStore {
    entries: RwLock<Vec<DomainCheckResult>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistoryStore {
    async fn append_and_snapshot(&self, result: DomainCheckResult) -> Vec<DomainCheckResult> {
        let mut entries = self.entries.write().await;
        entries.push(result);
        entries.clone()
    }

    async fn snapshot(&self) -> Vec<DomainCheckResult> {
        self.entries.read().await.clone()
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
