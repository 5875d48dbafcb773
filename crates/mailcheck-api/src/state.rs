//! Shared application state

use mailcheck_core::{DnsLookup, DomainChecker, HistoryStore, MemoryHistoryStore};
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub checker: DomainChecker,
    pub history: Arc<dyn HistoryStore>,
}

impl AppState {
    /// State with an empty in-memory history
    pub fn new(resolver: Arc<dyn DnsLookup>) -> Self {
        Self {
            checker: DomainChecker::new(resolver),
            history: Arc::new(MemoryHistoryStore::new()),
        }
    }
}
