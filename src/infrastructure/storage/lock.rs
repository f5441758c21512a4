//! Store-wide access lock

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Serializes access to the hero and squadron collections.
///
/// Mutating operations hold the write half for their whole
/// check-then-write sequence; reads hold the read half so they see both
/// collections at a single point in time. Clones share the same lock.
/// Not reentrant: never acquire it twice within one operation.
#[derive(Debug, Clone, Default)]
pub struct RosterLock {
    inner: Arc<RwLock<()>>,
}

impl RosterLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, ()> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, ()> {
        self.inner.write().await
    }
}
