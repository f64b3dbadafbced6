//! In-memory session slot.
//!
//! Holds the identity in process memory only. Used by tests and by runs
//! that should not leave a session record behind.

use async_trait::async_trait;
use tokio::sync::RwLock;

use igreja_core::entities::Identity;
use igreja_core::traits::{SessionStore, SessionStoreError};

/// Session store keeping one identity record in memory
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: RwLock<Option<Identity>>,
}

impl MemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<Identity>, SessionStoreError> {
        Ok(self.slot.read().await.clone())
    }

    async fn save(&self, identity: &Identity) -> Result<(), SessionStoreError> {
        *self.slot.write().await = Some(identity.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        *self.slot.write().await = None;
        Ok(())
    }
}
