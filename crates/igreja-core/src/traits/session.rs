//! Session store port - durable single-slot session persistence

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::Identity;

/// Errors from a session store
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session store I/O: {0}")]
    Io(String),

    #[error("Session record decode: {0}")]
    Decode(String),
}

/// One slot, one record: the identity of the signed-in account
///
/// `load` returns `Ok(None)` when no record exists. A record that exists
/// but cannot be decoded is a `Decode` error; the caller decides whether
/// that means anonymous.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the persisted identity, if any
    async fn load(&self) -> Result<Option<Identity>, SessionStoreError>;

    /// Persist the identity, replacing any previous record
    async fn save(&self, identity: &Identity) -> Result<(), SessionStoreError>;

    /// Remove the persisted record; clearing an empty slot is fine
    async fn clear(&self) -> Result<(), SessionStoreError>;
}
