//! File-backed session slot.
//!
//! Persists the signed-in identity as one JSON file so a restart picks the
//! session back up without touching credentials or the database.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use igreja_common::config::SessionConfig;
use igreja_core::entities::Identity;
use igreja_core::traits::{SessionStore, SessionStoreError};

/// File name of the session record inside the data directory
const SESSION_FILE_NAME: &str = "user.json";

/// Resolve the platform data directory location for the session record
fn default_session_path() -> PathBuf {
    directories::ProjectDirs::from("br", "igreja", "IgrejaControle")
        .map(|dirs| dirs.data_dir().join(SESSION_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(SESSION_FILE_NAME))
}

/// Session store keeping one identity record in a JSON file
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store writing to an explicit path
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the platform data directory
    #[must_use]
    pub fn at_default_location() -> Self {
        Self::new(default_session_path())
    }

    /// Create a store from configuration, falling back to the platform
    /// data directory when no explicit path is set
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        match &config.file {
            Some(path) => Self::new(path.clone()),
            None => Self::at_default_location(),
        }
    }

    /// The file this store reads and writes
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<Identity>, SessionStoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionStoreError::Io(e.to_string())),
        };

        let identity = serde_json::from_slice::<Identity>(&bytes)
            .map_err(|e| SessionStoreError::Decode(e.to_string()))?;

        tracing::debug!(
            path = %self.path.display(),
            user_id = identity.id,
            "Loaded session record"
        );

        Ok(Some(identity))
    }

    async fn save(&self, identity: &Identity) -> Result<(), SessionStoreError> {
        let bytes = serde_json::to_vec_pretty(identity)
            .map_err(|e| SessionStoreError::Decode(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SessionStoreError::Io(e.to_string()))?;
        }

        fs::write(&self.path, bytes)
            .await
            .map_err(|e| SessionStoreError::Io(e.to_string()))?;

        tracing::debug!(
            path = %self.path.display(),
            user_id = identity.id,
            "Stored session record"
        );

        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Cleared session record");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionStoreError::Io(e.to_string())),
        }
    }
}
