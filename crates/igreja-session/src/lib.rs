//! # igreja-session
//!
//! Durable session slot for the signed-in account.
//!
//! ## Features
//!
//! - **File Store**: One JSON record on disk, surviving restarts
//! - **Memory Store**: Process-local slot for tests and ephemeral runs
//!
//! ## Example
//!
//! ```ignore
//! use igreja_core::traits::SessionStore;
//! use igreja_session::FileSessionStore;
//!
//! // Store at the platform data directory
//! let store = FileSessionStore::at_default_location();
//!
//! // Persist a signed-in identity
//! store.save(&identity).await?;
//!
//! // Restore it on the next run
//! let restored = store.load().await?;
//! ```

pub mod file;
pub mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;
