//! Key-value preference persistence for the panel session layer.
//!
//! Writes are fire-and-forget: losing a preference only means the user sees
//! the selection screen again, so implementations log failures instead of
//! surfacing them.
//!
//! ```rust
//! use pstore::{InMemoryPreferenceStore, PreferenceStore};
//!
//! let store = InMemoryPreferenceStore::new();
//! store.set("ai-chat-provider", "cloud");
//! assert_eq!(store.get("ai-chat-provider").as_deref(), Some("cloud"));
//! store.remove("ai-chat-provider");
//! assert!(store.get("ai-chat-provider").is_none());
//! ```

mod error;
mod filesystem;
mod store;

pub use error::{PreferenceStoreError, PreferenceStoreErrorKind};
pub use filesystem::FilesystemPreferenceStore;
pub use store::{InMemoryPreferenceStore, PreferenceStore};
