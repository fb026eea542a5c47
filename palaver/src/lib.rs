//! Unified facade over the palaver workspace crates.
//!
//! This crate is designed to be the single dependency for most hosts. It
//! re-exports the core palaver crates and provides convenience wiring for
//! embedding the chat panel.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use palaver::{ScriptedChatProvider, build_panel, PanelConfig};
//!
//! let config = PanelConfig::builder()
//!     .cloud_provider(Arc::new(ScriptedChatProvider::new()))
//!     .build();
//! let _bundle = build_panel(config);
//! ```

pub mod prelude;
pub mod runtime;

pub use pcommon;
pub use pobserve;
pub use pprovider;
pub use psession;
pub use pstore;

pub use pcommon::{BoxFuture, PanelId};
pub use pobserve::{FanoutEventSink, MetricsEventSink, SafeEventSink, TracingEventSink};
pub use pprovider::{
    BadgeVariant, ChatProvider, LocalChatProvider, ModelDefinition, ProviderError,
    ProviderErrorKind, ProviderKind, ProviderMessage, ProviderMeta, ProviderSnapshot,
    ProviderStatus, Role, ScriptedChatProvider, ScriptedLocalProvider,
};
pub use psession::{
    ChatMessage, ChatView, ChatViewModel, ConfigShape, EVENT_TYPE_ERROR,
    EVENT_TYPE_MESSAGE_RECEIVED, LOCAL_MODEL_PREFERENCE_KEY, NoopEventSink, PROVIDER_PREFERENCE_KEY,
    PanelConfig, PanelConfigBuilder, PanelEvent, PanelEventPayload, PersistedSelection, Selection,
    SessionAdapter, SessionAdapterBuilder, SessionError, SessionErrorKind, SessionEventSink,
    auto_select_provider, normalize_messages, normalize_snapshot, resolve_initial_selection,
};
pub use pstore::{
    FilesystemPreferenceStore, InMemoryPreferenceStore, PreferenceStore, PreferenceStoreError,
    PreferenceStoreErrorKind,
};

pub use runtime::{
    PanelBundle, build_panel, build_panel_with, build_panel_with_preferences,
    filesystem_preferences, in_memory_preferences, observed_sink,
};
