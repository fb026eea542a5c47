//! Session adapter: one unified chat session view over host-supplied
//! providers.
//!
//! The adapter owns provider/model selection, restores and persists the
//! user's choice, and derives a canonical view model the rendering layer can
//! consume without knowing which provider is active.

mod adapter;
mod config;
mod error;
mod events;
mod normalize;
mod selection;
mod view;

pub use adapter::{
    LOCAL_MODEL_PREFERENCE_KEY, PROVIDER_PREFERENCE_KEY, SessionAdapter, SessionAdapterBuilder,
};
pub use config::{PanelConfig, PanelConfigBuilder};
pub use error::{SessionError, SessionErrorKind};
pub use events::{
    EVENT_TYPE_ERROR, EVENT_TYPE_MESSAGE_RECEIVED, NoopEventSink, PanelEvent, PanelEventPayload,
    SessionEventSink,
};
pub use normalize::{normalize_messages, normalize_snapshot};
pub use selection::{
    ConfigShape, PersistedSelection, Selection, auto_select_provider, resolve_initial_selection,
};
pub use view::{ChatMessage, ChatView, ChatViewModel};

pub mod prelude {
    pub use crate::{
        ChatMessage, ChatView, ChatViewModel, NoopEventSink, PanelConfig, PanelEvent,
        PanelEventPayload, Selection, SessionAdapter, SessionAdapterBuilder, SessionError,
        SessionErrorKind, SessionEventSink,
    };
    pub use pcommon::PanelId;
    pub use pprovider::prelude::*;
    pub use pstore::{FilesystemPreferenceStore, InMemoryPreferenceStore, PreferenceStore};
}
