//! Common imports for most palaver hosts.

pub use crate::{
    PanelBundle, build_panel, build_panel_with, build_panel_with_preferences,
    filesystem_preferences, in_memory_preferences, observed_sink,
};
pub use crate::{
    BoxFuture, ChatMessage, ChatProvider, ChatView, ChatViewModel, FanoutEventSink,
    FilesystemPreferenceStore, InMemoryPreferenceStore, LocalChatProvider, MetricsEventSink,
    ModelDefinition, NoopEventSink, PanelConfig, PanelConfigBuilder, PanelEvent, PanelEventPayload,
    PanelId, PreferenceStore, ProviderError, ProviderKind, ProviderMessage, ProviderMeta,
    ProviderSnapshot, ProviderStatus, Role, SafeEventSink, ScriptedChatProvider,
    ScriptedLocalProvider, SessionAdapter, SessionAdapterBuilder, SessionError, SessionErrorKind,
    SessionEventSink, TracingEventSink,
};
