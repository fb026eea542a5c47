//! Canonical, rendering-ready representation of the chat session.

use std::time::SystemTime;

use pprovider::{ModelDefinition, ProviderError, ProviderKind, ProviderMeta, ProviderStatus, Role};

/// Canonical chat message. Immutable once created; the sequence it belongs
/// to is append-only apart from an explicit clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub created_at: SystemTime,
}

/// What the rendering layer should currently show, independent of which
/// provider backs the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatView {
    /// Initialization (or a model load hand-off) is still in flight;
    /// render a neutral loading state, never a picker flicker.
    Loading,
    /// No provider selected. Metadata is present for each configured
    /// provider; a picker with no options is the degraded state for a host
    /// that configured no providers at all.
    ProviderPicker {
        local: Option<ProviderMeta>,
        cloud: Option<ProviderMeta>,
    },
    /// Local provider selected but no model chosen yet.
    ModelPicker { models: Vec<ModelDefinition> },
    /// An active conversation backed by the selected provider.
    Chat(ChatViewModel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatViewModel {
    pub provider: ProviderKind,
    /// Catalog entry for the loaded local model, when one is selected and
    /// known.
    pub model: Option<ModelDefinition>,
    pub messages: Vec<ChatMessage>,
    pub is_generating: bool,
    pub status: ProviderStatus,
    /// Model download progress in `0.0..=1.0`; local providers only.
    pub load_progress: Option<f32>,
    pub load_progress_text: Option<String>,
    pub error: Option<ProviderError>,
}
