//! The capability traits every chat provider must satisfy.

use pcommon::BoxFuture;

use crate::{ProviderError, ProviderKind, ProviderMessage, ProviderStatus};

/// Point-in-time provider state as reported by [`ChatProvider::snapshot`].
///
/// Invariants for implementors:
/// - `messages` is ordered; new messages are appended in send order.
/// - `load_progress`, when present, is in `0.0..=1.0`.
/// - `status == Error` implies `error` is populated.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSnapshot {
    pub messages: Vec<ProviderMessage>,
    pub is_generating: bool,
    pub status: ProviderStatus,
    pub load_progress: Option<f32>,
    pub load_progress_text: Option<String>,
    pub error: Option<ProviderError>,
}

impl ProviderSnapshot {
    /// An empty snapshot in the given status, useful as a starting point.
    pub fn empty(status: ProviderStatus) -> Self {
        Self {
            messages: Vec::new(),
            is_generating: false,
            status,
            load_progress: None,
            load_progress_text: None,
            error: None,
        }
    }
}

/// A source of chat responses supplied by the hosting application.
///
/// `send_message` appends a user message and, on completion, an assistant
/// message to the provider's own sequence. `stop_generation` is advisory:
/// the provider stops when it can, and the next snapshot reflects a
/// non-generating status once it has.
pub trait ChatProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    fn snapshot(&self) -> ProviderSnapshot;

    fn send_message<'a>(&'a self, content: &'a str)
    -> BoxFuture<'a, Result<(), ProviderError>>;

    fn clear_messages(&self);

    fn stop_generation(&self);
}

/// A [`ChatProvider`] with a model download step. Only local providers load
/// models; the session adapter dispatches on the selected provider kind, so
/// `load_model` is never reachable through a cloud capability.
pub trait LocalChatProvider: ChatProvider {
    fn load_model<'a>(&'a self, model_id: &'a str) -> BoxFuture<'a, Result<(), ProviderError>>;
}
