//! Pure normalization from raw provider state to the canonical view model.

use std::time::SystemTime;

use pprovider::{ModelDefinition, ProviderKind, ProviderMessage, ProviderSnapshot};

use crate::{ChatMessage, ChatViewModel};

/// Maps a provider's raw message list into the canonical sequence. Role, id,
/// and content are kept verbatim; a missing timestamp defaults to `now`.
/// Deterministic for a fixed `now`, so repeated calls on the same input
/// yield identical output.
pub fn normalize_messages(messages: &[ProviderMessage], now: SystemTime) -> Vec<ChatMessage> {
    messages
        .iter()
        .map(|message| ChatMessage {
            id: message.id.clone(),
            role: message.role,
            content: message.content.clone(),
            created_at: message.timestamp.unwrap_or(now),
        })
        .collect()
}

/// Builds the full view model from a provider snapshot. Load progress is a
/// local-provider concept; for cloud providers it is dropped here so the
/// rendering contract stays uniform.
pub fn normalize_snapshot(
    provider: ProviderKind,
    snapshot: ProviderSnapshot,
    model: Option<ModelDefinition>,
    now: SystemTime,
) -> ChatViewModel {
    let messages = normalize_messages(&snapshot.messages, now);
    let (load_progress, load_progress_text) = match provider {
        ProviderKind::Local => (snapshot.load_progress, snapshot.load_progress_text),
        ProviderKind::Cloud => (None, None),
    };

    ChatViewModel {
        provider,
        model,
        messages,
        is_generating: snapshot.is_generating,
        status: snapshot.status,
        load_progress,
        load_progress_text,
        error: snapshot.error,
    }
}
