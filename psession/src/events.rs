//! Lifecycle events emitted toward the host event bus.

use std::time::SystemTime;

use crate::ChatMessage;

pub const EVENT_TYPE_MESSAGE_RECEIVED: &str = "ai-chat:message-received";
pub const EVENT_TYPE_ERROR: &str = "ai-chat:error";

#[derive(Debug, Clone, PartialEq)]
pub enum PanelEventPayload {
    MessageReceived { message: ChatMessage },
    Error { description: String },
}

/// An event addressed to the host's panel event bus. `source` combines the
/// active provider kind with the panel id, e.g. `local.ai-chat`.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelEvent {
    pub event_type: &'static str,
    pub source: String,
    pub timestamp: SystemTime,
    pub payload: PanelEventPayload,
}

impl PanelEvent {
    pub fn message_received(source: impl Into<String>, message: ChatMessage) -> Self {
        Self {
            event_type: EVENT_TYPE_MESSAGE_RECEIVED,
            source: source.into(),
            timestamp: SystemTime::now(),
            payload: PanelEventPayload::MessageReceived { message },
        }
    }

    pub fn error(source: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            event_type: EVENT_TYPE_ERROR,
            source: source.into(),
            timestamp: SystemTime::now(),
            payload: PanelEventPayload::Error {
                description: description.into(),
            },
        }
    }
}

/// Where the adapter delivers lifecycle events. Hosts bridge this to their
/// own event bus; observability sinks live in `pobserve`.
pub trait SessionEventSink: Send + Sync {
    fn emit(&self, _event: &PanelEvent) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEventSink;

impl SessionEventSink for NoopEventSink {}
