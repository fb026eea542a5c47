//! Tracing-based sink for panel lifecycle events.
//!
//! ```rust
//! use pobserve::TracingEventSink;
//! use psession::SessionEventSink;
//!
//! fn accepts_sink(_sink: &dyn SessionEventSink) {}
//!
//! let sink = TracingEventSink;
//! accepts_sink(&sink);
//! ```

use psession::{PanelEvent, PanelEventPayload, SessionEventSink};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl SessionEventSink for TracingEventSink {
    fn emit(&self, event: &PanelEvent) {
        match &event.payload {
            PanelEventPayload::MessageReceived { message } => {
                tracing::info!(
                    event = event.event_type,
                    source = event.source,
                    message_id = message.id,
                    role = ?message.role,
                    content_len = message.content.len()
                );
            }
            PanelEventPayload::Error { description } => {
                tracing::error!(
                    event = event.event_type,
                    source = event.source,
                    error = description
                );
            }
        }
    }
}
