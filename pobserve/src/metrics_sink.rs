//! Metrics-based sink for panel lifecycle events.
//!
//! ```rust
//! use pobserve::MetricsEventSink;
//! use psession::SessionEventSink;
//!
//! fn accepts_sink(_sink: &dyn SessionEventSink) {}
//!
//! let sink = MetricsEventSink;
//! accepts_sink(&sink);
//! ```

use psession::{PanelEvent, PanelEventPayload, SessionEventSink};

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsEventSink;

impl SessionEventSink for MetricsEventSink {
    fn emit(&self, event: &PanelEvent) {
        match &event.payload {
            PanelEventPayload::MessageReceived { message } => {
                metrics::counter!(
                    "palaver_messages_received_total",
                    "source" => event.source.clone()
                )
                .increment(1);
                metrics::histogram!(
                    "palaver_message_content_bytes",
                    "source" => event.source.clone()
                )
                .record(message.content.len() as f64);
            }
            PanelEventPayload::Error { .. } => {
                metrics::counter!(
                    "palaver_session_errors_total",
                    "source" => event.source.clone()
                )
                .increment(1);
            }
        }
    }
}
