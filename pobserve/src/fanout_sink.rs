use std::sync::Arc;

use psession::{PanelEvent, SessionEventSink};

/// Delivers each event to every registered sink in order. Hosts typically
/// fan out to their own event bus plus the tracing/metrics sinks.
pub struct FanoutEventSink {
    sinks: Vec<Arc<dyn SessionEventSink>>,
}

impl FanoutEventSink {
    pub fn new(sinks: Vec<Arc<dyn SessionEventSink>>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: Arc<dyn SessionEventSink>) {
        self.sinks.push(sink);
    }
}

impl SessionEventSink for FanoutEventSink {
    fn emit(&self, event: &PanelEvent) {
        for sink in &self.sinks {
            sink.emit(event);
        }
    }
}
