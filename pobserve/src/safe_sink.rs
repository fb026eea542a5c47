use std::panic::{AssertUnwindSafe, catch_unwind};

use psession::{PanelEvent, SessionEventSink};

/// Wraps another sink so a panicking observer can never take the session
/// down with it.
pub struct SafeEventSink<S> {
    inner: S,
}

impl<S> SafeEventSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S> SessionEventSink for SafeEventSink<S>
where
    S: SessionEventSink,
{
    fn emit(&self, event: &PanelEvent) {
        let _ = catch_unwind(AssertUnwindSafe(|| self.inner.emit(event)));
    }
}
