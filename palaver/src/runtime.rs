//! Wiring helpers for embedding the chat panel in a host application.

use std::path::Path;
use std::sync::Arc;

use crate::{
    FanoutEventSink, FilesystemPreferenceStore, InMemoryPreferenceStore, MetricsEventSink,
    PanelConfig, PreferenceStore, PreferenceStoreError, SafeEventSink, SessionAdapter,
    SessionEventSink, TracingEventSink,
};

/// A wired panel plus the preference store behind it, so hosts can inspect
/// or migrate preferences out of band.
pub struct PanelBundle {
    pub preferences: Arc<dyn PreferenceStore>,
    pub adapter: SessionAdapter,
}

pub fn in_memory_preferences() -> Arc<dyn PreferenceStore> {
    Arc::new(InMemoryPreferenceStore::new())
}

pub fn filesystem_preferences(
    path: impl AsRef<Path>,
) -> Result<Arc<dyn PreferenceStore>, PreferenceStoreError> {
    Ok(Arc::new(FilesystemPreferenceStore::new(path)?))
}

/// The default observability sink: tracing plus metrics, each wrapped so an
/// observer panic cannot reach the session.
pub fn observed_sink() -> Arc<dyn SessionEventSink> {
    Arc::new(FanoutEventSink::new(vec![
        Arc::new(SafeEventSink::new(TracingEventSink)),
        Arc::new(SafeEventSink::new(MetricsEventSink)),
    ]))
}

pub fn build_panel(config: PanelConfig) -> PanelBundle {
    build_panel_with(config, in_memory_preferences(), observed_sink())
}

pub fn build_panel_with_preferences(
    config: PanelConfig,
    preferences: Arc<dyn PreferenceStore>,
) -> PanelBundle {
    build_panel_with(config, preferences, observed_sink())
}

pub fn build_panel_with(
    config: PanelConfig,
    preferences: Arc<dyn PreferenceStore>,
    events: Arc<dyn SessionEventSink>,
) -> PanelBundle {
    let adapter = SessionAdapter::builder(config)
        .preferences(Arc::clone(&preferences))
        .event_sink(events)
        .build();

    PanelBundle {
        preferences,
        adapter,
    }
}
