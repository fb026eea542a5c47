//! The session adapter: single source of truth for which provider/model is
//! active and what the rendering layer currently sees.

use std::sync::Arc;
use std::time::SystemTime;

use pcommon::PanelId;
use pprovider::{ChatProvider, ProviderKind, ProviderStatus, Role};
use pstore::{InMemoryPreferenceStore, PreferenceStore};

use crate::{
    ChatView, NoopEventSink, PanelConfig, PanelEvent, PersistedSelection, Selection, SessionError,
    SessionEventSink, auto_select_provider, normalize_messages, normalize_snapshot,
    resolve_initial_selection,
};

pub const PROVIDER_PREFERENCE_KEY: &str = "ai-chat-provider";
pub const LOCAL_MODEL_PREFERENCE_KEY: &str = "ai-chat-local-model";

pub struct SessionAdapter {
    config: PanelConfig,
    preferences: Arc<dyn PreferenceStore>,
    events: Arc<dyn SessionEventSink>,
    panel_id: PanelId,
    selection: Selection,
    initialized: bool,
}

impl SessionAdapter {
    pub fn builder(config: PanelConfig) -> SessionAdapterBuilder {
        SessionAdapterBuilder::new(config)
    }

    pub fn new(config: PanelConfig) -> Self {
        Self::builder(config).build()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Restores the persisted selection, applies the restore-or-fallback and
    /// auto-select rules, and persists whatever was decided. Runs once; later
    /// calls are no-ops. Until the first call completes, [`derive_view`]
    /// reports a loading state so the picker never flickers.
    ///
    /// A restored local model is loaded eagerly; a load rejection becomes
    /// provider error state rather than failing initialization.
    ///
    /// [`derive_view`]: SessionAdapter::derive_view
    pub async fn initialize(&mut self) {
        if self.initialized {
            return;
        }

        let persisted = PersistedSelection {
            provider: self.preferences.get(PROVIDER_PREFERENCE_KEY),
            model_id: self.preferences.get(LOCAL_MODEL_PREFERENCE_KEY),
        };
        self.selection = resolve_initial_selection(self.config.shape(), &persisted);
        self.initialized = true;
        self.persist_selection();

        tracing::debug!(
            provider = self.selection.provider.as_ref().map(|kind| kind.to_string()),
            model_id = self.selection.model_id.as_deref(),
            "session adapter initialized"
        );

        if self.selection.provider == Some(ProviderKind::Local)
            && let Some(model_id) = self.selection.model_id.clone()
            && let Some(provider) = self.config.local_provider()
        {
            if let Err(error) = provider.load_model(&model_id).await {
                tracing::warn!(%error, %model_id, "restored model failed to load");
            }
        }
    }

    /// Picks a provider. History is untouched: each capability owns its own
    /// message sequence.
    pub fn select_provider(&mut self, kind: ProviderKind) -> Result<(), SessionError> {
        if self.config.capability(kind).is_none() {
            return Err(SessionError::unconfigured(format!(
                "no {kind} provider is configured"
            )));
        }

        self.selection.provider = Some(kind);
        self.persist_selection();
        Ok(())
    }

    /// Picks a local model and starts loading it. A load rejection surfaces
    /// through the provider's own `error`/`status` fields, not as a returned
    /// error.
    pub async fn select_model(&mut self, model_id: &str) -> Result<(), SessionError> {
        if self.selection.provider != Some(ProviderKind::Local) {
            return Err(SessionError::invalid_request(
                "select the local provider before choosing a model",
            ));
        }

        let Some(provider) = self.config.local_provider().cloned() else {
            return Err(SessionError::unconfigured(
                "no local provider is configured",
            ));
        };

        if model_id.trim().is_empty() {
            return Err(SessionError::invalid_request("model id must not be empty"));
        }

        self.selection.model_id = Some(model_id.to_string());
        self.persist_selection();

        if let Err(error) = provider.load_model(model_id).await {
            tracing::warn!(%error, model_id, "model load failed");
        }

        Ok(())
    }

    /// Returns to the nearest coarser selection screen, never partially:
    /// local still idle or cloud active clear the provider choice; a local
    /// mid-session clears the model as well. A lone configured provider is
    /// re-selected immediately, so a single-provider host never reaches the
    /// provider picker.
    pub fn go_back(&mut self) {
        match self.selection.provider {
            Some(ProviderKind::Local) if self.local_status() == Some(ProviderStatus::Idle) => {
                self.selection.provider = None;
            }
            Some(ProviderKind::Cloud) => {
                self.selection.provider = None;
            }
            _ => {
                self.selection.provider = None;
                self.selection.model_id = None;
            }
        }

        if self.selection.provider.is_none() {
            self.selection.provider = auto_select_provider(self.config.shape());
        }

        self.persist_selection();
    }

    /// Derives the canonical view model for the rendering layer.
    pub fn derive_view(&self) -> ChatView {
        if !self.initialized {
            return ChatView::Loading;
        }

        let Some(kind) = self.selection.provider else {
            let shape = self.config.shape();
            return ChatView::ProviderPicker {
                local: shape.has_local.then(|| self.config.local_meta().clone()),
                cloud: shape.has_cloud.then(|| self.config.cloud_meta().clone()),
            };
        };

        let now = SystemTime::now();
        match kind {
            ProviderKind::Local => {
                let Some(provider) = self.config.local_provider() else {
                    return ChatView::Loading;
                };

                let snapshot = provider.snapshot();
                if snapshot.status == ProviderStatus::Idle {
                    if self.selection.model_id.is_none()
                        && !self.config.available_models().is_empty()
                    {
                        return ChatView::ModelPicker {
                            models: self.config.available_models().to_vec(),
                        };
                    }

                    // Model chosen but the load has not been picked up yet.
                    return ChatView::Loading;
                }

                let model = self
                    .selection
                    .model_id
                    .as_deref()
                    .and_then(|id| self.config.model_definition(id))
                    .cloned();
                ChatView::Chat(normalize_snapshot(kind, snapshot, model, now))
            }
            ProviderKind::Cloud => {
                let Some(provider) = self.config.cloud_provider() else {
                    return ChatView::Loading;
                };

                ChatView::Chat(normalize_snapshot(kind, provider.snapshot(), None, now))
            }
        }
    }

    /// Sends a message through the active capability. Empty input and a
    /// missing capability are silent no-ops. Success emits a
    /// `message-received` event carrying the last assistant message; failure
    /// emits an `error` event. Failures never escape as errors.
    pub async fn send(&self, content: &str) {
        if content.trim().is_empty() {
            return;
        }

        let Some((kind, capability)) = self.active_capability() else {
            return;
        };

        let source = self.event_source(kind);
        match capability.send_message(content).await {
            Ok(()) => {
                let snapshot = capability.snapshot();
                if let Some(raw) = snapshot.messages.last()
                    && raw.role == Role::Assistant
                {
                    let message =
                        normalize_messages(std::slice::from_ref(raw), SystemTime::now())
                            .remove(0);
                    self.events
                        .emit(&PanelEvent::message_received(source, message));
                }
            }
            Err(error) => {
                tracing::warn!(provider = %kind, %error, "send failed");
                self.events
                    .emit(&PanelEvent::error(source, error.message.clone()));
            }
        }
    }

    /// Asks the active capability to stop generating. Advisory: the view
    /// reflects a non-generating status once the provider honors it.
    pub fn stop(&self) {
        if let Some((_, capability)) = self.active_capability() {
            capability.stop_generation();
        }
    }

    /// Clears the active capability's message sequence. Selection is
    /// untouched.
    pub fn clear(&self) {
        if let Some((_, capability)) = self.active_capability() {
            capability.clear_messages();
        }
    }

    /// The capability the session currently renders against. A local
    /// provider that is still `Idle` has nothing to chat with yet.
    fn active_capability(&self) -> Option<(ProviderKind, Arc<dyn ChatProvider>)> {
        let kind = self.selection.provider?;
        let capability = self.config.capability(kind)?;
        if kind == ProviderKind::Local && capability.snapshot().status == ProviderStatus::Idle {
            return None;
        }

        Some((kind, capability))
    }

    fn local_status(&self) -> Option<ProviderStatus> {
        self.config
            .local_provider()
            .map(|provider| provider.snapshot().status)
    }

    fn persist_selection(&self) {
        match self.selection.provider {
            Some(kind) => self
                .preferences
                .set(PROVIDER_PREFERENCE_KEY, &kind.to_string()),
            None => self.preferences.remove(PROVIDER_PREFERENCE_KEY),
        }

        match &self.selection.model_id {
            Some(model_id) => self.preferences.set(LOCAL_MODEL_PREFERENCE_KEY, model_id),
            None => self.preferences.remove(LOCAL_MODEL_PREFERENCE_KEY),
        }
    }

    fn event_source(&self, kind: ProviderKind) -> String {
        format!("{kind}.{}", self.panel_id)
    }
}

pub struct SessionAdapterBuilder {
    config: PanelConfig,
    preferences: Arc<dyn PreferenceStore>,
    events: Arc<dyn SessionEventSink>,
    panel_id: PanelId,
}

impl SessionAdapterBuilder {
    pub fn new(config: PanelConfig) -> Self {
        Self {
            config,
            preferences: Arc::new(InMemoryPreferenceStore::new()),
            events: Arc::new(NoopEventSink),
            panel_id: PanelId::default(),
        }
    }

    pub fn preferences(mut self, preferences: Arc<dyn PreferenceStore>) -> Self {
        self.preferences = preferences;
        self
    }

    pub fn event_sink(mut self, events: Arc<dyn SessionEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn panel_id(mut self, panel_id: impl Into<PanelId>) -> Self {
        self.panel_id = panel_id.into();
        self
    }

    pub fn build(self) -> SessionAdapter {
        SessionAdapter {
            config: self.config,
            preferences: self.preferences,
            events: self.events,
            panel_id: self.panel_id,
            selection: Selection::default(),
            initialized: false,
        }
    }
}
