//! End-to-end behavior of the session adapter over scripted providers:
//! restore rules, auto-select, view derivation, and event emission.

use std::sync::{Arc, Mutex, PoisonError};

use pprovider::{
    ChatProvider, ModelDefinition, ProviderError, ProviderKind, ProviderStatus, Role,
    ScriptedChatProvider, ScriptedLocalProvider,
};
use psession::{
    ChatView, EVENT_TYPE_ERROR, EVENT_TYPE_MESSAGE_RECEIVED, LOCAL_MODEL_PREFERENCE_KEY,
    PROVIDER_PREFERENCE_KEY, PanelConfig, PanelEvent, PanelEventPayload, SessionAdapter,
    SessionEventSink,
};
use pstore::{InMemoryPreferenceStore, PreferenceStore};

#[derive(Default)]
struct RecordingEventSink {
    events: Mutex<Vec<PanelEvent>>,
}

impl RecordingEventSink {
    fn events(&self) -> Vec<PanelEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionEventSink for RecordingEventSink {
    fn emit(&self, event: &PanelEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
    }
}

fn model_catalog() -> Vec<ModelDefinition> {
    vec![
        ModelDefinition::new("llama-3.2-1b", "Llama 3.2 1B", "0.7 GB")
            .with_description("Fast, lightweight"),
        ModelDefinition::new("llama-3.2-3b", "Llama 3.2 3B", "1.9 GB")
            .with_description("Balanced quality"),
        ModelDefinition::new("qwen-2.5-coder-1.5b", "Qwen 2.5 Coder 1.5B", "1.1 GB")
            .with_description("Tuned for code"),
    ]
}

fn cloud_only_config() -> PanelConfig {
    PanelConfig::builder()
        .cloud_provider(Arc::new(ScriptedChatProvider::new()))
        .build()
}

fn both_providers_config() -> PanelConfig {
    PanelConfig::builder()
        .local_provider(Arc::new(ScriptedLocalProvider::new()))
        .cloud_provider(Arc::new(ScriptedChatProvider::new()))
        .build()
}

fn both_with_models_config() -> PanelConfig {
    PanelConfig::builder()
        .local_provider(Arc::new(ScriptedLocalProvider::new()))
        .cloud_provider(Arc::new(ScriptedChatProvider::new()))
        .available_models(model_catalog())
        .build()
}

#[tokio::test]
async fn persisted_cloud_selection_survives_a_restart() {
    let preferences = Arc::new(InMemoryPreferenceStore::new());

    let mut first = SessionAdapter::builder(both_providers_config())
        .preferences(preferences.clone())
        .build();
    first.initialize().await;
    first
        .select_provider(ProviderKind::Cloud)
        .expect("cloud is configured");
    drop(first);

    let mut second = SessionAdapter::builder(both_providers_config())
        .preferences(preferences)
        .build();
    second.initialize().await;

    assert_eq!(second.selection().provider, Some(ProviderKind::Cloud));
    assert!(matches!(second.derive_view(), ChatView::Chat(_)));
}

#[tokio::test]
async fn persisted_local_selection_restores_and_reloads_the_model() {
    let preferences = Arc::new(InMemoryPreferenceStore::new());
    preferences.set(PROVIDER_PREFERENCE_KEY, "local");
    preferences.set(LOCAL_MODEL_PREFERENCE_KEY, "llama-3.2-3b");

    let local = Arc::new(ScriptedLocalProvider::new());
    let config = PanelConfig::builder()
        .local_provider(local.clone())
        .cloud_provider(Arc::new(ScriptedChatProvider::new()))
        .available_models(model_catalog())
        .build();

    let mut adapter = SessionAdapter::builder(config)
        .preferences(preferences)
        .build();
    adapter.initialize().await;

    assert_eq!(adapter.selection().provider, Some(ProviderKind::Local));
    assert_eq!(adapter.selection().model_id.as_deref(), Some("llama-3.2-3b"));
    assert_eq!(local.snapshot().status, ProviderStatus::Ready);

    match adapter.derive_view() {
        ChatView::Chat(view) => {
            assert_eq!(view.provider, ProviderKind::Local);
            assert_eq!(
                view.model.map(|model| model.id),
                Some("llama-3.2-3b".to_string())
            );
        }
        other => panic!("expected a chat view, got {other:?}"),
    }
}

#[tokio::test]
async fn persisted_local_without_a_model_falls_back_to_the_picker() {
    let preferences = Arc::new(InMemoryPreferenceStore::new());
    preferences.set(PROVIDER_PREFERENCE_KEY, "local");

    let mut adapter = SessionAdapter::builder(both_with_models_config())
        .preferences(preferences)
        .build();
    adapter.initialize().await;

    assert!(adapter.selection().provider.is_none());
    assert!(matches!(
        adapter.derive_view(),
        ChatView::ProviderPicker { .. }
    ));
}

#[tokio::test]
async fn cloud_only_host_never_shows_the_picker() {
    // Scenario: the host configures a single cloud provider and nothing was
    // persisted. The user lands straight in the chat.
    let mut adapter = SessionAdapter::new(cloud_only_config());
    adapter.initialize().await;

    assert_eq!(adapter.selection().provider, Some(ProviderKind::Cloud));
    match adapter.derive_view() {
        ChatView::Chat(view) => {
            assert_eq!(view.provider, ProviderKind::Cloud);
            assert_eq!(view.status, ProviderStatus::Ready);
            assert!(view.load_progress.is_none());
        }
        other => panic!("expected a chat view, got {other:?}"),
    }
}

#[tokio::test]
async fn picking_local_walks_model_picker_then_chat() {
    // Scenario: both providers configured, nothing persisted. The user picks
    // local, then a model, and both choices are persisted along the way.
    let preferences = Arc::new(InMemoryPreferenceStore::new());
    let local = Arc::new(ScriptedLocalProvider::new());
    let config = PanelConfig::builder()
        .local_provider(local.clone())
        .cloud_provider(Arc::new(ScriptedChatProvider::new()))
        .available_models(model_catalog())
        .build();

    let mut adapter = SessionAdapter::builder(config)
        .preferences(preferences.clone())
        .build();
    adapter.initialize().await;

    match adapter.derive_view() {
        ChatView::ProviderPicker { local, cloud } => {
            assert!(local.is_some());
            assert!(cloud.is_some());
        }
        other => panic!("expected the provider picker, got {other:?}"),
    }

    adapter
        .select_provider(ProviderKind::Local)
        .expect("local is configured");
    match adapter.derive_view() {
        ChatView::ModelPicker { models } => assert_eq!(models.len(), 3),
        other => panic!("expected the model picker, got {other:?}"),
    }

    adapter
        .select_model("llama-3.2-3b")
        .await
        .expect("model selection should succeed");

    assert_eq!(local.snapshot().status, ProviderStatus::Ready);
    assert_eq!(preferences.get(PROVIDER_PREFERENCE_KEY).as_deref(), Some("local"));
    assert_eq!(
        preferences.get(LOCAL_MODEL_PREFERENCE_KEY).as_deref(),
        Some("llama-3.2-3b")
    );
    assert!(matches!(adapter.derive_view(), ChatView::Chat(_)));
}

#[tokio::test]
async fn send_appends_messages_and_emits_message_received() {
    let events = Arc::new(RecordingEventSink::default());
    let mut adapter = SessionAdapter::builder(cloud_only_config())
        .event_sink(events.clone())
        .build();
    adapter.initialize().await;

    adapter.send("hello").await;

    match adapter.derive_view() {
        ChatView::Chat(view) => {
            assert_eq!(view.messages.len(), 2);
            assert_eq!(view.messages[0].role, Role::User);
            assert_eq!(view.messages[0].content, "hello");
            assert_eq!(view.messages[1].role, Role::Assistant);
        }
        other => panic!("expected a chat view, got {other:?}"),
    }

    let events = events.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, EVENT_TYPE_MESSAGE_RECEIVED);
    assert_eq!(events[0].source, "cloud.ai-chat");
    assert!(matches!(
        events[0].payload,
        PanelEventPayload::MessageReceived { .. }
    ));
}

#[tokio::test]
async fn blank_input_is_a_silent_no_op() {
    let events = Arc::new(RecordingEventSink::default());
    let mut adapter = SessionAdapter::builder(cloud_only_config())
        .event_sink(events.clone())
        .build();
    adapter.initialize().await;

    adapter.send("   \n\t ").await;

    match adapter.derive_view() {
        ChatView::Chat(view) => assert!(view.messages.is_empty()),
        other => panic!("expected a chat view, got {other:?}"),
    }
    assert!(events.events().is_empty());
}

#[tokio::test]
async fn send_before_a_model_is_loaded_is_a_no_op() {
    let local = Arc::new(ScriptedLocalProvider::new());
    let config = PanelConfig::builder()
        .local_provider(local.clone())
        .available_models(model_catalog())
        .build();

    let mut adapter = SessionAdapter::new(config);
    adapter.initialize().await;
    assert_eq!(adapter.selection().provider, Some(ProviderKind::Local));

    // Local is auto-selected but still idle: there is no capability to send
    // through yet.
    adapter.send("hello").await;
    assert!(local.snapshot().messages.is_empty());
}

#[tokio::test]
async fn provider_failure_keeps_messages_and_emits_an_error_event() {
    // Scenario: generation fails mid-session. The transcript is untouched,
    // the view reports the error, and an error event reaches the host.
    let events = Arc::new(RecordingEventSink::default());
    let cloud = Arc::new(ScriptedChatProvider::new());
    let config = PanelConfig::builder().cloud_provider(cloud.clone()).build();

    let mut adapter = SessionAdapter::builder(config)
        .event_sink(events.clone())
        .build();
    adapter.initialize().await;

    adapter.send("hello").await;
    let before = match adapter.derive_view() {
        ChatView::Chat(view) => view.messages,
        other => panic!("expected a chat view, got {other:?}"),
    };

    cloud.fail_next_send(ProviderError::generation("out of memory"));
    adapter.send("and now?").await;

    match adapter.derive_view() {
        ChatView::Chat(view) => {
            assert_eq!(view.messages, before);
            assert_eq!(view.status, ProviderStatus::Error);
            assert_eq!(
                view.error.map(|error| error.message),
                Some("out of memory".to_string())
            );
        }
        other => panic!("expected a chat view, got {other:?}"),
    }

    let events = events.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].event_type, EVENT_TYPE_ERROR);
    assert_eq!(events[1].source, "cloud.ai-chat");
    assert_eq!(
        events[1].payload,
        PanelEventPayload::Error {
            description: "out of memory".to_string()
        }
    );
}

#[tokio::test]
async fn back_from_the_model_picker_returns_to_the_provider_picker() {
    let preferences = Arc::new(InMemoryPreferenceStore::new());
    let mut adapter = SessionAdapter::builder(both_with_models_config())
        .preferences(preferences.clone())
        .build();
    adapter.initialize().await;

    adapter
        .select_provider(ProviderKind::Local)
        .expect("local is configured");
    assert!(matches!(adapter.derive_view(), ChatView::ModelPicker { .. }));

    adapter.go_back();
    assert!(matches!(
        adapter.derive_view(),
        ChatView::ProviderPicker { .. }
    ));
    assert!(preferences.get(PROVIDER_PREFERENCE_KEY).is_none());
}

#[tokio::test]
async fn back_from_a_local_chat_resets_both_provider_and_model() {
    let preferences = Arc::new(InMemoryPreferenceStore::new());
    let mut adapter = SessionAdapter::builder(both_with_models_config())
        .preferences(preferences.clone())
        .build();
    adapter.initialize().await;

    adapter
        .select_provider(ProviderKind::Local)
        .expect("local is configured");
    adapter
        .select_model("llama-3.2-1b")
        .await
        .expect("model selection should succeed");
    assert!(matches!(adapter.derive_view(), ChatView::Chat(_)));

    adapter.go_back();
    assert!(adapter.selection().provider.is_none());
    assert!(adapter.selection().model_id.is_none());
    assert!(preferences.get(PROVIDER_PREFERENCE_KEY).is_none());
    assert!(preferences.get(LOCAL_MODEL_PREFERENCE_KEY).is_none());
}

#[tokio::test]
async fn back_on_a_single_provider_host_never_reaches_the_picker() {
    let preferences = Arc::new(InMemoryPreferenceStore::new());
    let mut adapter = SessionAdapter::builder(cloud_only_config())
        .preferences(preferences.clone())
        .build();
    adapter.initialize().await;

    adapter.go_back();

    // Cloud is the only configured capability, so it is re-selected right
    // away instead of surfacing a one-option picker.
    assert_eq!(adapter.selection().provider, Some(ProviderKind::Cloud));
    assert!(matches!(adapter.derive_view(), ChatView::Chat(_)));
    assert_eq!(preferences.get(PROVIDER_PREFERENCE_KEY).as_deref(), Some("cloud"));
}

#[tokio::test]
async fn back_on_a_local_only_host_keeps_local_selected() {
    let config = PanelConfig::builder()
        .local_provider(Arc::new(ScriptedLocalProvider::new()))
        .available_models(model_catalog())
        .build();
    let mut adapter = SessionAdapter::new(config);
    adapter.initialize().await;
    assert!(matches!(adapter.derive_view(), ChatView::ModelPicker { .. }));

    adapter
        .select_model("llama-3.2-1b")
        .await
        .expect("model selection should succeed");
    assert!(matches!(adapter.derive_view(), ChatView::Chat(_)));

    // The model choice is dropped, but the lone provider is re-selected, so
    // the provider picker stays unreachable. The loaded model keeps the
    // provider ready, which keeps the user in the chat.
    adapter.go_back();
    assert_eq!(adapter.selection().provider, Some(ProviderKind::Local));
    assert!(adapter.selection().model_id.is_none());
    assert!(matches!(adapter.derive_view(), ChatView::Chat(_)));
}

#[tokio::test]
async fn back_from_a_cloud_chat_returns_to_the_provider_picker() {
    let preferences = Arc::new(InMemoryPreferenceStore::new());
    let mut adapter = SessionAdapter::builder(both_providers_config())
        .preferences(preferences.clone())
        .build();
    adapter.initialize().await;

    adapter
        .select_provider(ProviderKind::Cloud)
        .expect("cloud is configured");
    adapter.send("hello").await;

    adapter.go_back();
    assert!(adapter.selection().provider.is_none());
    assert!(matches!(
        adapter.derive_view(),
        ChatView::ProviderPicker { .. }
    ));
    assert!(preferences.get(PROVIDER_PREFERENCE_KEY).is_none());
}

#[tokio::test]
async fn clear_empties_the_transcript_but_keeps_the_selection() {
    let mut adapter = SessionAdapter::new(cloud_only_config());
    adapter.initialize().await;

    adapter.send("hello").await;
    adapter.clear();

    assert_eq!(adapter.selection().provider, Some(ProviderKind::Cloud));
    match adapter.derive_view() {
        ChatView::Chat(view) => assert!(view.messages.is_empty()),
        other => panic!("expected a chat view, got {other:?}"),
    }
}

#[tokio::test]
async fn custom_panel_id_shows_up_in_event_sources() {
    let events = Arc::new(RecordingEventSink::default());
    let mut adapter = SessionAdapter::builder(cloud_only_config())
        .event_sink(events.clone())
        .panel_id("sidebar-chat")
        .build();
    adapter.initialize().await;

    adapter.send("hello").await;

    let events = events.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].source, "cloud.sidebar-chat");
}
