//! Scripted in-memory providers.
//!
//! These back the workspace tests and double as reference implementations
//! for hosts wiring up real capabilities. The cloud-shaped
//! [`ScriptedChatProvider`] starts `Ready` and replies from a rotating
//! response script; [`ScriptedLocalProvider`] starts `Idle` and walks the
//! `Loading` progression when a model is selected.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, SystemTime};

use futures_timer::Delay;
use pcommon::BoxFuture;

use crate::{
    ChatProvider, LocalChatProvider, ProviderError, ProviderKind, ProviderMessage,
    ProviderSnapshot, ProviderStatus, Role,
};

const LOAD_STEPS: u32 = 4;

fn default_responses() -> Vec<String> {
    vec![
        "Hello! How can I help you today?".to_string(),
        "That's an interesting question. Let me think about it.".to_string(),
        "Based on the surrounding code, I would start with the component's inputs.".to_string(),
        "Here's an example:\n```rust\nfn example() -> &'static str {\n    \"hello world\"\n}\n```"
            .to_string(),
    ]
}

#[derive(Debug)]
struct ScriptState {
    messages: Vec<ProviderMessage>,
    is_generating: bool,
    status: ProviderStatus,
    load_progress: Option<f32>,
    load_progress_text: Option<String>,
    error: Option<ProviderError>,
    next_message_seq: u64,
    next_response: usize,
    fail_next_send: Option<ProviderError>,
    fail_next_load: Option<ProviderError>,
    cancel_requested: bool,
}

impl ScriptState {
    fn new(status: ProviderStatus) -> Self {
        Self {
            messages: Vec::new(),
            is_generating: false,
            status,
            load_progress: None,
            load_progress_text: None,
            error: None,
            next_message_seq: 1,
            next_response: 0,
            fail_next_send: None,
            fail_next_load: None,
            cancel_requested: false,
        }
    }

    fn push_message(&mut self, role: Role, content: &str) {
        let prefix = match role {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        };
        let id = format!("{prefix}-{}", self.next_message_seq);
        self.next_message_seq += 1;
        self.messages
            .push(ProviderMessage::new(id, role, content).with_timestamp(SystemTime::now()));
    }
}

#[derive(Debug)]
pub struct ScriptedChatProvider {
    kind: ProviderKind,
    responses: Vec<String>,
    response_delay: Option<Duration>,
    state: Mutex<ScriptState>,
}

impl ScriptedChatProvider {
    /// A cloud-shaped provider: no model download step, immediately `Ready`.
    pub fn new() -> Self {
        Self::with_initial_status(ProviderKind::Cloud, ProviderStatus::Ready)
    }

    fn with_initial_status(kind: ProviderKind, status: ProviderStatus) -> Self {
        Self {
            kind,
            responses: default_responses(),
            response_delay: None,
            state: Mutex::new(ScriptState::new(status)),
        }
    }

    pub fn with_responses(mut self, responses: Vec<String>) -> Self {
        self.responses = responses;
        self
    }

    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        self.response_delay = Some(delay);
        self
    }

    /// Arranges for the next `send_message` to fail with `error` without
    /// touching the message sequence.
    pub fn fail_next_send(&self, error: ProviderError) {
        self.state().fail_next_send = Some(error);
    }

    fn state(&self) -> MutexGuard<'_, ScriptState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_response(&self, state: &mut ScriptState) -> String {
        if self.responses.is_empty() {
            return String::new();
        }
        let response = self.responses[state.next_response % self.responses.len()].clone();
        state.next_response += 1;
        response
    }
}

impl Default for ScriptedChatProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatProvider for ScriptedChatProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn snapshot(&self) -> ProviderSnapshot {
        let state = self.state();
        ProviderSnapshot {
            messages: state.messages.clone(),
            is_generating: state.is_generating,
            status: state.status,
            load_progress: state.load_progress,
            load_progress_text: state.load_progress_text.clone(),
            error: state.error.clone(),
        }
    }

    fn send_message<'a>(
        &'a self,
        content: &'a str,
    ) -> BoxFuture<'a, Result<(), ProviderError>> {
        Box::pin(async move {
            {
                let mut state = self.state();
                if let Some(error) = state.fail_next_send.take() {
                    state.status = ProviderStatus::Error;
                    state.error = Some(error.clone());
                    return Err(error);
                }

                if matches!(state.status, ProviderStatus::Idle | ProviderStatus::Loading) {
                    return Err(ProviderError::generation("no model is loaded"));
                }

                state.error = None;
                state.cancel_requested = false;
                state.push_message(Role::User, content);
                state.is_generating = true;
                state.status = ProviderStatus::Generating;
            }

            if let Some(delay) = self.response_delay {
                Delay::new(delay).await;
            }

            let mut state = self.state();
            state.is_generating = false;
            state.status = ProviderStatus::Ready;
            if state.cancel_requested {
                state.cancel_requested = false;
                return Ok(());
            }

            let response = self.next_response(&mut state);
            state.push_message(Role::Assistant, &response);
            Ok(())
        })
    }

    fn clear_messages(&self) {
        self.state().messages.clear();
    }

    fn stop_generation(&self) {
        let mut state = self.state();
        if state.is_generating {
            state.cancel_requested = true;
            state.is_generating = false;
            state.status = ProviderStatus::Ready;
        }
    }
}

/// A local provider with a simulated model download. Starts `Idle`;
/// `load_model` reports progress in steps until `Ready`.
#[derive(Debug)]
pub struct ScriptedLocalProvider {
    inner: ScriptedChatProvider,
    load_step_delay: Option<Duration>,
}

impl ScriptedLocalProvider {
    pub fn new() -> Self {
        Self {
            inner: ScriptedChatProvider::with_initial_status(
                ProviderKind::Local,
                ProviderStatus::Idle,
            ),
            load_step_delay: None,
        }
    }

    pub fn with_responses(mut self, responses: Vec<String>) -> Self {
        self.inner = self.inner.with_responses(responses);
        self
    }

    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        self.inner = self.inner.with_response_delay(delay);
        self
    }

    pub fn with_load_step_delay(mut self, delay: Duration) -> Self {
        self.load_step_delay = Some(delay);
        self
    }

    pub fn fail_next_send(&self, error: ProviderError) {
        self.inner.fail_next_send(error);
    }

    /// Arranges for the next `load_model` to fail with `error`.
    pub fn fail_next_load(&self, error: ProviderError) {
        self.inner.state().fail_next_load = Some(error);
    }
}

impl Default for ScriptedLocalProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatProvider for ScriptedLocalProvider {
    fn kind(&self) -> ProviderKind {
        self.inner.kind()
    }

    fn snapshot(&self) -> ProviderSnapshot {
        self.inner.snapshot()
    }

    fn send_message<'a>(
        &'a self,
        content: &'a str,
    ) -> BoxFuture<'a, Result<(), ProviderError>> {
        self.inner.send_message(content)
    }

    fn clear_messages(&self) {
        self.inner.clear_messages();
    }

    fn stop_generation(&self) {
        self.inner.stop_generation();
    }
}

impl LocalChatProvider for ScriptedLocalProvider {
    fn load_model<'a>(&'a self, model_id: &'a str) -> BoxFuture<'a, Result<(), ProviderError>> {
        Box::pin(async move {
            {
                let mut state = self.inner.state();
                if let Some(error) = state.fail_next_load.take() {
                    state.status = ProviderStatus::Error;
                    state.error = Some(error.clone());
                    return Err(error);
                }

                state.error = None;
                state.status = ProviderStatus::Loading;
                state.load_progress = Some(0.0);
                state.load_progress_text = Some(format!("Loading {model_id}..."));
            }

            for step in 1..=LOAD_STEPS {
                if let Some(delay) = self.load_step_delay {
                    Delay::new(delay).await;
                }

                let mut state = self.inner.state();
                let progress = step as f32 / LOAD_STEPS as f32;
                state.load_progress = Some(progress);
                state.load_progress_text =
                    Some(format!("Loading {model_id}... {:.0}%", progress * 100.0));
            }

            let mut state = self.inner.state();
            state.status = ProviderStatus::Ready;
            state.load_progress = Some(1.0);
            state.load_progress_text = Some(format!("{model_id} ready"));
            Ok(())
        })
    }
}
