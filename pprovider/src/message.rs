//! Raw provider message and status types.

use std::fmt::{Display, Formatter};
use std::time::SystemTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    System,
}

/// A message as a provider reports it. Timestamps are optional here; the
/// session layer defaults them when it normalizes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: Option<SystemTime>,
}

impl ProviderMessage {
    pub fn new(id: impl Into<String>, role: Role, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role,
            content: content.into(),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: SystemTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// Provider lifecycle status. Cloud providers typically never report `Idle`
/// or `Loading` since they have no model download step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderStatus {
    Idle,
    Loading,
    Ready,
    Generating,
    Error,
}

impl Display for ProviderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Generating => "generating",
            Self::Error => "error",
        };

        f.write_str(status)
    }
}
