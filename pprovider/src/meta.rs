//! Provider identity, display metadata, and model catalog entries.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Which flavor of provider backs the session. The `Display` strings are
/// stable: they are persisted as the provider preference and embedded in
/// event source identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Local,
    Cloud,
}

impl Display for ProviderKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let kind = match self {
            Self::Local => "local",
            Self::Cloud => "cloud",
        };

        f.write_str(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownProviderKind;

impl FromStr for ProviderKind {
    type Err = UnknownProviderKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "local" => Ok(Self::Local),
            "cloud" => Ok(Self::Cloud),
            _ => Err(UnknownProviderKind),
        }
    }
}

/// One entry of the host-supplied local model catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDefinition {
    pub id: String,
    pub name: String,
    pub size: String,
    pub description: Option<String>,
}

impl ModelDefinition {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            size: size.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Success,
    Info,
    Warning,
}

/// Display metadata for a provider option on the selection screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMeta {
    pub name: String,
    pub description: String,
    pub badge: Option<String>,
    pub badge_variant: BadgeVariant,
    pub requirements: Option<String>,
}

impl ProviderMeta {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            badge: None,
            badge_variant: BadgeVariant::Info,
            requirements: None,
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>, variant: BadgeVariant) -> Self {
        self.badge = Some(badge.into());
        self.badge_variant = variant;
        self
    }

    pub fn with_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.requirements = Some(requirements.into());
        self
    }

    /// Default metadata shown for a local provider when the host supplies
    /// none.
    pub fn default_local() -> Self {
        Self::new(
            "Local (On-Device)",
            "Runs models directly on this device. No data leaves your machine.",
        )
        .with_badge("Free", BadgeVariant::Success)
        .with_requirements("Requires a supported local model runtime")
    }

    /// Default metadata shown for a cloud provider when the host supplies
    /// none.
    pub fn default_cloud() -> Self {
        Self::new("Cloud AI", "Fast, capable cloud model. Best for complex queries.")
            .with_badge("Cloud", BadgeVariant::Info)
            .with_requirements("Requires API key configuration")
    }
}
