//! Host configuration surface for the chat panel.

use std::sync::Arc;

use pprovider::{ChatProvider, LocalChatProvider, ModelDefinition, ProviderKind, ProviderMeta};

use crate::ConfigShape;

/// What the host wires into the panel: zero, one, or two provider
/// capabilities, the local model catalog, and optional display metadata
/// overrides. The panel degrades gracefully whatever the shape.
#[derive(Clone)]
pub struct PanelConfig {
    local: Option<Arc<dyn LocalChatProvider>>,
    cloud: Option<Arc<dyn ChatProvider>>,
    available_models: Vec<ModelDefinition>,
    local_meta: ProviderMeta,
    cloud_meta: ProviderMeta,
}

impl PanelConfig {
    pub fn builder() -> PanelConfigBuilder {
        PanelConfigBuilder::new()
    }

    pub fn shape(&self) -> ConfigShape {
        ConfigShape {
            has_local: self.local.is_some(),
            has_cloud: self.cloud.is_some(),
        }
    }

    pub fn local_provider(&self) -> Option<&Arc<dyn LocalChatProvider>> {
        self.local.as_ref()
    }

    pub fn cloud_provider(&self) -> Option<&Arc<dyn ChatProvider>> {
        self.cloud.as_ref()
    }

    /// The capability backing `kind`, viewed through the common contract.
    pub fn capability(&self, kind: ProviderKind) -> Option<Arc<dyn ChatProvider>> {
        match kind {
            ProviderKind::Local => self
                .local
                .clone()
                .map(|provider| provider as Arc<dyn ChatProvider>),
            ProviderKind::Cloud => self.cloud.clone(),
        }
    }

    pub fn available_models(&self) -> &[ModelDefinition] {
        &self.available_models
    }

    pub fn model_definition(&self, model_id: &str) -> Option<&ModelDefinition> {
        self.available_models.iter().find(|model| model.id == model_id)
    }

    pub fn local_meta(&self) -> &ProviderMeta {
        &self.local_meta
    }

    pub fn cloud_meta(&self) -> &ProviderMeta {
        &self.cloud_meta
    }
}

pub struct PanelConfigBuilder {
    local: Option<Arc<dyn LocalChatProvider>>,
    cloud: Option<Arc<dyn ChatProvider>>,
    available_models: Vec<ModelDefinition>,
    local_meta: ProviderMeta,
    cloud_meta: ProviderMeta,
}

impl PanelConfigBuilder {
    pub fn new() -> Self {
        Self {
            local: None,
            cloud: None,
            available_models: Vec::new(),
            local_meta: ProviderMeta::default_local(),
            cloud_meta: ProviderMeta::default_cloud(),
        }
    }

    pub fn local_provider(mut self, provider: Arc<dyn LocalChatProvider>) -> Self {
        self.local = Some(provider);
        self
    }

    pub fn cloud_provider(mut self, provider: Arc<dyn ChatProvider>) -> Self {
        self.cloud = Some(provider);
        self
    }

    pub fn available_models(mut self, models: Vec<ModelDefinition>) -> Self {
        self.available_models = models;
        self
    }

    pub fn local_meta(mut self, meta: ProviderMeta) -> Self {
        self.local_meta = meta;
        self
    }

    pub fn cloud_meta(mut self, meta: ProviderMeta) -> Self {
        self.cloud_meta = meta;
        self
    }

    pub fn build(self) -> PanelConfig {
        PanelConfig {
            local: self.local,
            cloud: self.cloud,
            available_models: self.available_models,
            local_meta: self.local_meta,
            cloud_meta: self.cloud_meta,
        }
    }
}

impl Default for PanelConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
