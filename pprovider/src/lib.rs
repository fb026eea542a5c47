//! Chat provider capability contract consumed by the panel session layer.
//!
//! Hosts implement [`ChatProvider`] (and [`LocalChatProvider`] for providers
//! with a model download step); the session adapter only ever talks to these
//! traits.

mod capability;
mod error;
mod message;
mod meta;
mod scripted;

pub use capability::{ChatProvider, LocalChatProvider, ProviderSnapshot};
pub use error::{ProviderError, ProviderErrorKind};
pub use message::{ProviderMessage, ProviderStatus, Role};
pub use meta::{BadgeVariant, ModelDefinition, ProviderKind, ProviderMeta};
pub use scripted::{ScriptedChatProvider, ScriptedLocalProvider};
pub use pcommon::BoxFuture;

pub mod prelude {
    pub use crate::{
        BadgeVariant, ChatProvider, LocalChatProvider, ModelDefinition, ProviderError,
        ProviderErrorKind, ProviderKind, ProviderMessage, ProviderMeta, ProviderSnapshot,
        ProviderStatus, Role, ScriptedChatProvider, ScriptedLocalProvider,
    };
    pub use pcommon::BoxFuture;
}
