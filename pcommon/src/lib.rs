//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use pcommon::PanelId;
//!
//! let panel = PanelId::new("ai-chat");
//! assert_eq!(panel.as_str(), "ai-chat");
//! assert_eq!(PanelId::default().to_string(), "ai-chat");
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use pcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Identifier newtypes shared across the panel crates.

    use std::fmt::{Display, Formatter};

    /// Stable identifier of the hosted panel, used to tag emitted
    /// lifecycle events.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct PanelId(String);

    impl PanelId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }
    }

    impl Default for PanelId {
        fn default() -> Self {
            Self("ai-chat".to_string())
        }
    }

    impl Display for PanelId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for PanelId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for PanelId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }
}

pub use context::PanelId;
pub use future::BoxFuture;
