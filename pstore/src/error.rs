//! Preference store errors. Only construction can fail; the store
//! operations themselves are infallible by contract.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceStoreErrorKind {
    Io,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceStoreError {
    pub kind: PreferenceStoreErrorKind,
    pub message: String,
}

impl PreferenceStoreError {
    pub fn new(kind: PreferenceStoreErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(PreferenceStoreErrorKind::Io, message)
    }
}

impl Display for PreferenceStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for PreferenceStoreError {}
