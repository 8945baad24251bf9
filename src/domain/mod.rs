//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — View-model types (flat, render-ready)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom` conversions with fallback rules and validation
//! - `client.rs` — Sub-client with HTTP methods

pub mod pair;
pub mod position;

use std::fmt;

/// A required upstream field was missing or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub entity: &'static str,
    pub field: &'static str,
}

impl ValidationError {
    pub(crate) fn missing(entity: &'static str, field: &'static str) -> Self {
        Self { entity, field }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: missing {}", self.entity, self.field)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for crate::error::SdkError {
    fn from(err: ValidationError) -> Self {
        crate::error::SdkError::MalformedResponse(err.to_string())
    }
}
