//! Error types surfaced by the stock collaborators and config parsing.
//!
//! The tween itself has no runtime error path: a shape mismatch during
//! interpolation panics, and inflation errors pass through untouched.

use thiserror::Error;

/// Errors produced by [`crate::host::JsonInflater`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InflateError {
    #[error("value spec must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },
    #[error("value at '{path}' must be a number or an object, got {found}")]
    NonNumeric { path: String, found: &'static str },
    #[error("value at '{path}' is not a finite number")]
    NonFinite { path: String },
    #[error("key '{path}' does not exist in the render state")]
    UnknownKey { path: String },
    #[error("value at '{path}' is {found} but the render state holds {expected}")]
    ShapeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Errors produced while parsing a [`crate::config::TweenConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("tween config json parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tween duration must be finite and non-negative, got {0}")]
    InvalidDuration(f64),
}
