//! Package error types.
//!
//! All library errors are variants of [`Error`]; the binary wraps them in
//! `anyhow` at the boundary. Nothing is ever swallowed or recovered
//! silently: an encoding failure propagates to the caller unmodified.

use thiserror::Error;

/// Errors produced by the configuration contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A value was neither JSON-native nor claimed by any transformer in
    /// the serializer chain.
    #[error("no serializer for {kind} value")]
    Encode {
        /// Kind name of the offending value, e.g. `"datetime"`.
        kind: &'static str,
    },

    /// A configuration mapping could not be used to reconstruct an
    /// instance: a key was missing, unexpected, or carried the wrong kind
    /// of value.
    #[error("invalid parameter `{key}`: {reason}")]
    InvalidParameter { key: String, reason: String },
}

impl Error {
    pub(crate) fn encode(kind: &'static str) -> Self {
        Error::Encode { kind }
    }

    pub(crate) fn missing_parameter(key: &str) -> Self {
        Error::InvalidParameter {
            key: key.to_string(),
            reason: "missing".to_string(),
        }
    }

    pub(crate) fn unexpected_parameter(key: &str) -> Self {
        Error::InvalidParameter {
            key: key.to_string(),
            reason: "unexpected".to_string(),
        }
    }

    pub(crate) fn invalid_parameter(key: &str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
