// src/core/errors.rs

//! Defines the primary error type for the status service.

use std::sync::Arc;
use thiserror::Error;

/// All failures the status service can produce.
///
/// `ConfigRead` is recovered locally by the aggregator, `Aggregation` is turned into
/// a 500 response at the HTTP boundary, and `Bind` aborts startup.
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("Config read error: {0}")]
    ConfigRead(String),

    #[error("Aggregation failed in {provider} provider: {message}")]
    Aggregation {
        provider: &'static str,
        message: String,
    },

    #[error("Failed to bind status server on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: Arc<std::io::Error>,
    },

    #[error("IO Error: {0}")]
    Io(Arc<std::io::Error>),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl StatusError {
    /// Wraps a provider failure, naming the provider that raised it.
    pub fn aggregation(provider: &'static str, cause: impl std::fmt::Display) -> Self {
        StatusError::Aggregation {
            provider,
            message: cause.to_string(),
        }
    }
}

// Manual implementation of Clone because `std::io::Error` is not cloneable.
impl Clone for StatusError {
    fn clone(&self) -> Self {
        match self {
            StatusError::ConfigRead(s) => StatusError::ConfigRead(s.clone()),
            StatusError::Aggregation { provider, message } => StatusError::Aggregation {
                provider: *provider,
                message: message.clone(),
            },
            StatusError::Bind { addr, source } => StatusError::Bind {
                addr: addr.clone(),
                source: Arc::clone(source),
            },
            StatusError::Io(e) => StatusError::Io(Arc::clone(e)),
            StatusError::Internal(s) => StatusError::Internal(s.clone()),
        }
    }
}

impl PartialEq for StatusError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StatusError::ConfigRead(s1), StatusError::ConfigRead(s2)) => s1 == s2,
            (
                StatusError::Aggregation {
                    provider: p1,
                    message: m1,
                },
                StatusError::Aggregation {
                    provider: p2,
                    message: m2,
                },
            ) => p1 == p2 && m1 == m2,
            (StatusError::Bind { addr: a1, .. }, StatusError::Bind { addr: a2, .. }) => a1 == a2,
            (StatusError::Io(e1), StatusError::Io(e2)) => e1.to_string() == e2.to_string(),
            (StatusError::Internal(s1), StatusError::Internal(s2)) => s1 == s2,
            _ => false,
        }
    }
}

// --- From trait implementations for easy error conversion ---

impl From<std::io::Error> for StatusError {
    fn from(e: std::io::Error) -> Self {
        StatusError::Io(Arc::new(e))
    }
}

impl From<serde_json::Error> for StatusError {
    fn from(e: serde_json::Error) -> Self {
        StatusError::Internal(format!("JSON serialization error: {e}"))
    }
}
