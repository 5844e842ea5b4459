//! Errors produced at the HTTP service boundary.
//!
//! Service calls never panic and never throw into the UI: every failure is
//! resolved into a [`ServiceError`] value that the caller inspects.

use contracts::shared::api_error::ApiErrorBody;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Validation failed: {}", .messages.join("; "))]
    Validation { messages: Vec<String> },

    #[error("Too many requests")]
    RateLimited,

    #[error("Server error: {status}")]
    Server { status: u16 },

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("Empty response")]
    EmptyResponse,
}

impl ServiceError {
    /// Classifies a non-2xx response by status code and raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            400 => {
                let messages = serde_json::from_str::<ApiErrorBody>(body)
                    .map(|b| b.messages())
                    .unwrap_or_default();
                if messages.is_empty() {
                    ServiceError::Http { status }
                } else {
                    ServiceError::Validation { messages }
                }
            }
            429 => ServiceError::RateLimited,
            s if s >= 500 => ServiceError::Server { status },
            _ => ServiceError::Http { status },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Validation { .. } => Some(400),
            ServiceError::RateLimited => Some(429),
            ServiceError::Server { status } | ServiceError::Http { status } => Some(*status),
            _ => None,
        }
    }
}
