//! プローブ失敗の分類

use crate::common::error::CommonError;
use serde_json::Value;
use thiserror::Error;

/// Health probe error type
///
/// Every variant means the probe failed. Only [`ProbeError::Request`] is a
/// connection-level fault; the others are assertion failures on a response
/// that did arrive.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Invalid probe configuration
    #[error(transparent)]
    Config(#[from] CommonError),

    /// Target unreachable, timed out, or the request failed in transit
    #[error("Request to {url} failed: {source}")]
    Request {
        /// Probed URL
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// Status code differs from the expected one
    #[error("Unexpected status from {url}: expected {expected}, got {actual}")]
    UnexpectedStatus {
        /// Probed URL
        url: String,
        /// Expected status code
        expected: u16,
        /// Received status code
        actual: u16,
    },

    /// Body is not valid JSON
    #[error("Invalid JSON body from {url}: {reason}")]
    InvalidBody {
        /// Probed URL
        url: String,
        /// Parser message
        reason: String,
    },

    /// Body is JSON but not exactly the expected document
    #[error("Unexpected body from {url}: expected {expected}, got {actual}")]
    UnexpectedBody {
        /// Probed URL
        url: String,
        /// Expected JSON body
        expected: Value,
        /// Received JSON body
        actual: Value,
    },
}

impl ProbeError {
    /// True when no response was received (connection refused, timeout, ...)
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, ProbeError::Request { .. })
    }

    /// True when a response arrived but failed the status or body check
    pub fn is_assertion_failure(&self) -> bool {
        matches!(
            self,
            ProbeError::UnexpectedStatus { .. }
                | ProbeError::InvalidBody { .. }
                | ProbeError::UnexpectedBody { .. }
        )
    }

    /// Short machine-readable label for reports
    pub fn kind(&self) -> &'static str {
        match self {
            ProbeError::Config(_) => "config",
            ProbeError::Request { .. } => "request",
            ProbeError::UnexpectedStatus { .. } => "unexpected_status",
            ProbeError::InvalidBody { .. } => "invalid_body",
            ProbeError::UnexpectedBody { .. } => "unexpected_body",
        }
    }
}
