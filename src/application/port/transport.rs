// SPDX-License-Identifier: MPL-2.0
//! Transport port definition.
//!
//! The transport performs exactly one network submission per call. The form
//! never retries and treats every failure reason the same way.

use crate::domain::form::FormData;
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// TransportError
// =============================================================================

/// Reasons a submission can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be sent or the connection broke.
    Network(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// No answer within the configured timeout.
    Timeout,
    /// The transport refused the data before sending it.
    Rejected(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Network(msg) => write!(f, "Network error: {msg}"),
            TransportError::Status(code) => write!(f, "Server responded with status {code}"),
            TransportError::Timeout => write!(f, "Request timed out"),
            TransportError::Rejected(msg) => write!(f, "Submission rejected: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

// =============================================================================
// Transport Trait
// =============================================================================

/// Future resolving to the outcome of one submission.
pub type TransportFuture = BoxFuture<'static, Result<(), TransportError>>;

/// Port for the network submission of the upload form.
pub trait Transport: Send + Sync {
    /// Prepares one submission attempt of `data`. Driving the returned
    /// future performs the request and yields its outcome.
    fn submit(&self, data: FormData) -> TransportFuture;
}
