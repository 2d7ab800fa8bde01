// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Client error types.

use std::time::Duration;

use crate::transport::HttpMethod;

/// Errors surfaced by [`crate::AddressClient`].
///
/// Nothing in this crate recovers from these locally: every variant reaches
/// the caller unchanged, and no request is ever retried.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    /// Unknown resource/action pair, missing route id, or unusable settings.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{method} {path} failed: {source}")]
    RequestFailed {
        method: HttpMethod,
        path: String,
        #[source]
        source: TransportError,
    },

    #[error("{method} {path} returned invalid JSON: {source}")]
    ResponseDecode {
        method: HttpMethod,
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl AddressError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// True when the underlying transport gave up waiting for the server.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            AddressError::RequestFailed {
                source: TransportError::Timeout(_),
                ..
            }
        )
    }
}

/// Failures reported by a [`crate::transport::Transport`].
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to build HTTP client: {0}")]
    Build(String),
}
