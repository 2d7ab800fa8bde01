// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HTTP transport seam.
//!
//! The client never talks to the network itself. It hands a fully-built
//! [`TransportRequest`] to a [`Transport`] and gets back the raw response
//! body. [`ReqwestTransport`] is the production implementation.

pub mod http;

use std::fmt;
use std::future::Future;

use crate::error::TransportError;
use crate::params::Params;

pub use http::ReqwestTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready to go on the wire.
///
/// `params` already includes the `sign` entry for signed routes. Transports
/// put them in the query string for GET and in a form-encoded body otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    /// Path relative to the transport's base URL.
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub params: Params,
}

impl TransportRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn form_body(&self) -> String {
        self.params.to_form_string()
    }

    /// `path` with the encoded parameters appended as a query string.
    pub fn path_with_query(&self) -> String {
        if self.params.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.form_body())
        }
    }
}

/// Performs one HTTP exchange and returns the raw body of a 2xx response.
///
/// Implementations own timeouts and status classification: a non-success
/// status must come back as [`TransportError::Status`] and an expired
/// deadline as [`TransportError::Timeout`].
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: TransportRequest,
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: HttpMethod, params: Params) -> TransportRequest {
        TransportRequest {
            method,
            path: "coins/btc/wallets/1/transactions/".to_string(),
            headers: vec![("X-Api-Token".to_string(), "token".to_string())],
            params,
        }
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = request(HttpMethod::Get, Params::new());
        assert_eq!(req.header("x-api-token"), Some("token"));
        assert_eq!(req.header("Authorization"), None);
    }

    #[test]
    fn path_with_query_only_when_params_present() {
        let empty = request(HttpMethod::Get, Params::new());
        assert_eq!(empty.path_with_query(), "coins/btc/wallets/1/transactions/");

        let with_limit = request(HttpMethod::Get, Params::new().with("limit", 100));
        assert_eq!(
            with_limit.path_with_query(),
            "coins/btc/wallets/1/transactions/?limit=100"
        );
    }

    #[test]
    fn method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
