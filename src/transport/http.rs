// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! `reqwest`-backed transport.

use std::time::Duration;

use reqwest::{header, Client};
use tracing::debug;

use super::{HttpMethod, Transport, TransportRequest};
use crate::config::BASE_URL;
use crate::error::TransportError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    base_url: String,
    timeout: Duration,
    http: Client,
}

impl ReqwestTransport {
    /// Transport against the production API.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        Self::with_base_url(BASE_URL, timeout)
    }

    /// Transport against another deployment (sandbox, local mock server).
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into(),
            timeout,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn classify(&self, error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout(self.timeout)
        } else {
            TransportError::Network(error.to_string())
        }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<String, TransportError> {
        let builder = match request.method {
            HttpMethod::Get => self.http.get(self.url(&request.path_with_query())),
            HttpMethod::Post => self.http.post(self.url(&request.path)),
            HttpMethod::Put => self.http.put(self.url(&request.path)),
            HttpMethod::Delete => self.http.delete(self.url(&request.path)),
        };

        let mut builder = request
            .headers
            .iter()
            .fold(builder, |b, (name, value)| b.header(name.as_str(), value.as_str()));

        if request.method != HttpMethod::Get {
            builder = builder
                .header(header::CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(request.form_body());
        }

        let response = builder.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        debug!(
            method = %request.method,
            path = %request.path,
            status = status.as_u16(),
            "address API responded"
        );

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
