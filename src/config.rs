// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Client Configuration
//!
//! This module defines the client settings, the environment variable names
//! they can be loaded from, and their defaults.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `ADDRESS_COIN` | Coin label used in every path | `btc` |
//! | `ADDRESS_API_TOKEN` | Sent as `X-Api-Token` on every request | Required |
//! | `ADDRESS_SECRET_TOKEN` | Secret the send signing key is derived from | Required |
//! | `ADDRESS_TIMEOUT_SECS` | Per-request timeout in seconds | `2` |
//! | `LOG_FORMAT` | Logging format for `address-cli` (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter for `address-cli` | `info` |

use std::time::Duration;

use crate::error::AddressError;

/// Fixed API root; every route path is relative to it.
pub const BASE_URL: &str = "https://api.address.so/api/";

pub const COIN_ENV: &str = "ADDRESS_COIN";
pub const API_TOKEN_ENV: &str = "ADDRESS_API_TOKEN";
pub const SECRET_TOKEN_ENV: &str = "ADDRESS_SECRET_TOKEN";
pub const TIMEOUT_ENV: &str = "ADDRESS_TIMEOUT_SECS";

pub const DEFAULT_COIN: &str = "btc";
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;

/// Immutable client settings.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    coin: String,
    api_token: String,
    secret_token: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Settings with the default two-second timeout.
    pub fn new(
        coin: impl Into<String>,
        api_token: impl Into<String>,
        secret_token: impl Into<String>,
    ) -> Self {
        Self {
            coin: coin.into(),
            api_token: api_token.into(),
            secret_token: secret_token.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load settings from the `ADDRESS_*` environment variables.
    pub fn from_env() -> Result<Self, AddressError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] but reads through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AddressError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |name: &str| {
            read(name).ok_or_else(|| {
                AddressError::configuration(format!("missing environment variable {name}"))
            })
        };

        let coin = read(COIN_ENV)
            .unwrap_or_else(|| DEFAULT_COIN.to_string())
            .to_ascii_lowercase();
        let api_token = required(API_TOKEN_ENV)?;
        let secret_token = required(SECRET_TOKEN_ENV)?;
        let timeout_secs = match read(TIMEOUT_ENV) {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                AddressError::configuration(format!("invalid {TIMEOUT_ENV} {raw:?}: {e}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self::new(coin, api_token, secret_token)
            .with_timeout(Duration::from_secs(timeout_secs)))
    }

    pub fn coin(&self) -> &str {
        &self.coin
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn secret_token(&self) -> &str {
        &self.secret_token
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("coin", &self.coin)
            .field("api_token", &"<redacted>")
            .field("secret_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
