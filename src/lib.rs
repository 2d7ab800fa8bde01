// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! address.so wallet-management API client.
//!
//! This crate builds authenticated requests for the coin, wallet and account
//! resources of `https://api.address.so/api/`, signs fund transfers with
//! HMAC-SHA512, and decodes responses into [`serde_json::Value`].
//!
//! ## Modules
//!
//! - `client` - Request execution and the public operation catalog
//! - `config` - Client settings and environment loading
//! - `routes` - Resource/action to URL path resolution
//! - `send` - Send parameters and the allow-list filter
//! - `signing` - HMAC-SHA512 request signatures
//! - `transport` - HTTP transport trait and the `reqwest` implementation

pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod routes;
pub mod send;
pub mod signing;
pub mod transport;

pub use client::AddressClient;
pub use config::ClientConfig;
pub use error::{AddressError, TransportError};
pub use params::{ParamValue, Params};
pub use routes::{Resource, Route};
pub use send::{FeePriority, SendParams};
