// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Fund-transfer parameters and the allow-list filter applied before signing.

use tracing::{debug, warn};

use crate::params::{ParamValue, Params};

/// Keys a send request may carry. Anything else is dropped before signing.
pub const SEND_ALLOWED_KEYS: [&str; 7] = [
    "amount",
    "recipient",
    "payment_password",
    "odd_address",
    "token_label",
    "fee_priority",
    "tag",
];

const REQUIRED_KEYS: [&str; 3] = ["amount", "recipient", "payment_password"];

/// Server-side fee tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeePriority {
    Normal = 1,
    Medium = 2,
    High = 3,
}

impl From<FeePriority> for ParamValue {
    fn from(priority: FeePriority) -> Self {
        ParamValue::Int(priority as i64)
    }
}

/// Arguments of a wallet or account send.
///
/// Optional fields go into `extra`; unknown keys there are dropped when the
/// request is built, not rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct SendParams {
    pub amount: f64,
    pub recipient: String,
    pub payment_password: String,
    pub extra: Params,
}

impl SendParams {
    pub fn new(
        amount: f64,
        recipient: impl Into<String>,
        payment_password: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            recipient: recipient.into(),
            payment_password: payment_password.into(),
            extra: Params::new(),
        }
    }

    /// Replace the optional parameter set wholesale.
    pub fn with_extra(mut self, extra: Params) -> Self {
        self.extra = extra;
        self
    }

    /// Address that receives the change.
    pub fn odd_address(mut self, address: impl Into<String>) -> Self {
        self.extra.insert("odd_address", address.into());
        self
    }

    pub fn token_label(mut self, label: impl Into<String>) -> Self {
        self.extra.insert("token_label", label.into());
        self
    }

    pub fn fee_priority(mut self, priority: FeePriority) -> Self {
        self.extra.insert("fee_priority", priority);
        self
    }

    /// Destination tag for ledgers that need one (e.g. XRP).
    pub fn tag(mut self, tag: impl Into<ParamValue>) -> Self {
        self.extra.insert("tag", tag);
        self
    }

    /// Merge required and optional fields and keep only allow-listed keys.
    ///
    /// Required keys go in first; `extra` is merged on top, so a colliding
    /// key in `extra` wins.
    pub fn into_params(self) -> Params {
        let mut params = Params::new()
            .with("amount", self.amount)
            .with("recipient", self.recipient)
            .with("payment_password", self.payment_password);

        for (key, value) in self.extra.iter() {
            if REQUIRED_KEYS.contains(&key) {
                warn!(key, "optional send parameter overrides a required field");
            }
            params.insert(key, value.clone());
        }

        filter_send_params(params)
    }
}

/// Drop every key outside [`SEND_ALLOWED_KEYS`].
pub fn filter_send_params(mut params: Params) -> Params {
    params.retain(|key| {
        let allowed = SEND_ALLOWED_KEYS.contains(&key);
        if !allowed {
            debug!(key, "dropping unsupported send parameter");
        }
        allowed
    });
    params
}
