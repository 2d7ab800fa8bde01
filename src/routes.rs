// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # URL Resolution
//!
//! Every endpoint the client can reach is a [`Route`] variant. A route knows
//! its HTTP method, whether it must be signed, and how to render its path
//! relative to [`crate::config::BASE_URL`]:
//!
//! | Route | Method | Path |
//! |-------|--------|------|
//! | `coins.all` | GET | `coins/` |
//! | `coins.read` | GET | `coins/{coin}/` |
//! | `wallet.all` / `wallet.create` | GET / POST | `coins/{coin}/wallets/` |
//! | `wallet.read` / `update` / `delete` | GET / PUT / DELETE | `coins/{coin}/wallets/{w}/` |
//! | `wallet.transactions` | GET | `coins/{coin}/wallets/{w}/transactions/` |
//! | `wallet.send` | POST (signed) | `coins/{coin}/wallets/{w}/send/` |
//! | `wallet.permissions` | POST | `coins/{coin}/wallets/{w}/permissions/` |
//! | `account.all` / `account.create` | GET / POST | `coins/{coin}/wallets/{w}/accounts/` |
//! | `account.read` / `account.delete` | GET / DELETE | `coins/{coin}/wallets/{w}/accounts/{a}/` |
//! | `account.archive` | DELETE | `coins/{coin}/wallets/{w}/accounts/archive/` |
//! | `account.transactions` | GET | `coins/{coin}/wallets/{w}/accounts/{a}/transactions/` |
//! | `account.send` | POST (signed) | `coins/{coin}/wallets/{w}/accounts/{a}/send/` |
//!
//! Resolution is pure: the same route and coin always give the same path.

use std::fmt;

use crate::error::AddressError;
use crate::transport::HttpMethod;

/// Resource family a route belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Coins,
    Wallet,
    Account,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Coins => "coins",
            Resource::Wallet => "wallet",
            Resource::Account => "account",
        }
    }

    /// Parse a resource name, accepting singular and plural spellings.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "coins" | "coin" => Some(Resource::Coins),
            "wallet" | "wallets" => Some(Resource::Wallet),
            "account" | "accounts" => Some(Resource::Account),
            _ => None,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    CoinsAll,
    CoinsRead,
    WalletAll,
    WalletRead { wallet_id: u64 },
    WalletCreate,
    WalletUpdate { wallet_id: u64 },
    WalletDelete { wallet_id: u64 },
    WalletTransactions { wallet_id: u64 },
    WalletSend { wallet_id: u64 },
    WalletPermissions { wallet_id: u64 },
    AccountAll { wallet_id: u64 },
    AccountRead { wallet_id: u64, account_id: u64 },
    AccountCreate { wallet_id: u64 },
    AccountDelete { wallet_id: u64, account_id: u64 },
    /// Bulk action; the account ids travel in the body.
    AccountArchive { wallet_id: u64 },
    AccountTransactions { wallet_id: u64, account_id: u64 },
    AccountSend { wallet_id: u64, account_id: u64 },
}

impl Route {
    /// Build a route from loosely-typed parts, e.g. command-line input.
    ///
    /// Fails with [`AddressError::Configuration`] for an unknown
    /// resource/action pair or when a required id is missing.
    pub fn from_parts(
        resource: &str,
        action: &str,
        wallet_id: Option<u64>,
        account_id: Option<u64>,
    ) -> Result<Self, AddressError> {
        let unknown = || AddressError::configuration(format!("unknown route {resource}.{action}"));
        let resource = Resource::parse(resource).ok_or_else(unknown)?;
        let action = action.trim().to_ascii_lowercase();

        let wallet = || {
            wallet_id.ok_or_else(|| {
                AddressError::configuration(format!("{resource}.{action} requires a wallet id"))
            })
        };
        let account = || {
            account_id.ok_or_else(|| {
                AddressError::configuration(format!("{resource}.{action} requires an account id"))
            })
        };

        let route = match (resource, action.as_str()) {
            (Resource::Coins, "all") => Route::CoinsAll,
            (Resource::Coins, "read") => Route::CoinsRead,
            (Resource::Wallet, "all") => Route::WalletAll,
            (Resource::Wallet, "read") => Route::WalletRead { wallet_id: wallet()? },
            (Resource::Wallet, "create") => Route::WalletCreate,
            (Resource::Wallet, "update") => Route::WalletUpdate { wallet_id: wallet()? },
            (Resource::Wallet, "delete") => Route::WalletDelete { wallet_id: wallet()? },
            (Resource::Wallet, "transactions") => Route::WalletTransactions { wallet_id: wallet()? },
            (Resource::Wallet, "send") => Route::WalletSend { wallet_id: wallet()? },
            (Resource::Wallet, "permissions") => Route::WalletPermissions { wallet_id: wallet()? },
            (Resource::Account, "all") => Route::AccountAll { wallet_id: wallet()? },
            (Resource::Account, "read") => Route::AccountRead {
                wallet_id: wallet()?,
                account_id: account()?,
            },
            (Resource::Account, "create") => Route::AccountCreate { wallet_id: wallet()? },
            (Resource::Account, "delete") => Route::AccountDelete {
                wallet_id: wallet()?,
                account_id: account()?,
            },
            (Resource::Account, "archive") => Route::AccountArchive { wallet_id: wallet()? },
            (Resource::Account, "transactions") => Route::AccountTransactions {
                wallet_id: wallet()?,
                account_id: account()?,
            },
            (Resource::Account, "send") => Route::AccountSend {
                wallet_id: wallet()?,
                account_id: account()?,
            },
            _ => return Err(unknown()),
        };
        Ok(route)
    }

    pub fn resource(&self) -> Resource {
        match self {
            Route::CoinsAll | Route::CoinsRead => Resource::Coins,
            Route::WalletAll
            | Route::WalletRead { .. }
            | Route::WalletCreate
            | Route::WalletUpdate { .. }
            | Route::WalletDelete { .. }
            | Route::WalletTransactions { .. }
            | Route::WalletSend { .. }
            | Route::WalletPermissions { .. } => Resource::Wallet,
            Route::AccountAll { .. }
            | Route::AccountRead { .. }
            | Route::AccountCreate { .. }
            | Route::AccountDelete { .. }
            | Route::AccountArchive { .. }
            | Route::AccountTransactions { .. }
            | Route::AccountSend { .. } => Resource::Account,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Route::CoinsAll | Route::WalletAll | Route::AccountAll { .. } => "all",
            Route::CoinsRead | Route::WalletRead { .. } | Route::AccountRead { .. } => "read",
            Route::WalletCreate | Route::AccountCreate { .. } => "create",
            Route::WalletUpdate { .. } => "update",
            Route::WalletDelete { .. } | Route::AccountDelete { .. } => "delete",
            Route::WalletTransactions { .. } | Route::AccountTransactions { .. } => {
                "transactions"
            }
            Route::WalletSend { .. } | Route::AccountSend { .. } => "send",
            Route::WalletPermissions { .. } => "permissions",
            Route::AccountArchive { .. } => "archive",
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Route::CoinsAll
            | Route::CoinsRead
            | Route::WalletAll
            | Route::WalletRead { .. }
            | Route::WalletTransactions { .. }
            | Route::AccountAll { .. }
            | Route::AccountRead { .. }
            | Route::AccountTransactions { .. } => HttpMethod::Get,
            Route::WalletCreate
            | Route::WalletSend { .. }
            | Route::WalletPermissions { .. }
            | Route::AccountCreate { .. }
            | Route::AccountSend { .. } => HttpMethod::Post,
            Route::WalletUpdate { .. } => HttpMethod::Put,
            Route::WalletDelete { .. }
            | Route::AccountDelete { .. }
            | Route::AccountArchive { .. } => HttpMethod::Delete,
        }
    }

    /// Only fund transfers carry a `sign` parameter.
    pub fn requires_signature(&self) -> bool {
        matches!(self, Route::WalletSend { .. } | Route::AccountSend { .. })
    }

    /// Path relative to the API base URL, always ending in `/`.
    pub fn path(&self, coin: &str) -> String {
        let wallet = |wallet_id: u64| format!("coins/{coin}/wallets/{wallet_id}/");
        let account = |wallet_id: u64, account_id: u64| {
            format!("coins/{coin}/wallets/{wallet_id}/accounts/{account_id}/")
        };

        match *self {
            Route::CoinsAll => "coins/".to_string(),
            Route::CoinsRead => format!("coins/{coin}/"),
            Route::WalletAll | Route::WalletCreate => format!("coins/{coin}/wallets/"),
            Route::WalletRead { wallet_id }
            | Route::WalletUpdate { wallet_id }
            | Route::WalletDelete { wallet_id } => wallet(wallet_id),
            Route::WalletTransactions { wallet_id } => {
                format!("{}transactions/", wallet(wallet_id))
            }
            Route::WalletSend { wallet_id } => format!("{}send/", wallet(wallet_id)),
            Route::WalletPermissions { wallet_id } => {
                format!("{}permissions/", wallet(wallet_id))
            }
            Route::AccountAll { wallet_id } | Route::AccountCreate { wallet_id } => {
                format!("{}accounts/", wallet(wallet_id))
            }
            Route::AccountArchive { wallet_id } => {
                format!("{}accounts/archive/", wallet(wallet_id))
            }
            Route::AccountRead {
                wallet_id,
                account_id,
            }
            | Route::AccountDelete {
                wallet_id,
                account_id,
            } => account(wallet_id, account_id),
            Route::AccountTransactions {
                wallet_id,
                account_id,
            } => format!("{}transactions/", account(wallet_id, account_id)),
            Route::AccountSend {
                wallet_id,
                account_id,
            } => format!("{}send/", account(wallet_id, account_id)),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.resource(), self.action())
    }
}
