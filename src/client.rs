// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! address.so API client: request execution and the public operation catalog.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::AddressError;
use crate::params::Params;
use crate::routes::Route;
use crate::send::SendParams;
use crate::signing::RequestSigner;
use crate::transport::{ReqwestTransport, Transport, TransportRequest};

/// Header carrying the API token on every request.
pub const API_TOKEN_HEADER: &str = "X-Api-Token";

/// Permission list the server reads as "revoke everything".
const REVOKE_ALL_PERMISSIONS: &str = "0";

/// Client for one coin of the address.so API.
///
/// Holds only immutable state, so a single instance (or its clones) can
/// serve concurrent calls. Each operation issues exactly one request.
#[derive(Debug)]
pub struct AddressClient<T = ReqwestTransport> {
    config: Arc<ClientConfig>,
    signer: RequestSigner,
    transport: Arc<T>,
}

impl<T> Clone for AddressClient<T> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            signer: self.signer.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl AddressClient<ReqwestTransport> {
    /// Client over HTTPS using the configured timeout.
    pub fn new(config: ClientConfig) -> Result<Self, AddressError> {
        let transport = ReqwestTransport::new(config.timeout())
            .map_err(|e| AddressError::configuration(e.to_string()))?;
        Ok(Self::with_transport(config, transport))
    }

    pub fn from_env() -> Result<Self, AddressError> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: Transport> AddressClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        let signer = RequestSigner::new(config.secret_token());
        Self {
            config: Arc::new(config),
            signer,
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Path of `route` for this client's coin.
    pub fn path(&self, route: Route) -> String {
        route.path(self.config.coin())
    }

    /// Build the wire request for `route`, signing it when the route demands.
    pub fn build_request(&self, route: Route, mut params: Params) -> TransportRequest {
        if route.requires_signature() {
            self.signer.sign_into(&mut params);
        }

        TransportRequest {
            method: route.method(),
            path: self.path(route),
            headers: vec![(
                API_TOKEN_HEADER.to_string(),
                self.config.api_token().to_string(),
            )],
            params,
        }
    }

    /// Send one request and decode the JSON body.
    pub async fn execute(&self, route: Route, params: Params) -> Result<Value, AddressError> {
        let request = self.build_request(route, params);
        let method = request.method;
        let path = request.path.clone();

        debug!(
            route = %route,
            method = %method,
            path = %path,
            signed = route.requires_signature(),
            params = ?request.params.keys().collect::<Vec<_>>(),
            "sending address API request"
        );

        let body = self
            .transport
            .send(request)
            .await
            .map_err(|source| AddressError::RequestFailed {
                method,
                path: path.clone(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| AddressError::ResponseDecode {
            method,
            path,
            source,
        })
    }

    // ---------------------------------------------------------------------
    // Coins
    // ---------------------------------------------------------------------

    pub async fn list_coins(&self) -> Result<Value, AddressError> {
        self.execute(Route::CoinsAll, Params::new()).await
    }

    /// Details of the configured coin.
    pub async fn get_coin(&self) -> Result<Value, AddressError> {
        self.execute(Route::CoinsRead, Params::new()).await
    }

    // ---------------------------------------------------------------------
    // Wallets
    // ---------------------------------------------------------------------

    pub async fn list_wallets(&self) -> Result<Value, AddressError> {
        self.execute(Route::WalletAll, Params::new()).await
    }

    pub async fn get_wallet(&self, wallet_id: u64) -> Result<Value, AddressError> {
        self.execute(Route::WalletRead { wallet_id }, Params::new()).await
    }

    pub async fn create_wallet(&self, params: Params) -> Result<Value, AddressError> {
        self.execute(Route::WalletCreate, params).await
    }

    pub async fn update_wallet(
        &self,
        wallet_id: u64,
        params: Params,
    ) -> Result<Value, AddressError> {
        self.execute(Route::WalletUpdate { wallet_id }, params).await
    }

    pub async fn delete_wallet(&self, wallet_id: u64) -> Result<Value, AddressError> {
        self.execute(Route::WalletDelete { wallet_id }, Params::new()).await
    }

    /// Latest `limit` transactions of a wallet, optionally filtered by tag.
    ///
    /// `tag: None` leaves the key out of the query entirely.
    pub async fn wallet_transactions(
        &self,
        wallet_id: u64,
        limit: u32,
        tag: Option<u64>,
    ) -> Result<Value, AddressError> {
        let mut params = Params::new().with("limit", limit);
        if let Some(tag) = tag {
            params.insert("tag", tag);
        }
        self.execute(Route::WalletTransactions { wallet_id }, params).await
    }

    /// Signed transfer out of a wallet.
    pub async fn send_from_wallet(
        &self,
        wallet_id: u64,
        send: SendParams,
    ) -> Result<Value, AddressError> {
        self.execute(Route::WalletSend { wallet_id }, send.into_params()).await
    }

    /// Replace the permission set `user_id` holds on a wallet.
    pub async fn set_wallet_permissions<I, S>(
        &self,
        wallet_id: u64,
        user_id: u64,
        permissions: I,
    ) -> Result<Value, AddressError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let permissions: Vec<String> = permissions.into_iter().map(Into::into).collect();
        let params = Params::new()
            .with("user_id", user_id)
            .with("permissions", permissions);
        self.execute(Route::WalletPermissions { wallet_id }, params).await
    }

    pub async fn remove_all_permissions(
        &self,
        wallet_id: u64,
        user_id: u64,
    ) -> Result<Value, AddressError> {
        self.set_wallet_permissions(wallet_id, user_id, [REVOKE_ALL_PERMISSIONS]).await
    }

    // ---------------------------------------------------------------------
    // Accounts
    // ---------------------------------------------------------------------

    pub async fn list_accounts(&self, wallet_id: u64) -> Result<Value, AddressError> {
        self.execute(Route::AccountAll { wallet_id }, Params::new()).await
    }

    pub async fn get_account(
        &self,
        wallet_id: u64,
        account_id: u64,
    ) -> Result<Value, AddressError> {
        self.execute(
            Route::AccountRead {
                wallet_id,
                account_id,
            },
            Params::new(),
        )
        .await
    }

    pub async fn create_account(
        &self,
        wallet_id: u64,
        params: Params,
    ) -> Result<Value, AddressError> {
        self.execute(Route::AccountCreate { wallet_id }, params).await
    }

    pub async fn delete_account(
        &self,
        wallet_id: u64,
        account_id: u64,
    ) -> Result<Value, AddressError> {
        self.execute(
            Route::AccountDelete {
                wallet_id,
                account_id,
            },
            Params::new(),
        )
        .await
    }

    /// Archive several accounts of a wallet in one call.
    pub async fn archive_accounts(
        &self,
        wallet_id: u64,
        account_ids: &[u64],
    ) -> Result<Value, AddressError> {
        let ids: Vec<String> = account_ids.iter().map(u64::to_string).collect();
        let params = Params::new().with("accounts", ids);
        self.execute(Route::AccountArchive { wallet_id }, params).await
    }

    pub async fn account_transactions(
        &self,
        wallet_id: u64,
        account_id: u64,
        limit: u32,
    ) -> Result<Value, AddressError> {
        self.execute(
            Route::AccountTransactions {
                wallet_id,
                account_id,
            },
            Params::new().with("limit", limit),
        )
        .await
    }

    /// Signed transfer out of an account.
    pub async fn send_from_account(
        &self,
        wallet_id: u64,
        account_id: u64,
        send: SendParams,
    ) -> Result<Value, AddressError> {
        self.execute(
            Route::AccountSend {
                wallet_id,
                account_id,
            },
            send.into_params(),
        )
        .await
    }
}
