// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! `address-cli`: run one read-only address.so API route and print the JSON.
//!
//! ```text
//! address-cli <resource> <action> [wallet_id] [account_id]
//! address-cli wallet read 5
//! ```

use std::{env, process::ExitCode};

use address_client::transport::HttpMethod;
use address_client::{AddressClient, AddressError, Params, Route};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: address-cli <resource> <action> [wallet_id] [account_id]";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run(env::args().skip(1).collect()).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "address-cli failed");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run(args: Vec<String>) -> Result<String, AddressError> {
    let route = parse_route(&args)?;
    if route.method() != HttpMethod::Get {
        return Err(AddressError::configuration(format!(
            "{route} is not a read-only route"
        )));
    }

    let client = AddressClient::from_env()?;
    info!(route = %route, coin = client.config().coin(), "querying address API");

    let response = client.execute(route, Params::new()).await?;
    serde_json::to_string_pretty(&response)
        .map_err(|e| AddressError::configuration(format!("failed to render response: {e}")))
}

fn parse_route(args: &[String]) -> Result<Route, AddressError> {
    let (resource, action) = match args {
        [resource, action, ..] => (resource.as_str(), action.as_str()),
        _ => return Err(AddressError::configuration(USAGE)),
    };
    let id = |idx: usize| -> Result<Option<u64>, AddressError> {
        args.get(idx)
            .map(|raw| {
                raw.parse::<u64>().map_err(|e| {
                    AddressError::configuration(format!("invalid id {raw:?}: {e}"))
                })
            })
            .transpose()
    };

    Route::from_parts(resource, action, id(2)?, id(3)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_route_with_ids() {
        assert_eq!(
            parse_route(&args(&["account", "read", "1", "2"])).unwrap(),
            Route::AccountRead {
                wallet_id: 1,
                account_id: 2
            }
        );
    }

    #[test]
    fn rejects_missing_action_and_bad_ids() {
        assert!(parse_route(&args(&["wallet"])).is_err());
        assert!(parse_route(&args(&["wallet", "read", "five"])).is_err());
    }

    #[tokio::test]
    async fn refuses_mutating_routes() {
        let err = run(args(&["wallet", "send", "1"])).await.unwrap_err();
        assert!(err.to_string().contains("wallet.send is not a read-only route"));
    }
}
