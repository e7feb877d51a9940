//! Query a token balance through transaction simulation.
//!
//! Builds a `balance(address)` invocation against a contract on testnet,
//! dry-runs it through the RPC endpoint, and prints the decoded amount.
//! No transaction is submitted and no signing key is involved. Substitute
//! your own contract and account addresses to query real state.
//!
//! Run with: `cargo run --example simulate_balance`

use anyhow::{Context, Result};
use soroban_executor::codec::{decode_account_address, decode_contract_address, i128_to_f64};
use soroban_executor::{Executor, ScVal, SourceAccount};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const TESTNET_RPC_URL: &str = "https://soroban-testnet.stellar.org";

/// Token contract to query.
const CONTRACT_ADDRESS: &str = "CCFNZO33IO6GDTPLWWRJ5F34UBXEBOSYGSQJJGVLAJNNULU26CRZR6TM";

/// Account whose balance to look up; also serves as the simulation source.
const ACCOUNT_ADDRESS: &str = "GDWREJ5HETNIDTQKXJZPA6LRSJMFUCO4T2DFEJYSZ2XVWRTMUG64AL4B";

/// Decimal scale of the token amount (7 decimals).
const AMOUNT_SCALE: f64 = 10_000_000.0;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let contract = decode_contract_address(CONTRACT_ADDRESS)
        .context("invalid contract address constant")?;
    let holder = decode_account_address(ACCOUNT_ADDRESS)
        .context("invalid account address constant")?;

    // Simulation never hits sequence checks, so any sequence will do.
    let source = SourceAccount::new(ACCOUNT_ADDRESS, 0)?;

    let executor = Executor::from_url(TESTNET_RPC_URL)?;
    info!(url = TESTNET_RPC_URL, contract = CONTRACT_ADDRESS, "querying balance");

    let result = executor
        .simulate_contract_call(&contract, &source, vec![ScVal::Address(holder)], "balance")
        .await
        .context("simulation failed")?;

    match result {
        Some(ScVal::I128(parts)) => {
            info!(
                account = ACCOUNT_ADDRESS,
                balance = i128_to_f64(&parts, AMOUNT_SCALE),
                "balance retrieved"
            );
        }
        Some(other) => warn!(value = ?other, "balance returned an unexpected type"),
        None => warn!("balance returned no value"),
    }

    Ok(())
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "simulate_balance=info,soroban_executor=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}
