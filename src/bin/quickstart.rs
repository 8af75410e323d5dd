//! Demo: run each query once against the configured endpoint.
//!
//! Run with: `SOLANA_RPC_API_KEY=... cargo run --bin quickstart`

use std::process::ExitCode;

use serde::Serialize;
use solana_rpc_quickstart::{Config, Quickstart, Result, SolanaRpc, SolanaRpcClient};
use tracing_subscriber::EnvFilter;

const DEMO_ADDRESS: &str = "DLRPZSrex3dk58mbJxfKEaxPMazchNogvZDSh26BhgRi";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(region = %config.region, commitment = ?config.commitment, "starting demo");

    let quickstart = Quickstart::new(SolanaRpcClient::from_config(&config));
    match run(&quickstart).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run<R: SolanaRpc>(quickstart: &Quickstart<R>) -> Result<()> {
    println!("=== Solana RPC Quickstart ===\n");

    println!("1. Fetching balance of {DEMO_ADDRESS}...");
    show(&quickstart.get_balance(DEMO_ADDRESS).await?)?;

    println!("2. Fetching latest blockhash...");
    show(&quickstart.get_blockhash().await?)?;

    println!("3. Fetching account info of {DEMO_ADDRESS}...");
    show(&quickstart.get_account_info(DEMO_ADDRESS).await?)?;

    println!("4. Fetching current slot...");
    show(&quickstart.get_slot().await?)?;

    println!("=== Done! ===");
    Ok(())
}

fn show<T: Serialize>(record: &T) -> Result<()> {
    println!("{}\n", serde_json::to_string_pretty(record)?);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
