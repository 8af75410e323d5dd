//! Typed, read-only queries against a hosted Solana JSON-RPC endpoint.
//!
//! This crate wraps five provider lookups (balance, latest blockhash,
//! account info, transaction status and current slot) and reshapes each reply
//! into a flat, serializable record.
//!
//! # Features
//!
//! - **Query layer**: [`Quickstart`], generic over any [`SolanaRpc`]
//!   provider, plus address validation and lamport conversion. Available with
//!   no additional features.
//! - **`client`** (enabled by default): [`SolanaRpcClient`], an async
//!   JSON-RPC client built on `reqwest`, and the `quickstart` demo binary.
//!
//! # Quick start
//!
//! ```no_run
//! use solana_rpc_quickstart::{Config, Quickstart, SolanaRpcClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let quickstart = Quickstart::new(SolanaRpcClient::from_config(&config));
//!     let blockhash = quickstart.get_blockhash().await?;
//!     println!("{} valid until height {}", blockhash.blockhash, blockhash.last_valid_block_height);
//!     Ok(())
//! }
//! ```

pub mod address;
pub mod config;
pub mod error;
pub mod query;
pub mod records;
pub mod rpc;
pub mod types;
pub mod units;

#[cfg(feature = "client")]
pub mod client;

pub use address::{is_valid_address, is_valid_signature};
pub use config::{Commitment, Config, ConfigError, Region};
pub use error::{Error, Result, RpcError};
pub use query::Quickstart;
pub use records::*;
pub use rpc::SolanaRpc;
pub use units::{LAMPORTS_PER_SOL, lamports_to_sol};

#[cfg(feature = "client")]
pub use client::SolanaRpcClient;
