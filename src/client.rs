//! Async JSON-RPC client for a hosted Solana endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::{Commitment, Config};
use crate::error::{Error, Result, RpcError};
use crate::rpc::SolanaRpc;
use crate::types::{LatestBlockhash, Response, TransactionView, UiAccount};

/// JSON-RPC request wrapper
#[derive(Debug, Serialize)]
struct RpcRequest<T> {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    params: T,
}

/// JSON-RPC response wrapper
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RpcResponse<T> {
    #[allow(dead_code)]
    jsonrpc: String,
    /// `null` on errors the server could not tie to a request.
    #[allow(dead_code)]
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    error: Option<RpcError>,
    /// `Some` iff the `result` key is present, even when its value is `null`.
    #[serde(default, deserialize_with = "present")]
    result: Option<T>,
}

fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl<T> RpcResponse<T> {
    fn into_result(self) -> Result<T> {
        match (self.error, self.result) {
            (Some(error), _) => Err(Error::Rpc(error)),
            (None, Some(result)) => Ok(result),
            (None, None) => Err(Error::Json(<serde_json::Error as serde::de::Error>::missing_field(
                "result",
            ))),
        }
    }
}

#[derive(Debug, Serialize)]
struct CommitmentConfig {
    commitment: Commitment,
}

#[derive(Debug, Serialize)]
struct AccountInfoConfig {
    encoding: &'static str,
    commitment: Commitment,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TransactionConfig {
    encoding: &'static str,
    commitment: Commitment,
    max_supported_transaction_version: u8,
}

/// Async client for a Solana JSON-RPC endpoint.
///
/// # Example
///
/// ```no_run
/// use solana_rpc_quickstart::{Config, SolanaRpcClient};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config::from_env()?;
/// let client = SolanaRpcClient::from_config(&config);
/// # Ok(())
/// # }
/// ```
pub struct SolanaRpcClient {
    client: Client,
    url: String,
    commitment: Commitment,
    request_id: AtomicU64,
}

impl SolanaRpcClient {
    /// Create a new client with a custom URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            commitment: Commitment::default(),
            request_id: AtomicU64::new(1),
        }
    }

    /// Create a client for the endpoint and commitment described by `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.endpoint()).with_commitment(config.commitment)
    }

    /// Use `commitment` for every request that accepts one.
    pub fn with_commitment(mut self, commitment: Commitment) -> Self {
        self.commitment = commitment;
        self
    }

    /// Commitment sent with requests that accept one.
    pub fn commitment(&self) -> Commitment {
        self.commitment
    }

    fn next_id(&self) -> u64 {
        self.request_id.fetch_add(1, Ordering::Relaxed)
    }

    async fn call<P: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        method: &'static str,
        params: P,
    ) -> Result<R> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: self.next_id(),
            method,
            params,
        };
        tracing::debug!(method, id = request.id, "sending JSON-RPC request");

        let response: RpcResponse<R> = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response.into_result()
    }
}

#[async_trait]
impl SolanaRpc for SolanaRpcClient {
    async fn fetch_balance(&self, address: &str) -> Result<u64> {
        let response: Response<u64> = self
            .call(
                "getBalance",
                (
                    address,
                    CommitmentConfig {
                        commitment: self.commitment,
                    },
                ),
            )
            .await?;
        tracing::debug!(context_slot = response.context.slot, "reply evaluated");
        Ok(response.value)
    }

    async fn fetch_latest_blockhash(&self) -> Result<LatestBlockhash> {
        let response: Response<LatestBlockhash> = self
            .call(
                "getLatestBlockhash",
                [CommitmentConfig {
                    commitment: self.commitment,
                }],
            )
            .await?;
        tracing::debug!(context_slot = response.context.slot, "reply evaluated");
        Ok(response.value)
    }

    async fn fetch_account(&self, address: &str) -> Result<Option<UiAccount>> {
        let response: Response<Option<UiAccount>> = self
            .call(
                "getAccountInfo",
                (
                    address,
                    AccountInfoConfig {
                        encoding: "base64",
                        commitment: self.commitment,
                    },
                ),
            )
            .await?;
        tracing::debug!(context_slot = response.context.slot, "reply evaluated");
        Ok(response.value)
    }

    async fn fetch_transaction(&self, signature: &str) -> Result<Option<TransactionView>> {
        // `getTransaction` rejects `processed`.
        let commitment = match self.commitment {
            Commitment::Processed => Commitment::Confirmed,
            other => other,
        };
        self.call(
            "getTransaction",
            (
                signature,
                TransactionConfig {
                    encoding: "json",
                    commitment,
                    max_supported_transaction_version: 0,
                },
            ),
        )
        .await
    }

    async fn fetch_slot(&self) -> Result<u64> {
        self.call(
            "getSlot",
            [CommitmentConfig {
                commitment: self.commitment,
            }],
        )
        .await
    }

    async fn fetch_block_time(&self, slot: u64) -> Result<Option<i64>> {
        match self.call("getBlockTime", [slot]).await {
            Err(Error::Rpc(error)) if error.is_block_unavailable() => {
                tracing::debug!(slot, %error, "no block time for slot");
                Ok(None)
            }
            other => other,
        }
    }
}
