//! Capability interface over a Solana JSON-RPC provider.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{LatestBlockhash, TransactionView, UiAccount};

/// The provider calls the query layer depends on.
///
/// [`SolanaRpcClient`](crate::client::SolanaRpcClient) implements it over
/// HTTP; tests substitute in-memory fakes. Every method is a single round trip
/// and none of them retries.
#[async_trait]
pub trait SolanaRpc: Send + Sync {
    /// `getBalance`: lamports held by `address`, `0` for missing accounts.
    async fn fetch_balance(&self, address: &str) -> Result<u64>;

    /// `getLatestBlockhash`.
    async fn fetch_latest_blockhash(&self) -> Result<LatestBlockhash>;

    /// `getAccountInfo`: `None` when the account does not exist.
    async fn fetch_account(&self, address: &str) -> Result<Option<UiAccount>>;

    /// `getTransaction`: `None` when the provider does not know the signature.
    async fn fetch_transaction(&self, signature: &str) -> Result<Option<TransactionView>>;

    /// `getSlot`.
    async fn fetch_slot(&self) -> Result<u64>;

    /// `getBlockTime`: `None` when the provider has no timestamp for `slot`.
    async fn fetch_block_time(&self, slot: u64) -> Result<Option<i64>>;
}
