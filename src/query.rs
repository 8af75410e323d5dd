//! Read-only queries that reshape provider replies into flat records.

use crate::address::{is_valid_address, is_valid_signature};
use crate::error::{Error, InputKind, Result};
use crate::records::{
    AccountDetails, AccountInfoResult, BalanceResult, BlockhashResult, SlotResult,
    TransactionDetails, TransactionResult,
};
use crate::rpc::SolanaRpc;
use crate::units::lamports_to_sol;

/// Query layer over any [`SolanaRpc`] provider.
///
/// Each method validates its input before touching the provider, performs
/// its lookup and returns a freshly built record. Nothing is cached and no
/// call is retried; provider errors are returned unchanged.
///
/// # Example
///
/// ```no_run
/// use solana_rpc_quickstart::{Config, Quickstart, SolanaRpcClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let quickstart = Quickstart::new(SolanaRpcClient::from_config(&config));
///     let balance = quickstart
///         .get_balance("DLRPZSrex3dk58mbJxfKEaxPMazchNogvZDSh26BhgRi")
///         .await?;
///     println!("{} SOL", balance.sol);
///     Ok(())
/// }
/// ```
pub struct Quickstart<R> {
    rpc: R,
}

impl<R: SolanaRpc> Quickstart<R> {
    /// Wrap a provider.
    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    /// The underlying provider.
    pub fn rpc(&self) -> &R {
        &self.rpc
    }

    /// Balance of `address` in lamports and SOL.
    pub async fn get_balance(&self, address: &str) -> Result<BalanceResult> {
        ensure_address(address)?;
        let lamports = self.rpc.fetch_balance(address).await?;
        Ok(BalanceResult {
            address: address.to_string(),
            lamports,
            sol: lamports_to_sol(lamports),
        })
    }

    /// Latest blockhash and its last valid block height.
    pub async fn get_blockhash(&self) -> Result<BlockhashResult> {
        let latest = self.rpc.fetch_latest_blockhash().await?;
        Ok(BlockhashResult {
            blockhash: latest.blockhash,
            last_valid_block_height: latest.last_valid_block_height,
        })
    }

    /// Owner, balance, executable flag and data size of `address`.
    ///
    /// A missing account is a normal result with `exists == false`.
    pub async fn get_account_info(&self, address: &str) -> Result<AccountInfoResult> {
        ensure_address(address)?;
        let Some(account) = self.rpc.fetch_account(address).await? else {
            tracing::debug!(address, "account not found");
            return Ok(AccountInfoResult::missing(address));
        };

        let data_length = account.data_len().unwrap_or_else(|| {
            tracing::warn!(address, encoding = %account.data.1, "could not size account data");
            0
        });

        Ok(AccountInfoResult::found(
            address,
            AccountDetails {
                owner: account.owner,
                lamports: account.lamports,
                executable: account.executable,
                data_length,
            },
        ))
    }

    /// Execution status, fee and slot of the transaction with `signature`.
    ///
    /// An unknown signature is a normal result with `found == false`.
    pub async fn get_transaction(&self, signature: &str) -> Result<TransactionResult> {
        if !is_valid_signature(signature) {
            return Err(Error::invalid(InputKind::Signature, signature));
        }
        let Some(transaction) = self.rpc.fetch_transaction(signature).await? else {
            tracing::debug!(signature, "transaction not found");
            return Ok(TransactionResult::missing(signature));
        };

        Ok(TransactionResult::found(
            signature,
            TransactionDetails {
                success: transaction.succeeded(),
                fee: lamports_to_sol(transaction.fee()),
                slot: transaction.slot,
            },
        ))
    }

    /// Current slot and its block time.
    ///
    /// Falls back to the local wall clock when the provider has no block time
    /// for the slot.
    pub async fn get_slot(&self) -> Result<SlotResult> {
        let slot = self.rpc.fetch_slot().await?;
        let timestamp = match self.rpc.fetch_block_time(slot).await? {
            Some(timestamp) => timestamp,
            None => {
                tracing::warn!(slot, "no block time from provider, using wall clock");
                chrono::Utc::now().timestamp()
            }
        };
        Ok(SlotResult { slot, timestamp })
    }
}

fn ensure_address(address: &str) -> Result<()> {
    if is_valid_address(address) {
        Ok(())
    } else {
        Err(Error::invalid(InputKind::Address, address))
    }
}
