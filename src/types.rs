//! Reply shapes of the Solana JSON-RPC methods this crate calls.
//!
//! Only the fields the query layer reads are modeled; everything else in the
//! provider's reply is ignored on deserialization.

use base64::Engine as _;
use serde::Deserialize;

/// Slot at which the provider evaluated a request.
#[derive(Clone, Debug, Deserialize)]
pub struct RpcContext {
    pub slot: u64,
}

/// `{ context, value }` wrapper used by most account-level methods.
#[derive(Clone, Debug, Deserialize)]
pub struct Response<T> {
    pub context: RpcContext,
    pub value: T,
}

/// Value of `getLatestBlockhash`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestBlockhash {
    pub blockhash: String,
    pub last_valid_block_height: u64,
}

/// Account as returned by `getAccountInfo` with `base64` encoding.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiAccount {
    pub lamports: u64,
    pub owner: String,
    pub executable: bool,
    /// `[payload, encoding]`.
    pub data: (String, String),
    /// Data size in bytes; omitted by older nodes.
    #[serde(default)]
    pub space: Option<u64>,
}

impl UiAccount {
    /// Size of the account data in bytes.
    ///
    /// Prefers the reported `space`; otherwise decodes the base64 payload.
    /// Returns `None` if neither is usable.
    pub fn data_len(&self) -> Option<u64> {
        if let Some(space) = self.space {
            return Some(space);
        }
        let (payload, encoding) = &self.data;
        if encoding != "base64" {
            return None;
        }
        base64::engine::general_purpose::STANDARD
            .decode(payload)
            .ok()
            .map(|bytes| bytes.len() as u64)
    }
}

/// Reply of `getTransaction` (`json` encoding). Only status fields are kept.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionView {
    pub slot: u64,
    #[serde(default)]
    pub meta: Option<TransactionMeta>,
}

/// Execution status and fee of a confirmed transaction.
#[derive(Clone, Debug, Deserialize)]
pub struct TransactionMeta {
    /// Instruction error, `null` on success. Kept opaque.
    #[serde(default)]
    pub err: Option<serde_json::Value>,
    pub fee: u64,
}

impl TransactionView {
    /// `true` when the provider reported no execution error.
    pub fn succeeded(&self) -> bool {
        self.meta.as_ref().is_none_or(|meta| meta.err.is_none())
    }

    /// Fee paid in lamports, `0` if the provider omitted `meta`.
    pub fn fee(&self) -> u64 {
        self.meta.as_ref().map_or(0, |meta| meta.fee)
    }
}
