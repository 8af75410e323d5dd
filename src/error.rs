//! Error types shared by the query layer and the HTTP client.

use std::fmt;

use serde::Deserialize;

/// JSON-RPC error object returned by the provider.
///
/// ```json
/// { "code": -32004, "message": "Block not available for slot 353000001" }
/// ```
#[derive(Debug, Deserialize, thiserror::Error)]
#[error("RPC error {code}: {message}")]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Server error codes meaning "no block exists for that slot".
const BLOCK_NOT_AVAILABLE: i64 = -32004;
const SLOT_SKIPPED: i64 = -32007;
const LONG_TERM_STORAGE_SLOT_SKIPPED: i64 = -32009;

impl RpcError {
    /// Returns `true` if the provider has no block (and so no block time) for
    /// the requested slot.
    pub fn is_block_unavailable(&self) -> bool {
        matches!(
            self.code,
            BLOCK_NOT_AVAILABLE | SLOT_SKIPPED | LONG_TERM_STORAGE_SLOT_SKIPPED
        )
    }
}

/// What an [`Error::InvalidInput`] was expected to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Address,
    Signature,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Address => "address",
            Self::Signature => "transaction signature",
        })
    }
}

/// Query error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The caller passed something that cannot be sent to the provider.
    #[error("invalid {kind}: {value:?}")]
    InvalidInput { kind: InputKind, value: String },
    #[cfg(feature = "client")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid(kind: InputKind, value: &str) -> Self {
        Self::InvalidInput {
            kind,
            value: value.to_string(),
        }
    }

    /// Returns `true` if the error was raised before any request was issued.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Result type alias for query and client operations.
pub type Result<T> = std::result::Result<T, Error>;
