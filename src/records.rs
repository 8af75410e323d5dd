//! Flat result records returned by the query layer.
//!
//! Records that describe something which may not exist carry their optional
//! fields in a single `Option`, so the existence flag and the fields can never
//! disagree. On the wire the flag is serialized explicitly and the optional
//! fields are flattened into the record, or omitted entirely.

use serde::{Serialize, Serializer};

/// Balance of an address.
///
/// A missing account and an empty one both report `0` lamports.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BalanceResult {
    pub address: String,
    pub lamports: u64,
    /// `lamports` converted to SOL.
    pub sol: f64,
}

/// Most recent blockhash and the height after which it expires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockhashResult {
    pub blockhash: String,
    /// Exclusive upper bound on the block height at which `blockhash` is valid.
    pub last_valid_block_height: u64,
}

/// Fields reported for an account that exists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    pub owner: String,
    pub lamports: u64,
    pub executable: bool,
    pub data_length: u64,
}

/// Outcome of an account lookup. `account` is `None` when no account exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountInfoResult {
    pub address: String,
    pub account: Option<AccountDetails>,
}

impl AccountInfoResult {
    /// Result for an existing account.
    pub fn found(address: impl Into<String>, account: AccountDetails) -> Self {
        Self {
            address: address.into(),
            account: Some(account),
        }
    }

    /// Result for an address with no account.
    pub fn missing(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            account: None,
        }
    }

    /// Whether the account exists.
    pub fn exists(&self) -> bool {
        self.account.is_some()
    }
}

impl Serialize for AccountInfoResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr<'a> {
            address: &'a str,
            exists: bool,
            #[serde(flatten)]
            account: Option<&'a AccountDetails>,
        }

        Repr {
            address: &self.address,
            exists: self.exists(),
            account: self.account.as_ref(),
        }
        .serialize(serializer)
    }
}

/// Status of a transaction that was found on chain.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransactionDetails {
    /// `true` when the provider reported no execution error.
    pub success: bool,
    /// Fee in SOL.
    pub fee: f64,
    pub slot: u64,
}

/// Outcome of a transaction lookup. `transaction` is `None` when unknown.
#[derive(Clone, Debug, PartialEq)]
pub struct TransactionResult {
    pub signature: String,
    pub transaction: Option<TransactionDetails>,
}

impl TransactionResult {
    /// Result for a transaction the provider knows.
    pub fn found(signature: impl Into<String>, transaction: TransactionDetails) -> Self {
        Self {
            signature: signature.into(),
            transaction: Some(transaction),
        }
    }

    /// Result for a signature the provider does not know.
    pub fn missing(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            transaction: None,
        }
    }

    /// Whether the provider knows the transaction.
    pub fn is_found(&self) -> bool {
        self.transaction.is_some()
    }
}

impl Serialize for TransactionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr<'a> {
            signature: &'a str,
            found: bool,
            #[serde(flatten)]
            transaction: Option<&'a TransactionDetails>,
        }

        Repr {
            signature: &self.signature,
            found: self.is_found(),
            transaction: self.transaction.as_ref(),
        }
        .serialize(serializer)
    }
}

/// Current slot and its production time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlotResult {
    pub slot: u64,
    /// Unix seconds. Wall-clock time when the provider had no block time.
    pub timestamp: i64,
}
