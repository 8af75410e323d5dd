//! Runtime configuration and endpoint resolution.
//!
//! Configuration is read from the environment once, at program entry:
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SOLANA_RPC_API_KEY` | Provider credential, sent as the `key` query parameter | Required |
//! | `SOLANA_RPC_REGION` | Regional endpoint (`ny` or `ams`) | `ny` |
//! | `SOLANA_RPC_COMMITMENT` | `processed`, `confirmed` or `finalized` | `confirmed` |
//! | `SOLANA_RPC_HOST` | Provider host shared by the regional endpoints | [`DEFAULT_HOST`] |
//! | `RUST_LOG` | Log level filter for the demo | `info` |

use std::fmt;

use serde::Serialize;

/// Required provider credential.
pub const API_KEY_ENV: &str = "SOLANA_RPC_API_KEY";
/// Optional region code, see [`Region`].
pub const REGION_ENV: &str = "SOLANA_RPC_REGION";
/// Optional commitment level, see [`Commitment`].
pub const COMMITMENT_ENV: &str = "SOLANA_RPC_COMMITMENT";
/// Optional override of [`DEFAULT_HOST`].
pub const HOST_ENV: &str = "SOLANA_RPC_HOST";

/// Provider host shared by every regional endpoint.
pub const DEFAULT_HOST: &str = "rpc.solanavibestation.com";

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SOLANA_RPC_API_KEY is not set")]
    MissingApiKey,
}

/// Regional endpoint selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Region {
    /// New York.
    #[default]
    Ny,
    /// Amsterdam.
    Ams,
}

impl Region {
    /// Subdomain used for this region.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ny => "ny",
            Self::Ams => "ams",
        }
    }

    /// Parse a region code. Anything unrecognized yields `None`.
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ny" => Some(Self::Ny),
            "ams" => Some(Self::Ams),
            _ => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Commitment level attached to queries that accept one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    /// Parse a commitment level. Anything unrecognized yields `None`.
    pub fn parse(level: &str) -> Option<Self> {
        match level.trim().to_ascii_lowercase().as_str() {
            "processed" => Some(Self::Processed),
            "confirmed" => Some(Self::Confirmed),
            "finalized" => Some(Self::Finalized),
            _ => None,
        }
    }
}

/// Resolved provider configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// Sent as the `key` query parameter. Never logged.
    pub api_key: String,
    pub region: Region,
    pub commitment: Commitment,
    pub host: String,
}

impl Config {
    /// Configuration for `region` with the default commitment and host.
    pub fn new(api_key: impl Into<String>, region: Region) -> Self {
        Self {
            api_key: api_key.into(),
            region,
            commitment: Commitment::default(),
            host: DEFAULT_HOST.to_string(),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// An empty API key counts as missing. Unset or unrecognized region and
    /// commitment values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let region = match lookup(REGION_ENV) {
            None => Region::default(),
            Some(code) => Region::parse(&code).unwrap_or_else(|| {
                tracing::warn!(
                    region = %code,
                    fallback = %Region::default(),
                    "unrecognized region, using default"
                );
                Region::default()
            }),
        };

        let commitment = lookup(COMMITMENT_ENV)
            .and_then(|level| Commitment::parse(&level))
            .unwrap_or_default();

        let host = lookup(HOST_ENV)
            .map(|host| host.trim().trim_end_matches('/').to_string())
            .filter(|host| !host.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        Ok(Self {
            api_key,
            region,
            commitment,
            host,
        })
    }

    /// Fully-qualified endpoint URL with the API key as a query parameter.
    ///
    /// The key is form-urlencoded.
    pub fn endpoint(&self) -> String {
        let key: String = url::form_urlencoded::byte_serialize(self.api_key.as_bytes()).collect();
        format!("https://{}.{}/?key={key}", self.region.as_str(), self.host)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("region", &self.region)
            .field("commitment", &self.commitment)
            .field("host", &self.host)
            .finish()
    }
}
