//! Process configuration, read once from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use storefront_catalog::Pagination;

pub const BIND_ADDR_VAR: &str = "CATALOG_BIND_ADDR";
pub const SEED_PATH_VAR: &str = "CATALOG_SEED_PATH";
pub const DEFAULT_LIMIT_VAR: &str = "CATALOG_DEFAULT_LIMIT";
pub const DEFAULT_OFFSET_VAR: &str = "CATALOG_DEFAULT_OFFSET";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_LIMIT: i64 = 5;
const DEFAULT_OFFSET: i64 = 0;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key} ({value:?}): {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// JSON catalog seed; the bundled demo catalog is used when unset.
    pub seed_path: Option<PathBuf>,
    /// Window applied when a request carries no `limit`/`offset`.
    pub default_window: Pagination,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| invalid(BIND_ADDR_VAR, &bind_raw, e))?;

        let seed_path = lookup(SEED_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let limit = non_negative_or(&lookup, DEFAULT_LIMIT_VAR, DEFAULT_LIMIT)?;
        let offset = non_negative_or(&lookup, DEFAULT_OFFSET_VAR, DEFAULT_OFFSET)?;
        let default_window = Pagination::new(limit, offset).map_err(|e| {
            invalid(
                DEFAULT_LIMIT_VAR,
                &format!("limit={limit}, offset={offset}"),
                e,
            )
        })?;

        Ok(Self {
            bind_addr,
            seed_path,
            default_window,
        })
    }
}

fn non_negative_or(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: i64,
) -> Result<i64, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|e| invalid(key, &raw, e))?;
    if value < 0 {
        return Err(invalid(key, &raw, "must be non-negative"));
    }
    Ok(value)
}

fn invalid(key: &'static str, value: &str, reason: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
