//! Environment variable lookups with tolerant fallbacks.
//!
//! Numeric variables that fail to parse resolve to their default instead of
//! surfacing an error; the substitution is only visible at debug log level.

use super::defaults::{DEFAULT_ADDR, DEFAULT_DB_INDEX, DEFAULT_PUBSUB_TIMEOUT_SECS};

pub(super) const ADDR_VAR: &str = "ADDR";
pub(super) const AUTH_SECRET_VAR: &str = "AUTH_SECRET";
pub(super) const DB_INDEX_VAR: &str = "DB_INDEX";
pub(super) const PUBSUB_TIMEOUT_VAR: &str = "PUBSUB_TIMEOUT_SECS";

/// Resolve a string variable, falling back to `default` when unset or empty.
pub(super) fn env_or<FEnv>(env_lookup: &FEnv, name: &str, default: &str) -> String
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

pub(super) fn addr_from_env<FEnv>(env_lookup: &FEnv) -> String
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_or(env_lookup, ADDR_VAR, DEFAULT_ADDR)
}

pub(super) fn auth_secret_from_env<FEnv>(env_lookup: &FEnv) -> String
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_or(env_lookup, AUTH_SECRET_VAR, "")
}

/// Database index; negative or non-numeric values resolve to the default.
pub(super) fn db_index_from_env<FEnv>(env_lookup: &FEnv) -> u32
where
    FEnv: Fn(&str) -> Option<String>,
{
    parse_or_default(env_lookup, DB_INDEX_VAR, DEFAULT_DB_INDEX)
}

/// Listener deadline in seconds, clamped to at least one second.
pub(super) fn pubsub_timeout_secs_from_env<FEnv>(env_lookup: &FEnv) -> u64
where
    FEnv: Fn(&str) -> Option<String>,
{
    parse_or_default(env_lookup, PUBSUB_TIMEOUT_VAR, DEFAULT_PUBSUB_TIMEOUT_SECS).max(1)
}

fn parse_or_default<FEnv, T>(env_lookup: &FEnv, name: &str, default: T) -> T
where
    FEnv: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy,
{
    let Some(raw) = env_lookup(name).filter(|value| !value.is_empty()) else {
        return default;
    };
    match raw.parse::<T>() {
        Ok(value) => value,
        Err(_) => {
            tracing::debug!(variable = name, value = %raw, "unparsable value, using default");
            default
        }
    }
}
