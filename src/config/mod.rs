//! Connection configuration from the environment.
//!
//! Resolution order (highest wins):
//! 1. Process environment (`ADDR`, `AUTH_SECRET`, `DB_INDEX`, `PUBSUB_TIMEOUT_SECS`)
//! 2. `./.env`, applied only for variables the process does not already set
//! 3. Built-in defaults

use std::time::Duration;

use crate::error::ConfigError;

mod defaults;
mod env;
mod env_file;

use defaults::DEFAULT_PORT;
use env::{addr_from_env, auth_secret_from_env, db_index_from_env, pubsub_timeout_secs_from_env};
pub use env_file::{load_env_file, load_env_file_from, EnvFileStatus};

/// Parameters for the single store connection opened at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// `host:port`; a bare host implies the default port.
    pub addr: String,
    /// Empty means no AUTH.
    pub auth_secret: String,
    pub db_index: u32,
}

impl ConnectionConfig {
    /// Split `addr` into host and port.
    ///
    /// Bracketed IPv6 literals (`[::1]:6379`) are accepted. A non-numeric
    /// port is an error.
    pub fn host_and_port(&self) -> Result<(String, u16), ConfigError> {
        split_addr(&self.addr)
    }

    /// Password to send, if any.
    pub fn password(&self) -> Option<&str> {
        (!self.auth_secret.is_empty()).then_some(self.auth_secret.as_str())
    }
}

/// Full runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundConfig {
    pub connection: ConnectionConfig,
    /// Deadline for each pub/sub listener round.
    pub pubsub_timeout: Duration,
}

/// Resolve configuration from the process environment.
///
/// Call [`load_env_file`] first so `.env` values are visible here.
pub fn load_config() -> PlaygroundConfig {
    load_config_from_env(|name| std::env::var(name).ok())
}

/// Resolve configuration from an injectable environment lookup.
pub fn load_config_from_env<FEnv>(env_lookup: FEnv) -> PlaygroundConfig
where
    FEnv: Fn(&str) -> Option<String>,
{
    PlaygroundConfig {
        connection: ConnectionConfig {
            addr: addr_from_env(&env_lookup),
            auth_secret: auth_secret_from_env(&env_lookup),
            db_index: db_index_from_env(&env_lookup),
        },
        pubsub_timeout: Duration::from_secs(pubsub_timeout_secs_from_env(&env_lookup)),
    }
}

fn split_addr(addr: &str) -> Result<(String, u16), ConfigError> {
    let addr = addr.trim();
    if addr.is_empty() {
        return Err(ConfigError::Invalid("address is empty".to_string()));
    }

    let (host, port) = if let Some(rest) = addr.strip_prefix('[') {
        let Some((host, tail)) = rest.split_once(']') else {
            return Err(ConfigError::Invalid(format!(
                "address `{addr}` has an unterminated IPv6 bracket"
            )));
        };
        match tail.strip_prefix(':') {
            Some(port) => (host, Some(port)),
            None if tail.is_empty() => (host, None),
            None => {
                return Err(ConfigError::Invalid(format!(
                    "address `{addr}` has trailing characters after the host"
                )))
            }
        }
    } else {
        match addr.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (addr, None),
        }
    };

    if host.is_empty() {
        return Err(ConfigError::Invalid(format!("address `{addr}` has no host")));
    }
    let port = match port {
        Some(raw) => raw.parse::<u16>().map_err(|_| {
            ConfigError::Invalid(format!("address `{addr}` has invalid port `{raw}`"))
        })?,
        None => DEFAULT_PORT,
    };
    Ok((host.to_string(), port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> PlaygroundConfig {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        load_config_from_env(|name| map.get(name).map(|v| v.to_string()))
    }

    fn connection(addr: &str) -> ConnectionConfig {
        ConnectionConfig {
            addr: addr.to_string(),
            auth_secret: String::new(),
            db_index: 0,
        }
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = config_from(&[]);
        assert_eq!(config.connection.addr, "localhost:6379");
        assert_eq!(config.connection.auth_secret, "");
        assert_eq!(config.connection.db_index, 0);
        assert_eq!(config.pubsub_timeout, Duration::from_secs(5));
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = config_from(&[
            ("ADDR", "cache.internal:6380"),
            ("AUTH_SECRET", "s3cret"),
            ("DB_INDEX", "3"),
        ]);
        assert_eq!(config.connection.addr, "cache.internal:6380");
        assert_eq!(config.connection.password(), Some("s3cret"));
        assert_eq!(config.connection.db_index, 3);
    }

    #[test]
    fn garbage_db_index_resolves_to_default() {
        assert_eq!(config_from(&[("DB_INDEX", "abc")]).connection.db_index, 0);
    }

    #[test]
    fn empty_addr_resolves_to_default_endpoint() {
        let config = config_from(&[("ADDR", "")]);
        assert_eq!(config.connection.addr, "localhost:6379");
        assert_eq!(
            config.connection.host_and_port(),
            Ok(("localhost".to_string(), 6379))
        );
    }

    #[test]
    fn empty_secret_means_no_password() {
        assert_eq!(connection("localhost:6379").password(), None);
    }

    #[test]
    fn host_and_port_split() {
        assert_eq!(
            connection("localhost:6379").host_and_port(),
            Ok(("localhost".to_string(), 6379))
        );
        assert_eq!(
            connection("redis.internal").host_and_port(),
            Ok(("redis.internal".to_string(), 6379))
        );
        assert_eq!(
            connection("[::1]:6380").host_and_port(),
            Ok(("::1".to_string(), 6380))
        );
        assert_eq!(
            connection("[::1]").host_and_port(),
            Ok(("::1".to_string(), 6379))
        );
    }

    #[test]
    fn host_and_port_rejects_bad_addresses() {
        for addr in ["", "host:notaport", ":6379", "[::1", "[::1]x", "host:70000"] {
            let err = connection(addr).host_and_port().unwrap_err();
            assert!(
                err.to_string().starts_with("invalid config:"),
                "addr {addr:?} gave {err}"
            );
        }
    }
}
