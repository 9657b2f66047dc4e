//! Live connection to the external store.
//!
//! A `Store` is opened once at startup and passed explicitly to every demo.
//! Commands go through a cloneable multiplexed connection; pub/sub gets its
//! own dedicated connection from the same client.

use redis::aio::{MultiplexedConnection, PubSub};
use redis::{AsyncCommands, Client, ConnectionAddr, ConnectionInfo, RedisConnectionInfo};

use crate::config::ConnectionConfig;
use crate::error::{ConfigError, StoreError};

#[derive(Clone)]
pub struct Store {
    client: Client,
    connection: MultiplexedConnection,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("addr", &self.client.get_connection_info().addr)
            .finish_non_exhaustive()
    }
}

impl Store {
    /// Connect and issue a liveness check. No retries.
    pub async fn connect(config: &ConnectionConfig) -> Result<Self, StoreError> {
        let info = connection_info(config)?;
        let client = Client::open(info)?;
        let mut connection = client.get_multiplexed_async_connection().await?;
        let pong: String = redis::cmd("PING").query_async(&mut connection).await?;
        tracing::info!(addr = %config.addr, db = config.db_index, %pong, "store connection ready");
        Ok(Self { client, connection })
    }

    /// Cheap handle for issuing commands.
    pub fn connection(&self) -> MultiplexedConnection {
        self.connection.clone()
    }

    /// Open a dedicated connection for subscriptions.
    pub async fn pubsub(&self) -> redis::RedisResult<PubSub> {
        self.client.get_async_pubsub().await
    }

    /// Delete `keys`, returning how many existed.
    pub async fn delete(&self, keys: &[&str]) -> redis::RedisResult<usize> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut con = self.connection();
        con.del(keys).await
    }

    /// Server version reported by `INFO server`, if the field is present.
    pub async fn server_version(&self) -> redis::RedisResult<Option<String>> {
        let mut con = self.connection();
        let info: String = redis::cmd("INFO").arg("server").query_async(&mut con).await?;
        Ok(parse_server_version(&info).map(str::to_string))
    }

    /// Count how many of `keys` currently exist.
    pub async fn count_existing(&self, keys: &[&str]) -> redis::RedisResult<usize> {
        if keys.is_empty() {
            return Ok(0);
        }
        let mut con = self.connection();
        con.exists(keys).await
    }
}

fn parse_server_version(info: &str) -> Option<&str> {
    info.lines()
        .find_map(|line| line.trim().strip_prefix("redis_version:"))
        .map(str::trim)
        .filter(|version| !version.is_empty())
}

/// Translate configuration into client connection parameters.
pub fn connection_info(config: &ConnectionConfig) -> Result<ConnectionInfo, ConfigError> {
    let (host, port) = config.host_and_port()?;
    Ok(ConnectionInfo {
        addr: ConnectionAddr::Tcp(host, port),
        redis: RedisConnectionInfo {
            db: i64::from(config.db_index),
            password: config.password().map(str::to_string),
            ..Default::default()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(addr: &str, secret: &str, db_index: u32) -> ConnectionConfig {
        ConnectionConfig {
            addr: addr.to_string(),
            auth_secret: secret.to_string(),
            db_index,
        }
    }

    #[test]
    fn connection_info_carries_all_parameters() {
        let info = connection_info(&config("cache.internal:6380", "s3cret", 2)).expect("info");
        match &info.addr {
            ConnectionAddr::Tcp(host, port) => {
                assert_eq!(host, "cache.internal");
                assert_eq!(*port, 6380);
            }
            other => panic!("unexpected addr: {other:?}"),
        }
        assert_eq!(info.redis.db, 2);
        assert_eq!(info.redis.password.as_deref(), Some("s3cret"));
        assert_eq!(info.redis.username, None);
    }

    #[test]
    fn empty_secret_sends_no_password() {
        let info = connection_info(&config("localhost:6379", "", 0)).expect("info");
        assert_eq!(info.redis.password, None);
    }

    #[test]
    fn server_version_is_read_from_info_section() {
        let info = "# Server\r\nredis_version:7.2.4\r\nredis_mode:standalone\r\n";
        assert_eq!(parse_server_version(info), Some("7.2.4"));
        assert_eq!(parse_server_version("# Server\r\nredis_mode:standalone\r\n"), None);
        assert_eq!(parse_server_version("redis_version:\r\n"), None);
    }

    #[test]
    fn invalid_port_is_a_config_error() {
        assert!(connection_info(&config("localhost:http", "", 0)).is_err());
    }

    #[tokio::test]
    async fn connect_fails_for_unreachable_address() {
        // Port 1 is reserved and closed on any sane test host.
        let err = Store::connect(&config("127.0.0.1:1", "", 0))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Redis(_)), "got: {err}");
    }

    #[tokio::test]
    async fn connect_reports_bad_address_before_dialing() {
        let err = Store::connect(&config("localhost:notaport", "", 0))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Config(_)), "got: {err}");
    }
}
