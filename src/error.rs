//! Unified error types for the playground.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when resolving connection configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

/// Errors raised while opening and health-checking the store connection.
#[derive(Debug)]
pub enum StoreError {
    Config(ConfigError),
    /// Client-level failure: connect, auth, select or ping.
    Redis(redis::RedisError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Redis(e) => write!(f, "redis: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<ConfigError> for StoreError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        Self::Redis(e)
    }
}

// ---------------------------------------------------------------------------
// DemoError
// ---------------------------------------------------------------------------

/// Errors that abort one demonstration.
#[derive(Debug)]
pub enum DemoError {
    Redis(redis::RedisError),
    /// The pub/sub listener hit its deadline before the expected count.
    ListenerTimeout { expected: usize, received: usize },
    /// The subscription stream ended before the expected count.
    ListenerClosed { expected: usize, received: usize },
    /// The listener task went away without reporting a result.
    ListenerGone,
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Redis(e) => write!(f, "redis: {e}"),
            Self::ListenerTimeout { expected, received } => write!(
                f,
                "listener timed out after {received} of {expected} messages"
            ),
            Self::ListenerClosed { expected, received } => write!(
                f,
                "subscription closed after {received} of {expected} messages"
            ),
            Self::ListenerGone => write!(f, "listener task ended without a result"),
        }
    }
}

impl std::error::Error for DemoError {}

impl From<redis::RedisError> for DemoError {
    fn from(e: redis::RedisError) -> Self {
        Self::Redis(e)
    }
}
