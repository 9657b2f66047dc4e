//! Default configuration constants.

/// Store address used when `ADDR` is unset.
pub(super) const DEFAULT_ADDR: &str = "localhost:6379";
/// Port assumed when the address carries none.
pub(super) const DEFAULT_PORT: u16 = 6379;
/// Logical database selected when `DB_INDEX` is unset or unparsable.
pub(super) const DEFAULT_DB_INDEX: u32 = 0;
/// Deadline for one pub/sub listener round.
pub(super) const DEFAULT_PUBSUB_TIMEOUT_SECS: u64 = 5;
/// Optional env file read from the working directory at startup.
pub(super) const ENV_FILE_NAME: &str = ".env";
