//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never interleave with demo output on stdout.
//! `RUST_LOG` selects the filter; the default keeps the console quiet.

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_does_not_panic() {
        init_logging();
        init_logging();
    }
}
