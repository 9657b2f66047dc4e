//! CLI entry point for the Redis playground.

use redis_playground::config::{load_config, load_env_file};
use redis_playground::demos::Playground;
use redis_playground::logging::init_logging;
use redis_playground::repl::run_dispatch_loop;
use redis_playground::store::Store;
use redis_playground::ui::render::{RenderSink, Renderer};
use std::sync::Arc;
use tokio::io::BufReader;

const WELCOME: &str = "Welcome to Redis Playground!";

fn banner_metadata(server_version: Option<&str>) -> String {
    let client = env!("CARGO_PKG_VERSION");
    match server_version {
        Some(server) => format!("v{client}, Redis server {server}"),
        None => format!("v{client}, Redis server version unknown"),
    }
}

#[tokio::main]
async fn main() {
    // `.env` may set RUST_LOG, so it is applied before the subscriber exists.
    let env_file = load_env_file();
    init_logging();
    env_file.log();
    let config = load_config();
    let renderer: Arc<dyn RenderSink> = Arc::new(Renderer::detect());

    let store = match Store::connect(&config.connection).await {
        Ok(store) => store,
        Err(e) => {
            renderer.error(&format!(
                "failed to connect to Redis at {}: {e}",
                config.connection.addr
            ));
            std::process::exit(1);
        }
    };
    renderer.notice(&format!("Connected to Redis at {}", config.connection.addr));
    let server_version = store.server_version().await.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "server version unavailable");
        None
    });
    renderer.welcome(WELCOME, &banner_metadata(server_version.as_deref()));

    let mut playground = Playground::new(store, Arc::clone(&renderer), config.pubsub_timeout);
    let input = BufReader::new(tokio::io::stdin());
    match run_dispatch_loop(input, renderer.as_ref(), &mut playground).await {
        Ok(exit) => tracing::debug!(?exit, "dispatch loop finished"),
        Err(e) => {
            renderer.error(&format!("failed to read input: {e}"));
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_metadata_names_both_versions() {
        let text = banner_metadata(Some("7.2.4"));
        assert!(text.starts_with('v'));
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
        assert!(text.contains("Redis server 7.2.4"));
        assert!(banner_metadata(None).ends_with("version unknown"));
    }
}
