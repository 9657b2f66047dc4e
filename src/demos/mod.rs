//! Store command demonstrations and the dispatcher that runs them.
//!
//! Every demo is a linear script that stops at the first failed command.
//! Failures stay inside the dispatcher: it prints the error, deletes the
//! keys the demo owns, and hands control back to the menu.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::DemoError;
use crate::menu::Demo;
use crate::repl::Dispatch;
use crate::store::Store;
use crate::ui::render::RenderSink;

pub mod caching;
pub mod expiration;
pub mod hashes;
pub mod lists;
pub mod pubsub;
pub mod sets;
pub mod sorted_sets;
pub mod strings;

/// Keys a demo creates and removes during its cleanup step.
pub fn owned_keys(demo: Demo) -> &'static [&'static str] {
    match demo {
        Demo::Strings => strings::KEYS,
        Demo::Lists => lists::KEYS,
        Demo::Sets => sets::KEYS,
        Demo::SortedSets => sorted_sets::KEYS,
        Demo::Hashes => hashes::KEYS,
        Demo::PubSub => &[],
        Demo::Expiration => expiration::KEYS,
        Demo::Caching => caching::KEYS,
    }
}

/// Production dispatcher: runs demos against the live store.
pub struct Playground {
    store: Store,
    renderer: Arc<dyn RenderSink>,
    pubsub_timeout: Duration,
}

impl Playground {
    pub fn new(store: Store, renderer: Arc<dyn RenderSink>, pubsub_timeout: Duration) -> Self {
        Self {
            store,
            renderer,
            pubsub_timeout,
        }
    }

    /// Run one demo, returning its first error.
    pub async fn run(&self, demo: Demo) -> Result<(), DemoError> {
        let out = self.renderer.as_ref();
        match demo {
            Demo::Strings => strings::run(&self.store, out).await,
            Demo::Lists => lists::run(&self.store, out).await,
            Demo::Sets => sets::run(&self.store, out).await,
            Demo::SortedSets => sorted_sets::run(&self.store, out).await,
            Demo::Hashes => hashes::run(&self.store, out).await,
            Demo::PubSub => {
                pubsub::run(&self.store, Arc::clone(&self.renderer), self.pubsub_timeout).await
            }
            Demo::Expiration => expiration::run(&self.store, out).await,
            Demo::Caching => caching::run(&self.store, out).await,
        }
    }

    async fn cleanup_after_failure(&self, demo: Demo) {
        let keys = owned_keys(demo);
        if let Err(err) = self.store.delete(keys).await {
            tracing::warn!(%demo, error = %err, "best-effort cleanup failed");
        }
    }
}

#[async_trait]
impl Dispatch for Playground {
    async fn dispatch(&mut self, demo: Demo) {
        if let Err(err) = self.run(demo).await {
            tracing::warn!(%demo, error = %err, "demo aborted");
            self.renderer.error(&format!("{demo} failed: {err}"));
            self.cleanup_after_failure(demo).await;
        }
    }
}

/// Render a list of members as `[a, b, c]`.
pub(crate) fn bracketed<T: AsRef<str>>(items: &[T]) -> String {
    let joined = items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

/// Render optional values from multi-get style replies.
pub(crate) fn or_nil(value: Option<&str>) -> &str {
    value.unwrap_or("<nil>")
}

/// Describe a TTL reply: seconds, `-1` for no expiry, `-2` for a missing key.
pub(crate) fn describe_ttl(ttl: i64) -> String {
    match ttl {
        -2 => "missing".to_string(),
        -1 => "no expiry".to_string(),
        secs => format!("{secs}s"),
    }
}
