//! Caching patterns: cache-aside, expiring entries, invalidation.

use std::time::Duration;

use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::error::DemoError;
use crate::store::Store;
use crate::ui::render::RenderSink;

const USER_KEY: &str = "cache:user:42";
const EXPIRING_KEY: &str = "cache:expiring";
const INVALIDATE_KEY: &str = "cache:invalidate";
const EXPENSIVE_KEY: &str = "cache:expensive";

pub const KEYS: &[&str] = &[USER_KEY, EXPIRING_KEY, INVALIDATE_KEY, EXPENSIVE_KEY];

/// Where a cache-aside read got its value.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Lookup {
    Hit(String),
    Miss(String),
}

impl Lookup {
    fn value(&self) -> &str {
        match self {
            Self::Hit(v) | Self::Miss(v) => v,
        }
    }
}

pub async fn run(store: &Store, out: &dyn RenderSink) -> Result<(), DemoError> {
    let mut con = store.connection();
    out.section("Caching Examples");

    out.step("1. Cache-aside pattern:");
    let user = cache_aside(&mut con, USER_KEY, 10, || "Naim".to_string()).await?;
    report_lookup(out, &user, "Fetching from DB...", "Value cached in Redis");
    out.detail(&format!("Value: {}", user.value()));

    out.step("2. Expiring cache:");
    let _: () = con.set_ex(EXPIRING_KEY, "temporary", 3).await?;
    let value: Option<String> = con.get(EXPIRING_KEY).await?;
    out.detail(&format!(
        "Value before expire: {}",
        value.as_deref().unwrap_or("(missing)")
    ));
    tokio::time::sleep(Duration::from_secs(4)).await;
    let value: Option<String> = con.get(EXPIRING_KEY).await?;
    if value.is_none() {
        out.detail("Value after expire: (cache expired)");
    }

    out.step("3. Manual cache invalidation:");
    let _: () = con.set(INVALIDATE_KEY, "stale").await?;
    let _: usize = con.del(INVALIDATE_KEY).await?;
    let value: Option<String> = con.get(INVALIDATE_KEY).await?;
    if value.is_none() {
        out.detail("Value after invalidation: (no cache)");
    }

    out.step("4. Practical example - Caching computed result:");
    let computed = cache_aside(&mut con, EXPENSIVE_KEY, 5, || "Expensive Result".to_string())
        .await?;
    report_lookup(
        out,
        &computed,
        "Running expensive operation...",
        "Computed result cached",
    );
    out.detail(&format!("Expensive operation result: {}", computed.value()));

    out.step("5. Cleanup:");
    store.delete(KEYS).await?;
    out.success("Cleaned up caching examples");
    Ok(())
}

/// Read `key`; on a miss compute the value and cache it for `ttl_secs`.
async fn cache_aside<F>(
    con: &mut MultiplexedConnection,
    key: &str,
    ttl_secs: u64,
    compute: F,
) -> Result<Lookup, DemoError>
where
    F: FnOnce() -> String,
{
    let cached: Option<String> = con.get(key).await?;
    if let Some(value) = cached {
        return Ok(Lookup::Hit(value));
    }
    let value = compute();
    let _: () = con.set_ex(key, &value, ttl_secs).await?;
    Ok(Lookup::Miss(value))
}

fn report_lookup(out: &dyn RenderSink, lookup: &Lookup, on_miss: &str, cached: &str) {
    match lookup {
        Lookup::Hit(_) => out.detail("Cache hit!"),
        Lookup::Miss(_) => {
            out.detail(&format!("Cache miss! {on_miss}"));
            out.detail(cached);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::RecordingSink;

    #[test]
    fn miss_reports_fetch_and_store() {
        let sink = RecordingSink::new();
        report_lookup(
            &sink,
            &Lookup::Miss("Naim".into()),
            "Fetching from DB...",
            "Value cached in Redis",
        );
        assert_eq!(
            sink.events(),
            vec![
                "detail:Cache miss! Fetching from DB...".to_string(),
                "detail:Value cached in Redis".to_string(),
            ]
        );
    }

    #[test]
    fn hit_reports_once() {
        let sink = RecordingSink::new();
        report_lookup(&sink, &Lookup::Hit("Naim".into()), "x", "y");
        assert_eq!(sink.events(), vec!["detail:Cache hit!".to_string()]);
        assert_eq!(Lookup::Hit("Naim".into()).value(), "Naim");
    }
}
