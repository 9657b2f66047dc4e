//! Key expiry: SET EX, TTL, EXPIRE, PERSIST and an expiring session.
//!
//! This demo waits for keys to lapse and takes roughly fifteen seconds.

use std::time::Duration;

use redis::AsyncCommands;

use super::describe_ttl;
use crate::error::DemoError;
use crate::store::Store;
use crate::ui::render::RenderSink;

const KEY: &str = "temp:data";
const SESSION: &str = "session:xyz";
const VALUE: &str = "This is a temporary value";

pub const KEYS: &[&str] = &[KEY, SESSION];

const KEY_TTL_SECS: u64 = 10;
const SESSION_TTL_SECS: u64 = 3;

pub async fn run(store: &Store, out: &dyn RenderSink) -> Result<(), DemoError> {
    let mut con = store.connection();
    out.section("Expiration & TTL Operations");

    out.step("1. Setting key with expiration (10 seconds):");
    let _: () = con.set_ex(KEY, VALUE, KEY_TTL_SECS).await?;
    out.detail(&format!(
        "Key '{KEY}' set with value '{VALUE}' and TTL {KEY_TTL_SECS}s"
    ));
    let ttl: i64 = con.ttl(KEY).await?;
    out.detail(&format!("TTL for key '{KEY}': {}", describe_ttl(ttl)));
    let before: Option<String> = con.get(KEY).await?;
    out.detail(&format!(
        "Value before expiration: {}",
        before.as_deref().unwrap_or("(missing)")
    ));
    out.detail("Waiting for key to expire...");
    tokio::time::sleep(Duration::from_secs(KEY_TTL_SECS + 1)).await;
    let after: Option<String> = con.get(KEY).await?;
    match after {
        Some(value) => out.detail(&format!("Value after expiration: {value}")),
        None => out.detail("Value after expiration: (expired or missing)"),
    }

    out.step("2. Using EXPIRE to set/update expiration:");
    let _: () = con.set(KEY, VALUE).await?;
    let _: bool = con.expire(KEY, 5).await?;
    out.detail("Expiration updated to 5 seconds");
    let ttl: i64 = con.ttl(KEY).await?;
    out.detail(&format!("New TTL: {}", describe_ttl(ttl)));

    out.step("3. Using PERSIST to make key permanent:");
    let _: bool = con.persist(KEY).await?;
    let ttl: i64 = con.ttl(KEY).await?;
    out.detail(&format!("TTL after PERSIST: {ttl} ({})", describe_ttl(ttl)));

    out.step("4. Practical example - Session expiration:");
    let _: () = con.set_ex(SESSION, "user_data", SESSION_TTL_SECS).await?;
    out.detail(&format!("Session created with {SESSION_TTL_SECS}s TTL"));
    tokio::time::sleep(Duration::from_secs(SESSION_TTL_SECS + 1)).await;
    let session: Option<String> = con.get(SESSION).await?;
    if session.is_none() {
        out.detail("Session expired and key deleted!");
    } else {
        out.warn("Session still exists (unexpected)");
    }

    out.step("5. Cleanup:");
    store.delete(KEYS).await?;
    out.success("Cleaned up expiration examples");
    Ok(())
}
