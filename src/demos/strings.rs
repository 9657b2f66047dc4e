//! String commands: SET/GET, expiry, counters, APPEND, MSET/MGET.

use redis::AsyncCommands;

use super::{describe_ttl, or_nil};
use crate::error::DemoError;
use crate::store::Store;
use crate::ui::render::RenderSink;

pub const KEYS: &[&str] = &[
    "user:1",
    "temp:session",
    "counter",
    "message",
    "key1",
    "key2",
    "key3",
];

pub async fn run(store: &Store, out: &dyn RenderSink) -> Result<(), DemoError> {
    let mut con = store.connection();
    out.section("String Operations Examples");

    out.step("1. Basic SET and GET:");
    let _: () = con.set("user:1", "Naim Islam").await?;
    let name: String = con.get("user:1").await?;
    out.detail(&format!("user:1 = {name}"));

    out.step("2. SET with expiration (5 seconds):");
    let _: () = con.set_ex("temp:session", "12345", 5).await?;
    let ttl: i64 = con.ttl("temp:session").await?;
    out.detail(&format!("temp:session will expire in {}", describe_ttl(ttl)));

    out.step("3. Increment and Decrement:");
    let _: () = con.set("counter", 10).await?;
    let counter: i64 = con.incr("counter", 1).await?;
    out.detail(&format!("Counter after increment: {counter}"));
    let counter: i64 = con.decr("counter", 1).await?;
    out.detail(&format!("Counter after decrement: {counter}"));

    out.step("4. APPEND operation:");
    let _: () = con.set("message", "Hello").await?;
    let length: usize = con.append("message", " World!").await?;
    let message: String = con.get("message").await?;
    out.detail(&format!("Appended message: {message} (length: {length})"));

    out.step("5. Multiple SET and GET:");
    let _: () = con
        .mset(&[("key1", "value1"), ("key2", "value2"), ("key3", "value3")])
        .await?;
    let values: Vec<Option<String>> = con.mget(&["key1", "key2", "key3"]).await?;
    for (i, value) in values.iter().enumerate() {
        out.detail(&format!("key{} = {}", i + 1, or_nil(value.as_deref())));
    }

    out.step("6. Cleanup:");
    let removed = store.delete(KEYS).await?;
    out.success(&format!("Removed {removed} string keys"));
    Ok(())
}
