//! Hash commands: a user profile and a login session.

use std::collections::BTreeMap;

use redis::AsyncCommands;

use super::{bracketed, or_nil};
use crate::error::DemoError;
use crate::store::Store;
use crate::ui::render::RenderSink;

const PROFILE: &str = "user:123";
const SESSION: &str = "session:abc123";

pub const KEYS: &[&str] = &[PROFILE, SESSION];

const PROFILE_FIELDS: [(&str, &str); 5] = [
    ("name", "John Doe"),
    ("email", "john@example.com"),
    ("age", "30"),
    ("location", "San Francisco"),
    ("role", "Developer"),
];

const SESSION_FIELDS: [(&str, &str); 5] = [
    ("user_id", "123"),
    ("username", "johndoe"),
    ("login_time", "2024-01-01T10:00:00Z"),
    ("ip_address", "192.168.1.1"),
    ("user_agent", "Mozilla/5.0..."),
];

const SELECTED_FIELDS: [&str; 3] = ["name", "role", "location"];

pub async fn run(store: &Store, out: &dyn RenderSink) -> Result<(), DemoError> {
    let mut con = store.connection();
    out.section("Hash Operations");

    out.step("1. Creating user profile with HSET:");
    let _: () = con.hset_multiple(PROFILE, &PROFILE_FIELDS).await?;
    out.success("User profile created");

    out.step("2. Getting specific fields with HGET:");
    let name: String = con.hget(PROFILE, "name").await?;
    out.detail(&format!("Name: {name}"));
    let email: String = con.hget(PROFILE, "email").await?;
    out.detail(&format!("Email: {email}"));

    out.step("3. Getting all fields with HGETALL:");
    let profile: BTreeMap<String, String> = con.hgetall(PROFILE).await?;
    out.detail("Complete profile:");
    render_fields(out, &profile);

    out.step("4. Getting multiple fields with HMGET:");
    let values: Vec<Option<String>> = redis::cmd("HMGET")
        .arg(PROFILE)
        .arg(&SELECTED_FIELDS[..])
        .query_async(&mut con)
        .await?;
    out.detail("Selected fields:");
    for (field, value) in SELECTED_FIELDS.iter().zip(&values) {
        out.detail(&format!("  {field}: {}", or_nil(value.as_deref())));
    }

    out.step("5. Checking field existence with HEXISTS:");
    for field in ["age", "salary"] {
        let exists: bool = con.hexists(PROFILE, field).await?;
        out.detail(&format!("Field '{field}' exists: {exists}"));
    }

    out.step("6. Getting all field names with HKEYS:");
    let keys: Vec<String> = con.hkeys(PROFILE).await?;
    out.detail(&format!("Available fields: {}", bracketed(&keys)));

    out.step("7. Getting all values with HVALS:");
    let vals: Vec<String> = con.hvals(PROFILE).await?;
    out.detail(&format!("All values: {}", bracketed(&vals)));

    out.step("8. Getting field count with HLEN:");
    let len: usize = con.hlen(PROFILE).await?;
    out.detail(&format!("Number of fields: {len}"));

    out.step("9. Incrementing numeric fields with HINCRBY:");
    let age: i64 = con.hincr(PROFILE, "age", 1).await?;
    out.detail(&format!("Age after increment: {age}"));

    out.step("10. Deleting fields with HDEL:");
    let deleted: usize = con.hdel(PROFILE, "location").await?;
    out.detail(&format!("Deleted {deleted} field(s)"));
    let remaining: Vec<String> = con.hkeys(PROFILE).await?;
    out.detail(&format!("Remaining fields: {}", bracketed(&remaining)));

    out.step("11. Practical example - Session management:");
    let _: () = con.hset_multiple(SESSION, &SESSION_FIELDS).await?;
    out.success(&format!("Session {SESSION} created"));
    let session: BTreeMap<String, String> = con.hgetall(SESSION).await?;
    out.detail("Session data:");
    render_fields(out, &session);

    out.step("12. Cleanup:");
    store.delete(KEYS).await?;
    out.success("Cleaned up hash examples");
    Ok(())
}

fn render_fields(out: &dyn RenderSink, fields: &BTreeMap<String, String>) {
    for (field, value) in fields {
        out.detail(&format!("  {field}: {value}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::RecordingSink;

    #[test]
    fn fields_render_in_name_order() {
        let sink = RecordingSink::new();
        let fields: BTreeMap<String, String> = [("role", "Developer"), ("age", "30")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        render_fields(&sink, &fields);
        assert_eq!(
            sink.events(),
            vec![
                "detail:  age: 30".to_string(),
                "detail:  role: Developer".to_string(),
            ]
        );
    }

    #[test]
    fn selected_fields_exist_in_profile() {
        for field in SELECTED_FIELDS {
            assert!(PROFILE_FIELDS.iter().any(|(name, _)| *name == field));
        }
    }
}
