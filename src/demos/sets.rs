//! Set commands: membership, set algebra, random picks, tagging and presence.

use redis::AsyncCommands;

use super::{bracketed, or_nil};
use crate::error::DemoError;
use crate::store::Store;
use crate::ui::render::RenderSink;

const INTERESTS: &str = "user:123:interests";
const OTHER_INTERESTS: &str = "user:456:interests";
const ARTICLES: [&str; 3] = ["article:1:tags", "article:2:tags", "article:3:tags"];
const ONLINE: &str = "online_users";

pub const KEYS: &[&str] = &[
    INTERESTS,
    OTHER_INTERESTS,
    ARTICLES[0],
    ARTICLES[1],
    ARTICLES[2],
    ONLINE,
];

pub async fn run(store: &Store, out: &dyn RenderSink) -> Result<(), DemoError> {
    let mut con = store.connection();
    out.section("Set Operations");

    out.step("1. Adding members with SADD:");
    let added: usize = con
        .sadd(INTERESTS, &["programming", "music", "travel", "photography"])
        .await?;
    out.detail(&format!("Added {added} interests to user:123"));
    let added: usize = con.sadd(INTERESTS, &["programming", "reading"]).await?;
    out.detail(&format!("Added {added} new interests (duplicates ignored)"));

    out.step("2. Getting all members with SMEMBERS:");
    let interests: Vec<String> = con.smembers(INTERESTS).await?;
    out.detail(&format!("User interests: {}", bracketed(&interests)));

    out.step("3. Getting set size with SCARD:");
    let size: usize = con.scard(INTERESTS).await?;
    out.detail(&format!("Number of interests: {size}"));

    out.step("4. Checking membership with SISMEMBER:");
    for candidate in ["programming", "cooking"] {
        let is_member: bool = con.sismember(INTERESTS, candidate).await?;
        out.detail(&format!("Is '{candidate}' an interest? {is_member}"));
    }

    out.step("5. Creating another user's interests:");
    let _: usize = con
        .sadd(OTHER_INTERESTS, &["programming", "gaming", "travel", "cooking"])
        .await?;
    let other: Vec<String> = con.smembers(OTHER_INTERESTS).await?;
    out.detail(&format!("User 456 interests: {}", bracketed(&other)));

    out.step("6. Finding common interests with SINTER:");
    let common: Vec<String> = con.sinter(&[INTERESTS, OTHER_INTERESTS]).await?;
    out.detail(&format!("Common interests: {}", bracketed(&common)));

    out.step("7. Finding all unique interests with SUNION:");
    let all: Vec<String> = con.sunion(&[INTERESTS, OTHER_INTERESTS]).await?;
    out.detail(&format!("All unique interests: {}", bracketed(&all)));

    out.step("8. Finding unique interests with SDIFF:");
    let only_123: Vec<String> = con.sdiff(&[INTERESTS, OTHER_INTERESTS]).await?;
    out.detail(&format!("Interests unique to user 123: {}", bracketed(&only_123)));
    let only_456: Vec<String> = con.sdiff(&[OTHER_INTERESTS, INTERESTS]).await?;
    out.detail(&format!("Interests unique to user 456: {}", bracketed(&only_456)));

    out.step("9. Random operations with SPOP and SRANDMEMBER:");
    let popped: Option<String> = con.spop(INTERESTS).await?;
    out.detail(&format!("Randomly removed interest: {}", or_nil(popped.as_deref())));
    let picked: Option<String> = con.srandmember(INTERESTS).await?;
    out.detail(&format!(
        "Random interest (not removed): {}",
        or_nil(picked.as_deref())
    ));
    let picked: Vec<String> = con.srandmember_multiple(INTERESTS, 2).await?;
    out.detail(&format!("2 random interests: {}", bracketed(&picked)));

    out.step("10. Removing specific members with SREM:");
    let removed: usize = con.srem(INTERESTS, "music").await?;
    out.detail(&format!("Removed {removed} member(s)"));
    let remaining: Vec<String> = con.smembers(INTERESTS).await?;
    out.detail(&format!("Remaining interests: {}", bracketed(&remaining)));

    out.step("11. Practical example - Article tagging system:");
    let _: usize = con
        .sadd(ARTICLES[0], &["redis", "database", "nosql", "performance"])
        .await?;
    let _: usize = con
        .sadd(ARTICLES[1], &["golang", "programming", "performance", "backend"])
        .await?;
    let _: usize = con
        .sadd(ARTICLES[2], &["redis", "golang", "tutorial", "backend"])
        .await?;
    out.detail("Articles tagged with 'redis':");
    for (i, article) in ARTICLES.iter().enumerate() {
        let tagged: bool = con.sismember(*article, "redis").await?;
        if tagged {
            out.detail(&format!("  Article {} has 'redis' tag", i + 1));
        }
    }
    out.detail("Articles tagged with both 'performance' AND 'backend':");
    for (i, article) in ARTICLES.iter().enumerate() {
        let perf: bool = con.sismember(*article, "performance").await?;
        let backend: bool = con.sismember(*article, "backend").await?;
        if perf && backend {
            out.detail(&format!("  Article {} has both tags", i + 1));
        }
    }

    out.step("12. Practical example - Online users tracking:");
    let _: usize = con
        .sadd(ONLINE, &["user:123", "user:456", "user:789"])
        .await?;
    let online: Vec<String> = con.smembers(ONLINE).await?;
    out.detail(&format!("Online users: {}", bracketed(&online)));
    let _: usize = con.srem(ONLINE, "user:456").await?;
    let count: usize = con.scard(ONLINE).await?;
    out.detail(&format!("Online user count: {count}"));

    out.step("13. Cleanup:");
    store.delete(KEYS).await?;
    out.success("Cleaned up set examples");
    Ok(())
}
