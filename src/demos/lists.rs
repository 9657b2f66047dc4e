//! List commands: a task queue, an activity feed and a LIFO stack.

use redis::AsyncCommands;

use super::{bracketed, or_nil};
use crate::error::DemoError;
use crate::store::Store;
use crate::ui::render::RenderSink;

const QUEUE: &str = "task_queue";
const FEED: &str = "user:123:activity_feed";
const STACK: &str = "operation_stack";

pub const KEYS: &[&str] = &[QUEUE, FEED, STACK];

const ACTIVITIES: [&str; 5] = [
    "User logged in",
    "User updated profile",
    "User posted a comment",
    "User liked a post",
    "User shared an article",
];

pub async fn run(store: &Store, out: &dyn RenderSink) -> Result<(), DemoError> {
    let mut con = store.connection();
    out.section("List Operations");

    out.step("1. Adding elements with LPUSH and RPUSH:");
    let length: usize = con.rpush(QUEUE, &["task1", "task2", "task3"]).await?;
    out.detail(&format!("RPUSH {QUEUE} task1 task2 task3: length = {length}"));
    let length: usize = con.lpush(QUEUE, "urgent_task").await?;
    out.detail(&format!("LPUSH {QUEUE} urgent_task: length = {length}"));

    out.step("2. Viewing list contents with LRANGE:");
    let tasks: Vec<String> = con.lrange(QUEUE, 0, -1).await?;
    out.detail(&format!("Current queue: {}", bracketed(&tasks)));
    let first_two: Vec<String> = con.lrange(QUEUE, 0, 1).await?;
    out.detail(&format!("First 2 tasks: {}", bracketed(&first_two)));

    out.step("3. Processing tasks with LPOP:");
    let task: Option<String> = con.lpop(QUEUE, None).await?;
    out.detail(&format!("LPOP (processed): {}", or_nil(task.as_deref())));
    let remaining: Vec<String> = con.lrange(QUEUE, 0, -1).await?;
    out.detail(&format!("Remaining tasks: {}", bracketed(&remaining)));

    out.step("4. Checking queue size with LLEN:");
    let size: usize = con.llen(QUEUE).await?;
    out.detail(&format!("Queue size: {size}"));

    out.step("5. Getting specific elements with LINDEX:");
    let first: Option<String> = con.lindex(QUEUE, 0).await?;
    out.detail(&format!("First task (index 0): {}", or_nil(first.as_deref())));
    let last: Option<String> = con.lindex(QUEUE, -1).await?;
    out.detail(&format!("Last task (index -1): {}", or_nil(last.as_deref())));

    out.step("6. Updating elements with LSET:");
    let _: () = con.lset(QUEUE, 0, "updated_task1").await?;
    out.success(&format!("LSET {QUEUE} 0 'updated_task1'"));
    let updated: Vec<String> = con.lrange(QUEUE, 0, -1).await?;
    out.detail(&format!("Updated queue: {}", bracketed(&updated)));

    out.step("7. Removing specific elements with LREM:");
    let _: usize = con
        .rpush(QUEUE, &["duplicate", "duplicate", "unique"])
        .await?;
    let removed: usize = con.lrem(QUEUE, 2, "duplicate").await?;
    out.detail(&format!("LREM {QUEUE} 2 'duplicate': removed {removed} elements"));
    let after: Vec<String> = con.lrange(QUEUE, 0, -1).await?;
    out.detail(&format!("After removal: {}", bracketed(&after)));

    out.step("8. Practical example - Activity feed:");
    for activity in ACTIVITIES {
        let _: usize = con.lpush(FEED, activity).await?;
    }
    let recent: Vec<String> = con.lrange(FEED, 0, 2).await?;
    out.detail("Recent activities:");
    for (i, activity) in recent.iter().enumerate() {
        out.detail(&format!("  {}. {activity}", i + 1));
    }
    let _: () = con.ltrim(FEED, 0, 9).await?;
    out.success("Activity feed trimmed to last 10 items");

    out.step("9. Stack example (LIFO):");
    let _: usize = con
        .lpush(STACK, &["operation1", "operation2", "operation3"])
        .await?;
    out.detail("Popping from stack:");
    for _ in 0..3 {
        let op: Option<String> = con.lpop(STACK, None).await?;
        let Some(op) = op else {
            break;
        };
        out.detail(&format!("  Popped: {op}"));
    }

    out.step("10. Cleanup:");
    store.delete(KEYS).await?;
    out.success("Cleaned up list examples");
    Ok(())
}
