//! Sorted set commands: a leaderboard, a time series and a priority queue.

use redis::AsyncCommands;

use crate::error::DemoError;
use crate::store::Store;
use crate::ui::render::RenderSink;

const LEADERBOARD: &str = "game:leaderboard";
const TIME_SERIES: &str = "sensor:temperature";
const PRIORITY_QUEUE: &str = "task:priority_queue";

pub const KEYS: &[&str] = &[LEADERBOARD, TIME_SERIES, PRIORITY_QUEUE];

const PLAYERS: [(i64, &str); 5] = [
    (1500, "alice"),
    (2300, "bob"),
    (1800, "charlie"),
    (2100, "diana"),
    (1200, "eve"),
];

const READINGS: [(i64, &str); 5] = [
    (1_640_995_200, "22.5"),
    (1_640_995_260, "23.1"),
    (1_640_995_320, "22.8"),
    (1_640_995_380, "23.4"),
    (1_640_995_440, "23.0"),
];

const TASKS: [(i64, &str); 5] = [
    (1, "backup_database"),
    (5, "fix_critical_bug"),
    (3, "deploy_feature"),
    (2, "update_documentation"),
    (4, "security_patch"),
];

pub async fn run(store: &Store, out: &dyn RenderSink) -> Result<(), DemoError> {
    let mut con = store.connection();
    out.section("Sorted Set Operations");

    out.step("1. Adding members with scores using ZADD:");
    let added: usize = con.zadd_multiple(LEADERBOARD, &PLAYERS).await?;
    out.detail(&format!("Added {added} players to leaderboard"));

    out.step("2. Getting members by rank with ZRANGE:");
    let ascending: Vec<(String, f64)> = con.zrange_withscores(LEADERBOARD, 0, -1).await?;
    out.detail("All players (ascending):");
    render_ranking(out, &ascending);

    out.step("3. Getting top players with ZREVRANGE:");
    let top: Vec<(String, f64)> = con.zrevrange_withscores(LEADERBOARD, 0, 2).await?;
    out.detail("Top 3 players:");
    render_ranking(out, &top);

    out.step("4. Getting specific scores with ZSCORE:");
    let score: Option<f64> = con.zscore(LEADERBOARD, "alice").await?;
    out.detail(&format!("Alice's score: {}", format_score(score)));

    out.step("5. Getting player ranks with ZRANK and ZREVRANK:");
    let rank: Option<usize> = con.zrank(LEADERBOARD, "alice").await?;
    out.detail(&format!("Alice's rank (ascending): {}", format_rank(rank)));
    let rev_rank: Option<usize> = con.zrevrank(LEADERBOARD, "alice").await?;
    out.detail(&format!(
        "Alice's rank (descending): {} (position from top)",
        format_rank(rev_rank)
    ));

    out.step("6. Getting leaderboard size with ZCARD:");
    let players: usize = con.zcard(LEADERBOARD).await?;
    out.detail(&format!("Total players: {players}"));

    out.step("7. Updating scores with ZINCRBY:");
    let new_score: f64 = con.zincr(LEADERBOARD, "alice", 300).await?;
    out.detail(&format!("Alice's new score after +300: {new_score:.0}"));
    let top: Vec<(String, f64)> = con.zrevrange_withscores(LEADERBOARD, 0, 2).await?;
    out.detail("Updated top 3:");
    render_ranking(out, &top);

    out.step("8. Getting players by score range with ZRANGEBYSCORE:");
    let mid_range: Vec<(String, f64)> = con
        .zrangebyscore_withscores(LEADERBOARD, 1500, 2000)
        .await?;
    out.detail("Players with scores 1500-2000:");
    for (member, score) in &mid_range {
        out.detail(&format!("  {member}: {score:.0} points"));
    }

    out.step("9. Counting players in score range with ZCOUNT:");
    let count: usize = con.zcount(LEADERBOARD, 1500, 2000).await?;
    out.detail(&format!("Players with scores 1500-2000: {count}"));

    out.step("10. Removing players with ZREM:");
    let removed: usize = con.zrem(LEADERBOARD, "eve").await?;
    out.detail(&format!("Removed {removed} player(s)"));

    out.step("11. Removing bottom players with ZREMRANGEBYRANK:");
    let removed: usize = con.zremrangebyrank(LEADERBOARD, 0, 0).await?;
    out.detail(&format!("Removed {removed} bottom player(s)"));
    let final_board: Vec<(String, f64)> = con.zrevrange_withscores(LEADERBOARD, 0, -1).await?;
    out.detail("Final leaderboard:");
    render_ranking(out, &final_board);

    out.step("12. Practical example - Time-series data:");
    let _: usize = con.zadd_multiple(TIME_SERIES, &READINGS).await?;
    let latest: Vec<(String, f64)> = con.zrevrange_withscores(TIME_SERIES, 0, 2).await?;
    out.detail("Latest 3 temperature readings:");
    render_readings(out, &latest);
    let window: Vec<(String, f64)> = con
        .zrangebyscore_withscores(TIME_SERIES, READINGS[0].0, READINGS[2].0)
        .await?;
    out.detail("Readings in first 2 minutes:");
    render_readings(out, &window);

    out.step("13. Practical example - Priority queue:");
    let _: usize = con.zadd_multiple(PRIORITY_QUEUE, &TASKS).await?;
    out.detail("Processing tasks by priority:");
    for _ in 0..3 {
        let highest: Vec<(String, f64)> = con.zrevrange_withscores(PRIORITY_QUEUE, 0, 0).await?;
        let Some((task, priority)) = highest.into_iter().next() else {
            break;
        };
        out.detail(&format!("  Processing (priority {priority:.0}): {task}"));
        let _: usize = con.zrem(PRIORITY_QUEUE, &task).await?;
    }

    out.step("14. Cleanup:");
    store.delete(KEYS).await?;
    out.success("Cleaned up sorted set examples");
    Ok(())
}

fn render_ranking(out: &dyn RenderSink, entries: &[(String, f64)]) {
    for (i, (member, score)) in entries.iter().enumerate() {
        out.detail(&format!("  {}. {member}: {score:.0} points", i + 1));
    }
}

fn render_readings(out: &dyn RenderSink, entries: &[(String, f64)]) {
    for (reading, timestamp) in entries {
        out.detail(&format!("  Timestamp {timestamp:.0}: {reading}°C"));
    }
}

fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "<nil>".to_string(), |s| format!("{s:.0}"))
}

fn format_rank(rank: Option<usize>) -> String {
    rank.map_or_else(|| "<nil>".to_string(), |r| r.to_string())
}
