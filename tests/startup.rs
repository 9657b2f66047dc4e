//! Process-level startup behavior.
//!
//! Runs the compiled binary against a closed port and checks that it gives
//! up before the menu is ever printed.

use std::process::{Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn isolated_workdir() -> std::path::PathBuf {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let dir = std::env::temp_dir().join(format!(
        "redis-playground-startup-{}-{millis}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("create workdir");
    dir
}

#[test]
fn unreachable_store_exits_before_menu() {
    let workdir = isolated_workdir();
    let output = Command::new(env!("CARGO_BIN_EXE_redis-playground"))
        .current_dir(&workdir)
        .env("ADDR", "127.0.0.1:1")
        .env("NO_COLOR", "1")
        .env_remove("AUTH_SECRET")
        .env_remove("DB_INDEX")
        .stdin(Stdio::null())
        .output()
        .expect("run binary");
    let _ = std::fs::remove_dir_all(&workdir);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success(), "stdout: {stdout}\nstderr: {stderr}");
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout.contains("Choose an option"), "stdout: {stdout}");
    assert!(stderr.contains("failed to connect"), "stderr: {stderr}");
}

#[test]
fn malformed_address_exits_before_menu() {
    let workdir = isolated_workdir();
    let output = Command::new(env!("CARGO_BIN_EXE_redis-playground"))
        .current_dir(&workdir)
        .env("ADDR", "localhost:notaport")
        .env("NO_COLOR", "1")
        .stdin(Stdio::null())
        .output()
        .expect("run binary");
    let _ = std::fs::remove_dir_all(&workdir);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout.contains("Choose an option"), "stdout: {stdout}");
}

#[test]
fn env_file_can_raise_log_level() {
    let workdir = isolated_workdir();
    std::fs::write(workdir.join(".env"), "RUST_LOG=debug\n").expect("write env file");
    let output = Command::new(env!("CARGO_BIN_EXE_redis-playground"))
        .current_dir(&workdir)
        .env("ADDR", "127.0.0.1:1")
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .output()
        .expect("run binary");
    let _ = std::fs::remove_dir_all(&workdir);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("loaded env file"), "stderr: {stderr}");
}
