//! Shared test fixtures for config, loop and demo test modules.

use crate::menu::MenuEntry;
use crate::ui::render::RenderSink;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("redis-playground-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Render sink that records every call as `kind:text`.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events in call order.
    pub fn events(&self) -> Vec<String> {
        self.events.lock().expect("sink lock").clone()
    }

    /// Number of recorded events with the given kind prefix.
    pub fn count(&self, kind: &str) -> usize {
        let prefix = format!("{kind}:");
        self.events()
            .iter()
            .filter(|event| event.starts_with(&prefix))
            .count()
    }

    /// Whether any event of `kind` contains `needle`.
    pub fn contains(&self, kind: &str, needle: &str) -> bool {
        let prefix = format!("{kind}:");
        self.events()
            .iter()
            .any(|event| event.starts_with(&prefix) && event.contains(needle))
    }

    fn push(&self, kind: &str, text: &str) {
        self.events
            .lock()
            .expect("sink lock")
            .push(format!("{kind}:{text}"));
    }
}

impl RenderSink for RecordingSink {
    fn welcome(&self, title: &str, _metadata: &str) {
        self.push("welcome", title);
    }

    fn menu(&self, entries: &[MenuEntry]) {
        self.push("menu", &entries.len().to_string());
    }

    fn prompt(&self, text: &str) {
        self.push("prompt", text);
    }

    fn section(&self, title: &str) {
        self.push("section", title);
    }

    fn step(&self, title: &str) {
        self.push("step", title);
    }

    fn detail(&self, text: &str) {
        self.push("detail", text);
    }

    fn success(&self, text: &str) {
        self.push("success", text);
    }

    fn notice(&self, text: &str) {
        self.push("notice", text);
    }

    fn warn(&self, msg: &str) {
        self.push("warn", msg);
    }

    fn error(&self, msg: &str) {
        self.push("error", msg);
    }
}
