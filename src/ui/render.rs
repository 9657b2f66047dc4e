//! Rendering contract shared by the dispatch loop and the demonstrations.
//!
//! `RenderSink` keeps orchestration code independent of the terminal, so the
//! loop and the pub/sub listener can be exercised against a recording sink.

use crate::menu::MenuEntry;

pub use crate::ui::renderer::Renderer;

/// Injectable rendering interface used by the loop and every demo.
pub trait RenderSink: Send + Sync {
    /// Render the welcome banner shown once after connecting.
    fn welcome(&self, title: &str, metadata: &str);
    /// Render the option list.
    fn menu(&self, entries: &[MenuEntry]);
    /// Render an input prompt without a trailing newline.
    fn prompt(&self, text: &str);
    /// Render a demo heading with an underline.
    fn section(&self, title: &str);
    /// Render one numbered step headline inside a demo.
    fn step(&self, title: &str);
    /// Render one indented result line.
    fn detail(&self, text: &str);
    /// Render a confirmation line.
    fn success(&self, text: &str);
    /// Render neutral lifecycle text such as pause or farewell messages.
    fn notice(&self, text: &str);
    /// Render a recoverable problem.
    fn warn(&self, msg: &str);
    /// Render a failure.
    fn error(&self, msg: &str);
}

impl RenderSink for Renderer {
    fn welcome(&self, title: &str, metadata: &str) {
        self.welcome(title, metadata);
    }

    fn menu(&self, entries: &[MenuEntry]) {
        self.menu(entries);
    }

    fn prompt(&self, text: &str) {
        self.prompt(text);
    }

    fn section(&self, title: &str) {
        self.section(title);
    }

    fn step(&self, title: &str) {
        self.step(title);
    }

    fn detail(&self, text: &str) {
        self.detail(text);
    }

    fn success(&self, text: &str) {
        self.success(text);
    }

    fn notice(&self, text: &str) {
        self.notice(text);
    }

    fn warn(&self, msg: &str) {
        self.warn(msg);
    }

    fn error(&self, msg: &str) {
        self.error(msg);
    }
}
