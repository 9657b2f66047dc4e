//! Terminal output renderer.

use crate::menu::MenuEntry;
use crossterm::style::{Color, Stylize};
use std::io::{self, IsTerminal, Write};

/// Indentation applied to result lines under a step.
const DETAIL_INDENT: &str = "   ";

/// Default terminal implementation of [`crate::ui::render::RenderSink`].
///
/// Everything except errors goes to stdout; errors go to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Color when stdout is a terminal and `NO_COLOR` is unset or empty.
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::new(!no_color && io::stdout().is_terminal())
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn welcome(&self, title: &str, metadata: &str) {
        let rule = "=".repeat(title.chars().count());
        if self.color {
            println!("{}", title.with(Color::Green).bold());
            println!("{}", rule.as_str().with(Color::DarkGrey));
            println!("{}", metadata.with(Color::DarkGrey));
        } else {
            println!("{title}");
            println!("{rule}");
            println!("{metadata}");
        }
    }

    pub fn menu(&self, entries: &[MenuEntry]) {
        println!();
        println!(" Choose an option:");
        for entry in entries {
            if self.color {
                println!(
                    "{}. {}",
                    entry.token.with(Color::Yellow).bold(),
                    entry.description
                );
            } else {
                println!("{}. {}", entry.token, entry.description);
            }
        }
    }

    pub fn prompt(&self, text: &str) {
        let mut stdout = io::stdout().lock();
        let _ = if self.color {
            write!(stdout, "{}", text.with(Color::Cyan))
        } else {
            write!(stdout, "{text}")
        };
        let _ = stdout.flush();
    }

    pub fn section(&self, title: &str) {
        let rule = "=".repeat(title.chars().count() + 2);
        println!();
        if self.color {
            println!(" {}", title.with(Color::Green).bold());
            println!("{}", rule.as_str().with(Color::DarkGrey));
        } else {
            println!(" {title}");
            println!("{rule}");
        }
    }

    pub fn step(&self, title: &str) {
        println!();
        if self.color {
            println!("{}", title.with(Color::White).bold());
        } else {
            println!("{title}");
        }
    }

    pub fn detail(&self, text: &str) {
        println!("{DETAIL_INDENT}{text}");
    }

    pub fn success(&self, text: &str) {
        if self.color {
            println!("{DETAIL_INDENT}{} {}", text, "✓".with(Color::Green));
        } else {
            println!("{DETAIL_INDENT}{text} ✓");
        }
    }

    pub fn notice(&self, text: &str) {
        if self.color {
            println!("{}", text.with(Color::DarkGrey));
        } else {
            println!("{text}");
        }
    }

    pub fn warn(&self, msg: &str) {
        if self.color {
            println!("{}", msg.with(Color::Yellow));
        } else {
            println!("{msg}");
        }
    }

    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {}", "error:".with(Color::Red).bold(), msg);
        } else {
            eprintln!("error: {msg}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_color_flag_is_kept() {
        assert!(Renderer::new(true).color_enabled());
        assert!(!Renderer::new(false).color_enabled());
    }
}
