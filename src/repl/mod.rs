//! Interactive menu loop.
//!
//! The loop reads one line per iteration, trims it, and resolves it against
//! the static menu. A matched demo runs to completion before the loop pauses
//! for Enter; unknown input is reported and the menu is shown again without
//! a pause. The loop never looks at whether a demo succeeded.

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use crate::menu::{lookup, Demo, MenuAction, MENU_ENTRIES};
use crate::ui::render::RenderSink;

pub const CHOICE_PROMPT: &str = "Enter your choice: ";
pub const INVALID_CHOICE: &str = "Invalid choice, please try again.";
pub const CONTINUE_PROMPT: &str = "\nPress Enter to continue...";
pub const FAREWELL: &str = "Exiting Redis Playground. Goodbye!";

/// Runs one demo on behalf of the loop.
///
/// Implementations own their failure policy; nothing is reported back.
#[async_trait]
pub trait Dispatch: Send {
    async fn dispatch(&mut self, demo: Demo);
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// The exit token was entered.
    Farewell,
    /// Input closed.
    EndOfInput,
}

/// Drive the menu until the exit token or end of input.
///
/// Read errors end the loop and are returned to the caller.
pub async fn run_dispatch_loop<R, D>(
    input: R,
    renderer: &dyn RenderSink,
    dispatcher: &mut D,
) -> std::io::Result<LoopExit>
where
    R: AsyncBufRead + Unpin,
    D: Dispatch + ?Sized,
{
    let mut lines = input.lines();
    loop {
        renderer.menu(&MENU_ENTRIES);
        renderer.prompt(CHOICE_PROMPT);
        let Some(line) = lines.next_line().await? else {
            tracing::debug!("input closed at menu prompt");
            return Ok(LoopExit::EndOfInput);
        };

        let choice = line.trim();
        match lookup(choice) {
            Some(MenuAction::Exit) => {
                renderer.notice(FAREWELL);
                return Ok(LoopExit::Farewell);
            }
            Some(MenuAction::Run(demo)) => {
                tracing::debug!(%demo, "dispatching");
                dispatcher.dispatch(demo).await;
                if !wait_for_enter(&mut lines, renderer).await? {
                    tracing::debug!("input closed at continue prompt");
                    return Ok(LoopExit::EndOfInput);
                }
            }
            None => {
                tracing::debug!(choice, "unrecognized menu choice");
                renderer.warn(INVALID_CHOICE);
            }
        }
    }
}

/// Show the continue prompt and discard one line. False when input closed.
async fn wait_for_enter<R>(
    lines: &mut Lines<R>,
    renderer: &dyn RenderSink,
) -> std::io::Result<bool>
where
    R: AsyncBufRead + Unpin,
{
    renderer.notice(CONTINUE_PROMPT);
    Ok(lines.next_line().await?.is_some())
}
