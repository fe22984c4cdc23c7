//! Root application module.
//!
//! Holds the [`AppContext`] shared by every component and the [`App`] root.

use leptos::prelude::*;
use terminalx_core::{Recall, TerminalSession};

use crate::components::Shell;

/// Application-wide reactive context.
///
/// The whole terminal lives in one signal: each submitted line is a single
/// update, so the prompt, cwd and scrollback always change together.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<TerminalSession>,
}

impl AppContext {
    /// Starts a session over the built-in file system.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(TerminalSession::new()),
        }
    }

    /// Gets the current prompt string for display.
    pub fn get_prompt(&self) -> String {
        self.session.with(|s| s.prompt())
    }

    pub fn submit(&self, line: &str) {
        self.session.update(|s| {
            s.submit(line);
        });
    }

    /// Step through earlier commands: negative is older, positive is newer.
    pub fn navigate_history(&self, direction: i32) -> Recall {
        let mut recall = Recall::Unchanged;
        // Recall position is not rendered, so skip notifying subscribers
        self.session.update_untracked(|s| {
            recall = if direction < 0 {
                s.recall_up()
            } else {
                s.recall_down()
            };
        });
        recall
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! { <Shell /> }
}
