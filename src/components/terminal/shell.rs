//! Terminal window frame.
//!
//! Draws the window chrome around the [`Terminal`] and keeps the scrollback
//! pinned to its newest entry.

use leptos::prelude::*;
use terminalx_core::TerminalSession;

use super::terminal::Terminal;
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/terminal/shell.module.css");

/// Auto-scroll output to bottom when the session changes.
fn setup_autoscroll_effect(
    session: RwSignal<TerminalSession>,
    output_ref: NodeRef<leptos::html::Div>,
) {
    Effect::new(move || {
        session.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let output_ref = NodeRef::<leptos::html::Div>::new();

    setup_autoscroll_effect(ctx.session, output_ref);

    view! {
        <div class=css::screen>
            <div class=css::window>
                <div class=css::titleBar>
                    <span class=css::dotRed></span>
                    <span class=css::dotYellow></span>
                    <span class=css::dotGreen></span>
                </div>
                <Terminal output_ref=output_ref />
            </div>
        </div>
    }
}
