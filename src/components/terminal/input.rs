//! Terminal input component with history navigation.

use leptos::{ev, prelude::*};
use terminalx_core::Recall;
use wasm_bindgen::JsCast;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// What a key press does to the input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KeyAction {
    Submit,
    RecallOlder,
    RecallNewer,
    /// Ctrl+L: run `clear`
    ClearScreen,
    /// Ctrl+C: drop the current text
    ClearInput,
    /// Let the browser edit the text
    Edit,
}

fn key_action(key: &str, ctrl: bool) -> KeyAction {
    match key {
        "Enter" => KeyAction::Submit,
        "ArrowUp" => KeyAction::RecallOlder,
        "ArrowDown" => KeyAction::RecallNewer,
        "l" | "L" if ctrl => KeyAction::ClearScreen,
        "c" | "C" if ctrl => KeyAction::ClearInput,
        _ => KeyAction::Edit,
    }
}

/// Terminal input field.
///
/// Enter submits the text as typed; the session trims it.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    on_submit: Callback<String>,
    on_history_nav: Callback<i32, Recall>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (input_value, set_input_value) = signal(String::new());

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = input.value().len() as u32;
            let _ = input.set_selection_range(len, len);
        }
    };

    let recall = move |direction: i32| match on_history_nav.run(direction) {
        Recall::Show(cmd) => {
            set_input_value.set(cmd);
            move_cursor_to_end();
        }
        Recall::Clear => set_input_value.set(String::new()),
        Recall::Unchanged => {}
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| match key_action(&ev.key(), ev.ctrl_key()) {
        KeyAction::Submit => {
            on_submit.run(input_value.get());
            set_input_value.set(String::new());
        }
        KeyAction::RecallOlder => {
            ev.prevent_default();
            recall(-1);
        }
        KeyAction::RecallNewer => {
            ev.prevent_default();
            recall(1);
        }
        KeyAction::ClearScreen => {
            ev.prevent_default();
            on_submit.run("clear".to_string());
        }
        KeyAction::ClearInput => set_input_value.set(String::new()),
        KeyAction::Edit => {}
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_input_value.set(input.value());
    };

    view! {
        <div class=css::line>
            <span class=css::prompt>{prompt}</span>
            <input
                node_ref=input_ref
                type="text"
                class=css::input
                autocomplete="off"
                spellcheck="false"
                prop:value=input_value
                on:input=handle_input
                on:keydown=handle_keydown
            />
        </div>
    }
}
