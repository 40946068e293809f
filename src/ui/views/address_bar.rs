use dioxus::prelude::*;

use crate::ui::state::app_state::AppState;
use crate::ui::theme::{accent_color, button_style};

/// Editable stand-in for the browser location bar.
#[component]
pub fn AddressBar() -> Element {
    let app_state = use_context::<AppState>();
    let mut draft = use_signal(|| None::<String>);

    let location = app_state.history.read().location();
    let shown = draft().unwrap_or_else(|| location.clone());
    let accent = accent_color(app_state.settings.read().primary_color());

    let mut apply = move || {
        if let Some(text) = draft() {
            app_state.replace_address(&text);
        }
        draft.set(None);
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; padding-bottom: 8px; font-size: 13px;",
            span { "Address" }
            input {
                style: "flex: 1; font-family: monospace; padding: 4px 8px; border: 1px solid #ced4da; border-radius: 4px;",
                value: "{shown}",
                placeholder: "?tab=dynamic&page=1&limit=10",
                oninput: move |event| draft.set(Some(event.value())),
                onkeydown: move |event| {
                    if event.key() == Key::Enter {
                        apply();
                    }
                },
            }
            button {
                style: button_style(accent, false),
                onclick: move |_| apply(),
                "Apply"
            }
        }
    }
}
