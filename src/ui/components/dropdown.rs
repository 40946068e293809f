use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
    pub swatch: Option<&'static str>,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            swatch: None,
        }
    }

    pub fn with_swatch(mut self, color: &'static str) -> Self {
        self.swatch = Some(color);
        self
    }
}

pub fn dropdown_label(options: &[DropdownOption], selected: Option<&str>) -> String {
    selected
        .and_then(|value| options.iter().find(|opt| opt.value == value))
        .map(|opt| opt.label.clone())
        .unwrap_or_else(|| "(none)".to_string())
}

#[component]
pub fn DropdownSelect(
    label: &'static str,
    options: Vec<DropdownOption>,
    selected: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    let mut open = use_signal(|| false);
    let selected_label = dropdown_label(&options, selected.as_deref());

    rsx! {
        div {
            style: "position: relative; display: inline-flex; align-items: center; gap: 6px;",
            span { style: "font-size: 12px;", "{label}" }
            button {
                style: "border: 1px solid #bbb; background: #fff; color: #1e1e1e; padding: 4px 10px; border-radius: 6px; cursor: pointer; min-width: 96px; text-align: left;",
                onclick: move |event| {
                    event.stop_propagation();
                    open.set(!open());
                },
                "{selected_label}"
            }

            if open() {
                div {
                    style: "position: absolute; left: 0; top: 100%; margin-top: 4px; min-width: 160px; max-height: 320px; overflow-y: auto; background: #fff; color: #1e1e1e; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200;",
                    onclick: move |event| event.stop_propagation(),
                    {options.iter().map(|opt| {
                        let value = opt.value.clone();
                        let label = opt.label.clone();
                        let is_selected = selected.as_deref() == Some(value.as_str());
                        let background = if is_selected { "#eef4ff" } else { "transparent" };
                        let dot = opt.swatch;
                        rsx!(
                            div {
                                style: "display: flex; align-items: center; gap: 8px; padding: 8px 10px; cursor: pointer; background: {background};",
                                onclick: move |_| {
                                    on_select.call(value.clone());
                                    open.set(false);
                                },
                                if let Some(color) = dot {
                                    span { style: "display: inline-block; width: 10px; height: 10px; border-radius: 50%; background: {color};" }
                                }
                                "{label}"
                            }
                        )
                    })}
                }
            }
        }
    }
}
