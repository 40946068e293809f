use dioxus::prelude::*;

use crate::infra::settings::store::{ColorScheme, PRIMARY_COLORS};
use crate::ui::components::dropdown::{DropdownOption, DropdownSelect};
use crate::ui::theme::{accent_color, button_style};

pub const APP_TITLE: &str = "Datagrid Sample";

fn color_options() -> Vec<DropdownOption> {
    PRIMARY_COLORS
        .iter()
        .map(|name| DropdownOption::new(*name, *name).with_swatch(accent_color(name)))
        .collect()
}

#[component]
pub fn AppHeader(
    scheme: ColorScheme,
    primary_color: String,
    on_toggle_scheme: EventHandler<()>,
    on_primary_color: EventHandler<String>,
) -> Element {
    let accent = accent_color(&primary_color);
    let toggle_label = match scheme {
        ColorScheme::Light => "Dark mode",
        ColorScheme::Dark => "Light mode",
    };

    rsx! {
        header {
            style: "display: flex; align-items: center; justify-content: space-between; gap: 12px; padding-bottom: 12px;",
            h2 { style: "margin: 0; color: {accent};", "{APP_TITLE}" }
            div {
                style: "display: flex; align-items: center; gap: 12px;",
                DropdownSelect {
                    label: "Primary color",
                    options: color_options(),
                    selected: Some(primary_color.clone()),
                    on_select: move |value| on_primary_color.call(value),
                }
                button {
                    style: button_style(accent, false),
                    title: "Toggle color scheme (Ctrl+J)",
                    onclick: move |_| on_toggle_scheme.call(()),
                    "{toggle_label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_primary_color_has_a_swatch() {
        let options = color_options();

        assert_eq!(options.len(), PRIMARY_COLORS.len());
        assert!(options.iter().all(|option| option.swatch.is_some()));
        assert_eq!(options[0].value, PRIMARY_COLORS[0]);
    }
}
