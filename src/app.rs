use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{error, info, warn};

use crate::infra::memory::dataset::load_users;
use crate::infra::memory::repo::InMemoryUserRepo;
use crate::infra::settings::store::{default_settings_path, Settings, SettingsStore};
use crate::infra::url::query_string::QueryPatch;
use crate::platform::desktop::layout::{table_max_height, DesktopWindow, LayoutProvider, TableChrome};
use crate::ui::components::header::AppHeader;
use crate::ui::state::app_state::{AppResources, AppState, Tab};
use crate::ui::theme::{accent_color, button_style, root_container_style};
use crate::ui::views::address_bar::AddressBar;
use crate::ui::views::dynamic_table::DynamicTable;
use crate::ui::views::static_table::StaticTable;
use crate::usecase::services::query_service::QueryService;

#[derive(Clone)]
struct Boot {
    settings: Settings,
    resources: AppResources,
    status: String,
}

fn bootstrap() -> Boot {
    let store = match default_settings_path() {
        Ok(path) => Some(SettingsStore::new(path)),
        Err(err) => {
            warn!(error = %err, "settings will not be persisted");
            None
        }
    };
    let settings = store
        .as_ref()
        .map(SettingsStore::load_or_default)
        .unwrap_or_default();

    let (users, status) = match load_users(settings.dataset_path.as_deref()) {
        Ok(users) => {
            let status = format!("Loaded {} users", users.len());
            (users, status)
        }
        Err(err) => {
            error!(error = %err, "failed to load user dataset");
            (Arc::from(Vec::new()), format!("Failed to load dataset: {err}"))
        }
    };

    let repo = Arc::new(InMemoryUserRepo::new(users));
    let service = Arc::new(QueryService::new(repo, settings.latency()));
    info!(
        users = service.dataset_size(),
        latency_ms = settings.latency_ms,
        "application resources ready"
    );

    Boot {
        settings,
        resources: AppResources { service, store },
        status,
    }
}

/// Ctrl+J, or Cmd+J on macOS.
pub fn is_scheme_shortcut(key: &Key, modifiers: Modifiers) -> bool {
    let chord = modifiers.contains(Modifiers::CONTROL) || modifiers.contains(Modifiers::META);
    chord && matches!(key, Key::Character(text) if text.eq_ignore_ascii_case("j"))
}

fn toggle_scheme(app_state: AppState, store: Option<&SettingsStore>) {
    app_state.update_settings(store, |settings| {
        settings.color_scheme = settings.color_scheme.toggled();
    });
}

#[component]
pub fn App() -> Element {
    let boot = use_hook(bootstrap);
    let app_state = AppState::new(boot.settings.clone(), boot.status.clone());
    use_context_provider(|| app_state);
    let resources = use_context_provider(|| boot.resources.clone());

    let mut viewport = use_signal(|| DesktopWindow.viewport_height());
    let max_height = table_max_height(viewport(), &TableChrome::default());

    let tab = app_state.active_tab();
    let settings = app_state.settings.read().clone();
    let scheme = settings.color_scheme;
    let accent = accent_color(settings.primary_color());
    let status = app_state.status.read().clone();

    let store_for_keys = resources.store.clone();
    let store_for_toggle = resources.store.clone();
    let store_for_color = resources.store.clone();

    rsx! {
        div {
            tabindex: "0",
            style: root_container_style(scheme),
            onresize: move |_| viewport.set(DesktopWindow.viewport_height()),
            onkeydown: move |event| {
                if is_scheme_shortcut(&event.key(), event.modifiers()) {
                    event.prevent_default();
                    toggle_scheme(app_state, store_for_keys.as_ref());
                }
            },

            AppHeader {
                scheme,
                primary_color: settings.primary_color().to_string(),
                on_toggle_scheme: move |_| toggle_scheme(app_state, store_for_toggle.as_ref()),
                on_primary_color: move |color: String| {
                    app_state.update_settings(store_for_color.as_ref(), |settings| {
                        settings.primary_color = color;
                    });
                },
            }

            AddressBar {}

            div {
                style: "display: flex; gap: 8px; padding-bottom: 8px;",
                for candidate in [Tab::Static, Tab::Dynamic] {
                    button {
                        style: button_style(accent, candidate == tab),
                        onclick: move |_| {
                            app_state.update_address(&QueryPatch::new().tab(candidate.as_str()));
                        },
                        {candidate.label()}
                    }
                }
            }

            if tab == Tab::Static {
                StaticTable { max_height }
            } else {
                DynamicTable { max_height }
            }

            div {
                style: "padding-top: 4px; font-size: 12px; opacity: 0.7;",
                "{status}"
            }
        }
    }
}
