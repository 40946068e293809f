use std::sync::Arc;

use dioxus::prelude::*;
use tracing::{error, info};

use crate::infra::history::memory::MemoryHistory;
use crate::infra::settings::store::{Settings, SettingsStore};
use crate::infra::url::query_string::{canonicalize, param, serialize, QueryPatch, TAB_KEY};
use crate::usecase::ports::history::AddressHistory;
use crate::usecase::services::query_service::QueryService;

pub const DEFAULT_TAB: Tab = Tab::Static;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Static,
    Dynamic,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Static => "static",
            Tab::Dynamic => "dynamic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Static => "Static",
            Tab::Dynamic => "Dynamic",
        }
    }

    pub fn from_address(query: &str) -> Self {
        match param(query, TAB_KEY).as_deref() {
            Some("dynamic") => Tab::Dynamic,
            Some("static") => Tab::Static,
            _ => DEFAULT_TAB,
        }
    }
}

/// Long-lived services built once at startup.
#[derive(Clone)]
pub struct AppResources {
    pub service: Arc<QueryService>,
    pub store: Option<SettingsStore>,
}

/// Shared signals, provided as context by the root component.
#[derive(Clone, Copy)]
pub struct AppState {
    pub settings: Signal<Settings>,
    pub history: Signal<MemoryHistory>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(settings: Settings, status: String) -> Self {
        let initial_query = settings.initial_query.clone().unwrap_or_default();
        Self {
            settings: use_signal(move || settings),
            history: use_signal(move || MemoryHistory::new(initial_query)),
            status: use_signal(move || status),
        }
    }

    pub fn active_tab(&self) -> Tab {
        Tab::from_address(&self.history.read().current())
    }

    /// Merges `patch` onto the current address without reloading anything.
    pub fn update_address(mut self, patch: &QueryPatch) {
        let current = self.history.read().current();
        let next = serialize(&current, patch);
        self.history.write().replace(next);
    }

    /// Replaces the address with a hand-typed one, rewritten in canonical form.
    pub fn replace_address(mut self, raw: &str) {
        let page_size = self.settings.read().page_size();
        let next = canonicalize(raw, page_size);
        self.history.write().replace(next);
    }

    pub fn update_settings(mut self, store: Option<&SettingsStore>, edit: impl FnOnce(&mut Settings)) {
        edit(&mut self.settings.write());
        let Some(store) = store else {
            return;
        };
        let snapshot = self.settings.read().clone();
        match store.save(&snapshot) {
            Ok(()) => info!(
                scheme = ?snapshot.color_scheme,
                color = %snapshot.primary_color,
                "preferences updated"
            ),
            Err(err) => {
                error!(error = %err, "failed to save settings");
                self.status.set(format!("Failed to save settings: {err}"));
            }
        }
    }
}
