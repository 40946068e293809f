use dioxus::prelude::*;
use tracing::debug;

use crate::domain::entities::user::User;
use crate::infra::url::query_string::parse_with_page_size;
use crate::ui::components::data_grid::DataGrid;
use crate::ui::state::app_state::{AppResources, AppState};
use crate::ui::theme::accent_color;
use crate::usecase::ports::history::AddressHistory;
use crate::usecase::services::grid_sync::{
    filters_changed, from_grid_state, global_filter_changed, pagination_changed, sorting_changed,
    to_grid_state,
};

/// Server-style grid: the address is the source of truth and every change
/// round-trips through it before a new page is fetched.
#[component]
pub fn DynamicTable(max_height: f64) -> Element {
    let app_state = use_context::<AppState>();
    let resources = use_context::<AppResources>();
    let history = app_state.history;

    let settings_signal = app_state.settings;
    let grid = use_memo(move || {
        let page_size = settings_signal.read().page_size();
        to_grid_state(
            &parse_with_page_size(&history.read().current(), page_size),
            page_size,
        )
    });
    // Always paged, so the request matches what the pager shows.
    let query = use_memo(move || from_grid_state(&grid()));

    let mut rows = use_signal(Vec::<User>::new);
    let mut total_count = use_signal(|| 0_usize);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut reload = use_signal(|| 0_u64);

    let service = resources.service.clone();
    use_effect(move || {
        let state = query();
        let attempt = reload();
        let service = service.clone();
        let ticket = service.begin();
        loading.set(true);
        debug!(?ticket, attempt, "requesting page");

        spawn(async move {
            let result = service.fetch(ticket, &state).await;
            if !service.is_current(ticket) {
                debug!(?ticket, "discarding stale response");
                return;
            }
            match result {
                Ok(tagged) => {
                    total_count.set(tagged.value.total_count);
                    rows.set(tagged.value.rows);
                    error.set(None);
                }
                Err(err) => {
                    rows.set(Vec::new());
                    total_count.set(0);
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        });
    });

    let settings = app_state.settings.read();
    let scheme = settings.color_scheme;
    let accent = accent_color(settings.primary_color());

    rsx! {
        DataGrid {
            rows: rows(),
            total_count: total_count(),
            grid: grid(),
            loading: loading(),
            error: error(),
            scheme,
            accent,
            max_height,
            on_filters_change: move |filters: Vec<_>| {
                app_state.update_address(&filters_changed(&filters, grid.read().pagination));
            },
            on_sorting_change: move |sorting: Vec<_>| {
                app_state.update_address(&sorting_changed(&sorting));
            },
            on_pagination_change: move |pagination| {
                app_state.update_address(&pagination_changed(pagination));
            },
            on_global_filter_change: move |text: String| {
                app_state.update_address(&global_filter_changed(&text, grid.read().pagination));
            },
            on_retry: EventHandler::new(move |_| *reload.write() += 1),
        }
    }
}
