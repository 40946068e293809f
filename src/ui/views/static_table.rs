use std::sync::Arc;

use dioxus::prelude::*;
use tracing::error;

use crate::domain::entities::grid::{GridState, PaginationState};
use crate::domain::entities::user::User;
use crate::infra::memory::executor::execute;
use crate::ui::components::data_grid::DataGrid;
use crate::ui::state::app_state::{AppResources, AppState};
use crate::ui::theme::accent_color;
use crate::usecase::services::grid_sync::from_grid_state;

/// Client-side grid: the whole dataset is held locally and the table state
/// never leaves this component.
#[component]
pub fn StaticTable(max_height: f64) -> Element {
    let app_state = use_context::<AppState>();
    let resources = use_context::<AppResources>();

    let (users, load_error) = use_hook(|| match resources.service.all_users() {
        Ok(users) => (Arc::<[User]>::from(users), None),
        Err(err) => {
            error!(error = %err, "failed to load users for static table");
            (Arc::<[User]>::from(Vec::new()), Some(err.to_string()))
        }
    });

    let page_size = app_state.settings.read().page_size();
    let mut grid = use_signal(move || GridState {
        pagination: PaginationState {
            page_index: 0,
            page_size,
        },
        ..GridState::default()
    });
    let page = use_memo(move || execute(&users, &from_grid_state(&grid.read())));

    let settings = app_state.settings.read();
    let scheme = settings.color_scheme;
    let accent = accent_color(settings.primary_color());
    let current = page.read();

    rsx! {
        DataGrid {
            rows: current.rows.clone(),
            total_count: current.total_count,
            grid: grid(),
            loading: false,
            error: load_error,
            scheme,
            accent,
            max_height,
            on_filters_change: move |filters| {
                let mut next = grid.write();
                next.column_filters = filters;
                next.pagination.page_index = 0;
            },
            on_sorting_change: move |sorting| grid.write().sorting = sorting,
            on_pagination_change: move |pagination| grid.write().pagination = pagination,
            on_global_filter_change: move |text: String| {
                let mut next = grid.write();
                next.global_filter = text;
                next.pagination.page_index = 0;
            },
        }
    }
}
