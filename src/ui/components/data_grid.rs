use std::collections::BTreeSet;

use dioxus::prelude::*;
use tracing::{debug, info};

use crate::domain::entities::grid::{ColumnFilter, ColumnSort, GridState, PaginationState};
use crate::domain::entities::user::User;
use crate::infra::settings::store::ColorScheme;
use crate::ui::columns::{header_groups, USER_COLUMNS};
use crate::ui::components::filter_editor::FilterEditor;
use crate::ui::components::pagination::PaginationBar;
use crate::ui::theme::{button_style, palette, table_container_style, table_header_cell_style};

pub fn sort_indicator(desc: Option<bool>) -> &'static str {
    match desc {
        None => "",
        Some(false) => " ▲",
        Some(true) => " ▼",
    }
}

/// Controlled table: every change is reported upward and rendered only once
/// the owner feeds the new `grid` back in.
#[component]
pub fn DataGrid(
    rows: Vec<User>,
    total_count: usize,
    grid: GridState,
    loading: bool,
    error: Option<String>,
    scheme: ColorScheme,
    accent: &'static str,
    max_height: f64,
    on_filters_change: EventHandler<Vec<ColumnFilter>>,
    on_sorting_change: EventHandler<Vec<ColumnSort>>,
    on_pagination_change: EventHandler<PaginationState>,
    on_global_filter_change: EventHandler<String>,
    on_retry: Option<EventHandler<()>>,
) -> Element {
    let mut selected = use_signal(BTreeSet::<i64>::new);
    let colors = palette(scheme);
    let border = colors.border;
    let muted = colors.muted;
    let surface = colors.surface;
    let header_style = table_header_cell_style(scheme);
    let cell_style = format!(
        "border-bottom: 1px solid {}; padding: 4px 8px; white-space: nowrap;",
        border
    );
    let groups = header_groups(&USER_COLUMNS);

    let page_ids: Vec<i64> = rows.iter().map(|user| user.id).collect();
    let selected_snapshot = selected.read().clone();
    let all_selected =
        !page_ids.is_empty() && page_ids.iter().all(|id| selected_snapshot.contains(id));
    let selected_count = selected_snapshot.len();
    let global_filter = grid.global_filter.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; flex: 1; min-height: 0;",
            div {
                style: "display: flex; align-items: center; gap: 12px; padding: 8px 0;",
                input {
                    style: "padding: 4px 8px; border: 1px solid {border}; border-radius: 4px; min-width: 240px;",
                    placeholder: "Search all columns",
                    value: "{global_filter}",
                    onchange: move |event| on_global_filter_change.call(event.value()),
                }
                span { style: "font-size: 12px; color: {muted};", "{selected_count} selected" }
            }

            div {
                style: table_container_style(max_height),
                table { style: "border-collapse: collapse; width: 100%; background: {surface};",
                    thead {
                        tr {
                            th { style: "{header_style}" }
                            for (label, span) in groups.iter().copied() {
                                th { style: "{header_style} text-align: center;", colspan: "{span}", "{label}" }
                            }
                        }
                        tr {
                            th { style: "{header_style}",
                                input {
                                    r#type: "checkbox",
                                    checked: all_selected,
                                    onclick: {
                                        let page_ids = page_ids.clone();
                                        move |_| {
                                            let mut next = selected.write();
                                            if all_selected {
                                                for id in &page_ids {
                                                    next.remove(id);
                                                }
                                            } else {
                                                next.extend(page_ids.iter().copied());
                                            }
                                            debug!(selected = next.len(), "selection changed");
                                        }
                                    }
                                }
                            }
                            {USER_COLUMNS.iter().map(|column| {
                                let column = *column;
                                let indicator = sort_indicator(grid.sort_for(column.id()));
                                let next_sorting = grid.cycle_sort(column.id());
                                let cursor = if column.sortable { "pointer" } else { "default" };
                                let title = column.header;
                                rsx!(
                                    th {
                                        style: "{header_style} cursor: {cursor};",
                                        onclick: move |_| {
                                            if column.sortable {
                                                on_sorting_change.call(next_sorting.clone());
                                            }
                                        },
                                        "{title}{indicator}"
                                    }
                                )
                            })}
                        }
                        tr {
                            th { style: "{header_style}" }
                            {USER_COLUMNS.iter().map(|column| {
                                let column = *column;
                                let state = grid.filter_for(column.id()).cloned();
                                let grid = grid.clone();
                                rsx!(
                                    th { style: "{header_style}",
                                        FilterEditor {
                                            column,
                                            state,
                                            on_change: move |next| {
                                                on_filters_change.call(grid.with_filter(column.id(), next));
                                            },
                                        }
                                    }
                                )
                            })}
                        }
                    }
                    tbody {
                        {rows.iter().map(|user| {
                            let user = user.clone();
                            let id = user.id;
                            let is_selected = selected_snapshot.contains(&id);
                            let row_style = if is_selected { "background: #eef4ff;" } else { "" };
                            rsx!(
                                tr {
                                    style: "{row_style}",
                                    onclick: move |_| info!(user_id = id, "row clicked"),
                                    td { style: "{cell_style} text-align: center;",
                                        input {
                                            r#type: "checkbox",
                                            checked: is_selected,
                                            onclick: move |event| {
                                                event.stop_propagation();
                                                let mut next = selected.write();
                                                if !next.remove(&id) {
                                                    next.insert(id);
                                                }
                                                debug!(selected = next.len(), "selection changed");
                                            }
                                        }
                                    }
                                    {USER_COLUMNS.iter().map(|column| {
                                        let text = user.display_value(column.field);
                                        rsx!(td { style: "{cell_style}", "{text}" })
                                    })}
                                }
                            )
                        })}
                    }
                }

                if rows.is_empty() && !loading && error.is_none() {
                    div { style: "padding: 24px; text-align: center; color: {muted};", "No records" }
                }

                if loading {
                    div {
                        style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(128,128,128,0.25); z-index: 5;",
                        "Loading…"
                    }
                }
            }

            if let Some(message) = error {
                div {
                    style: "display: flex; align-items: center; gap: 12px; padding: 8px 12px; margin-top: 8px; border: 1px solid #fa5252; border-radius: 4px; color: #fa5252;",
                    span { "Failed to load records: {message}" }
                    if let Some(retry) = on_retry {
                        button {
                            style: button_style(accent, true),
                            onclick: move |_| retry.call(()),
                            "Retry"
                        }
                    }
                }
            }

            PaginationBar {
                pagination: grid.pagination,
                total_count,
                accent,
                on_change: move |next| on_pagination_change.call(next),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_indicator_follows_direction() {
        assert_eq!(sort_indicator(None), "");
        assert_eq!(sort_indicator(Some(false)), " ▲");
        assert_eq!(sort_indicator(Some(true)), " ▼");
    }
}
