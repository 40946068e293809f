use dioxus::prelude::*;

use crate::domain::entities::grid::{PaginationState, PAGE_SIZES};
use crate::ui::theme::button_style;

pub fn range_label(pagination: PaginationState, total: usize) -> String {
    match pagination.visible_range(total) {
        Some((first, last)) => format!("{first}–{last} of {total}"),
        None => format!("0 of {total}"),
    }
}

#[component]
pub fn PaginationBar(
    pagination: PaginationState,
    total_count: usize,
    accent: &'static str,
    on_change: EventHandler<PaginationState>,
) -> Element {
    let page_count = pagination.page_count(total_count);
    let last_index = page_count - 1;
    let at_start = pagination.page_index == 0;
    let at_end = pagination.page_index >= last_index;
    let label = range_label(pagination, total_count);
    let page_number = pagination.page_index + 1;

    let go_to = move |page_index: usize| {
        on_change.call(PaginationState {
            page_index,
            ..pagination
        });
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: flex-end; gap: 8px; padding: 8px 0; font-size: 13px;",
            span { "Rows per page" }
            select {
                onchange: move |event| {
                    let page_size = event.value().parse().unwrap_or(pagination.page_size);
                    on_change.call(PaginationState { page_index: 0, page_size });
                },
                for size in PAGE_SIZES {
                    option { value: "{size}", selected: size == pagination.page_size, "{size}" }
                }
            }
            span { "{label}" }
            button {
                style: button_style(accent, false),
                disabled: at_start,
                onclick: move |_| go_to(0),
                "«"
            }
            button {
                style: button_style(accent, false),
                disabled: at_start,
                onclick: move |_| go_to(pagination.page_index.saturating_sub(1)),
                "‹"
            }
            span { "Page {page_number} of {page_count}" }
            button {
                style: button_style(accent, false),
                disabled: at_end,
                onclick: move |_| go_to((pagination.page_index + 1).min(last_index)),
                "›"
            }
            button {
                style: button_style(accent, false),
                disabled: at_end,
                onclick: move |_| go_to(last_index),
                "»"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_label_reports_window_and_total() {
        let second = PaginationState {
            page_index: 1,
            page_size: 10,
        };

        assert_eq!(range_label(second, 25), "11–20 of 25");
        assert_eq!(range_label(PaginationState::default(), 0), "0 of 0");
    }
}
