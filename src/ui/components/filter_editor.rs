use dioxus::prelude::*;

use crate::domain::entities::grid::FilterState;
use crate::domain::entities::query::FilterOperator;
use crate::ui::columns::{operator_label, ColumnDef, FilterKind, GENDER_OPTIONS};

const EDITOR_STYLE: &str =
    "width: 100%; box-sizing: border-box; padding: 2px 4px; font-size: 12px; border: 1px solid #ced4da; border-radius: 4px;";

/// Per-column filter cell. Emits `None` when the value is cleared.
#[component]
pub fn FilterEditor(
    column: ColumnDef,
    state: Option<FilterState>,
    on_change: EventHandler<Option<FilterState>>,
) -> Element {
    let kind = column.filter;
    let mut pending_operator = use_signal(move || kind.default_operator());

    let operator = state
        .as_ref()
        .map(|state| state.operator.clone())
        .unwrap_or_else(|| pending_operator());
    let value_text = state
        .as_ref()
        .map(|state| state.value.to_string())
        .unwrap_or_default();
    let meta_text = state
        .as_ref()
        .and_then(|state| state.meta.clone())
        .unwrap_or_default();

    match kind {
        FilterKind::Gender | FilterKind::Boolean => {
            let choices: Vec<&'static str> = match kind {
                FilterKind::Gender => GENDER_OPTIONS.to_vec(),
                _ => vec!["true", "false"],
            };
            rsx! {
                select {
                    style: EDITOR_STYLE,
                    onchange: move |event| {
                        on_change.call(kind.filter_state(FilterOperator::Eq, &event.value(), None));
                    },
                    option { value: "", selected: value_text.is_empty(), "Any" }
                    for choice in choices {
                        option { value: "{choice}", selected: value_text == choice, "{choice}" }
                    }
                }
            }
        }
        _ => {
            let operator_name = operator.as_str().to_string();
            let is_between = operator == FilterOperator::Between;
            let value_for_operator = value_text.clone();
            let meta_for_operator = meta_text.clone();
            let operator_for_value = operator.clone();
            let meta_for_value = meta_text.clone();
            let value_for_meta = value_text.clone();

            rsx! {
                div {
                    style: "display: flex; flex-direction: column; gap: 2px; min-width: 96px;",
                    select {
                        style: EDITOR_STYLE,
                        onchange: move |event| {
                            let next = FilterOperator::parse(&event.value());
                            pending_operator.set(next.clone());
                            if !value_for_operator.is_empty() {
                                on_change.call(kind.filter_state(
                                    next,
                                    &value_for_operator,
                                    Some(meta_for_operator.clone()),
                                ));
                            }
                        },
                        {kind.operators().into_iter().map(|candidate| {
                            let wire = candidate.as_str().to_string();
                            let label = operator_label(&candidate).to_string();
                            let selected = wire == operator_name;
                            rsx!(option { value: "{wire}", selected, "{label}" })
                        })}
                    }
                    input {
                        style: EDITOR_STYLE,
                        r#type: kind.input_type(),
                        placeholder: "Filter value",
                        value: "{value_text}",
                        onchange: move |event| {
                            on_change.call(kind.filter_state(
                                operator_for_value.clone(),
                                &event.value(),
                                Some(meta_for_value.clone()),
                            ));
                        },
                    }
                    if is_between {
                        input {
                            style: EDITOR_STYLE,
                            r#type: kind.input_type(),
                            placeholder: "Upper bound",
                            value: "{meta_text}",
                            onchange: move |event| {
                                on_change.call(kind.filter_state(
                                    FilterOperator::Between,
                                    &value_for_meta,
                                    Some(event.value()),
                                ));
                            },
                        }
                    }
                }
            }
        }
    }
}
