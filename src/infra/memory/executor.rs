use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::domain::entities::query::{
    FilterClause, FilterOperator, FilterValue, PageResult, QueryState, SortDirection,
};
use crate::domain::entities::user::{parse_date, Field, FieldKind, FieldValue, User};

/// Runs filter, search, sort, count and paginate, in that order, over a
/// borrowed dataset. Unknown fields and unsupported operators match nothing.
pub fn execute(dataset: &[User], state: &QueryState) -> PageResult {
    let clauses = match resolve_clauses(&state.filters) {
        Some(clauses) => clauses,
        None => {
            return PageResult {
                rows: Vec::new(),
                total_count: 0,
            }
        }
    };

    let search = state
        .search
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_lowercase);

    let mut matched = dataset
        .iter()
        .filter(|user| {
            clauses
                .iter()
                .all(|(field, clause)| clause_matches(user, *field, clause))
        })
        .filter(|user| {
            search
                .as_deref()
                .map_or(true, |needle| search_matches(user, needle))
        })
        .collect::<Vec<_>>();

    if let Some(sort) = &state.sort {
        match Field::from_name(&sort.key) {
            Some(field) => match sort.direction {
                SortDirection::Asc => matched.sort_by(|a, b| compare_users(a, b, field)),
                SortDirection::Desc => matched.sort_by(|a, b| compare_users(b, a, field)),
            },
            None => warn!(key = %sort.key, "ignoring sort on unknown field"),
        }
    }

    let total_count = matched.len();
    let rows = match state.page {
        Some(page) => matched
            .into_iter()
            .skip(page.offset())
            .take(page.size)
            .cloned()
            .collect::<Vec<_>>(),
        None => matched.into_iter().cloned().collect::<Vec<_>>(),
    };

    debug!(
        filters = state.filters.len(),
        total_count,
        returned = rows.len(),
        "executed query"
    );

    PageResult { rows, total_count }
}

/// `None` when any clause can never match.
fn resolve_clauses(filters: &[FilterClause]) -> Option<Vec<(Field, &FilterClause)>> {
    let mut resolved = Vec::with_capacity(filters.len());
    for clause in filters {
        let Some(field) = Field::from_name(&clause.key) else {
            warn!(key = %clause.key, "filter on unknown field matches nothing");
            return None;
        };
        if let FilterOperator::Unsupported(op) = &clause.operator {
            warn!(key = %clause.key, op = %op, "unsupported filter operator matches nothing");
            return None;
        }
        if !operator_applies(field.kind(), &clause.operator) {
            warn!(
                key = %clause.key,
                op = clause.operator.as_str(),
                "operator does not apply to this field and matches nothing"
            );
            return None;
        }
        resolved.push((field, clause));
    }
    Some(resolved)
}

fn operator_applies(kind: FieldKind, operator: &FilterOperator) -> bool {
    match kind {
        FieldKind::Text => !matches!(operator, FilterOperator::Unsupported(_)),
        FieldKind::Integer | FieldKind::Date => matches!(
            operator,
            FilterOperator::Eq
                | FilterOperator::Neq
                | FilterOperator::Gt
                | FilterOperator::Gte
                | FilterOperator::Lt
                | FilterOperator::Lte
                | FilterOperator::Between
        ),
        FieldKind::Boolean => matches!(operator, FilterOperator::Eq | FilterOperator::Neq),
    }
}

fn ordered_match(
    operator: &FilterOperator,
    ordering: Ordering,
    upper: impl FnOnce() -> Option<Ordering>,
) -> bool {
    match operator {
        FilterOperator::Eq => ordering == Ordering::Equal,
        FilterOperator::Neq => ordering != Ordering::Equal,
        FilterOperator::Gt => ordering == Ordering::Greater,
        FilterOperator::Gte => ordering != Ordering::Less,
        FilterOperator::Lt => ordering == Ordering::Less,
        FilterOperator::Lte => ordering != Ordering::Greater,
        FilterOperator::Between => {
            ordering != Ordering::Less && upper().is_some_and(|ord| ord != Ordering::Greater)
        }
        _ => false,
    }
}

fn number_operand(value: &FilterValue) -> Option<f64> {
    match value {
        FilterValue::Number { value, .. } => Some(*value),
        FilterValue::Text(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        FilterValue::Boolean(_) => None,
    }
}

fn text_match(operator: &FilterOperator, cell: &str, needle: &str, meta: Option<&str>) -> bool {
    match operator {
        FilterOperator::Eq => cell == needle,
        FilterOperator::Neq => cell != needle,
        FilterOperator::Includes => cell.to_lowercase().contains(&needle.to_lowercase()),
        FilterOperator::NotIncludes => !cell.to_lowercase().contains(&needle.to_lowercase()),
        FilterOperator::StartsWith => cell.to_lowercase().starts_with(&needle.to_lowercase()),
        FilterOperator::EndsWith => cell.to_lowercase().ends_with(&needle.to_lowercase()),
        other => ordered_match(other, cell.cmp(needle), || meta.map(|upper| cell.cmp(upper))),
    }
}

fn clause_matches(user: &User, field: Field, clause: &FilterClause) -> bool {
    let operator = &clause.operator;
    let meta = clause.meta.as_deref();

    match user.value(field) {
        FieldValue::Integer(cell) => {
            let Some(target) = number_operand(&clause.value) else {
                return false;
            };
            let cell = cell as f64;
            let upper = || {
                meta.and_then(|upper| upper.trim().parse::<f64>().ok())
                    .and_then(|upper| cell.partial_cmp(&upper))
            };
            cell.partial_cmp(&target)
                .is_some_and(|ordering| ordered_match(operator, ordering, upper))
        }
        FieldValue::Text(cell) => text_match(operator, cell, &clause.value.to_string(), meta),
        FieldValue::Boolean(cell) => match (operator, &clause.value) {
            (FilterOperator::Eq, FilterValue::Boolean(flag)) => cell == *flag,
            (FilterOperator::Neq, FilterValue::Boolean(flag)) => cell != *flag,
            _ => false,
        },
        FieldValue::Date(cell) => {
            if matches!(clause.value, FilterValue::Boolean(_)) {
                return false;
            }
            let Some(target) = parse_date(&clause.value.to_string()) else {
                return false;
            };
            let upper = || meta.and_then(parse_date).map(|upper| cell.cmp(&upper));
            ordered_match(operator, cell.cmp(&target), upper)
        }
    }
}

fn search_matches(user: &User, needle: &str) -> bool {
    Field::ALL
        .into_iter()
        .any(|field| user.display_value(field).to_lowercase().contains(needle))
}

fn compare_users(a: &User, b: &User, field: Field) -> Ordering {
    match (a.value(field), b.value(field)) {
        (FieldValue::Integer(x), FieldValue::Integer(y)) => x.cmp(&y),
        (FieldValue::Text(x), FieldValue::Text(y)) => x.cmp(y),
        (FieldValue::Boolean(x), FieldValue::Boolean(y)) => x.cmp(&y),
        (FieldValue::Date(x), FieldValue::Date(y)) => x.cmp(&y),
        (FieldValue::Date(_), _) => Ordering::Less,
        (_, FieldValue::Date(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
