//! Translation between the address-backed [`QueryState`] and the grid's
//! [`GridState`], plus the patches emitted for each grid change event.

use crate::domain::entities::grid::{
    ColumnFilter, ColumnSort, FilterState, GridState, PaginationState,
};
use crate::domain::entities::query::{
    FilterClause, PageSpec, QueryState, SortDirection, SortSpec,
};
use crate::infra::url::query_string::QueryPatch;

/// An address without a page shows the first page of `default_page_size` rows.
pub fn to_grid_state(state: &QueryState, default_page_size: usize) -> GridState {
    let column_filters = state
        .filters
        .iter()
        .map(|clause| ColumnFilter {
            id: clause.key.clone(),
            state: FilterState {
                operator: clause.operator.clone(),
                value: clause.value.clone(),
                meta: clause.meta.clone(),
            },
        })
        .collect();

    let sorting = state
        .sort
        .iter()
        .map(|sort| ColumnSort {
            id: sort.key.clone(),
            desc: sort.direction == SortDirection::Desc,
        })
        .collect();

    let pagination = state
        .page
        .map(|page| PaginationState {
            page_index: page.index,
            page_size: page.size,
        })
        .unwrap_or(PaginationState {
            page_index: 0,
            page_size: default_page_size,
        });

    GridState {
        column_filters,
        sorting,
        pagination,
        global_filter: state.search.clone().unwrap_or_default(),
    }
}

pub fn from_grid_state(grid: &GridState) -> QueryState {
    QueryState {
        filters: clauses_from_filters(&grid.column_filters),
        sort: sort_from_sorting(&grid.sorting),
        page: Some(PageSpec::new(
            grid.pagination.page_index,
            grid.pagination.page_size,
        )),
        search: Some(grid.global_filter.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_string),
    }
}

fn clauses_from_filters(filters: &[ColumnFilter]) -> Vec<FilterClause> {
    filters
        .iter()
        .map(|filter| FilterClause {
            key: filter.id.clone(),
            operator: filter.state.operator.clone(),
            value: filter.state.value.clone(),
            meta: filter.state.meta.clone(),
        })
        .collect()
}

fn sort_from_sorting(sorting: &[ColumnSort]) -> Option<SortSpec> {
    sorting.first().map(|sort| SortSpec {
        key: sort.id.clone(),
        direction: if sort.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        },
    })
}

/// Rebuilds the whole `fields` list and returns to the first page.
pub fn filters_changed(filters: &[ColumnFilter], pagination: PaginationState) -> QueryPatch {
    QueryPatch::new()
        .filters(&clauses_from_filters(filters))
        .page(PageSpec::new(0, pagination.page_size))
}

/// Only the first sort is kept; an empty list clears `sort` and `order`.
pub fn sorting_changed(sorting: &[ColumnSort]) -> QueryPatch {
    QueryPatch::new().sort(sort_from_sorting(sorting).as_ref())
}

pub fn pagination_changed(pagination: PaginationState) -> QueryPatch {
    QueryPatch::new().page(PageSpec::new(pagination.page_index, pagination.page_size))
}

pub fn global_filter_changed(text: &str, pagination: PaginationState) -> QueryPatch {
    QueryPatch::new()
        .search(Some(text.trim()))
        .page(PageSpec::new(0, pagination.page_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::query::{FilterOperator, FilterValue};
    use crate::domain::entities::query::DEFAULT_PAGE_SIZE;
    use crate::infra::url::query_string::{parse, serialize};

    fn gender_filter(value: &str) -> ColumnFilter {
        ColumnFilter {
            id: "gender".to_string(),
            state: FilterState {
                operator: FilterOperator::Eq,
                value: FilterValue::Text(value.to_string()),
                meta: None,
            },
        }
    }

    #[test]
    fn absent_page_defaults_to_first_page_of_ten() {
        let grid = to_grid_state(&QueryState::default(), DEFAULT_PAGE_SIZE);

        assert_eq!(grid.pagination, PaginationState::default());
        assert!(grid.sorting.is_empty());
        assert!(grid.column_filters.is_empty());
    }

    #[test]
    fn absent_page_uses_the_configured_page_size() {
        let grid = to_grid_state(&parse("tab=dynamic&sort=age"), 50);

        assert_eq!(
            grid.pagination,
            PaginationState {
                page_index: 0,
                page_size: 50
            }
        );
        assert_eq!(from_grid_state(&grid).page, Some(PageSpec::new(0, 50)));
    }

    #[test]
    fn query_state_maps_to_grid_state() {
        let state = parse(
            "fields[0][key]=active&fields[0][op]=eq&fields[0][val]=true&fields[0][meta]=x&sort=age&order=desc&page=2&limit=25&search=ann",
        );

        let grid = to_grid_state(&state, 50);

        assert_eq!(
            grid.column_filters,
            vec![ColumnFilter {
                id: "active".to_string(),
                state: FilterState {
                    operator: FilterOperator::Eq,
                    value: FilterValue::Boolean(true),
                    meta: Some("x".to_string()),
                },
            }]
        );
        assert_eq!(
            grid.sorting,
            vec![ColumnSort {
                id: "age".to_string(),
                desc: true
            }]
        );
        assert_eq!(
            grid.pagination,
            PaginationState {
                page_index: 1,
                page_size: 25
            }
        );
        assert_eq!(grid.global_filter, "ann");
        assert_eq!(from_grid_state(&grid), state);
    }

    #[test]
    fn grid_event_handlers_are_idempotent() {
        let filters = vec![gender_filter("Male")];
        let sorting = vec![
            ColumnSort {
                id: "age".to_string(),
                desc: false,
            },
            ColumnSort {
                id: "email".to_string(),
                desc: true,
            },
        ];
        let pagination = PaginationState {
            page_index: 3,
            page_size: 50,
        };

        assert_eq!(
            filters_changed(&filters, pagination),
            filters_changed(&filters, pagination)
        );
        assert_eq!(sorting_changed(&sorting), sorting_changed(&sorting));
        assert_eq!(pagination_changed(pagination), pagination_changed(pagination));

        let once = serialize("tab=dynamic", &sorting_changed(&sorting));
        let twice = serialize(&once, &sorting_changed(&sorting));
        assert_eq!(once, twice);
        assert_eq!(once, "order=asc&sort=age&tab=dynamic");
    }

    #[test]
    fn filter_change_resets_page_but_keeps_size() {
        let pagination = PaginationState {
            page_index: 4,
            page_size: 25,
        };

        let address = serialize(
            "page=5&limit=25",
            &filters_changed(&[gender_filter("Female")], pagination),
        );
        let state = parse(&address);

        assert_eq!(state.page, Some(PageSpec::new(0, 25)));
        assert_eq!(state.filters.len(), 1);
    }

    #[test]
    fn clearing_sort_removes_both_keys() {
        let address = serialize("sort=age&order=desc&page=1", &sorting_changed(&[]));

        assert_eq!(address, "page=1");
    }

    #[test]
    fn pagination_change_writes_one_based_page() {
        let address = serialize(
            "",
            &pagination_changed(PaginationState {
                page_index: 0,
                page_size: 100,
            }),
        );

        assert_eq!(address, "limit=100&page=1");
    }

    #[test]
    fn blank_global_filter_removes_search() {
        let address = serialize(
            "search=ann&limit=10&page=3",
            &global_filter_changed("   ", PaginationState::default()),
        );

        assert_eq!(address, "limit=10&page=1");
    }
}
