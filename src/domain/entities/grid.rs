use crate::domain::entities::query::{FilterOperator, FilterValue, DEFAULT_PAGE_SIZE};

pub const PAGE_SIZES: [usize; 6] = [10, 25, 50, 100, 250, 1000];

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub operator: FilterOperator,
    pub value: FilterValue,
    pub meta: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFilter {
    pub id: String,
    pub state: FilterState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSort {
    pub id: String,
    pub desc: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    pub fn page_count(self, total: usize) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        total.div_ceil(self.page_size).max(1)
    }

    /// 1-based inclusive row range shown for `total` rows, `None` when empty.
    pub fn visible_range(self, total: usize) -> Option<(usize, usize)> {
        let start = self.page_index.saturating_mul(self.page_size);
        if start >= total {
            return None;
        }
        Some((start + 1, (start + self.page_size).min(total)))
    }
}

/// The grid widget's native view of filters, sorting and paging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridState {
    pub column_filters: Vec<ColumnFilter>,
    pub sorting: Vec<ColumnSort>,
    pub pagination: PaginationState,
    pub global_filter: String,
}

impl GridState {
    pub fn filter_for(&self, id: &str) -> Option<&FilterState> {
        self.column_filters
            .iter()
            .find(|filter| filter.id == id)
            .map(|filter| &filter.state)
    }

    pub fn sort_for(&self, id: &str) -> Option<bool> {
        self.sorting.iter().find(|sort| sort.id == id).map(|sort| sort.desc)
    }

    /// Replaces the filter on `id`; `None` removes it.
    pub fn with_filter(&self, id: &str, state: Option<FilterState>) -> Vec<ColumnFilter> {
        let mut filters = self
            .column_filters
            .iter()
            .filter(|filter| filter.id != id)
            .cloned()
            .collect::<Vec<_>>();
        if let Some(state) = state {
            let position = self
                .column_filters
                .iter()
                .position(|filter| filter.id == id)
                .unwrap_or(filters.len());
            filters.insert(
                position.min(filters.len()),
                ColumnFilter {
                    id: id.to_string(),
                    state,
                },
            );
        }
        filters
    }

    /// Next sort after clicking a header: none, ascending, descending, none.
    pub fn cycle_sort(&self, id: &str) -> Vec<ColumnSort> {
        match self.sort_for(id) {
            None => vec![ColumnSort {
                id: id.to_string(),
                desc: false,
            }],
            Some(false) => vec![ColumnSort {
                id: id.to_string(),
                desc: true,
            }],
            Some(true) => Vec::new(),
        }
    }
}
