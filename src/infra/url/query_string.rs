use crate::domain::coerce::coerce_value;
use crate::domain::entities::query::{
    FilterClause, FilterOperator, PageSpec, QueryState, SortDirection, SortSpec,
    DEFAULT_PAGE_SIZE,
};
use crate::infra::url::params::{parse_params, stringify_params, ParamMap, ParamValue};

pub const FIELDS_KEY: &str = "fields";
pub const SORT_KEY: &str = "sort";
pub const ORDER_KEY: &str = "order";
pub const PAGE_KEY: &str = "page";
pub const LIMIT_KEY: &str = "limit";
pub const SEARCH_KEY: &str = "search";
pub const TAB_KEY: &str = "tab";

/// Top-level overwrites merged onto an existing address.
/// `None` removes the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPatch {
    entries: Vec<(String, Option<ParamValue>)>,
}

impl QueryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: ParamValue) -> Self {
        self.entries.push((key.to_string(), Some(value)));
        self
    }

    pub fn remove(mut self, key: &str) -> Self {
        self.entries.push((key.to_string(), None));
        self
    }

    pub fn filters(self, filters: &[FilterClause]) -> Self {
        if filters.is_empty() {
            return self.remove(FIELDS_KEY);
        }
        let items = filters.iter().map(clause_to_param);
        self.set(FIELDS_KEY, ParamValue::list(items))
    }

    pub fn sort(self, sort: Option<&SortSpec>) -> Self {
        match sort {
            Some(sort) => self
                .set(SORT_KEY, ParamValue::leaf(sort.key.clone()))
                .set(ORDER_KEY, ParamValue::leaf(sort.direction.as_str())),
            None => self.remove(SORT_KEY).remove(ORDER_KEY),
        }
    }

    /// Writes the 1-based page number.
    pub fn page(self, page: PageSpec) -> Self {
        self.set(PAGE_KEY, ParamValue::leaf((page.index + 1).to_string()))
            .set(LIMIT_KEY, ParamValue::leaf(page.size.to_string()))
    }

    pub fn search(self, search: Option<&str>) -> Self {
        match search.filter(|text| !text.is_empty()) {
            Some(text) => self.set(SEARCH_KEY, ParamValue::leaf(text)),
            None => self.remove(SEARCH_KEY),
        }
    }

    pub fn tab(self, tab: &str) -> Self {
        self.set(TAB_KEY, ParamValue::leaf(tab))
    }

    pub fn apply(&self, params: &mut ParamMap) {
        for (key, value) in &self.entries {
            match value {
                Some(value) => {
                    params.insert(key.clone(), value.clone());
                }
                None => {
                    params.remove(key);
                }
            }
        }
    }
}

impl QueryState {
    /// Patch that writes every part of this state, removing absent parts.
    pub fn to_patch(&self) -> QueryPatch {
        let patch = QueryPatch::new()
            .filters(&self.filters)
            .sort(self.sort.as_ref())
            .search(self.search.as_deref());
        match self.page {
            Some(page) => patch.page(page),
            None => patch.remove(PAGE_KEY).remove(LIMIT_KEY),
        }
    }
}

fn clause_to_param(clause: &FilterClause) -> ParamValue {
    let mut map = ParamMap::new();
    map.insert("key".to_string(), ParamValue::leaf(clause.key.clone()));
    map.insert("op".to_string(), ParamValue::leaf(clause.operator.as_str()));
    map.insert("val".to_string(), ParamValue::leaf(clause.value.to_string()));
    if let Some(meta) = &clause.meta {
        map.insert("meta".to_string(), ParamValue::leaf(meta.clone()));
    }
    ParamValue::Map(map)
}

fn clause_from_param(value: &ParamValue) -> Option<FilterClause> {
    let map = value.as_map()?;
    let leaf = |name: &str| map.get(name).and_then(ParamValue::as_leaf);

    let key = leaf("key").filter(|key| !key.is_empty())?;
    let raw_value = leaf("val")?;
    let operator = leaf("op")
        .filter(|op| !op.trim().is_empty())
        .map(FilterOperator::parse)
        .unwrap_or(FilterOperator::Eq);

    Some(FilterClause {
        key: key.to_string(),
        operator,
        value: coerce_value(raw_value),
        meta: leaf("meta").map(str::to_string),
    })
}

fn positive_integer(value: Option<&ParamValue>) -> Option<usize> {
    value
        .and_then(ParamValue::as_leaf)
        .and_then(|text| text.trim().parse::<usize>().ok())
        .filter(|number| *number >= 1)
}

/// `default_page_size` fills in a missing or invalid `limit`.
pub fn state_from_params(params: &ParamMap, default_page_size: usize) -> QueryState {
    let filters = params
        .get(FIELDS_KEY)
        .and_then(ParamValue::as_list)
        .map(|items| items.into_iter().filter_map(clause_from_param).collect())
        .unwrap_or_default();

    let sort = params
        .get(SORT_KEY)
        .and_then(ParamValue::as_leaf)
        .filter(|key| !key.is_empty())
        .map(|key| SortSpec {
            key: key.to_string(),
            direction: params
                .get(ORDER_KEY)
                .and_then(ParamValue::as_leaf)
                .map(SortDirection::parse)
                .unwrap_or(SortDirection::Asc),
        });

    let page = if params.contains_key(PAGE_KEY) || params.contains_key(LIMIT_KEY) {
        let index = positive_integer(params.get(PAGE_KEY)).map_or(0, |page| page - 1);
        let size = positive_integer(params.get(LIMIT_KEY)).unwrap_or(default_page_size);
        Some(PageSpec::new(index, size))
    } else {
        None
    };

    let search = params
        .get(SEARCH_KEY)
        .and_then(ParamValue::as_leaf)
        .filter(|text| !text.is_empty())
        .map(str::to_string);

    QueryState {
        filters,
        sort,
        page,
        search,
    }
}

/// Total: malformed input degrades to an empty state.
pub fn parse(raw: &str) -> QueryState {
    parse_with_page_size(raw, DEFAULT_PAGE_SIZE)
}

pub fn parse_with_page_size(raw: &str, default_page_size: usize) -> QueryState {
    state_from_params(&parse_params(raw), default_page_size)
}

/// Leaf value of an arbitrary top-level key, e.g. `tab`.
pub fn param(raw: &str, key: &str) -> Option<String> {
    parse_params(raw)
        .get(key)
        .and_then(ParamValue::as_leaf)
        .map(str::to_string)
}

/// Merges `patch` onto the parameters already in `existing` and re-encodes.
pub fn serialize(existing: &str, patch: &QueryPatch) -> String {
    let mut params = parse_params(existing);
    patch.apply(&mut params);
    stringify_params(&params)
}

/// Rewrites a hand-edited address in canonical form. Unrelated keys such as
/// `tab` survive; clauses that cannot be read are dropped.
pub fn canonicalize(raw: &str, default_page_size: usize) -> String {
    serialize(raw, &parse_with_page_size(raw, default_page_size).to_patch())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::query::FilterValue;

    #[test]
    fn empty_and_missing_parts_parse_to_defaults() {
        assert_eq!(parse(""), QueryState::default());
        assert_eq!(parse("?"), QueryState::default());
        assert_eq!(parse("tab=dynamic"), QueryState::default());
    }

    #[test]
    fn malformed_input_never_panics_and_degrades() {
        let state = parse("%%%&fields=abc&sort=&page=-2&limit=0&=x&&");

        assert!(state.filters.is_empty());
        assert_eq!(state.sort, None);
        assert_eq!(state.page, Some(PageSpec::new(0, DEFAULT_PAGE_SIZE)));
    }

    #[test]
    fn clauses_without_key_or_value_are_dropped() {
        let state = parse(
            "fields[0][op]=eq&fields[0][val]=1&fields[1][key]=age&fields[2][key]=gender&fields[2][val]=Male",
        );

        assert_eq!(
            state.filters,
            vec![FilterClause::new(
                "gender",
                FilterOperator::Eq,
                FilterValue::Text("Male".to_string())
            )]
        );
    }

    #[test]
    fn order_without_sort_is_ignored_and_sort_defaults_ascending() {
        assert_eq!(parse("order=desc").sort, None);
        assert_eq!(parse("sort=age").sort, Some(SortSpec::asc("age")));
        assert_eq!(parse("sort=age&order=DESC").sort, Some(SortSpec::desc("age")));
    }

    #[test]
    fn page_is_one_based_in_the_address() {
        assert_eq!(parse("page=3&limit=25").page, Some(PageSpec::new(2, 25)));
        assert_eq!(parse("page=2").page, Some(PageSpec::new(1, 10)));
        assert_eq!(parse("limit=50").page, Some(PageSpec::new(0, 50)));
        assert_eq!(parse("page=abc&limit=x").page, Some(PageSpec::new(0, 10)));
    }

    #[test]
    fn serialize_keeps_unrelated_keys_and_removes_patched_none() {
        let existing = "tab=dynamic&sort=age&order=asc&page=4&limit=10";
        let patch = QueryPatch::new().sort(None).page(PageSpec::new(0, 25));

        let serialized = serialize(existing, &patch);

        assert_eq!(serialized, "limit=25&page=1&tab=dynamic");
    }

    #[test]
    fn empty_filter_list_removes_fields() {
        let existing = "fields[0][key]=age&fields[0][op]=gt&fields[0][val]=30&tab=dynamic";

        let serialized = serialize(existing, &QueryPatch::new().filters(&[]));

        assert_eq!(serialized, "tab=dynamic");
    }

    #[test]
    fn serialize_is_deterministic() {
        let state = QueryState {
            filters: vec![
                FilterClause::new("age", FilterOperator::Gte, FilterValue::number(30.0)),
                FilterClause::new(
                    "active_since",
                    FilterOperator::Between,
                    FilterValue::Text("2015-01-01".to_string()),
                )
                .with_meta("2019-12-31"),
            ],
            sort: Some(SortSpec::desc("age")),
            page: Some(PageSpec::new(1, 10)),
            search: None,
        };

        let first = serialize("", &state.to_patch());
        let second = serialize(&first, &state.to_patch());

        assert_eq!(first, second);
        assert_eq!(
            first,
            "fields[0].key=age&fields[0].op=gte&fields[0].val=30\
             &fields[1].key=active_since&fields[1].meta=2019-12-31&fields[1].op=between&fields[1].val=2015-01-01\
             &limit=10&order=desc&page=2&sort=age"
        );
    }

    #[test]
    fn numeric_values_are_written_back_as_typed() {
        let serialized = serialize(
            "",
            &parse("fields[0][key]=ip_address&fields[0][op]=includes&fields[0][val]=10.0&fields[1][key]=id&fields[1][val]=007")
                .to_patch(),
        );

        assert!(serialized.contains("fields[0].val=10.0"));
        assert!(serialized.contains("fields[1].val=007"));
    }

    #[test]
    fn missing_limit_takes_the_configured_default() {
        assert_eq!(
            parse_with_page_size("page=2", 50).page,
            Some(PageSpec::new(1, 50))
        );
        assert_eq!(
            parse_with_page_size("page=2&limit=25", 50).page,
            Some(PageSpec::new(1, 25))
        );
        assert_eq!(parse_with_page_size("tab=dynamic", 50).page, None);
    }

    #[test]
    fn canonicalize_rewrites_keys_and_drops_unreadable_clauses() {
        let canonical = canonicalize(
            "?tab=dynamic&fields[0][key]=gender&fields[0][val]=Male&fields[1][op]=eq&order=desc",
            DEFAULT_PAGE_SIZE,
        );

        assert_eq!(
            canonical,
            "fields[0].key=gender&fields[0].op=eq&fields[0].val=Male&tab=dynamic"
        );
        assert_eq!(canonicalize(&canonical, DEFAULT_PAGE_SIZE), canonical);
        assert_eq!(canonicalize("page=3", 25), "limit=25&page=3");
    }

    #[test]
    fn param_reads_arbitrary_keys() {
        assert_eq!(param("?tab=dynamic&page=2", TAB_KEY).as_deref(), Some("dynamic"));
        assert_eq!(param("page=2", TAB_KEY), None);
    }
}
