use std::fmt;

use crate::domain::entities::user::User;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Anything other than `desc` sorts ascending.
    pub fn parse(text: &str) -> Self {
        if text.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub index: usize,
    pub size: usize,
}

impl PageSpec {
    /// A zero size is replaced by [`DEFAULT_PAGE_SIZE`].
    pub fn new(index: usize, size: usize) -> Self {
        Self {
            index,
            size: if size == 0 { DEFAULT_PAGE_SIZE } else { size },
        }
    }

    pub fn offset(self) -> usize {
        self.index.saturating_mul(self.size)
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Includes,
    NotIncludes,
    StartsWith,
    EndsWith,
    Between,
    /// Kept verbatim so it survives the address; never matches.
    Unsupported(String),
}

impl FilterOperator {
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "eq" | "=" | "==" => FilterOperator::Eq,
            "neq" | "ne" | "!=" | "<>" => FilterOperator::Neq,
            "gt" | ">" => FilterOperator::Gt,
            "gte" | ">=" => FilterOperator::Gte,
            "lt" | "<" => FilterOperator::Lt,
            "lte" | "<=" => FilterOperator::Lte,
            "includes" | "contains" => FilterOperator::Includes,
            "not_includes" | "not_contains" | "notIncludes" | "notContains" => {
                FilterOperator::NotIncludes
            }
            "starts_with" | "startswith" | "startsWith" => FilterOperator::StartsWith,
            "ends_with" | "endswith" | "endsWith" => FilterOperator::EndsWith,
            "between" => FilterOperator::Between,
            other => FilterOperator::Unsupported(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterOperator::Eq => "eq",
            FilterOperator::Neq => "neq",
            FilterOperator::Gt => "gt",
            FilterOperator::Gte => "gte",
            FilterOperator::Lt => "lt",
            FilterOperator::Lte => "lte",
            FilterOperator::Includes => "includes",
            FilterOperator::NotIncludes => "not_includes",
            FilterOperator::StartsWith => "starts_with",
            FilterOperator::EndsWith => "ends_with",
            FilterOperator::Between => "between",
            FilterOperator::Unsupported(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    /// `raw` is the text as it was written; text columns match against it
    /// and the address writes it back unchanged.
    Number { value: f64, raw: String },
    Boolean(bool),
}

impl FilterValue {
    pub fn number(value: f64) -> Self {
        FilterValue::Number {
            value,
            raw: format_number(value),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(text) => write!(f, "{text}"),
            FilterValue::Number { raw, .. } => write!(f, "{raw}"),
            FilterValue::Boolean(flag) => write!(f, "{flag}"),
        }
    }
}

/// Integral values print without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterClause {
    pub key: String,
    pub operator: FilterOperator,
    pub value: FilterValue,
    pub meta: Option<String>,
}

impl FilterClause {
    pub fn new(key: impl Into<String>, operator: FilterOperator, value: FilterValue) -> Self {
        Self {
            key: key.into(),
            operator,
            value,
            meta: None,
        }
    }
}

#[cfg(test)]
impl FilterClause {
    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    pub filters: Vec<FilterClause>,
    pub sort: Option<SortSpec>,
    pub page: Option<PageSpec>,
    pub search: Option<String>,
}

#[cfg(test)]
impl QueryState {
    /// Clause order is ignored.
    pub fn equivalent(&self, other: &QueryState) -> bool {
        self.sort == other.sort
            && self.page == other.page
            && self.search == other.search
            && self.filters.len() == other.filters.len()
            && self
                .filters
                .iter()
                .all(|clause| other.filters.contains(clause))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageResult {
    pub rows: Vec<User>,
    pub total_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_aliases_normalize() {
        assert_eq!(FilterOperator::parse(">="), FilterOperator::Gte);
        assert_eq!(FilterOperator::parse("contains"), FilterOperator::Includes);
        assert_eq!(FilterOperator::parse("startsWith"), FilterOperator::StartsWith);
        assert_eq!(FilterOperator::parse("endsWith"), FilterOperator::EndsWith);
        assert_eq!(FilterOperator::parse("notContains"), FilterOperator::NotIncludes);
        assert_eq!(FilterOperator::parse("notIncludes"), FilterOperator::NotIncludes);
        assert_eq!(
            FilterOperator::parse("regex"),
            FilterOperator::Unsupported("regex".to_string())
        );
        assert_eq!(FilterOperator::parse("regex").as_str(), "regex");
    }

    #[test]
    fn page_spec_never_has_zero_size() {
        assert_eq!(PageSpec::new(3, 0).size, DEFAULT_PAGE_SIZE);
        assert_eq!(PageSpec::new(3, 25).offset(), 75);
    }

    #[test]
    fn number_values_print_as_written() {
        assert_eq!(FilterValue::number(42.0).to_string(), "42");
        assert_eq!(FilterValue::number(2.5).to_string(), "2.5");
        let written = FilterValue::Number {
            value: 7.0,
            raw: "007".to_string(),
        };
        assert_eq!(written.to_string(), "007");
    }
}
