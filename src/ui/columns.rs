use crate::domain::coerce::coerce_value;
use crate::domain::entities::grid::FilterState;
use crate::domain::entities::query::{FilterOperator, FilterValue};
use crate::domain::entities::user::Field;

pub const GENDER_OPTIONS: [&str; 2] = ["Female", "Male"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Number,
    Text,
    Gender,
    Boolean,
    Date,
}

impl FilterKind {
    pub fn operators(self) -> Vec<FilterOperator> {
        match self {
            FilterKind::Number | FilterKind::Date => vec![
                FilterOperator::Eq,
                FilterOperator::Neq,
                FilterOperator::Gt,
                FilterOperator::Gte,
                FilterOperator::Lt,
                FilterOperator::Lte,
                FilterOperator::Between,
            ],
            FilterKind::Text => vec![
                FilterOperator::Includes,
                FilterOperator::NotIncludes,
                FilterOperator::Eq,
                FilterOperator::Neq,
                FilterOperator::StartsWith,
                FilterOperator::EndsWith,
            ],
            FilterKind::Gender | FilterKind::Boolean => vec![FilterOperator::Eq],
        }
    }

    pub fn default_operator(self) -> FilterOperator {
        match self {
            FilterKind::Text => FilterOperator::Includes,
            _ => FilterOperator::Eq,
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            FilterKind::Number => "number",
            FilterKind::Date => "date",
            _ => "text",
        }
    }

    /// Filter for a raw editor value; blank input removes the filter.
    pub fn filter_state(
        self,
        operator: FilterOperator,
        raw: &str,
        meta: Option<String>,
    ) -> Option<FilterState> {
        if raw.trim().is_empty() {
            return None;
        }
        let value = match self {
            FilterKind::Text | FilterKind::Gender | FilterKind::Date => {
                FilterValue::Text(raw.to_string())
            }
            FilterKind::Number | FilterKind::Boolean => coerce_value(raw),
        };
        let meta = match operator {
            FilterOperator::Between => meta.filter(|meta| !meta.trim().is_empty()),
            _ => None,
        };
        Some(FilterState {
            operator,
            value,
            meta,
        })
    }
}

pub fn operator_label(operator: &FilterOperator) -> &str {
    match operator {
        FilterOperator::Eq => "equals",
        FilterOperator::Neq => "not equal",
        FilterOperator::Gt => "greater than",
        FilterOperator::Gte => "greater or equal",
        FilterOperator::Lt => "less than",
        FilterOperator::Lte => "less or equal",
        FilterOperator::Includes => "includes",
        FilterOperator::NotIncludes => "not includes",
        FilterOperator::StartsWith => "starts with",
        FilterOperator::EndsWith => "ends with",
        FilterOperator::Between => "between",
        FilterOperator::Unsupported(raw) => raw,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub field: Field,
    pub header: &'static str,
    pub group: Option<&'static str>,
    pub filter: FilterKind,
    pub sortable: bool,
}

impl ColumnDef {
    const fn new(field: Field, header: &'static str, filter: FilterKind) -> Self {
        Self {
            field,
            header,
            group: None,
            filter,
            sortable: true,
        }
    }

    const fn in_group(mut self, group: &'static str) -> Self {
        self.group = Some(group);
        self
    }

    const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn id(&self) -> &'static str {
        self.field.name()
    }
}

pub const USER_COLUMNS: [ColumnDef; 9] = [
    ColumnDef::new(Field::Id, "User ID", FilterKind::Number),
    ColumnDef::new(Field::FirstName, "First Name", FilterKind::Text).in_group("Name"),
    ColumnDef::new(Field::LastName, "Last Name", FilterKind::Text).in_group("Name"),
    ColumnDef::new(Field::Email, "Email", FilterKind::Text),
    ColumnDef::new(Field::Gender, "Gender", FilterKind::Gender),
    ColumnDef::new(Field::Age, "Age", FilterKind::Number),
    ColumnDef::new(Field::IpAddress, "IP Address", FilterKind::Text).unsortable(),
    ColumnDef::new(Field::Active, "Active", FilterKind::Boolean),
    ColumnDef::new(Field::ActiveSince, "Active Since", FilterKind::Date),
];

/// Header groups as `(label, span)`; ungrouped columns get an empty label.
pub fn header_groups(columns: &[ColumnDef]) -> Vec<(&'static str, usize)> {
    let mut groups: Vec<(Option<&'static str>, usize)> = Vec::new();
    for column in columns {
        if let Some((group, span)) = groups.last_mut() {
            if column.group.is_some() && *group == column.group {
                *span += 1;
                continue;
            }
        }
        groups.push((column.group, 1));
    }
    groups
        .into_iter()
        .map(|(group, span)| (group.unwrap_or(""), span))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_columns_share_one_header_group() {
        let groups = header_groups(&USER_COLUMNS);

        assert_eq!(groups.len(), 8);
        assert_eq!(groups[1], ("Name", 2));
        assert_eq!(groups.iter().map(|(_, span)| span).sum::<usize>(), 9);
    }

    #[test]
    fn blank_editor_value_removes_filter() {
        assert_eq!(
            FilterKind::Text.filter_state(FilterOperator::Includes, "  ", None),
            None
        );
    }

    #[test]
    fn editor_values_are_typed_per_kind() {
        let number = FilterKind::Number
            .filter_state(FilterOperator::Between, "20", Some("30".to_string()))
            .expect("filter");
        let gender = FilterKind::Gender
            .filter_state(FilterOperator::Eq, "Male", Some("ignored".to_string()))
            .expect("filter");

        assert_eq!(number.value, FilterValue::number(20.0));
        assert_eq!(number.meta.as_deref(), Some("30"));
        assert_eq!(gender.value, FilterValue::Text("Male".to_string()));
        assert_eq!(gender.meta, None);
    }

    #[test]
    fn text_editor_keeps_numeric_looking_input_as_text() {
        let ip = FilterKind::Text
            .filter_state(FilterOperator::Includes, "10.0", None)
            .expect("filter");

        assert_eq!(ip.value, FilterValue::Text("10.0".to_string()));
    }

    #[test]
    fn ip_address_is_not_sortable() {
        let ip = USER_COLUMNS
            .iter()
            .find(|column| column.field == Field::IpAddress)
            .expect("ip column");

        assert!(!ip.sortable);
        assert!(USER_COLUMNS.iter().filter(|column| column.sortable).count() == 8);
    }
}
