use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
    pub age: i64,
    pub ip_address: String,
    pub active: bool,
    pub active_since: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    FirstName,
    LastName,
    Email,
    Gender,
    Age,
    IpAddress,
    Active,
    ActiveSince,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Text,
    Boolean,
    Date,
}

/// Typed view of a single record cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Integer(i64),
    Text(&'a str),
    Boolean(bool),
    Date(NaiveDate),
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Id,
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Gender,
        Field::Age,
        Field::IpAddress,
        Field::Active,
        Field::ActiveSince,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Email => "email",
            Field::Gender => "gender",
            Field::Age => "age",
            Field::IpAddress => "ip_address",
            Field::Active => "active",
            Field::ActiveSince => "active_since",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Id | Field::Age => FieldKind::Integer,
            Field::Active => FieldKind::Boolean,
            Field::ActiveSince => FieldKind::Date,
            Field::FirstName
            | Field::LastName
            | Field::Email
            | Field::Gender
            | Field::IpAddress => FieldKind::Text,
        }
    }
}

/// Accepts `YYYY-MM-DD` and `YYYY/MM/DD`.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%Y/%m/%d"))
        .ok()
}

impl User {
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Id => FieldValue::Integer(self.id),
            Field::FirstName => FieldValue::Text(&self.first_name),
            Field::LastName => FieldValue::Text(&self.last_name),
            Field::Email => FieldValue::Text(&self.email),
            Field::Gender => FieldValue::Text(&self.gender),
            Field::Age => FieldValue::Integer(self.age),
            Field::IpAddress => FieldValue::Text(&self.ip_address),
            Field::Active => FieldValue::Boolean(self.active),
            Field::ActiveSince => match parse_date(&self.active_since) {
                Some(date) => FieldValue::Date(date),
                None => FieldValue::Text(&self.active_since),
            },
        }
    }

    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::Id => self.id.to_string(),
            Field::FirstName => self.first_name.clone(),
            Field::LastName => self.last_name.clone(),
            Field::Email => self.email.clone(),
            Field::Gender => self.gender.clone(),
            Field::Age => self.age.to_string(),
            Field::IpAddress => self.ip_address.clone(),
            Field::Active => self.active.to_string(),
            Field::ActiveSince => self.active_since.clone(),
        }
    }
}
