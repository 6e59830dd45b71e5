//! Database query request bodies built from `--filter` / `--sort` style
//! strings.
//!
//! Filters are `Property=Value`; the database schema decides which condition
//! the value becomes. Sorts are `Property` or `Property:desc`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value, json};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid filter syntax: {0:?} (expected \"Property=Value\")")]
    InvalidFilter(String),
    #[error("Property {name:?} not found (available: {available})")]
    UnknownProperty { name: String, available: String },
    #[error("Filtering by property type {0:?} is not supported")]
    UnsupportedType(String),
    #[error("Property {property:?} is a number but {value:?} is not")]
    InvalidNumber { property: String, value: String },
}

/// The parts of a database schema the builders need: property name to type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DatabaseSchema {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub properties: IndexMap<String, PropertySchema>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sort {
    pub property: String,
    pub direction: SortDirection,
}

/// Body of a database query request. Absent parts are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,
}

impl QueryRequest {
    pub fn build<F, S>(
        filters: &[F],
        sorts: &[S],
        schema: &DatabaseSchema,
    ) -> Result<Self, QueryError>
    where
        F: AsRef<str>,
        S: AsRef<str>,
    {
        Ok(Self {
            filter: build_filter(filters, schema)?,
            sorts: build_sorts(sorts),
        })
    }
}

/// `None` for no filters, the bare condition for one, `{"and": [...]}` for more.
pub fn build_filter<F: AsRef<str>>(
    filters: &[F],
    schema: &DatabaseSchema,
) -> Result<Option<Value>, QueryError> {
    let mut conditions = filters
        .iter()
        .map(|raw| parse_filter(raw.as_ref(), schema))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(match conditions.len() {
        0 => None,
        1 => conditions.pop(),
        _ => Some(json!({ "and": conditions })),
    })
}

fn parse_filter(raw: &str, schema: &DatabaseSchema) -> Result<Value, QueryError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| QueryError::InvalidFilter(raw.to_string()))?;
    let (name, value) = (name.trim(), value.trim());

    let property = schema
        .properties
        .get(name)
        .ok_or_else(|| QueryError::UnknownProperty {
            name: name.to_string(),
            available: schema
                .properties
                .keys()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        })?;

    property_condition(name, &property.kind, value)
}

fn property_condition(property: &str, kind: &str, value: &str) -> Result<Value, QueryError> {
    let condition = match kind {
        "select" | "status" => json!({ "equals": value }),
        "multi_select" => json!({ "contains": value }),
        "checkbox" => json!({ "equals": value.eq_ignore_ascii_case("true") }),
        "number" => {
            let number = parse_number(value).ok_or_else(|| QueryError::InvalidNumber {
                property: property.to_string(),
                value: value.to_string(),
            })?;
            json!({ "equals": number })
        }
        "title" | "rich_text" | "url" | "email" => json!({ "contains": value }),
        other => return Err(QueryError::UnsupportedType(other.to_string())),
    };

    log::debug!("filter on `{property}` ({kind}): {condition}");
    let mut filter = serde_json::Map::new();
    filter.insert("property".to_string(), Value::from(property));
    filter.insert(kind.to_string(), condition);
    Ok(Value::Object(filter))
}

/// Integers stay integers in the request; anything else must be a finite float.
fn parse_number(value: &str) -> Option<Number> {
    if let Ok(int) = value.parse::<i64>() {
        return Some(int.into());
    }
    value.parse::<f64>().ok().and_then(Number::from_f64)
}

/// Each entry is `Property` (ascending) or `Property:dir`, split on the last
/// `:`. Only `desc`/`descending` (any case) sort descending.
pub fn build_sorts<S: AsRef<str>>(sorts: &[S]) -> Vec<Sort> {
    sorts.iter().map(|raw| parse_sort(raw.as_ref())).collect()
}

fn parse_sort(raw: &str) -> Sort {
    let Some((property, direction)) = raw.rsplit_once(':') else {
        return Sort {
            property: raw.trim().to_string(),
            direction: SortDirection::Ascending,
        };
    };

    let direction = match direction.trim().to_ascii_lowercase().as_str() {
        "desc" | "descending" => SortDirection::Descending,
        _ => SortDirection::Ascending,
    };
    Sort {
        property: property.trim().to_string(),
        direction,
    }
}
