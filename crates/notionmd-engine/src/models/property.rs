use serde::Deserialize;
use serde_json::Value;

use super::block::ExternalFile;
use super::rich_text::TextRun;
use super::tagged::Tagged;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DateRange {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// A workspace member. Bots and partially shared users may come without a name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.id,
        }
    }
}

/// A related page, known only by id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reference {
    pub id: String,
}

/// Computed value of a formula property.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaValue {
    String {
        #[serde(default)]
        string: Option<String>,
    },
    Number {
        #[serde(default)]
        number: Option<f64>,
    },
    Boolean {
        #[serde(default)]
        boolean: Option<bool>,
    },
    Date {
        #[serde(default)]
        date: Option<DateRange>,
    },
    #[serde(other)]
    Other,
}

/// Aggregated value of a rollup property.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RollupValue {
    Number {
        #[serde(default)]
        number: Option<f64>,
    },
    Date {
        #[serde(default)]
        date: Option<DateRange>,
    },
    /// Raw items of the rolled up property; only their count is displayed.
    Array {
        #[serde(default)]
        array: Vec<Value>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileRef {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub external: Option<ExternalFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UniqueId {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub number: Option<i64>,
}

/// One typed database property value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Tagged")]
pub enum PropertyValue {
    Title(Vec<TextRun>),
    RichText(Vec<TextRun>),
    Number(Option<f64>),
    Select(Option<SelectOption>),
    Status(Option<SelectOption>),
    MultiSelect(Vec<SelectOption>),
    Date(Option<DateRange>),
    Checkbox(bool),
    Url(Option<String>),
    Email(Option<String>),
    PhoneNumber(Option<String>),
    People(Vec<User>),
    Relation(Vec<Reference>),
    Formula(FormulaValue),
    Rollup(RollupValue),
    CreatedTime(String),
    LastEditedTime(String),
    CreatedBy(User),
    LastEditedBy(User),
    Files(Vec<FileRef>),
    UniqueId(UniqueId),
    Unsupported { kind: String },
}

impl PropertyValue {
    pub fn tag(&self) -> &str {
        match self {
            Self::Title(_) => "title",
            Self::RichText(_) => "rich_text",
            Self::Number(_) => "number",
            Self::Select(_) => "select",
            Self::Status(_) => "status",
            Self::MultiSelect(_) => "multi_select",
            Self::Date(_) => "date",
            Self::Checkbox(_) => "checkbox",
            Self::Url(_) => "url",
            Self::Email(_) => "email",
            Self::PhoneNumber(_) => "phone_number",
            Self::People(_) => "people",
            Self::Relation(_) => "relation",
            Self::Formula(_) => "formula",
            Self::Rollup(_) => "rollup",
            Self::CreatedTime(_) => "created_time",
            Self::LastEditedTime(_) => "last_edited_time",
            Self::CreatedBy(_) => "created_by",
            Self::LastEditedBy(_) => "last_edited_by",
            Self::Files(_) => "files",
            Self::UniqueId(_) => "unique_id",
            Self::Unsupported { kind } => kind,
        }
    }
}

impl From<Tagged> for PropertyValue {
    fn from(mut raw: Tagged) -> Self {
        let kind = raw.kind.clone();
        let value = match kind.as_str() {
            "title" => raw.take(&kind).map(Self::Title),
            "rich_text" => raw.take(&kind).map(Self::RichText),
            "number" => raw.take(&kind).map(Self::Number),
            "select" => raw.take(&kind).map(Self::Select),
            "status" => raw.take(&kind).map(Self::Status),
            "multi_select" => raw.take(&kind).map(Self::MultiSelect),
            "date" => raw.take(&kind).map(Self::Date),
            "checkbox" => raw.take(&kind).map(Self::Checkbox),
            "url" => raw.take(&kind).map(Self::Url),
            "email" => raw.take(&kind).map(Self::Email),
            "phone_number" => raw.take(&kind).map(Self::PhoneNumber),
            "people" => raw.take(&kind).map(Self::People),
            "relation" => raw.take(&kind).map(Self::Relation),
            "formula" => raw.take(&kind).map(Self::Formula),
            "rollup" => raw.take(&kind).map(Self::Rollup),
            "created_time" => raw.take(&kind).map(Self::CreatedTime),
            "last_edited_time" => raw.take(&kind).map(Self::LastEditedTime),
            "created_by" => raw.take(&kind).map(Self::CreatedBy),
            "last_edited_by" => raw.take(&kind).map(Self::LastEditedBy),
            "files" => raw.take(&kind).map(Self::Files),
            "unique_id" => raw.take(&kind).map(Self::UniqueId),
            _ => None,
        };

        value.unwrap_or_else(|| {
            log::debug!("property `{kind}` degraded to unsupported");
            Self::Unsupported { kind }
        })
    }
}
