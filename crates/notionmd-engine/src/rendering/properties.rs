use crate::models::{
    DateRange, FileRef, FormulaValue, PropertyValue, RollupValue, TextRun, User, plain_text,
};

/// Where a formatted value is going to be shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PropertyStyle {
    /// The `name: value` header at the top of a rendered page.
    #[default]
    Document,
    /// A single-line table cell.
    Cell,
}

/// Format a property value as display text. Absent values format as `""`.
pub fn format_property_value(value: &PropertyValue, style: PropertyStyle) -> String {
    match value {
        PropertyValue::Title(runs) | PropertyValue::RichText(runs) => text(runs, style),
        PropertyValue::Number(number) => number.map(format_number).unwrap_or_default(),
        PropertyValue::Select(option) | PropertyValue::Status(option) => option
            .as_ref()
            .map(|o| o.name.clone())
            .unwrap_or_default(),
        PropertyValue::MultiSelect(options) => join(options.iter().map(|o| o.name.as_str())),
        PropertyValue::Date(date) => date.as_ref().map(format_date).unwrap_or_default(),
        PropertyValue::Checkbox(checked) => format_checkbox(*checked, style).to_string(),
        PropertyValue::Url(s) | PropertyValue::Email(s) | PropertyValue::PhoneNumber(s) => {
            s.clone().unwrap_or_default()
        }
        PropertyValue::People(users) => join(users.iter().map(User::display_name)),
        PropertyValue::Relation(refs) => match style {
            PropertyStyle::Document => join(refs.iter().map(|r| r.id.as_str())),
            PropertyStyle::Cell if refs.is_empty() => String::new(),
            PropertyStyle::Cell => format!("[{}]", refs.len()),
        },
        PropertyValue::Formula(formula) => format_formula(formula, style),
        PropertyValue::Rollup(rollup) => format_rollup(rollup),
        PropertyValue::CreatedTime(time) | PropertyValue::LastEditedTime(time) => time.clone(),
        PropertyValue::CreatedBy(user) | PropertyValue::LastEditedBy(user) => {
            user.display_name().to_string()
        }
        PropertyValue::Files(files) => join(files.iter().map(file_label)),
        PropertyValue::UniqueId(id) => match (id.prefix.as_deref(), id.number) {
            (_, None) => String::new(),
            (Some(prefix), Some(number)) if !prefix.is_empty() => format!("{prefix}-{number}"),
            (_, Some(number)) => number.to_string(),
        },
        PropertyValue::Unsupported { .. } => String::new(),
    }
}

fn text(runs: &[TextRun], style: PropertyStyle) -> String {
    let text = plain_text(runs);
    match style {
        PropertyStyle::Document => text,
        PropertyStyle::Cell => single_line(&text),
    }
}

fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// Shortest decimal form: `3`, `2.5`, `-0.125`.
fn format_number(number: f64) -> String {
    number.to_string()
}

fn format_date(date: &DateRange) -> String {
    match &date.end {
        Some(end) => format!("{} → {end}", date.start),
        None => date.start.clone(),
    }
}

fn format_checkbox(checked: bool, style: PropertyStyle) -> &'static str {
    match (style, checked) {
        (PropertyStyle::Document, true) => "true",
        (PropertyStyle::Document, false) => "false",
        (PropertyStyle::Cell, true) => "✓",
        (PropertyStyle::Cell, false) => "✗",
    }
}

fn format_formula(formula: &FormulaValue, style: PropertyStyle) -> String {
    match formula {
        FormulaValue::String { string } => match style {
            PropertyStyle::Document => string.clone().unwrap_or_default(),
            PropertyStyle::Cell => string.as_deref().map(single_line).unwrap_or_default(),
        },
        FormulaValue::Number { number } => number.map(format_number).unwrap_or_default(),
        FormulaValue::Boolean { boolean } => boolean
            .map(|b| format_checkbox(b, style).to_string())
            .unwrap_or_default(),
        FormulaValue::Date { date } => date.as_ref().map(format_date).unwrap_or_default(),
        FormulaValue::Other => String::new(),
    }
}

fn format_rollup(rollup: &RollupValue) -> String {
    match rollup {
        RollupValue::Number { number } => number.map(format_number).unwrap_or_default(),
        RollupValue::Date { date } => date.as_ref().map(format_date).unwrap_or_default(),
        RollupValue::Array { array } => format!("[{} items]", array.len()),
        RollupValue::Other => String::new(),
    }
}

fn file_label(file: &FileRef) -> &str {
    match &file.external {
        Some(external) if file.kind == "external" => &external.url,
        _ => &file.name,
    }
}

fn join<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join(", ")
}
