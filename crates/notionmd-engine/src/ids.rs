use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("Cannot parse Notion ID from: {0:?}")]
    Invalid(String),
}

/// A page/database/block id in its compact form: 32 lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotionId(String);

impl NotionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Dashed 8-4-4-4-12 form.
    pub fn to_uuid(&self) -> String {
        to_uuid(&self.0)
    }
}

impl fmt::Display for NotionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NotionId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_notion_id(s)
    }
}

fn compact_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^[0-9a-f]{32}$").expect("Invalid id regex"))
}

fn uuid_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
            .expect("Invalid uuid regex")
    })
}

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)https?://(?:[a-z0-9-]+\.)?notion\.(?:so|site)/.*?([0-9a-f]{32})(?:[?#]|$)")
            .expect("Invalid notion url regex")
    })
}

/// Accepts a compact id, a dashed UUID, or a notion.so / notion.site URL
/// with the id embedded in its path.
pub fn parse_notion_id(input: &str) -> Result<NotionId, IdError> {
    let input = input.trim();

    if compact_regex().is_match(input) {
        return Ok(NotionId(input.to_ascii_lowercase()));
    }

    if uuid_regex().is_match(input) {
        return Ok(NotionId(input.replace('-', "").to_ascii_lowercase()));
    }

    if let Some(id) = url_regex().captures(input).and_then(|caps| caps.get(1)) {
        return Ok(NotionId(id.as_str().to_ascii_lowercase()));
    }

    Err(IdError::Invalid(input.to_string()))
}

/// Insert 8-4-4-4-12 dashes into a compact id. Anything that is not a
/// 32 character ASCII id is returned unchanged.
pub fn to_uuid(id: &str) -> String {
    if id.len() != 32 || !id.is_ascii() {
        return id.to_string();
    }
    format!(
        "{}-{}-{}-{}-{}",
        &id[0..8],
        &id[8..12],
        &id[12..16],
        &id[16..20],
        &id[20..32]
    )
}
