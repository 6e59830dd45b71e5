use indexmap::IndexMap;
use serde::Deserialize;

use super::block::BlockNode;
use super::property::PropertyValue;
use super::rich_text::plain_text;

/// Page metadata and its typed properties, in the order the service lists them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub properties: IndexMap<String, PropertyValue>,
}

impl Page {
    /// Plain text of the title property, or the page id when it has none.
    pub fn title(&self) -> String {
        self.properties
            .values()
            .find_map(|value| match value {
                PropertyValue::Title(runs) => Some(plain_text(runs)),
                _ => None,
            })
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| self.id.clone())
    }
}

/// A page together with its fully fetched block tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageWithBlocks {
    pub page: Page,
    #[serde(default)]
    pub blocks: Vec<BlockNode>,
}
