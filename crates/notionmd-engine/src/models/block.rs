use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::rich_text::TextRun;
use super::tagged::Tagged;

/// Language tag the service uses for code blocks without a language.
pub const PLAIN_TEXT_LANGUAGE: &str = "plain text";

/// Payload of every variant that is just a run list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub rich_text: Vec<TextRun>,
}

impl TextBlock {
    pub fn new(rich_text: Vec<TextRun>) -> Self {
        Self { rich_text }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToDoBlock {
    #[serde(default)]
    pub rich_text: Vec<TextRun>,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub rich_text: Vec<TextRun>,
    #[serde(default = "plain_text_language")]
    pub language: String,
}

fn plain_text_language() -> String {
    PLAIN_TEXT_LANGUAGE.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Icon {
    Emoji {
        emoji: String,
    },
    /// Uploaded or external icon images; not representable in Markdown.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalloutBlock {
    #[serde(default)]
    pub rich_text: Vec<TextRun>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedFile {
    pub url: String,
    /// When the signed URL stops working.
    #[serde(default)]
    pub expiry_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

/// Where a file-like block's bytes live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileSource {
    /// Hosted by the service behind a temporary signed URL.
    File { file: HostedFile },
    External { external: ExternalFile },
}

impl FileSource {
    pub fn url(&self) -> &str {
        match self {
            FileSource::File { file } => &file.url,
            FileSource::External { external } => &external.url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    #[serde(flatten)]
    pub source: FileSource,
    #[serde(default)]
    pub caption: Vec<TextRun>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookmarkBlock {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub caption: Vec<TextRun>,
}

/// Payload of `child_page` and `child_database`: only the referenced title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildTitle {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPreviewBlock {
    #[serde(default)]
    pub url: String,
}

/// One structural content unit.
///
/// The vocabulary is versioned by the service, so any tag outside this set
/// (or a known tag with a payload we cannot read) becomes `Unsupported`
/// instead of failing the surrounding document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Tagged")]
pub enum ContentBlock {
    Paragraph(TextBlock),
    /// `level` is 1, 2 or 3.
    Heading {
        level: u8,
        text: TextBlock,
    },
    BulletedListItem(TextBlock),
    NumberedListItem(TextBlock),
    ToDo(ToDoBlock),
    Code(CodeBlock),
    Quote(TextBlock),
    Divider,
    Callout(CalloutBlock),
    Toggle(TextBlock),
    Image(ImageBlock),
    Bookmark(BookmarkBlock),
    ChildPage(ChildTitle),
    ChildDatabase(ChildTitle),
    LinkPreview(LinkPreviewBlock),
    Unsupported {
        kind: String,
    },
}

/// Headings outside 1..=3 are treated as the nearest supported level.
pub fn heading_level(level: u8) -> u8 {
    level.clamp(1, 3)
}

impl ContentBlock {
    pub fn paragraph(rich_text: Vec<TextRun>) -> Self {
        Self::Paragraph(TextBlock::new(rich_text))
    }

    pub fn heading(level: u8, rich_text: Vec<TextRun>) -> Self {
        Self::Heading {
            level: heading_level(level),
            text: TextBlock::new(rich_text),
        }
    }

    pub fn bulleted(rich_text: Vec<TextRun>) -> Self {
        Self::BulletedListItem(TextBlock::new(rich_text))
    }

    pub fn numbered(rich_text: Vec<TextRun>) -> Self {
        Self::NumberedListItem(TextBlock::new(rich_text))
    }

    pub fn quote(rich_text: Vec<TextRun>) -> Self {
        Self::Quote(TextBlock::new(rich_text))
    }

    pub fn code(body: impl Into<String>, language: impl Into<String>) -> Self {
        Self::Code(CodeBlock {
            rich_text: vec![TextRun::plain(body)],
            language: language.into(),
        })
    }

    /// The service's discriminant tag for this block.
    pub fn tag(&self) -> &str {
        match self {
            Self::Paragraph(_) => "paragraph",
            Self::Heading { level, .. } => match heading_level(*level) {
                1 => "heading_1",
                2 => "heading_2",
                _ => "heading_3",
            },
            Self::BulletedListItem(_) => "bulleted_list_item",
            Self::NumberedListItem(_) => "numbered_list_item",
            Self::ToDo(_) => "to_do",
            Self::Code(_) => "code",
            Self::Quote(_) => "quote",
            Self::Divider => "divider",
            Self::Callout(_) => "callout",
            Self::Toggle(_) => "toggle",
            Self::Image(_) => "image",
            Self::Bookmark(_) => "bookmark",
            Self::ChildPage(_) => "child_page",
            Self::ChildDatabase(_) => "child_database",
            Self::LinkPreview(_) => "link_preview",
            Self::Unsupported { kind } => kind,
        }
    }

    pub fn is_numbered_list_item(&self) -> bool {
        matches!(self, Self::NumberedListItem(_))
    }

    /// Child pages and databases are separate documents: their children are
    /// never part of this tree.
    pub fn is_container_reference(&self) -> bool {
        matches!(self, Self::ChildPage(_) | Self::ChildDatabase(_))
    }
}

impl From<Tagged> for ContentBlock {
    fn from(mut raw: Tagged) -> Self {
        let kind = raw.kind.clone();
        let block = match kind.as_str() {
            "paragraph" => raw.take(&kind).map(Self::Paragraph),
            "heading_1" => raw.take(&kind).map(|text| Self::Heading { level: 1, text }),
            "heading_2" => raw.take(&kind).map(|text| Self::Heading { level: 2, text }),
            "heading_3" => raw.take(&kind).map(|text| Self::Heading { level: 3, text }),
            "bulleted_list_item" => raw.take(&kind).map(Self::BulletedListItem),
            "numbered_list_item" => raw.take(&kind).map(Self::NumberedListItem),
            "to_do" => raw.take(&kind).map(Self::ToDo),
            "code" => raw.take(&kind).map(Self::Code),
            "quote" => raw.take(&kind).map(Self::Quote),
            "divider" => Some(Self::Divider),
            "callout" => raw.take(&kind).map(Self::Callout),
            "toggle" => raw.take(&kind).map(Self::Toggle),
            "image" => raw.take(&kind).map(Self::Image),
            "bookmark" => raw.take(&kind).map(Self::Bookmark),
            "child_page" => raw.take(&kind).map(Self::ChildPage),
            "child_database" => raw.take(&kind).map(Self::ChildDatabase),
            "link_preview" => raw.take(&kind).map(Self::LinkPreview),
            _ => None,
        };

        block.unwrap_or_else(|| {
            log::debug!("block `{kind}` degraded to unsupported");
            Self::Unsupported { kind }
        })
    }
}

/// Serializes to the write-request shape `{"object":"block","type":T,T:{..}}`.
///
/// `Unsupported` has no request form and is written as an empty paragraph.
impl Serialize for ContentBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("object", "block")?;

        match self {
            Self::Unsupported { .. } => {
                map.serialize_entry("type", "paragraph")?;
                map.serialize_entry("paragraph", &TextBlock::default())?;
            }
            _ => map.serialize_entry("type", self.tag())?,
        }

        let tag = self.tag();
        match self {
            Self::Paragraph(b)
            | Self::BulletedListItem(b)
            | Self::NumberedListItem(b)
            | Self::Quote(b)
            | Self::Toggle(b)
            | Self::Heading { text: b, .. } => map.serialize_entry(tag, b)?,
            Self::ToDo(b) => map.serialize_entry(tag, b)?,
            Self::Code(b) => map.serialize_entry(tag, b)?,
            Self::Divider => map.serialize_entry(tag, &serde_json::Map::new())?,
            Self::Callout(b) => map.serialize_entry(tag, b)?,
            Self::Image(b) => map.serialize_entry(tag, b)?,
            Self::Bookmark(b) => map.serialize_entry(tag, b)?,
            Self::ChildPage(b) | Self::ChildDatabase(b) => map.serialize_entry(tag, b)?,
            Self::LinkPreview(b) => map.serialize_entry(tag, b)?,
            Self::Unsupported { .. } => {}
        }

        map.end()
    }
}

/// A block together with its (already fetched) children, in document order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlockNode {
    pub block: ContentBlock,
    #[serde(default)]
    pub children: Vec<BlockNode>,
}

impl BlockNode {
    pub fn leaf(block: ContentBlock) -> Self {
        Self {
            block,
            children: vec![],
        }
    }

    pub fn with_children(block: ContentBlock, children: Vec<BlockNode>) -> Self {
        Self { block, children }
    }
}
