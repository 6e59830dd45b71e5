use serde::{Deserialize, Serialize};

/// Style flags carried by a text run.
///
/// `color` is kept so that runs survive a read/write cycle, but it has no
/// Markdown representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: String,
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            strikethrough: false,
            underline: false,
            code: false,
            color: "default".to_string(),
        }
    }
}

impl Annotations {
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Self::default()
        }
    }

    pub fn code() -> Self {
        Self {
            code: true,
            ..Self::default()
        }
    }

    pub fn strikethrough() -> Self {
        Self {
            strikethrough: true,
            ..Self::default()
        }
    }

    /// True when no style flag is set (color is ignored).
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.strikethrough || self.underline || self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
    #[serde(default)]
    pub link: Option<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    pub expression: String,
}

/// What a run is made of. Only `Text` is ever produced by the Markdown parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RunKind {
    Text {
        text: TextContent,
    },
    /// A reference to a user, page, date... The service resolves it to
    /// `plain_text` (and `href` when it points somewhere).
    Mention {
        #[serde(default)]
        mention: serde_json::Value,
    },
    Equation {
        equation: Equation,
    },
    #[serde(other)]
    Unknown,
}

/// A contiguous span of text sharing one annotation set and an optional link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    #[serde(flatten)]
    pub kind: RunKind,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default, skip_serializing)]
    pub plain_text: String,
    #[serde(default, skip_serializing)]
    pub href: Option<String>,
}

impl TextRun {
    /// A text run with the given annotations and no link.
    pub fn styled(content: impl Into<String>, annotations: Annotations) -> Self {
        let content = content.into();
        Self {
            plain_text: content.clone(),
            kind: RunKind::Text {
                text: TextContent {
                    content,
                    link: None,
                },
            },
            annotations,
            href: None,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::styled(content, Annotations::default())
    }

    /// An unstyled text run linking to `url`.
    pub fn linked(label: impl Into<String>, url: impl Into<String>) -> Self {
        let label = label.into();
        let url = url.into();
        Self {
            plain_text: label.clone(),
            kind: RunKind::Text {
                text: TextContent {
                    content: label,
                    link: Some(Link { url: url.clone() }),
                },
            },
            annotations: Annotations::default(),
            href: Some(url),
        }
    }

    /// The run's own text: the content of a text run, the display text of
    /// anything else.
    pub fn content(&self) -> &str {
        match &self.kind {
            RunKind::Text { text } => &text.content,
            _ => &self.plain_text,
        }
    }

    /// Text as a reader sees it, without any markup.
    pub fn display_text(&self) -> &str {
        if self.plain_text.is_empty() {
            match &self.kind {
                RunKind::Text { text } => &text.content,
                RunKind::Equation { equation } => &equation.expression,
                _ => "",
            }
        } else {
            &self.plain_text
        }
    }

    pub fn link_url(&self) -> Option<&str> {
        match &self.kind {
            RunKind::Text { text } => text.link.as_ref().map(|link| link.url.as_str()),
            _ => None,
        }
    }
}

/// Concatenated display text of a run list.
pub fn plain_text(runs: &[TextRun]) -> String {
    runs.iter().map(TextRun::display_text).collect()
}
