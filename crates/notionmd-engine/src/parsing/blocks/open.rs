use super::classify::LineClass;
use super::kinds::{BlockQuote, CodeFence, Heading, ListItem};

/// A block opener recognised on a non-blank line outside a fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    FencedCode { language: &'a str },
    Heading { level: u8, text: &'a str },
    BulletedItem { text: &'a str },
    NumberedItem { text: &'a str },
    Quote { text: &'a str },
    Paragraph { text: &'a str },
}

/// First match wins: fence, heading, bullet, numbered item, quote, paragraph.
pub fn try_open_leaf<'a>(c: &LineClass<'a>) -> BlockOpen<'a> {
    let line = c.text;
    if let Some(sig) = c.fence_sig {
        return BlockOpen::FencedCode {
            language: CodeFence::language(sig),
        };
    }
    if let Some((level, text)) = Heading::parse(line) {
        return BlockOpen::Heading { level, text };
    }
    if let Some(text) = ListItem::bullet(line) {
        return BlockOpen::BulletedItem { text };
    }
    if let Some(text) = ListItem::numbered(line) {
        return BlockOpen::NumberedItem { text };
    }
    if let Some(text) = BlockQuote::strip_prefix(line) {
        return BlockOpen::Quote { text };
    }
    BlockOpen::Paragraph { text: line }
}
