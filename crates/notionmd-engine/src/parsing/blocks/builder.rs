use crate::models::ContentBlock;
use crate::parsing::inline::decode;

use super::{
    classify::LineClass,
    kinds::CodeFence,
    open::{BlockOpen, try_open_leaf},
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum LeafState<'a> {
    Normal,
    Fence {
        language: &'a str,
        lines: Vec<&'a str>,
    },
}

/// Phase 2 of block parsing: turns classified lines into blocks.
///
/// Outside a fence every non-blank line is exactly one block. Inside a fence
/// lines are buffered verbatim until the closing delimiter.
pub struct BlockBuilder<'a> {
    leaf: LeafState<'a>,
    out: Vec<ContentBlock>,
}

impl<'a> BlockBuilder<'a> {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::Normal,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'a>) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            return;
        }

        let open = try_open_leaf(c);
        self.open_leaf(open);
    }

    pub fn finish(mut self) -> Vec<ContentBlock> {
        // EOF flush
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn open_leaf(&mut self, open: BlockOpen<'a>) {
        let block = match open {
            BlockOpen::FencedCode { language } => {
                self.leaf = LeafState::Fence {
                    language,
                    lines: vec![],
                };
                return;
            }
            BlockOpen::Heading { level, text } => ContentBlock::heading(level, decode(text)),
            BlockOpen::BulletedItem { text } => ContentBlock::bulleted(decode(text)),
            BlockOpen::NumberedItem { text } => ContentBlock::numbered(decode(text)),
            BlockOpen::Quote { text } => ContentBlock::quote(decode(text)),
            BlockOpen::Paragraph { text } => ContentBlock::paragraph(decode(text)),
        };
        self.out.push(block);
    }

    fn consume_fence_line(&mut self, c: &LineClass<'a>) {
        if CodeFence::closes(c.text) {
            let prev = std::mem::replace(&mut self.leaf, LeafState::Normal);
            if let LeafState::Fence { language, lines } = prev {
                self.out.push(ContentBlock::code(lines.join("\n"), language));
            }
            return;
        }

        if let LeafState::Fence { lines, .. } = &mut self.leaf {
            lines.push(c.text);
        }
    }

    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::Normal);
        if let LeafState::Fence { language, lines } = prev
            && !lines.is_empty()
        {
            // Unterminated fence: emit as code block anyway
            log::debug!("unterminated code fence recovered ({} lines)", lines.len());
            self.out.push(ContentBlock::code(lines.join("\n"), language));
        }
    }
}

impl Default for BlockBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
