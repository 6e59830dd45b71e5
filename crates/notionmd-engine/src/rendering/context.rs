use crate::models::ContentBlock;

/// Per-call inputs to the block encoder that depend on the block's position
/// in the tree rather than on the block itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext<'a> {
    /// 1-based position of a numbered item within its run of siblings.
    pub list_number: Option<u32>,
    /// Markdown of the block's children, rendered beforehand.
    pub children_md: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list_number(mut self, number: u32) -> Self {
        self.list_number = Some(number);
        self
    }

    /// Empty child Markdown counts as no children.
    pub fn with_children(mut self, children_md: &'a str) -> Self {
        self.children_md = (!children_md.is_empty()).then_some(children_md);
        self
    }
}

/// Position counter for consecutive numbered list items in one sibling sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCounter(u32);

impl ListCounter {
    /// Counter state after visiting `block`: numbered items count up, anything
    /// else starts the sequence over.
    pub fn advance(self, block: &ContentBlock) -> Self {
        if block.is_numbered_list_item() {
            Self(self.0 + 1)
        } else {
            Self(0)
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_children_are_absent() {
        assert_eq!(RenderContext::new().with_children("").children_md, None);
        assert_eq!(
            RenderContext::new().with_children("x\n").children_md,
            Some("x\n")
        );
    }

    #[test]
    fn counter_resets_on_other_blocks() {
        let numbered = ContentBlock::numbered(vec![]);
        let paragraph = ContentBlock::paragraph(vec![]);

        let counter = ListCounter::default()
            .advance(&numbered)
            .advance(&numbered);
        assert_eq!(counter.value(), 2);
        assert_eq!(counter.advance(&paragraph).value(), 0);
        assert_eq!(counter.advance(&paragraph).advance(&numbered).value(), 1);
    }
}
