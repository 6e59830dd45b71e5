//! Block tree to Markdown.
//!
//! Children are rendered before their parent and handed to the block encoder
//! as finished Markdown, so indentation is a purely textual transform.

pub mod block;
pub mod context;
pub mod properties;
pub mod rich_text;

pub use block::render;
pub use context::{ListCounter, RenderContext};
pub use properties::{PropertyStyle, format_property_value};

use crate::models::{BlockNode, Page, PageWithBlocks};

const HEADER_FENCE: &str = "---\n";

/// Render an ordered sibling sequence and, recursively, all of its children.
pub fn render_block_tree(nodes: &[BlockNode]) -> String {
    let (out, _) = nodes.iter().fold(
        (String::new(), ListCounter::default()),
        |(mut out, counter), node| {
            let counter = counter.advance(&node.block);
            out.push_str(&render_node(node, counter));
            (out, counter)
        },
    );
    out
}

fn render_node(node: &BlockNode, counter: ListCounter) -> String {
    let children_md = if node.block.is_container_reference() || node.children.is_empty() {
        String::new()
    } else {
        render_block_tree(&node.children)
    };

    let mut ctx = RenderContext::new().with_children(&children_md);
    if node.block.is_numbered_list_item() {
        ctx = ctx.with_list_number(counter.value());
    }
    render(&node.block, &ctx)
}

/// The `---` delimited `name: value` block listing a page's non-empty properties.
pub fn render_properties_header(page: &Page) -> String {
    let mut out = String::from(HEADER_FENCE);
    for (name, value) in &page.properties {
        let value = format_property_value(value, PropertyStyle::Document);
        if !value.is_empty() {
            out.push_str(name);
            out.push_str(": ");
            out.push_str(&value);
            out.push('\n');
        }
    }
    out.push_str(HEADER_FENCE);
    out
}

/// Full Markdown document for a page: property header, then the block tree.
pub fn render_page_markdown(page: &PageWithBlocks) -> String {
    let mut out = render_properties_header(&page.page);
    out.push_str(&render_block_tree(&page.blocks));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChildTitle, ContentBlock, PropertyValue, TextRun};
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Vec<TextRun> {
        vec![TextRun::plain(s)]
    }

    fn leaf(block: ContentBlock) -> BlockNode {
        BlockNode::leaf(block)
    }

    #[test]
    fn numbers_consecutive_items() {
        let nodes = vec![
            leaf(ContentBlock::numbered(text("x"))),
            leaf(ContentBlock::numbered(text("y"))),
            leaf(ContentBlock::numbered(text("z"))),
        ];
        assert_eq!(render_block_tree(&nodes), "1. x\n2. y\n3. z\n");
    }

    #[test]
    fn numbering_resets_after_other_sibling() {
        let nodes = vec![
            leaf(ContentBlock::numbered(text("a"))),
            leaf(ContentBlock::numbered(text("b"))),
            leaf(ContentBlock::paragraph(text("break"))),
            leaf(ContentBlock::numbered(text("c"))),
        ];
        assert_eq!(render_block_tree(&nodes), "1. a\n2. b\nbreak\n1. c\n");
    }

    #[test]
    fn nested_list_counts_independently() {
        let nodes = vec![
            leaf(ContentBlock::numbered(text("a"))),
            BlockNode::with_children(
                ContentBlock::numbered(text("b")),
                vec![
                    leaf(ContentBlock::numbered(text("b1"))),
                    leaf(ContentBlock::numbered(text("b2"))),
                ],
            ),
            leaf(ContentBlock::numbered(text("c"))),
        ];
        assert_eq!(
            render_block_tree(&nodes),
            "1. a\n2. b\n  1. b1\n  2. b2\n3. c\n"
        );
    }

    #[test]
    fn bulleted_item_with_child_paragraph() {
        let nodes = vec![BlockNode::with_children(
            ContentBlock::bulleted(text("item")),
            vec![leaf(ContentBlock::paragraph(text("note")))],
        )];
        assert_eq!(render_block_tree(&nodes), "- item\n  note\n");
    }

    #[test]
    fn child_page_never_recurses() {
        let nodes = vec![BlockNode::with_children(
            ContentBlock::ChildPage(ChildTitle {
                title: "Sub".to_string(),
            }),
            vec![leaf(ContentBlock::paragraph(text("hidden")))],
        )];
        assert_eq!(render_block_tree(&nodes), "### Sub\n");
    }

    #[test]
    fn empty_tree_renders_nothing() {
        assert_eq!(render_block_tree(&[]), "");
    }

    #[test]
    fn page_header_skips_empty_values() {
        let mut properties = IndexMap::new();
        properties.insert("Name".to_string(), PropertyValue::Title(text("Plan")));
        properties.insert("Owner".to_string(), PropertyValue::People(vec![]));
        properties.insert("Done".to_string(), PropertyValue::Checkbox(false));
        let page = PageWithBlocks {
            page: Page {
                id: "p1".to_string(),
                url: None,
                properties,
            },
            blocks: vec![leaf(ContentBlock::paragraph(text("Body")))],
        };

        assert_eq!(
            render_page_markdown(&page),
            "---\nName: Plan\nDone: false\n---\nBody\n"
        );
    }
}
