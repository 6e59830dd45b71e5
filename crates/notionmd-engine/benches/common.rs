use notionmd_engine::models::{Annotations, BlockNode, ContentBlock, TextRun};

// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, _italic_ and a [link](https://example.com).\n\n- Bullet point\n- Another item\n1. First\n2. Second\n> Quoted `code` text\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_block_tree(sections: usize, depth: usize) -> Vec<BlockNode> {
    (0..sections)
        .flat_map(|section| {
            vec![
                BlockNode::leaf(ContentBlock::heading(
                    1,
                    vec![TextRun::plain(format!("Section {section}"))],
                )),
                BlockNode::leaf(ContentBlock::paragraph(vec![
                    TextRun::plain("Some paragraph content with "),
                    TextRun::styled("annotations", Annotations::bold()),
                    TextRun::linked(" and links", "https://example.com"),
                ])),
                generate_nested_list(depth),
                BlockNode::leaf(ContentBlock::code("fn main() {}", "rust")),
            ]
        })
        .collect()
}

#[allow(dead_code)]
fn generate_nested_list(remaining_depth: usize) -> BlockNode {
    let children = if remaining_depth == 0 {
        vec![]
    } else {
        (0..3)
            .map(|i| {
                if i == 2 {
                    generate_nested_list(remaining_depth - 1)
                } else {
                    BlockNode::leaf(ContentBlock::numbered(vec![TextRun::plain(format!(
                        "Item {i} at depth {remaining_depth}"
                    ))]))
                }
            })
            .collect()
    };
    BlockNode::with_children(
        ContentBlock::bulleted(vec![TextRun::plain("Parent item")]),
        children,
    )
}
