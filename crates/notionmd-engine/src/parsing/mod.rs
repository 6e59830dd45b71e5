pub mod blocks;
pub mod inline;

use crate::models::ContentBlock;

use blocks::{BlockBuilder, MarkdownLineClassifier};

/// Parse user Markdown into a flat, ordered block list.
///
/// Never fails: unrecognised lines become paragraphs and an unterminated
/// fence still yields its code block. Lines are split on `\n` only, so a
/// trailing newline inside an unterminated fence stays part of its body.
pub fn parse_markdown(md: &str) -> Vec<ContentBlock> {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for line in md.split('\n') {
        let lc = classifier.classify(line);
        builder.push(&lc);
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Annotations, BlockNode, TextRun};
    use crate::rendering::{render_block_tree, rich_text::encode};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn reencode(md: &str) -> String {
        let nodes: Vec<BlockNode> = parse_markdown(md).into_iter().map(BlockNode::leaf).collect();
        render_block_tree(&nodes)
    }

    #[test]
    fn empty_input_has_no_blocks() {
        assert!(parse_markdown("").is_empty());
        assert!(parse_markdown("\n\n  \n").is_empty());
    }

    #[test]
    fn bold_line_is_one_bold_run() {
        assert_eq!(
            parse_markdown("**bold**"),
            vec![ContentBlock::paragraph(vec![TextRun::styled(
                "bold",
                Annotations::bold()
            )])]
        );
    }

    #[test]
    fn bullets_become_items() {
        assert_eq!(
            parse_markdown("- a\n- b"),
            vec![
                ContentBlock::bulleted(vec![TextRun::plain("a")]),
                ContentBlock::bulleted(vec![TextRun::plain("b")]),
            ]
        );
    }

    #[test]
    fn crlf_input_is_accepted() {
        assert_eq!(
            parse_markdown("# T\r\n> q\r\n"),
            vec![
                ContentBlock::heading(1, vec![TextRun::plain("T")]),
                ContentBlock::quote(vec![TextRun::plain("q")]),
            ]
        );
    }

    #[test]
    fn source_numerals_are_renumbered() {
        assert_eq!(reencode("1. x\n1. y"), "1. x\n2. y\n");
        assert_eq!(reencode("5. x\n9. y\n\n3. z"), "1. x\n2. y\n3. z\n");
    }

    #[test]
    fn indented_lines_stay_flat() {
        assert_eq!(
            parse_markdown("- a\n  - b"),
            vec![
                ContentBlock::bulleted(vec![TextRun::plain("a")]),
                ContentBlock::paragraph(vec![TextRun::plain("  - b")]),
            ]
        );
    }

    #[rstest]
    #[case("```rust\nfn main() {}\n```\n")]
    #[case("```\nplain\n\nbody\n```\n")]
    #[case("```sh\n$ ls\n```rust\n```\n")]
    #[case("```\n```  \nx\n```\n")]
    fn code_blocks_round_trip(#[case] md: &str) {
        assert_eq!(reencode(md), md);
    }

    #[rstest]
    #[case::trailing_newline("```\ncode\n", "code\n")]
    #[case::no_trailing_newline("```\ncode", "code")]
    #[case::crlf("```\r\ncode\r\n", "code\n")]
    fn unterminated_fence_keeps_body(#[case] md: &str, #[case] body: &str) {
        assert_eq!(parse_markdown(md), vec![ContentBlock::code(body, "plain text")]);
    }

    #[rstest]
    #[case(Annotations::bold())]
    #[case(Annotations::italic())]
    #[case(Annotations::code())]
    fn single_annotation_runs_round_trip(#[case] annotations: Annotations) {
        let run = TextRun::styled("word", annotations);
        assert_eq!(inline::decode(&encode(std::slice::from_ref(&run))), vec![run]);
    }

    #[test]
    fn mixed_document() {
        let md = "# Plan\n\nIntro with **bold**.\n\n* one\n2. two\n> note\n```\ncode\n```\n";
        let blocks = parse_markdown(md);
        let tags: Vec<&str> = blocks.iter().map(ContentBlock::tag).collect();
        assert_eq!(
            tags,
            vec![
                "heading_1",
                "paragraph",
                "bulleted_list_item",
                "numbered_list_item",
                "quote",
                "code"
            ]
        );
    }
}
