use super::context::RenderContext;
use super::rich_text::encode;
use crate::models::{ContentBlock, FileSource, Icon, PLAIN_TEXT_LANGUAGE, heading_level};

/// Encode one block as Markdown. The result always ends with exactly one `\n`.
pub fn render(block: &ContentBlock, ctx: &RenderContext) -> String {
    match block {
        ContentBlock::Paragraph(b) => line(&encode(&b.rich_text)),
        ContentBlock::Heading { level, text } => {
            let hashes = "#".repeat(usize::from(heading_level(*level)));
            line(&format!("{hashes} {}", encode(&text.rich_text)))
        }
        ContentBlock::BulletedListItem(b) => {
            with_indented_children(line(&format!("- {}", encode(&b.rich_text))), ctx)
        }
        ContentBlock::NumberedListItem(b) => {
            let number = ctx.list_number.unwrap_or(1);
            with_indented_children(
                line(&format!("{number}. {}", encode(&b.rich_text))),
                ctx,
            )
        }
        ContentBlock::ToDo(b) => {
            let checkbox = if b.checked { "[x]" } else { "[ ]" };
            with_indented_children(
                line(&format!("- {checkbox} {}", encode(&b.rich_text))),
                ctx,
            )
        }
        ContentBlock::Code(b) => {
            let language = if b.language == PLAIN_TEXT_LANGUAGE {
                ""
            } else {
                b.language.as_str()
            };
            format!("```{language}\n{}\n```\n", encode(&b.rich_text))
        }
        ContentBlock::Quote(b) => line(&format!("> {}", encode(&b.rich_text))),
        ContentBlock::Divider => "---\n".to_string(),
        ContentBlock::Callout(b) => {
            let text = encode(&b.rich_text);
            match &b.icon {
                Some(Icon::Emoji { emoji }) => line(&format!("> {emoji} {text}")),
                _ => line(&format!("> {text}")),
            }
        }
        ContentBlock::Toggle(b) => {
            let header = line(&format!("**{}**", encode(&b.rich_text)));
            match ctx.children_md {
                Some(children) => header + &line(children),
                None => header,
            }
        }
        ContentBlock::Image(b) => {
            let caption = encode(&b.caption);
            let image = format!("![{caption}]({})", b.source.url());
            match &b.source {
                FileSource::File { file } => match &file.expiry_time {
                    Some(expiry) => line(&format!("{image} <!-- expires: {expiry} -->")),
                    None => line(&image),
                },
                FileSource::External { .. } => line(&image),
            }
        }
        ContentBlock::Bookmark(b) => {
            let caption = encode(&b.caption);
            let label = if caption.is_empty() { &b.url } else { &caption };
            line(&format!("[{label}]({})", b.url))
        }
        ContentBlock::ChildPage(b) | ContentBlock::ChildDatabase(b) => {
            line(&format!("### {}", b.title))
        }
        ContentBlock::LinkPreview(b) => line(&format!("[{0}]({0})", b.url)),
        ContentBlock::Unsupported { kind } => {
            line(&format!("<!-- unsupported block: {kind} -->"))
        }
    }
}

/// Terminates `text` with exactly one newline.
fn line(text: &str) -> String {
    let mut out = text.trim_end_matches('\n').to_string();
    out.push('\n');
    out
}

fn with_indented_children(header: String, ctx: &RenderContext) -> String {
    match ctx.children_md {
        Some(children) => header + &indent(children),
        None => header,
    }
}

/// Two spaces in front of every non-blank line; blank lines are dropped.
fn indent(markdown: &str) -> String {
    let mut out = String::with_capacity(markdown.len() + 16);
    for text in markdown.split('\n').filter(|l| !l.trim().is_empty()) {
        out.push_str("  ");
        out.push_str(text);
        out.push('\n');
    }
    out
}
