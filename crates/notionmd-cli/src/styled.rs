//! Terminal styling for rendered page Markdown.
//!
//! Works line by line on the renderer's output, so it only has to recognise
//! the shapes the renderer emits.

use crossterm::style::Stylize;
use notionmd_engine::parsing::blocks::kinds::{block_quote::BlockQuote, code_fence::CodeFence};

const RULE: &str = "---";
const RULE_WIDTH: usize = 40;
const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

pub fn style_markdown(md: &str) -> String {
    let mut out = String::with_capacity(md.len());
    let mut in_fence = false;
    let mut in_header = false;

    for (index, line) in md.lines().enumerate() {
        if line.starts_with(CodeFence::BACKTICKS) {
            in_fence = !in_fence;
            push_line(&mut out, line.dark_grey());
            continue;
        }
        if in_fence {
            push_line(&mut out, line);
            continue;
        }
        if line == RULE {
            in_header = index == 0;
            push_line(&mut out, "─".repeat(RULE_WIDTH).dark_grey());
            continue;
        }
        if in_header {
            match line.split_once(": ") {
                Some((key, value)) => push_line(&mut out, format!("{}: {value}", key.dim())),
                None => push_line(&mut out, line),
            }
            continue;
        }

        let Some(line) = strip_comment(line) else {
            continue;
        };
        push_line(&mut out, style_line(line));
    }
    out
}

fn push_line(out: &mut String, line: impl std::fmt::Display) {
    out.push_str(&line.to_string());
    out.push('\n');
}

/// Drops a trailing HTML comment. `None` when the whole line is a comment.
fn strip_comment(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if trimmed.starts_with(COMMENT_OPEN) && trimmed.ends_with(COMMENT_CLOSE) {
        return None;
    }
    match line.find(COMMENT_OPEN) {
        Some(pos) if line.ends_with(COMMENT_CLOSE) => Some(line[..pos].trim_end()),
        _ => Some(line),
    }
}

fn style_line(line: &str) -> String {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];

    if let Some(text) = heading_text(body) {
        return format!("{indent}{}", text.bold().cyan());
    }
    if let Some(text) = body.strip_prefix(BlockQuote::PREFIX) {
        return format!("{indent}{} {}", "│".dark_grey(), text.italic());
    }
    if let Some(text) = body.strip_prefix("- [x] ") {
        return format!("{indent}{} {}", "☑".green(), text.dark_grey());
    }
    if let Some(text) = body.strip_prefix("- [ ] ") {
        return format!("{indent}{} {text}", "☐".yellow());
    }
    if let Some(text) = body.strip_prefix("- ") {
        return format!("{indent}{} {text}", "•".yellow());
    }
    if let Some((number, text)) = numbered(body) {
        return format!("{indent}{} {text}", format!("{number}.").yellow());
    }
    line.to_string()
}

fn heading_text(body: &str) -> Option<&str> {
    let hashes = body.len() - body.trim_start_matches('#').len();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    body[hashes..].strip_prefix(' ')
}

fn numbered(body: &str) -> Option<(&str, &str)> {
    let (number, text) = body.split_once(". ")?;
    (!number.is_empty() && number.bytes().all(|b| b.is_ascii_digit())).then_some((number, text))
}
