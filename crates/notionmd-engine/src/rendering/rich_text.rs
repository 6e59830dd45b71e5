use crate::models::{Annotations, RunKind, TextRun};

/// Encode a run list as inline Markdown. Runs are concatenated as is.
pub fn encode(runs: &[TextRun]) -> String {
    let mut out = String::new();
    for run in runs {
        encode_run(run, &mut out);
    }
    out
}

fn encode_run(run: &TextRun, out: &mut String) {
    match &run.kind {
        RunKind::Text { text } => {
            let annotated = annotate(&text.content, &run.annotations);
            match &text.link {
                Some(link) => push_link(&annotated, &link.url, out),
                None => out.push_str(&annotated),
            }
        }
        RunKind::Mention { .. } => match &run.href {
            Some(href) => push_link(&run.plain_text, href, out),
            None => out.push_str(&run.plain_text),
        },
        RunKind::Equation { equation } => {
            out.push('$');
            out.push_str(&equation.expression);
            out.push('$');
        }
        RunKind::Unknown => out.push_str(&run.plain_text),
    }
}

/// Wraps inner to outer: code, strikethrough, italic, bold.
fn annotate(content: &str, annotations: &Annotations) -> String {
    let mut result = content.to_string();
    if annotations.code {
        result = format!("`{result}`");
    }
    if annotations.strikethrough {
        result = format!("~~{result}~~");
    }
    if annotations.italic {
        result = format!("_{result}_");
    }
    if annotations.bold {
        result = format!("**{result}**");
    }
    result
}

fn push_link(label: &str, url: &str, out: &mut String) {
    out.push('[');
    out.push_str(label);
    out.push_str("](");
    out.push_str(url);
    out.push(')');
}
