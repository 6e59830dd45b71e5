use crate::models::{Annotations, TextRun};

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link},
};

/// Decodes inline Markdown into text runs.
///
/// # Precedence
/// At every position the constructs are tried in order bold, italic, code,
/// link. Each match becomes one run carrying only its own annotation; nested
/// markup inside a construct is kept as literal text.
///
/// # Returns
/// Runs covering the entire input. A marker that starts no complete
/// construct stays in the surrounding literal run, so any non-empty input
/// yields at least one run.
pub fn decode(s: &str) -> Vec<TextRun> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated literal text as a plain run
    fn flush_text(out: &mut Vec<TextRun>, cur: &Cursor<'_>, start: usize, end: usize) {
        if end > start {
            out.push(TextRun::plain(cur.slice(start, end)));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        if let Some(run) = try_parse_construct(&mut cur) {
            flush_text(&mut out, &cur, text_start, start);
            text_start = cur.pos();
            out.push(run);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, &cur, text_start, cur.pos());
    out
}

fn try_parse_construct(cur: &mut Cursor<'_>) -> Option<TextRun> {
    try_parse_bold(cur)
        .or_else(|| try_parse_italic(cur))
        .or_else(|| try_parse_code_span(cur))
        .or_else(|| try_parse_link(cur))
}

/// `**x**` where `x` is non-empty and has no `*`.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<TextRun> {
    let inner = enclosed(cur, Emphasis::STRONG)?;
    Some(TextRun::styled(inner, Annotations::bold()))
}

/// `*x*` or `_x_`.
fn try_parse_italic(cur: &mut Cursor<'_>) -> Option<TextRun> {
    let inner = enclosed(cur, &[Emphasis::STAR])
        .or_else(|| enclosed(cur, &[Emphasis::UNDERSCORE]))?;
    Some(TextRun::styled(inner, Annotations::italic()))
}

fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<TextRun> {
    let inner = enclosed(cur, &[CodeSpan::TICK])?;
    Some(TextRun::styled(inner, Annotations::code()))
}

/// Attempts to parse `[label](url)` starting at the current position.
///
/// The label may not contain `]` and the url may not contain `)`; both must
/// be non-empty. On failure, cursor position is restored.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<TextRun> {
    if cur.peek() != Some(Link::OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // [
    let label_start = cur.pos();
    let label_len = cur.eat_until(|c| c.peek() == Some(Link::LABEL_CLOSE));
    let label_end = cur.pos();

    if label_len == 0 || !cur.starts_with(Link::TARGET_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump_n(Link::TARGET_OPEN.len());
    let url_start = cur.pos();
    let url_len = cur.eat_until(|c| c.peek() == Some(Link::TARGET_CLOSE));
    let url_end = cur.pos();

    if url_len == 0 || cur.peek() != Some(Link::TARGET_CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // )

    Some(TextRun::linked(
        cur.slice(label_start, label_end),
        cur.slice(url_start, url_end),
    ))
}

/// Matches `delim` + content + `delim`, where the content is non-empty and
/// never contains the delimiter's first byte. Returns the content.
///
/// On failure, cursor position is restored.
fn enclosed<'a>(cur: &mut Cursor<'a>, delim: &[u8]) -> Option<&'a str> {
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    let stop = delim[0];
    cur.bump_n(delim.len());
    let inner_start = cur.pos();
    let inner_len = cur.eat_until(|c| c.peek() == Some(stop));
    let inner_end = cur.pos();

    if inner_len == 0 || !cur.starts_with(delim) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    cur.bump_n(delim.len());

    Some(cur.slice(inner_start, inner_end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn plain(s: &str) -> TextRun {
        TextRun::plain(s)
    }

    fn styled(s: &str, annotations: Annotations) -> TextRun {
        TextRun::styled(s, annotations)
    }

    #[test]
    fn parse_simple_text() {
        assert_eq!(decode("hello world"), vec![plain("hello world")]);
    }

    #[test]
    fn empty_input_has_no_runs() {
        assert!(decode("").is_empty());
    }

    #[rstest]
    #[case::bold("**bold**", styled("bold", Annotations::bold()))]
    #[case::italic_star("*it*", styled("it", Annotations::italic()))]
    #[case::italic_underscore("_it_", styled("it", Annotations::italic()))]
    #[case::code("`x = 1`", styled("x = 1", Annotations::code()))]
    #[case::link("[docs](https://d.io)", TextRun::linked("docs", "https://d.io"))]
    fn parses_single_construct(#[case] input: &str, #[case] expected: TextRun) {
        assert_eq!(decode(input), vec![expected]);
    }

    #[test]
    fn mixed_line_splits_into_runs() {
        assert_eq!(
            decode("a **b** _c_ `d` [e](f) g"),
            vec![
                plain("a "),
                styled("b", Annotations::bold()),
                plain(" "),
                styled("c", Annotations::italic()),
                plain(" "),
                styled("d", Annotations::code()),
                plain(" "),
                TextRun::linked("e", "f"),
                plain(" g"),
            ]
        );
    }

    #[test]
    fn unterminated_bold_is_literal() {
        assert_eq!(decode("**bold"), vec![plain("**bold")]);
        assert_eq!(decode("a ** b"), vec![plain("a ** b")]);
    }

    #[test]
    fn unmatched_star_joins_following_italic() {
        assert_eq!(
            decode("**a*"),
            vec![plain("*"), styled("a", Annotations::italic())]
        );
    }

    #[test]
    fn nested_markup_is_not_reconstructed() {
        // italic content may not contain `_`, so the inner bold is literal
        assert_eq!(
            decode("_x **y**_"),
            vec![styled("x **y**", Annotations::italic())]
        );
    }

    #[test]
    fn code_span_content_is_raw() {
        assert_eq!(
            decode("`**not bold**`"),
            vec![styled("**not bold**", Annotations::code())]
        );
    }

    #[rstest]
    #[case("[label]")]
    #[case("[label](")]
    #[case("[](url)")]
    #[case("[label]()")]
    #[case("[label] (url)")]
    fn incomplete_links_are_literal(#[case] input: &str) {
        assert_eq!(decode(input), vec![plain(input)]);
    }

    #[test]
    fn multibyte_text_around_markers() {
        assert_eq!(
            decode("café **naïve** ü"),
            vec![
                plain("café "),
                styled("naïve", Annotations::bold()),
                plain(" ü")
            ]
        );
    }
}
