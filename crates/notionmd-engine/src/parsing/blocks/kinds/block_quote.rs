/// Blockquote line, single level.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: &'static str = "> ";

    /// Text after the prefix, when at least one character follows it.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).filter(|rest| !rest.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
    }

    #[test]
    fn nested_quote_keeps_inner_marker() {
        assert_eq!(BlockQuote::strip_prefix("> > hello"), Some("> hello"));
    }

    #[test]
    fn prefix_without_text_is_not_a_quote() {
        assert_eq!(BlockQuote::strip_prefix("> "), None);
        assert_eq!(BlockQuote::strip_prefix(">hello"), None);
    }
}
