use super::kinds::{CodeFence, FenceSig};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClass<'a> {
    /// Line text without its line terminator.
    pub text: &'a str,
    /// Whether the line is whitespace only.
    pub is_blank: bool,
    /// If the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig<'a>>,
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`] containing local facts.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let text = line.trim_end_matches(['\r', '\n']);
        log::trace!("classify {text:?}");

        LineClass {
            text,
            is_blank: text.trim().is_empty(),
            fence_sig: CodeFence::sig(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_carriage_return() {
        let lc = MarkdownLineClassifier.classify("hello\r");
        assert_eq!(lc.text, "hello");
        assert!(!lc.is_blank);
        assert_eq!(lc.fence_sig, None);
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert!(MarkdownLineClassifier.classify("  \t").is_blank);
        assert!(MarkdownLineClassifier.classify("").is_blank);
    }

    #[test]
    fn records_fence_signature() {
        let lc = MarkdownLineClassifier.classify("```sh\r");
        assert_eq!(lc.fence_sig, Some(FenceSig::Info("sh")));
    }
}
