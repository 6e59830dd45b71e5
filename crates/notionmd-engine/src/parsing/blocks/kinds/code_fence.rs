/// What a line says about fences, independent of parser state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig<'a> {
    /// The delimiter with nothing but trailing whitespace: opens a fence
    /// without a language.
    Bare,
    /// Delimiter followed by a single language token: only ever opens.
    Info(&'a str),
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    /// Language recorded for fences that carry no info token.
    pub const DEFAULT_LANGUAGE: &'static str = crate::models::PLAIN_TEXT_LANGUAGE;

    /// Trailing whitespace is ignored. The info string must be one token
    /// without interior whitespace or backticks.
    pub fn sig(line: &str) -> Option<FenceSig<'_>> {
        let rest = line.trim_end().strip_prefix(Self::BACKTICKS)?;
        let info = rest.trim_start();
        if info.is_empty() {
            Some(FenceSig::Bare)
        } else if info.contains(char::is_whitespace) || info.contains('`') {
            None
        } else {
            Some(FenceSig::Info(info))
        }
    }

    pub fn language(sig: FenceSig<'_>) -> &str {
        match sig {
            FenceSig::Bare => Self::DEFAULT_LANGUAGE,
            FenceSig::Info(language) => language,
        }
    }

    /// Only a line of exactly the delimiter closes a fence, so body lines
    /// such as "```  " survive verbatim.
    pub fn closes(line: &str) -> bool {
        line == Self::BACKTICKS
    }
}
