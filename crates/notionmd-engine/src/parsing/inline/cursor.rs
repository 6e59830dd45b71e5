/// A cursor for byte-by-byte inline parsing with position tracking.
///
/// All delimiters are ASCII, so any position where a delimiter is found is
/// also a char boundary and safe to slice at.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    pub fn pos(&self) -> usize {
        self.i
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances until `stop` matches or input ends; returns how many bytes were skipped.
    pub fn eat_until(&mut self, stop: impl Fn(&Self) -> bool) -> usize {
        let start = self.i;
        while !self.eof() && !stop(self) {
            self.i += 1;
        }
        self.i - start
    }

    /// Text between two byte positions previously reported by [`Cursor::pos`].
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("**bold**");
        assert!(cur.starts_with(b"**"));
        assert!(!cur.starts_with(b"]("));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn starts_with_pattern_longer_than_remaining() {
        let mut cur = Cursor::new("ab");
        assert!(!cur.starts_with(b"abcdef"));

        cur.bump();
        assert!(!cur.starts_with(b"bc"));
        assert!(cur.starts_with(b"b"));
    }

    #[test]
    fn starts_with_past_end_is_false() {
        let mut cur = Cursor::new("hi");
        cur.bump_n(10);
        assert!(cur.eof());
        assert!(!cur.starts_with(b"x"));
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::new("x");
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }

    #[test]
    fn eat_until_stops_at_predicate() {
        let mut cur = Cursor::new("abc*def");
        let n = cur.eat_until(|c| c.peek() == Some(b'*'));
        assert_eq!(n, 3);
        assert_eq!(cur.slice(0, cur.pos()), "abc");
    }

    #[test]
    fn eat_until_runs_to_eof() {
        let mut cur = Cursor::new("abc");
        assert_eq!(cur.eat_until(|_| false), 3);
        assert!(cur.eof());
    }
}
