/// ATX heading, levels 1 to 3.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 3;

    /// Level and text of a `#`, `##` or `###` heading line.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let hashes = line.bytes().take_while(|&b| b == Self::MARKER as u8).count();
        let level = u8::try_from(hashes).ok().filter(|l| (1..=Self::MAX_LEVEL).contains(l))?;
        let text = line[hashes..].strip_prefix(' ')?;
        (!text.is_empty()).then_some((level, text))
    }
}
