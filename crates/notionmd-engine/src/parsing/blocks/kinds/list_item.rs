/// Bulleted and numbered list items. Source numerals are not kept.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [&'static str; 2] = ["- ", "* "];
    pub const NUMBER_DELIMITER: &'static str = ". ";

    pub fn bullet(line: &str) -> Option<&str> {
        Self::BULLETS
            .iter()
            .find_map(|bullet| line.strip_prefix(bullet))
            .filter(|text| !text.is_empty())
    }

    pub fn numbered(line: &str) -> Option<&str> {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        line[digits..]
            .strip_prefix(Self::NUMBER_DELIMITER)
            .filter(|text| !text.is_empty())
    }
}
