/// `[label](url)` delimiters.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const TARGET_OPEN: &'static [u8; 2] = b"](";
    pub const TARGET_CLOSE: u8 = b')';
}
