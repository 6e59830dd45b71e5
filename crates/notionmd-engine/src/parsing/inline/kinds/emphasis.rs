/// Bold and italic delimiters.
pub struct Emphasis;

impl Emphasis {
    pub const STRONG: &'static [u8; 2] = b"**";
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
}
