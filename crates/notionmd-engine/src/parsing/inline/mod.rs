//! # Inline Parsing
//!
//! Cursor-based, single-pass segmentation of one line of inline Markdown
//! into text runs.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline-specific types with owned delimiters (Emphasis, CodeSpan, Link)
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with position tracking
//! - **`parser`**: `decode()` main entry point with `try_parse_*` helpers
//!
//! ## Raw Zones
//!
//! The content of any matched construct is taken literally: `` `**x**` `` is
//! a single code run, not code containing bold.

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::decode;
