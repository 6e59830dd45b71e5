//! # Block Parsing
//!
//! Two-phase, single-level block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each line is classified into a `LineClass`
//!    containing local facts (text without terminator, blank status, fence signature)
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` switches between a normal
//!    state and a fence state and emits one `ContentBlock` per recognised block
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (CodeFence, Heading,
//!   ListItem, BlockQuote)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open_leaf` dispatch for detecting block openers
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - No nesting: indentation is kept as text and never creates children
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Parsing never fails; anything unrecognised is a paragraph

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use open::{BlockOpen, try_open_leaf};
