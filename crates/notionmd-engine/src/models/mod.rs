pub mod block;
pub mod page;
pub mod property;
pub mod rich_text;
mod tagged;

pub use block::*;
pub use page::{Page, PageWithBlocks};
pub use property::*;
pub use rich_text::*;
