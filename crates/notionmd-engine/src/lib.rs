pub mod ids;
pub mod io;
pub mod models;
pub mod parsing;
pub mod query;
pub mod rendering;

// Re-export key types for easier usage
pub use ids::{IdError, NotionId, parse_notion_id, to_uuid};
pub use io::*;
pub use models::{BlockNode, ContentBlock, Page, PageWithBlocks, PropertyValue, TextRun};
pub use parsing::parse_markdown;
pub use query::{DatabaseSchema, QueryError, QueryRequest, build_filter, build_sorts};
pub use rendering::{
    PropertyStyle, format_property_value, render_block_tree, render_page_markdown,
};
