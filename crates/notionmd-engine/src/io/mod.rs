use crate::models::{ContentBlock, PageWithBlocks};
use crate::query::{DatabaseSchema, QueryRequest};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid page JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a text file (Markdown input) and return its content
pub fn read_markdown(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Load a fetched page with its block tree from a JSON file
pub fn read_page(path: &Path) -> Result<PageWithBlocks, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let file = fs::File::open(path)?;
    read_page_from(std::io::BufReader::new(file))
}

pub fn read_page_from(reader: impl Read) -> Result<PageWithBlocks, IoError> {
    let page = serde_json::from_reader(reader)?;
    Ok(page)
}

/// Load a database schema (the database object's JSON) from a file
pub fn read_schema(path: &Path) -> Result<DatabaseSchema, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let file = fs::File::open(path)?;
    read_schema_from(std::io::BufReader::new(file))
}

pub fn read_schema_from(reader: impl Read) -> Result<DatabaseSchema, IoError> {
    let schema = serde_json::from_reader(reader)?;
    Ok(schema)
}

/// Serialize a database query request body
pub fn query_request_json(request: &QueryRequest, pretty: bool) -> Result<String, IoError> {
    let json = if pretty {
        serde_json::to_string_pretty(request)?
    } else {
        serde_json::to_string(request)?
    };
    Ok(json)
}

/// Serialize parsed blocks as a JSON array of block write requests
pub fn block_requests_json(blocks: &[ContentBlock], pretty: bool) -> Result<String, IoError> {
    let json = if pretty {
        serde_json::to_string_pretty(blocks)?
    } else {
        serde_json::to_string(blocks)?
    };
    Ok(json)
}
