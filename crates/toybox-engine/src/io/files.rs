use std::fs;
use std::path::{Path, PathBuf};

use crate::io::{BlockRecord, RecordError, parse_records, records_to_json_pretty};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Read a JSON array of block records from disk
pub fn read_records(path: &Path) -> Result<Vec<BlockRecord>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(parse_records(&content)?)
}

/// Write block records as pretty JSON, creating parent directories
pub fn write_records(path: &Path, records: &[BlockRecord]) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = records_to_json_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}
