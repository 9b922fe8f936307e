//! Reading integer grids from text files
//!
//! One row per line, cells separated by whitespace. Blank lines and lines
//! starting with `#` are skipped.

use std::path::Path;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};

/// Parse grid text; `path` is only used for error messages.
pub fn parse_grid(content: &str, path: &Path) -> ApplicationResult<Vec<Vec<i64>>> {
    let mut rows = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let row = trimmed
            .split_whitespace()
            .map(|cell| {
                cell.parse::<i64>().map_err(|e| ApplicationError::InvalidGrid {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    message: format!("'{}': {}", cell, e),
                })
            })
            .collect::<ApplicationResult<Vec<_>>>()?;
        rows.push(row);
    }

    debug!("parse_grid: {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read and parse a grid file.
pub fn load_grid(path: &Path) -> ApplicationResult<Vec<Vec<i64>>> {
    let content = std::fs::read_to_string(path).with_path_context("read grid", path)?;
    parse_grid(&content, path)
}
