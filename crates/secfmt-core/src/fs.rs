//! Bounded file reading for configuration files.

use std::path::Path;

use crate::diagnostics::{FormatError, FormatResult};

/// Upper bound on configuration file size (1 MiB).
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Read a UTF-8 file, refusing non-regular files and anything larger than
/// `limit` bytes.
pub fn safe_read_file(path: &Path, limit: u64) -> FormatResult<String> {
    let metadata = std::fs::metadata(path).map_err(|e| FormatError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if !metadata.is_file() {
        return Err(FormatError::FileNotRegular {
            path: path.to_path_buf(),
        });
    }

    let size = metadata.len();
    if size > limit {
        return Err(FormatError::FileTooBig {
            path: path.to_path_buf(),
            size,
            limit,
        });
    }

    std::fs::read_to_string(path).map_err(|e| FormatError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}
