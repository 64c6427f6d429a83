//! Error types for the fallible parts of secfmt.
//!
//! Classification itself never fails. Errors come from loading configuration,
//! compiling override patterns, walking directories and strict format-name
//! parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout secfmt-core.
pub type FormatResult<T> = Result<T, FormatError>;

/// secfmt errors
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Unknown format name: {name:?} (expected one of binary, dotenv, ini, json, yaml)")]
    UnknownFormat { name: String },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File too large: {path} ({size} bytes, limit {limit} bytes)")]
    FileTooBig {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("Not a regular file: {path}")]
    FileNotRegular { path: PathBuf },

    #[error("Failed to parse config {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid pattern: {pattern} ({message})")]
    InvalidPattern { pattern: String, message: String },

    #[error("Failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },

    #[error("Too many files to classify: more than {limit} found")]
    TooManyFiles { limit: usize },
}

impl FormatError {
    /// Build an [`FormatError::InvalidPattern`] from a glob compilation failure.
    pub(crate) fn invalid_pattern(pattern: &str, err: &glob::PatternError) -> Self {
        FormatError::InvalidPattern {
            pattern: pattern.to_string(),
            message: err.msg.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_format_message_lists_known_names() {
        let err = FormatError::UnknownFormat {
            name: "YAML".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"YAML\""));
        assert!(msg.contains("binary, dotenv, ini, json, yaml"));
    }

    #[test]
    fn file_too_big_message_includes_sizes() {
        let err = FormatError::FileTooBig {
            path: PathBuf::from("big.toml"),
            size: 2048,
            limit: 1024,
        };
        assert_eq!(
            err.to_string(),
            "File too large: big.toml (2048 bytes, limit 1024 bytes)"
        );
    }

    #[test]
    fn invalid_pattern_keeps_glob_message() {
        let glob_err = glob::Pattern::new("[").unwrap_err();
        let err = FormatError::invalid_pattern("[", &glob_err);
        match err {
            FormatError::InvalidPattern { pattern, message } => {
                assert_eq!(pattern, "[");
                assert!(!message.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    /// Every variant is produced by a concrete failure path; keep this match
    /// exhaustive so an unused catch-all variant cannot creep back in.
    #[test]
    fn every_variant_has_a_specific_message() {
        fn describe(err: &FormatError) -> &'static str {
            match err {
                FormatError::UnknownFormat { .. } => "unknown format",
                FormatError::FileRead { .. } => "read",
                FormatError::FileTooBig { .. } => "too big",
                FormatError::FileNotRegular { .. } => "not regular",
                FormatError::ConfigParse { .. } => "parse",
                FormatError::InvalidPattern { .. } => "pattern",
                FormatError::Walk { .. } => "walk",
                FormatError::TooManyFiles { .. } => "too many",
            }
        }

        let err = FormatError::TooManyFiles { limit: 3 };
        assert_eq!(describe(&err), "too many");
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn file_read_exposes_source() {
        use std::error::Error as _;

        let err = FormatError::FileRead {
            path: PathBuf::from("missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
    }
}
