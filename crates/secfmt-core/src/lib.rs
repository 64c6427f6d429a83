//! # secfmt-core
//!
//! Serialization-format classification for secrets files.
//!
//! Given a path and/or an explicit format name, pick one of
//! [`Format::Binary`], [`Format::Dotenv`], [`Format::Ini`], [`Format::Json`]
//! or [`Format::Yaml`] so a caller can choose the right parser:
//!
//! ```
//! use secfmt_core::{Format, format_from_path, format_from_path_or_name};
//!
//! assert_eq!(format_from_path("secret.json.enc"), Format::Json);
//! assert_eq!(format_from_path("id_rsa"), Format::Binary);
//! assert_eq!(format_from_path_or_name("secret.yaml", "json"), Format::Json);
//! ```
//!
//! Classification never fails; anything unrecognised is `Binary`.
//! Configuration loading and directory scans are the only fallible parts
//! and return [`FormatResult`].

pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod format;
pub mod fs;

#[cfg(feature = "filesystem")]
pub use classify::classify_tree;
pub use classify::{Classification, classify_path};
pub use config::{ConfigWarning, DetectConfig, FormatOverride, generate_schema};
pub use diagnostics::{FormatError, FormatResult};
pub use format::{
    BuiltinDetector, Format, FormatDetector, FormatDetectorChain, PatternDetector,
    format_from_name, format_from_path, format_from_path_or_name, is_env_file, is_ini_file,
    is_json_file, is_yaml_file,
};
