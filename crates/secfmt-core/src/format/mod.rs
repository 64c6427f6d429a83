//! Format classification for secrets files.
//!
//! This module provides:
//!
//! - [`Format`] -- the closed set of recognised serialization formats
//! - [`format_from_name`], [`format_from_path`], [`format_from_path_or_name`]
//!   -- total classification functions that fall back to [`Format::Binary`]
//! - [`is_yaml_file`], [`is_json_file`], [`is_env_file`], [`is_ini_file`]
//!   -- the individual suffix predicates
//! - [`FormatDetector`] and [`FormatDetectorChain`] -- layered detection
//!   for callers that need pattern overrides
//!
//! ## Extending detection
//!
//! Implement [`FormatDetector`] and register it via
//! [`FormatDetectorChain::with_builtin().prepend(your_detector)`](FormatDetectorChain::prepend).

mod detection;
mod detector;
mod types;

pub use detection::{
    FORMAT_NAMES, format_from_name, format_from_path, format_from_path_or_name, is_env_file,
    is_ini_file, is_json_file, is_known_name, is_yaml_file,
};
pub use detector::{BuiltinDetector, FormatDetector, FormatDetectorChain, PatternDetector};
pub use types::Format;
