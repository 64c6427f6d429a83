//! Format enum for parser dispatch.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::diagnostics::FormatError;

/// Serialization format of a secrets file.
///
/// Each variant maps to the store a consumer would pick to parse the file.
/// [`Format::Binary`] is the fallback for anything unrecognized and is
/// also the [`Default`].
///
/// Serializes as the lowercase format name (`"yaml"`, `"dotenv"`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Opaque content, no structure recognized
    #[default]
    Binary,
    /// KEY=value files (.env)
    Dotenv,
    /// INI files (.ini)
    Ini,
    /// JSON documents (.json)
    Json,
    /// YAML documents (.yaml, .yml)
    Yaml,
}

impl Format {
    /// Every variant, in declaration order.
    pub const ALL: [Format; 5] = [
        Format::Binary,
        Format::Dotenv,
        Format::Ini,
        Format::Json,
        Format::Yaml,
    ];

    /// The canonical lowercase name, as accepted by
    /// [`format_from_name`](crate::format::format_from_name).
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Format::Binary => "binary",
            Format::Dotenv => "dotenv",
            Format::Ini => "ini",
            Format::Json => "json",
            Format::Yaml => "yaml",
        }
    }

    /// Path suffixes that identify this format. Empty for `Binary`.
    #[must_use]
    pub fn suffixes(self) -> &'static [&'static str] {
        match self {
            Format::Binary => &[],
            Format::Dotenv => &[".env"],
            Format::Ini => &[".ini"],
            Format::Json => &[".json"],
            Format::Yaml => &[".yaml", ".yml"],
        }
    }

    /// Returns `true` for every format except [`Format::Binary`].
    #[must_use]
    pub fn is_structured(self) -> bool {
        !matches!(self, Format::Binary)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strict parsing: unlike
/// [`format_from_name`](crate::format::format_from_name), unknown names are
/// an error rather than `Binary`.
impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| FormatError::UnknownFormat {
                name: s.to_string(),
            })
    }
}
