//! Format detection from explicit names and path suffixes.
//!
//! Everything here is string inspection only (no I/O). Paths need not exist.

use super::types::Format;

// ============================================================================
// Named constants
// ============================================================================

/// Recognized format-name tokens. Matching is case-sensitive.
pub const FORMAT_NAMES: &[(&str, Format)] = &[
    ("binary", Format::Binary),
    ("dotenv", Format::Dotenv),
    ("ini", Format::Ini),
    ("json", Format::Json),
    ("yaml", Format::Yaml),
];

const YAML_SUFFIXES: &[&str] = &[".yaml", ".yml"];
const JSON_SUFFIXES: &[&str] = &[".json"];
const ENV_SUFFIXES: &[&str] = &[".env"];
const INI_SUFFIXES: &[&str] = &[".ini"];

// ============================================================================
// Name lookup
// ============================================================================

fn lookup_name(name: &str) -> Option<Format> {
    FORMAT_NAMES
        .iter()
        .find(|(token, _)| *token == name)
        .map(|&(_, format)| format)
}

/// Map an explicit format name (e.g. from a `--input-type` flag) to a
/// [`Format`].
///
/// Unknown names, including the empty string and non-lowercase spellings,
/// fall back to [`Format::Binary`].
pub fn format_from_name(name: &str) -> Format {
    lookup_name(name).unwrap_or(Format::Binary)
}

// ============================================================================
// Suffix predicates
// ============================================================================

fn has_suffix(path: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| path.ends_with(suffix))
}

/// Returns true if `path` ends with `.yaml` or `.yml`.
pub fn is_yaml_file(path: &str) -> bool {
    has_suffix(path, YAML_SUFFIXES)
}

/// Returns true if `path` ends with `.json`.
pub fn is_json_file(path: &str) -> bool {
    has_suffix(path, JSON_SUFFIXES)
}

/// Returns true if `path` ends with `.env`.
pub fn is_env_file(path: &str) -> bool {
    has_suffix(path, ENV_SUFFIXES)
}

/// Returns true if `path` ends with `.ini`.
pub fn is_ini_file(path: &str) -> bool {
    has_suffix(path, INI_SUFFIXES)
}

/// Match the full path against the suffix predicates in priority order.
fn match_suffix(path: &str) -> Option<Format> {
    if is_yaml_file(path) {
        Some(Format::Yaml)
    } else if is_json_file(path) {
        Some(Format::Json)
    } else if is_env_file(path) {
        Some(Format::Dotenv)
    } else if is_ini_file(path) {
        Some(Format::Ini)
    } else {
        None
    }
}

/// Extension of the final path segment, including the leading dot.
///
/// Returns `None` when the final segment has no `.`. A trailing dot is an
/// extension of its own (`"secret."` yields `"."`).
fn extension(path: &str) -> Option<&str> {
    for (idx, ch) in path.char_indices().rev() {
        if ch == '.' {
            return Some(&path[idx..]);
        }
        if std::path::is_separator(ch) {
            break;
        }
    }
    None
}

// ============================================================================
// Primary detection functions
// ============================================================================

/// Detect the format of a file from its path.
///
/// Extensionless paths are [`Format::Binary`]. Otherwise the YAML, JSON,
/// dotenv and INI suffixes are tried in that order; when none matches, the
/// final extension is stripped and the remainder is tried again, so
/// `secret.json.enc` is [`Format::Json`].
pub fn format_from_path(path: &str) -> Format {
    // Each pass strips at least one '.', so this bound is never reached on
    // well-formed input.
    let max_passes = path.bytes().filter(|&b| b == b'.').count() + 1;
    let mut current = path;

    for _ in 0..max_passes {
        let Some(ext) = extension(current) else {
            return Format::Binary;
        };
        if let Some(format) = match_suffix(current) {
            return format;
        }
        current = &current[..current.len() - ext.len()];
    }

    Format::Binary
}

/// Detect the format from an explicit name, falling back to the path.
///
/// A recognized `name` always wins. An empty or unrecognized `name` defers
/// to [`format_from_path`].
pub fn format_from_path_or_name(path: &str, name: &str) -> Format {
    lookup_name(name).unwrap_or_else(|| format_from_path(path))
}

/// Returns `true` if `name` is one of the recognized format-name tokens.
pub fn is_known_name(name: &str) -> bool {
    lookup_name(name).is_some()
}
