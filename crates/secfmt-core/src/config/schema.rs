use super::*;
use crate::format::{FORMAT_NAMES, is_known_name};

impl DetectConfig {
    /// Validate the configuration and return any warnings.
    ///
    /// This performs semantic validation beyond what TOML parsing can check:
    /// - `input_type` must be a recognized format name
    /// - glob patterns must compile and be non-empty
    /// - duplicate override patterns are flagged (only the first can match)
    /// - pattern lists must stay under the size limit
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if let Some(name) = &self.input_type {
            if !is_known_name(name) {
                let known: Vec<&str> = FORMAT_NAMES.iter().map(|(n, _)| *n).collect();
                warnings.push(ConfigWarning {
                    field: "input_type".to_string(),
                    message: format!(
                        "Unknown format name '{}'; path detection will be used instead",
                        name
                    ),
                    suggestion: Some(format!("Use one of: {}", known.join(", "))),
                });
            }
        }

        if self.max_files == Some(0) {
            warnings.push(ConfigWarning {
                field: "max_files".to_string(),
                message: "max_files = 0 makes every directory scan fail".to_string(),
                suggestion: Some("Remove the field to use the default limit".to_string()),
            });
        }

        for (idx, pattern) in self.exclude.iter().enumerate() {
            check_pattern(&mut warnings, &format!("exclude[{}]", idx), pattern);
        }

        let mut seen = std::collections::HashSet::new();
        for (idx, o) in self.overrides.iter().enumerate() {
            let field = format!("overrides[{}].pattern", idx);
            check_pattern(&mut warnings, &field, &o.pattern);
            if !seen.insert(o.pattern.as_str()) {
                warnings.push(ConfigWarning {
                    field,
                    message: format!(
                        "Duplicate override pattern '{}'; only the first entry can match",
                        o.pattern
                    ),
                    suggestion: Some("Remove the later entry".to_string()),
                });
            }
        }

        for (field, len) in [("exclude", self.exclude.len()), ("overrides", self.overrides.len())] {
            if len > MAX_PATTERNS {
                warnings.push(ConfigWarning {
                    field: field.to_string(),
                    message: format!(
                        "{} has {} patterns, more than the recommended {}",
                        field, len, MAX_PATTERNS
                    ),
                    suggestion: Some("Consolidate patterns with broader globs".to_string()),
                });
            }
        }

        warnings
    }
}

fn check_pattern(warnings: &mut Vec<ConfigWarning>, field: &str, pattern: &str) {
    if pattern.trim().is_empty() {
        warnings.push(ConfigWarning {
            field: field.to_string(),
            message: "Empty glob pattern".to_string(),
            suggestion: None,
        });
    } else if let Err(e) = Pattern::new(pattern) {
        warnings.push(ConfigWarning {
            field: field.to_string(),
            message: format!("Invalid glob pattern '{}': {}", pattern, e.msg),
            suggestion: None,
        });
    }
}

/// Generate a JSON Schema for [`DetectConfig`].
///
/// Useful for editor completion and validation of `.secfmt.toml`.
pub fn generate_schema() -> schemars::Schema {
    schemars::schema_for!(DetectConfig)
}
