//! Detection configuration loaded from `.secfmt.toml`.

use std::path::{Path, PathBuf};

use glob::Pattern;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::diagnostics::{FormatError, FormatResult};
use crate::format::{Format, FormatDetectorChain, PatternDetector};
use crate::fs::{MAX_CONFIG_FILE_SIZE, safe_read_file};

mod builder;
mod schema;


pub use builder::DetectConfigBuilder;
pub use schema::generate_schema;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".secfmt.toml";

/// Default cap on files returned by a directory scan.
pub const DEFAULT_MAX_FILES: usize = 10_000;

/// Maximum number of patterns per list (overrides, exclude).
/// Exceeding this limit produces a configuration warning.
const MAX_PATTERNS: usize = 100;

/// Force a format for every path matching a glob pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FormatOverride {
    /// Glob pattern matched against the path (e.g. "**/*.conf")
    #[schemars(description = "Glob pattern matched against the file path (e.g. \"**/*.conf\")")]
    pub pattern: String,

    /// Format assigned to matching paths
    #[schemars(description = "Format assigned to matching paths")]
    pub format: Format,
}

/// Configuration for format detection.
///
/// Every field is optional in the TOML file:
///
/// ```toml
/// input_type = "yaml"
/// exclude = ["target/**"]
/// max_files = 5000
///
/// [[overrides]]
/// pattern = "**/*.conf"
/// format = "ini"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DetectConfig {
    /// Explicit format name applied to every path. Unrecognized names are
    /// ignored and path detection is used instead.
    #[schemars(
        description = "Explicit format name (binary, dotenv, ini, json, yaml) applied to every path"
    )]
    pub input_type: Option<String>,

    /// Glob patterns (relative to the scan root) skipped by directory scans
    #[schemars(description = "Glob patterns, relative to the scan root, excluded from scans")]
    pub exclude: Vec<String>,

    /// Maximum number of files a directory scan may return
    #[schemars(description = "Maximum number of files a directory scan may classify")]
    pub max_files: Option<usize>,

    /// Pattern overrides, consulted before suffix detection
    #[schemars(description = "Glob overrides consulted before suffix detection, first match wins")]
    pub overrides: Vec<FormatOverride>,
}

/// Warning from configuration validation.
///
/// These do not stop detection but usually indicate a typo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The field that has the issue (e.g., "overrides[0].pattern")
    pub field: String,
    /// Description of the issue
    pub message: String,
    /// Optional suggestion for how to fix the issue
    pub suggestion: Option<String>,
}

impl DetectConfig {
    /// Create a new [`DetectConfigBuilder`].
    pub fn builder() -> DetectConfigBuilder {
        DetectConfigBuilder::new()
    }

    /// Load config from file
    pub fn load<P: AsRef<Path>>(path: P) -> FormatResult<Self> {
        let path = path.as_ref();
        let content = safe_read_file(path, MAX_CONFIG_FILE_SIZE)?;
        Self::parse(&content, path)
    }

    /// Parse TOML content. `origin` is only used in error messages.
    pub fn parse(content: &str, origin: &Path) -> FormatResult<Self> {
        toml::from_str(content).map_err(|e| FormatError::ConfigParse {
            path: origin.to_path_buf(),
            source: e,
        })
    }

    /// Load config or use default, returning any load warning.
    ///
    /// If a path is provided but the file cannot be loaded or parsed, the
    /// default config is returned together with a message describing the
    /// error, so a typo never silently changes detection.
    pub fn load_or_default(path: Option<&PathBuf>) -> (Self, Option<String>) {
        match path {
            Some(p) => match Self::load(p) {
                Ok(config) => (config, None),
                Err(e) => {
                    let warning = format!(
                        "Failed to load config {}: {}; using defaults",
                        p.display(),
                        error_chain(&e)
                    );
                    (Self::default(), Some(warning))
                }
            },
            None => (Self::default(), None),
        }
    }

    /// The configured explicit format name, or `""` when unset.
    pub fn input_type(&self) -> &str {
        self.input_type.as_deref().unwrap_or("")
    }

    /// The scan limit, falling back to [`DEFAULT_MAX_FILES`].
    pub fn max_files(&self) -> usize {
        self.max_files.unwrap_or(DEFAULT_MAX_FILES)
    }

    /// Compile the `exclude` globs.
    pub fn compiled_excludes(&self) -> FormatResult<Vec<Pattern>> {
        self.exclude
            .iter()
            .map(|p| Pattern::new(p).map_err(|e| FormatError::invalid_pattern(p, &e)))
            .collect()
    }

    /// Build the detector chain for this config: overrides (if any) in
    /// front of the built-in suffix detection.
    pub fn build_chain(&self) -> FormatResult<FormatDetectorChain> {
        let chain = FormatDetectorChain::with_builtin();
        if self.overrides.is_empty() {
            return Ok(chain);
        }
        Ok(chain.prepend(PatternDetector::new(&self.overrides)?))
    }
}

/// Render an error with its source chain on one line.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
