use super::*;

/// Builder for constructing a [`DetectConfig`] with validation.
///
/// Setters return `&mut Self` for chaining; the terminal [`build`](Self::build)
/// compiles every glob and returns the first invalid one as an error.
///
/// **Note:** `build()` and `build_unchecked()` drain the builder's state.
///
/// # Examples
///
/// ```rust
/// use secfmt_core::config::DetectConfig;
/// use secfmt_core::format::Format;
///
/// let config = DetectConfig::builder()
///     .input_type("json")
///     .add_override("**/*.conf", Format::Ini)
///     .build()
///     .expect("valid config");
/// assert_eq!(config.input_type(), "json");
/// assert_eq!(config.overrides.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DetectConfigBuilder {
    input_type: Option<String>,
    exclude: Vec<String>,
    max_files: Option<usize>,
    overrides: Vec<FormatOverride>,
}

impl DetectConfigBuilder {
    /// Prefer [`DetectConfig::builder()`] over calling this directly.
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Set the explicit format name.
    pub fn input_type(&mut self, name: impl Into<String>) -> &mut Self {
        self.input_type = Some(name.into());
        self
    }

    /// Replace the exclude patterns.
    pub fn exclude(&mut self, patterns: Vec<String>) -> &mut Self {
        self.exclude = patterns;
        self
    }

    /// Set the scan limit.
    pub fn max_files(&mut self, limit: usize) -> &mut Self {
        self.max_files = Some(limit);
        self
    }

    /// Append an override.
    pub fn add_override(&mut self, pattern: impl Into<String>, format: Format) -> &mut Self {
        self.overrides.push(FormatOverride {
            pattern: pattern.into(),
            format,
        });
        self
    }

    /// Build the config, rejecting invalid glob patterns.
    pub fn build(&mut self) -> FormatResult<DetectConfig> {
        let config = self.build_unchecked();
        config.compiled_excludes()?;
        PatternDetector::new(&config.overrides)?;
        Ok(config)
    }

    /// Build the config without compiling patterns.
    pub fn build_unchecked(&mut self) -> DetectConfig {
        DetectConfig {
            input_type: self.input_type.take(),
            exclude: std::mem::take(&mut self.exclude),
            max_files: self.max_files.take(),
            overrides: std::mem::take(&mut self.overrides),
        }
    }
}
