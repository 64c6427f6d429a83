//! Extensible format detection via the chain-of-responsibility pattern.
//!
//! Callers can implement [`FormatDetector`] and register it in a
//! [`FormatDetectorChain`] to override or extend the built-in suffix
//! detection for specific paths.

use std::path::Path;

use glob::Pattern;

use super::detection::format_from_path;
use super::types::Format;
use crate::config::FormatOverride;
use crate::diagnostics::{FormatError, FormatResult};

/// A single format detection strategy.
///
/// Implementors inspect a path and return `Some(Format)` when they
/// recognise the file, or `None` to defer to the next detector in the
/// chain.
///
/// The trait is object-safe so detectors can be stored as
/// `Box<dyn FormatDetector>` in a [`FormatDetectorChain`].
pub trait FormatDetector: Send + Sync {
    /// Attempt to classify `path`. Return `None` to defer.
    fn detect(&self, path: &Path) -> Option<Format>;

    /// Human-readable name for this detector (used in output and logging).
    ///
    /// Defaults to the short (unqualified) type name.
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

/// Built-in detector that wraps [`format_from_path`].
///
/// Non-UTF-8 paths are inspected through their lossy rendering.
pub struct BuiltinDetector;

impl FormatDetector for BuiltinDetector {
    fn detect(&self, path: &Path) -> Option<Format> {
        // Always Some, even for Binary, so the chain terminates here.
        Some(format_from_path(&path.to_string_lossy()))
    }

    fn name(&self) -> &str {
        "builtin"
    }
}

/// Detector driven by glob patterns, typically from `[[overrides]]` in
/// `.secfmt.toml`.
///
/// Patterns are tried in order; the first match wins. Paths matching no
/// pattern are deferred.
#[derive(Debug, Clone)]
pub struct PatternDetector {
    rules: Vec<(Pattern, Format)>,
}

impl PatternDetector {
    /// Compile every override pattern.
    ///
    /// Fails on the first pattern that is not a valid glob.
    pub fn new(overrides: &[FormatOverride]) -> FormatResult<Self> {
        let rules = overrides
            .iter()
            .map(|o| {
                Pattern::new(&o.pattern)
                    .map(|p| (p, o.format))
                    .map_err(|e| FormatError::invalid_pattern(&o.pattern, &e))
            })
            .collect::<FormatResult<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FormatDetector for PatternDetector {
    fn detect(&self, path: &Path) -> Option<Format> {
        self.rules
            .iter()
            .find(|(pattern, _)| pattern.matches_path(path))
            .map(|&(_, format)| format)
    }

    fn name(&self) -> &str {
        "override"
    }
}

/// Ordered chain of [`FormatDetector`] implementations.
///
/// Detectors are consulted in order. The first `Some(Format)` wins.
/// Use [`with_builtin`](FormatDetectorChain::with_builtin) to get a chain
/// that falls back to the built-in suffix detection.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use secfmt_core::format::{Format, FormatDetector, FormatDetectorChain};
///
/// struct SopsRc;
/// impl FormatDetector for SopsRc {
///     fn detect(&self, path: &Path) -> Option<Format> {
///         (path.file_name()? == ".sopsrc").then_some(Format::Yaml)
///     }
/// }
///
/// let chain = FormatDetectorChain::with_builtin().prepend(SopsRc);
///
/// assert_eq!(chain.detect(Path::new(".sopsrc")), Some(Format::Yaml));
/// assert_eq!(chain.detect(Path::new("app.json")), Some(Format::Json));
/// ```
pub struct FormatDetectorChain {
    detectors: Vec<Box<dyn FormatDetector>>,
}

impl FormatDetectorChain {
    /// Create an empty chain with no detectors.
    ///
    /// An empty chain always returns `None` from [`detect`](Self::detect).
    pub fn new() -> Self {
        Self {
            detectors: Vec::new(),
        }
    }

    /// Create a chain pre-populated with the [`BuiltinDetector`].
    pub fn with_builtin() -> Self {
        Self {
            detectors: vec![Box::new(BuiltinDetector)],
        }
    }

    /// Add a detector to the **front** of the chain (highest priority).
    pub fn prepend(mut self, detector: impl FormatDetector + 'static) -> Self {
        self.detectors.insert(0, Box::new(detector));
        self
    }

    /// Add a detector to the **end** of the chain (lowest priority).
    pub fn push(mut self, detector: impl FormatDetector + 'static) -> Self {
        self.detectors.push(Box::new(detector));
        self
    }

    /// Run the chain and return the first `Some(Format)`.
    ///
    /// Returns `None` only for an empty chain or when every detector
    /// deferred.
    pub fn detect(&self, path: &Path) -> Option<Format> {
        self.detect_with_source(path).map(|(format, _)| format)
    }

    /// Like [`detect`](Self::detect), also returning the name of the
    /// detector that matched.
    pub fn detect_with_source(&self, path: &Path) -> Option<(Format, &str)> {
        self.detectors
            .iter()
            .find_map(|detector| detector.detect(path).map(|f| (f, detector.name())))
    }

    /// Names of the detectors, in priority order.
    pub fn names(&self) -> Vec<&str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl Default for FormatDetectorChain {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn override_for(pattern: &str, format: Format) -> FormatOverride {
        FormatOverride {
            pattern: pattern.to_string(),
            format,
        }
    }

    // ---- BuiltinDetector ----

    #[test]
    fn builtin_detector_recognises_yaml() {
        assert_eq!(
            BuiltinDetector.detect(Path::new("secrets/prod.yaml")),
            Some(Format::Yaml)
        );
    }

    #[test]
    fn builtin_detector_returns_binary_for_unknown() {
        assert_eq!(
            BuiltinDetector.detect(Path::new("id_rsa")),
            Some(Format::Binary)
        );
    }

    #[test]
    fn builtin_detector_name() {
        assert_eq!(BuiltinDetector.name(), "builtin");
    }

    // ---- PatternDetector ----

    #[test]
    fn pattern_detector_first_match_wins() {
        let detector = PatternDetector::new(&[
            override_for("*.conf", Format::Ini),
            override_for("app.*", Format::Json),
        ])
        .unwrap();
        assert_eq!(detector.len(), 2);
        assert_eq!(detector.detect(Path::new("app.conf")), Some(Format::Ini));
        assert_eq!(detector.detect(Path::new("app.cfg")), Some(Format::Json));
        assert_eq!(detector.detect(Path::new("other.cfg")), None);
    }

    #[test]
    fn pattern_detector_matches_nested_paths() {
        let detector =
            PatternDetector::new(&[override_for("secrets/**/*.enc", Format::Yaml)]).unwrap();
        assert_eq!(
            detector.detect(Path::new("secrets/prod/db.enc")),
            Some(Format::Yaml)
        );
        assert_eq!(detector.detect(Path::new("public/db.enc")), None);
    }

    #[test]
    fn pattern_detector_rejects_bad_glob() {
        let err = PatternDetector::new(&[override_for("[", Format::Ini)]).unwrap_err();
        assert!(matches!(err, FormatError::InvalidPattern { ref pattern, .. } if pattern == "["));
    }

    #[test]
    fn empty_pattern_detector_defers() {
        let detector = PatternDetector::new(&[]).unwrap();
        assert!(detector.is_empty());
        assert_eq!(detector.detect(Path::new("a.json")), None);
    }

    // ---- FormatDetectorChain ----

    #[test]
    fn empty_chain_returns_none() {
        let chain = FormatDetectorChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.detect(Path::new("anything.json")), None);
    }

    #[test]
    fn with_builtin_falls_back_correctly() {
        let chain = FormatDetectorChain::with_builtin();
        assert_eq!(chain.len(), 1);
        assert_eq!(
            chain.detect(Path::new("secret.json.enc")),
            Some(Format::Json)
        );
        assert_eq!(chain.detect(Path::new("secret")), Some(Format::Binary));
    }

    struct AlwaysIni;
    impl FormatDetector for AlwaysIni {
        fn detect(&self, _path: &Path) -> Option<Format> {
            Some(Format::Ini)
        }
    }

    struct NeverMatch;
    impl FormatDetector for NeverMatch {
        fn detect(&self, _path: &Path) -> Option<Format> {
            None
        }
    }

    #[test]
    fn prepend_takes_priority_over_builtin() {
        let chain = FormatDetectorChain::with_builtin().prepend(AlwaysIni);
        assert_eq!(chain.detect(Path::new("a.yaml")), Some(Format::Ini));
        assert_eq!(chain.names(), vec!["AlwaysIni", "builtin"]);
    }

    #[test]
    fn push_runs_after_builtin() {
        let chain = FormatDetectorChain::with_builtin().push(AlwaysIni);
        assert_eq!(chain.detect(Path::new("a.yaml")), Some(Format::Yaml));
    }

    #[test]
    fn never_match_defers_to_next() {
        let chain = FormatDetectorChain::new().push(NeverMatch).push(AlwaysIni);
        assert_eq!(
            chain.detect_with_source(Path::new("anything")),
            Some((Format::Ini, "AlwaysIni"))
        );
    }

    #[test]
    fn detect_with_source_reports_override() {
        let overrides =
            PatternDetector::new(&[override_for("*.conf", Format::Dotenv)]).unwrap();
        let chain = FormatDetectorChain::with_builtin().prepend(overrides);
        assert_eq!(
            chain.detect_with_source(Path::new("app.conf")),
            Some((Format::Dotenv, "override"))
        );
        assert_eq!(
            chain.detect_with_source(Path::new("app.ini")),
            Some((Format::Ini, "builtin"))
        );
    }

    #[test]
    fn chain_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BuiltinDetector>();
        assert_send_sync::<PatternDetector>();
        assert_send_sync::<FormatDetectorChain>();
    }

    #[test]
    fn default_trait_name_uses_type_name() {
        assert_eq!(NeverMatch.name(), "NeverMatch");
    }
}
