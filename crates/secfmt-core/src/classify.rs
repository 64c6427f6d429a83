//! Classification records and directory scanning.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::format::{Format, FormatDetectorChain, format_from_name, is_known_name};

#[cfg(feature = "filesystem")]
use crate::config::DetectConfig;
#[cfg(feature = "filesystem")]
use crate::diagnostics::{FormatError, FormatResult};

/// Source recorded when an explicit format name decided the result.
pub const SOURCE_INPUT_TYPE: &str = "input-type";

/// Source recorded when no detector produced a result.
pub const SOURCE_DEFAULT: &str = "default";

/// The detected format of one path and what decided it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub path: PathBuf,
    pub format: Format,
    /// `"input-type"`, `"default"`, or the name of the matching detector
    pub source: String,
}

/// Classify a single path.
///
/// A recognized explicit `name` wins, exactly as in
/// [`format_from_path_or_name`](crate::format::format_from_path_or_name).
/// Otherwise the chain decides, and an empty or fully deferring chain
/// yields [`Format::Binary`].
pub fn classify_path(path: &Path, name: &str, chain: &FormatDetectorChain) -> Classification {
    classify_as(path.to_path_buf(), path, name, chain)
}

/// Classify `match_path` but record the result under `path`.
fn classify_as(
    path: PathBuf,
    match_path: &Path,
    name: &str,
    chain: &FormatDetectorChain,
) -> Classification {
    let (format, source) = if is_known_name(name) {
        (format_from_name(name), SOURCE_INPUT_TYPE)
    } else {
        chain
            .detect_with_source(match_path)
            .unwrap_or((Format::Binary, SOURCE_DEFAULT))
    };

    Classification {
        path,
        format,
        source: source.to_string(),
    }
}

/// Classify every file under `root`.
///
/// Hidden files are included (`.env` is hidden), `.gitignore` rules are
/// honoured inside git repositories, and `config.exclude` globs are matched
/// against paths relative to `root`. Detectors also see the relative path,
/// so override patterns are written relative to the scan root.
///
/// Results are sorted by path.
#[cfg(feature = "filesystem")]
pub fn classify_tree(
    root: &Path,
    config: &DetectConfig,
    chain: &FormatDetectorChain,
) -> FormatResult<Vec<Classification>> {
    use ignore::WalkBuilder;

    if !root.is_dir() {
        return Err(FormatError::Walk {
            path: root.to_path_buf(),
            message: "not a directory".to_string(),
        });
    }

    let excludes = config.compiled_excludes()?;
    let limit = config.max_files();
    let name = config.input_type();
    let mut results = Vec::new();

    let walker = WalkBuilder::new(root)
        .standard_filters(true)
        .hidden(false)
        .filter_entry(|e| e.file_name() != ".git")
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                tracing::warn!(root = %root.display(), error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);

        if excludes.iter().any(|p| p.matches_path(relative)) {
            tracing::debug!(path = %relative.display(), "excluded");
            continue;
        }

        if results.len() >= limit {
            return Err(FormatError::TooManyFiles { limit });
        }

        let classification = classify_as(path.to_path_buf(), relative, name, chain);
        tracing::trace!(
            path = %relative.display(),
            format = %classification.format,
            source = %classification.source,
            "classified"
        );
        results.push(classification);
    }

    results.sort_by(|a, b| a.path.cmp(&b.path));
    tracing::debug!(root = %root.display(), files = results.len(), "scan complete");
    Ok(results)
}
