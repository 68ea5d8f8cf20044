use std::path::{Component, Path, PathBuf};

use crate::error::ExtractError;

/// Directory of a package under a source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePath {
    pub package: String,
    /// Slash-separated path relative to the source root. Empty when the
    /// package directory is the root itself.
    pub relative: String,
    pub directory: PathBuf,
}

impl PackagePath {
    /// Resolve `package` to a directory nested under `source_dir`.
    ///
    /// The full dotted path is tried first (`com.example.pkg` under `./src`
    /// is `src/com/example/pkg`). When that directory is absent and the
    /// source root already ends with leading package segments (root
    /// `./src/com/example`), the overlap is stripped; the longest overlap
    /// whose directory exists wins.
    pub fn resolve(package: &str, source_dir: &Path) -> Result<Self, ExtractError> {
        let segments = package_segments(package)?;

        if !source_dir.is_dir() {
            return Err(ExtractError::SourceDirMissing {
                path: source_dir.to_path_buf(),
            });
        }

        let source_parts = source_parts(source_dir);
        let max_overlap = segments.len().min(source_parts.len());
        let overlaps = (1..=max_overlap).rev().filter(|&k| {
            source_parts[source_parts.len() - k..]
                .iter()
                .zip(&segments[..k])
                .all(|(dir, seg)| dir.as_str() == *seg)
        });

        for skip in std::iter::once(0).chain(overlaps) {
            let directory = nested_dir(source_dir, &segments[skip..]);
            if directory.is_dir() {
                return Ok(Self {
                    package: package.to_string(),
                    relative: segments[skip..].join("/"),
                    directory,
                });
            }
        }

        Err(ExtractError::PackageNotFound {
            package: package.to_string(),
            source_dir: source_dir.to_path_buf(),
            expected: nested_dir(source_dir, &segments),
        })
    }
}

/// Named components of a source directory, with `.` markers and roots dropped.
pub fn source_parts(source_dir: &Path) -> Vec<String> {
    source_dir
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

/// Split and validate a dotted package identifier.
pub fn package_segments(package: &str) -> Result<Vec<&str>, ExtractError> {
    let invalid = |reason: String| ExtractError::InvalidPackage {
        package: package.to_string(),
        reason,
    };

    if package.trim().is_empty() {
        return Err(invalid("identifier is empty".to_string()));
    }

    package
        .split('.')
        .map(|segment| {
            if segment.is_empty() {
                return Err(invalid("empty segment".to_string()));
            }
            if !is_identifier(segment) {
                return Err(invalid(format!("'{segment}' is not an identifier")));
            }
            Ok(segment)
        })
        .collect()
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn nested_dir(root: &Path, segments: &[&str]) -> PathBuf {
    let mut dir = root.to_path_buf();
    for segment in segments {
        dir.push(segment);
    }
    dir
}
