use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use crate::error::ExtractError;

#[derive(Debug, Clone)]
pub struct FileInfo {
    pub path: PathBuf,
    /// Containing directory relative to the scan root, `/`-separated.
    pub relative_dir: String,
}

/// Files of one package, plus counters gathered during the walk.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub files: Vec<FileInfo>,
    pub files_visited: usize,
    pub candidates: usize,
}

pub struct FileScanner {
    extension: String,
}

impl FileScanner {
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Recursively walk `root_path` and keep files with the scanner's
    /// extension whose directory, relative to the root, equals
    /// `package_dir` exactly. Subdirectories of the package are not included.
    ///
    /// Unreadable entries elsewhere in the tree are logged and skipped; a
    /// failure on the root, the package directory or a file directly inside
    /// it is returned.
    pub fn scan_package(
        &self,
        root_path: &Path,
        package_dir: &str,
    ) -> Result<ScanOutcome, ExtractError> {
        let mut outcome = ScanOutcome::default();
        let package_path = package_path(root_path, package_dir);

        for entry in WalkDir::new(root_path)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if affects_package(&err, &package_path) => return Err(err.into()),
                Err(err) => {
                    warn!(path = ?err.path(), error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            outcome.files_visited += 1;

            let path = entry.path();
            let matches_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == self.extension);
            if !matches_extension {
                continue;
            }
            outcome.candidates += 1;

            let relative_dir = relative_dir(root_path, path);
            if relative_dir == package_dir {
                outcome.files.push(FileInfo {
                    path: path.to_path_buf(),
                    relative_dir,
                });
            }
        }

        Ok(outcome)
    }
}

fn relative_dir(root_path: &Path, file_path: &Path) -> String {
    let parent = file_path.parent().unwrap_or(root_path);
    let relative = parent.strip_prefix(root_path).unwrap_or(parent);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn package_path(root_path: &Path, package_dir: &str) -> PathBuf {
    let mut path = root_path.to_path_buf();
    for segment in package_dir.split('/').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path
}

fn affects_package(err: &walkdir::Error, package_path: &Path) -> bool {
    if err.depth() == 0 {
        return true;
    }
    match err.path() {
        Some(path) if path == package_path => true,
        Some(path) => path.parent() == Some(package_path) && !path.is_dir(),
        None => false,
    }
}
