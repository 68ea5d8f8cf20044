use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::package::PackagePath;
use super::{DependencyMap, FileScanner};
use crate::error::ExtractError;
use crate::parsers::{ScanMode, ScannerFactory};

/// Counters and locations tracked while extracting one package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub files_visited: usize,
    pub candidate_files: usize,
    pub files_matched: usize,
    pub matched_dir: Option<PathBuf>,
    pub last_matched_file: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Extraction {
    pub package: PackagePath,
    pub dependencies: DependencyMap,
    pub stats: ScanStats,
}

pub struct PackageAnalyzer {
    file_scanner: FileScanner,
    scanner_factory: ScannerFactory,
    scan_mode: ScanMode,
}

impl PackageAnalyzer {
    pub fn new(extension: &str, scan_mode: ScanMode) -> Self {
        Self {
            file_scanner: FileScanner::new(extension),
            scanner_factory: ScannerFactory::new(),
            scan_mode,
        }
    }

    /// Collect the imports declared by files that sit directly in the
    /// directory of `package_name` under `source_dir`.
    pub fn analyze(&self, package_name: &str, source_dir: &Path) -> Result<Extraction, ExtractError> {
        let package = PackagePath::resolve(package_name, source_dir)?;
        debug!(
            package = %package.package,
            relative = %package.relative,
            directory = %package.directory.display(),
            "resolved package directory"
        );

        let outcome = self.file_scanner.scan_package(source_dir, &package.relative)?;
        let import_scanner = self.scanner_factory.get_scanner(self.scan_mode);

        let mut dependencies = DependencyMap::new();
        let mut stats = ScanStats {
            files_visited: outcome.files_visited,
            candidate_files: outcome.candidates,
            ..ScanStats::default()
        };

        for file_info in &outcome.files {
            dependencies.ensure_package(&package.package);

            let imports = import_scanner.scan_file(&file_info.path)?;
            debug!(
                file = %file_info.path.display(),
                dir = %file_info.relative_dir,
                imports = imports.len(),
                mode = %import_scanner.mode(),
                "scanned file"
            );
            for import in imports {
                dependencies.add_dependency(&package.package, import);
            }

            stats.files_matched += 1;
            stats.matched_dir = file_info.path.parent().map(Path::to_path_buf);
            stats.last_matched_file = Some(file_info.path.clone());
        }

        info!(
            package = %package.package,
            matched_dir = ?stats.matched_dir,
            files_visited = stats.files_visited,
            files_matched = stats.files_matched,
            dependencies = dependencies.dependency_count(),
            "extraction finished"
        );

        Ok(Extraction {
            package,
            dependencies,
            stats,
        })
    }
}
