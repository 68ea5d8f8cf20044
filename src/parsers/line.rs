use regex::Regex;
use std::path::Path;

use super::{ImportScanner, ScanMode};
use crate::error::ExtractError;

const IMPORT_PATTERN: &str = r"import\s+(.*);";

/// Matches `import <name>;` on each physical line independently.
///
/// Statements split across lines are missed and commented-out imports are
/// reported, since nothing here knows about comments.
pub struct LineScanner {
    pattern: Regex,
}

impl LineScanner {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(IMPORT_PATTERN).expect("import pattern is valid"),
        }
    }
}

impl ImportScanner for LineScanner {
    fn scan_source(&self, source: &str, _file_path: &Path) -> Result<Vec<String>, ExtractError> {
        Ok(source
            .lines()
            .filter_map(|line| self.pattern.captures(line))
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect())
    }

    fn mode(&self) -> ScanMode {
        ScanMode::Lines
    }
}

impl Default for LineScanner {
    fn default() -> Self {
        Self::new()
    }
}
