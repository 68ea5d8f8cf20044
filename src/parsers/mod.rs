pub mod common;
pub mod java;
pub mod line;
pub mod tokens;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::ExtractError;

/// How import statements are recognised in a source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScanMode {
    /// Per-line regex match. Misses split statements, matches commented-out
    /// lines.
    Lines,
    /// Comment-aware lexer that joins statements across lines.
    #[default]
    Tokens,
    /// Full tree-sitter-java parse.
    Syntax,
}

impl ScanMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ScanMode::Lines => "lines",
            ScanMode::Tokens => "tokens",
            ScanMode::Syntax => "syntax",
        }
    }
}

impl fmt::Display for ScanMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScanMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lines" | "line" => Ok(ScanMode::Lines),
            "tokens" | "token" => Ok(ScanMode::Tokens),
            "syntax" => Ok(ScanMode::Syntax),
            other => Err(format!(
                "unknown scan mode '{other}' (expected lines, tokens or syntax)"
            )),
        }
    }
}

pub trait ImportScanner {
    /// Imported names in `source`, in order of appearance.
    fn scan_source(&self, source: &str, file_path: &Path) -> Result<Vec<String>, ExtractError>;

    fn scan_file(&self, file_path: &Path) -> Result<Vec<String>, ExtractError> {
        let source = common::read_source(file_path)?;
        self.scan_source(&source, file_path)
    }

    fn mode(&self) -> ScanMode;
}

pub struct ScannerFactory;

impl ScannerFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn get_scanner(&self, mode: ScanMode) -> Box<dyn ImportScanner> {
        match mode {
            ScanMode::Lines => Box::new(line::LineScanner::new()),
            ScanMode::Tokens => Box::new(tokens::TokenScanner::new()),
            ScanMode::Syntax => Box::new(java::JavaSyntaxScanner::new()),
        }
    }
}

impl Default for ScannerFactory {
    fn default() -> Self {
        Self::new()
    }
}
