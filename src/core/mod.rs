pub mod analyzer;
pub mod graph;
pub mod package;
pub mod scanner;

pub use analyzer::{Extraction, PackageAnalyzer, ScanStats};
pub use graph::{DependencyGraph, DependencyMap, ImportEdge};
pub use package::PackagePath;
pub use scanner::FileScanner;
