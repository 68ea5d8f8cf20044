use std::path::PathBuf;
use tracing::info;

use crate::config::Config;
use crate::core::{DependencyMap, PackageAnalyzer, PackagePath, ScanStats};
use crate::error::AppError;
use crate::formatters::DotFormatter;
use crate::render::GraphvizRenderer;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Stop after writing the DOT file.
    pub skip_render: bool,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub package: PackagePath,
    pub dependencies: DependencyMap,
    pub stats: ScanStats,
    pub dot_path: PathBuf,
    pub image_path: Option<PathBuf>,
}

/// Extract, write the DOT file, then render it.
///
/// A DOT file written before a renderer failure stays on disk.
pub fn run(config: &Config, options: &RunOptions) -> Result<RunReport, AppError> {
    let analyzer = PackageAnalyzer::new(&config.source_extension, config.scan_mode);
    let extraction = analyzer.analyze(&config.package_name, &config.source_dir)?;

    DotFormatter::new().format_to_file(&extraction.dependencies, &config.output_path)?;
    let graph = extraction.dependencies.to_graph();
    info!(
        path = %config.output_path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "wrote graph description"
    );

    let image_path = if options.skip_render {
        None
    } else {
        GraphvizRenderer::new(&config.graphviz_path)
            .render(&config.output_path, &config.image_path)?;
        Some(config.image_path.clone())
    };

    Ok(RunReport {
        package: extraction.package,
        dependencies: extraction.dependencies,
        stats: extraction.stats,
        dot_path: config.output_path.clone(),
        image_path,
    })
}
