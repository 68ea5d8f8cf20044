use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use importgraph::app::{self, RunOptions};
use importgraph::config::{Config, DEFAULT_CONFIG_PATH};
use importgraph::error::AppError;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "importgraph",
    version,
    about = "Render the imports of one package as a Graphviz graph"
)]
struct Cli {
    /// XML configuration file
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Write the DOT file but do not invoke Graphviz
    #[arg(long)]
    skip_render: bool,

    /// Log level filter (RUST_LOG takes precedence)
    #[arg(short, long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    // Failures are reported once here; the exit status stays zero.
    if let Err(err) = run(&cli) {
        tracing::error!(error = %err, kind = ?err.kind(), "run failed");
        println!("{}", err.report());
    }
    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log level '{level}'"))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let start_time = Instant::now();

    let config = Config::load(&cli.config)?;
    println!("Package: {}", config.package_name);
    println!("Source: {}", config.source_dir.display());
    println!("Scan mode: {}", config.scan_mode);

    let options = RunOptions {
        skip_render: cli.skip_render,
    };
    let report = app::run(&config, &options)?;

    println!(
        "Found {} dependencies in {} file(s)",
        report.dependencies.dependency_count(),
        report.stats.files_matched
    );
    println!("DOT file created: {}", report.dot_path.display());
    if let Some(image) = &report.image_path {
        println!("Image created: {}", image.display());
    }
    println!(
        "Total execution time: {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
