//! Error types for every stage of the pipeline.
//!
//! Each stage owns its error enum; [`AppError`] wraps them so callers can
//! match on [`ErrorKind`] instead of parsing printed text.

use std::path::PathBuf;
use std::process::ExitStatus;

/// Configuration loading failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document does not exist.
    #[error("configuration file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The document is not valid XML or a field is missing, empty or invalid.
    #[error("malformed configuration {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    /// Any other I/O failure while reading the document.
    #[error("failed to read configuration {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure while locating the package or extracting its imports.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("invalid package identifier '{package}': {reason}")]
    InvalidPackage { package: String, reason: String },

    #[error("source directory not found: {}", path.display())]
    SourceDirMissing { path: PathBuf },

    /// No directory under the source root corresponds to the package.
    #[error(
        "package '{package}' has no directory under {}: expected {}",
        source_dir.display(),
        expected.display()
    )]
    PackageNotFound {
        package: String,
        source_dir: PathBuf,
        expected: PathBuf,
    },

    #[error("failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
}

/// Failure while writing the DOT description.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("failed to write graph to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of the external renderer.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to start renderer {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("renderer {program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Top-level error returned by [`crate::app::run`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// User-facing failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConfigMissing,
    ConfigMalformed,
    Renderer,
    Other,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(ConfigError::NotFound { .. }) => ErrorKind::ConfigMissing,
            Self::Config(ConfigError::Malformed { .. }) => ErrorKind::ConfigMalformed,
            Self::Render(_) => ErrorKind::Renderer,
            Self::Config(ConfigError::Read { .. }) | Self::Extract(_) | Self::Emit(_) => {
                ErrorKind::Other
            }
        }
    }

    /// Message printed by the CLI for this error.
    pub fn report(&self) -> String {
        match self.kind() {
            ErrorKind::ConfigMissing | ErrorKind::ConfigMalformed => format!("Error: {self}"),
            ErrorKind::Renderer => format!("Error while running Graphviz: {self}"),
            ErrorKind::Other => format!("An error occurred: {self}"),
        }
    }
}
