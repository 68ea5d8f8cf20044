use std::path::Path;
use std::process::Command;
use tracing::{debug, info};

use crate::error::RenderError;

/// Runs Graphviz (`dot`) to turn a graph description into a PNG image.
///
/// The call blocks until the child process exits; there is no timeout.
pub struct GraphvizRenderer {
    executable: String,
}

impl GraphvizRenderer {
    pub fn new(executable: &str) -> Self {
        Self {
            executable: executable.to_string(),
        }
    }

    /// `<executable> -Tpng <dot_path> -o <image_path>`
    pub fn render(&self, dot_path: &Path, image_path: &Path) -> Result<(), RenderError> {
        let mut cmd = Command::new(&self.executable);
        cmd.arg("-Tpng").arg(dot_path).arg("-o").arg(image_path);
        debug!(command = ?cmd, "invoking renderer");

        let output = cmd.output().map_err(|source| RenderError::Spawn {
            program: self.executable.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(RenderError::Failed {
                program: self.executable.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        info!(image = %image_path.display(), "rendered image");
        Ok(())
    }
}
