use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core::DependencyMap;
use crate::error::EmitError;

/// Graphviz `digraph` writer: one `"package" -> "dependency";` line per
/// import, in insertion order.
pub struct DotFormatter;

const GRAPH_NAME: &str = "dependencies";

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Write the graph to `output_path`, replacing any existing file.
    pub fn format_to_file(
        &self,
        dependencies: &DependencyMap,
        output_path: &Path,
    ) -> Result<(), EmitError> {
        fs::write(output_path, self.format(dependencies)).map_err(|source| EmitError::Write {
            path: output_path.to_path_buf(),
            source,
        })
    }

    pub fn format(&self, dependencies: &DependencyMap) -> String {
        let mut out = String::with_capacity(32 + dependencies.dependency_count() * 48);
        let _ = writeln!(out, "digraph {GRAPH_NAME} {{");
        for (package, dependency) in dependencies.edges() {
            let _ = writeln!(
                out,
                "  \"{}\" -> \"{}\";",
                escape(package),
                escape(dependency)
            );
        }
        out.push_str("}\n");
        out
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(name: &str) -> String {
    if !name.contains(['"', '\\']) {
        return name.to_string();
    }
    let mut escaped = String::with_capacity(name.len() + 2);
    for c in name.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
