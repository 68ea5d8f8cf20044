use std::path::Path;
use tree_sitter::Node as TSNode;

use super::common::{extract_text, TreeSitterParser};
use super::{ImportScanner, ScanMode};
use crate::error::ExtractError;

/// Reads `import_declaration` nodes from a tree-sitter-java parse.
pub struct JavaSyntaxScanner;

impl JavaSyntaxScanner {
    pub fn new() -> Self {
        Self
    }

    fn extract_imports(&self, root: &TSNode, source: &[u8]) -> Vec<String> {
        let mut cursor = root.walk();
        let imports = root
            .children(&mut cursor)
            .filter(|child| child.kind() == "import_declaration")
            .filter_map(|child| self.process_import(&child, source))
            .collect();
        imports
    }

    fn process_import(&self, import_node: &TSNode, source: &[u8]) -> Option<String> {
        let mut name = None;
        let mut wildcard = false;

        let mut cursor = import_node.walk();
        for child in import_node.children(&mut cursor) {
            match child.kind() {
                "identifier" | "scoped_identifier" => {
                    let mut parts = Vec::new();
                    collect_identifiers(&child, source, &mut parts);
                    name = Some(parts.join("."));
                }
                "asterisk" | "*" => wildcard = true,
                _ => {}
            }
        }

        name.map(|name| if wildcard { format!("{name}.*") } else { name })
    }
}

/// Identifier leaves of a (possibly scoped) name, left to right. Comments
/// between segments are skipped.
fn collect_identifiers(node: &TSNode, source: &[u8], parts: &mut Vec<String>) {
    if node.kind() == "identifier" {
        parts.push(extract_text(node, source).to_string());
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if matches!(child.kind(), "identifier" | "scoped_identifier") {
            collect_identifiers(&child, source, parts);
        }
    }
}

impl ImportScanner for JavaSyntaxScanner {
    fn scan_source(&self, source: &str, file_path: &Path) -> Result<Vec<String>, ExtractError> {
        let mut parser = TreeSitterParser::new(tree_sitter_java::language(), file_path)?;
        let tree = parser.parse(source, file_path)?;
        Ok(self.extract_imports(&tree.root_node(), source.as_bytes()))
    }

    fn mode(&self) -> ScanMode {
        ScanMode::Syntax
    }
}

impl Default for JavaSyntaxScanner {
    fn default() -> Self {
        Self::new()
    }
}
