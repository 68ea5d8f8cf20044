use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tree_sitter::{Language, Node as TSNode, Parser, Tree};

use crate::error::ExtractError;

pub struct TreeSitterParser {
    parser: Parser,
}

impl TreeSitterParser {
    pub fn new(language: Language, file_path: &Path) -> Result<Self, ExtractError> {
        let mut parser = Parser::new();
        parser
            .set_language(language)
            .map_err(|e| ExtractError::Parse {
                path: file_path.to_path_buf(),
                reason: e.to_string(),
            })?;
        Ok(Self { parser })
    }

    pub fn parse(&mut self, source: &str, file_path: &Path) -> Result<Tree, ExtractError> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| ExtractError::Parse {
                path: file_path.to_path_buf(),
                reason: "parser returned no tree".to_string(),
            })
    }
}

/// Read a whole source file as UTF-8 with a buffer sized to the file.
pub fn read_source(file_path: &Path) -> Result<String, ExtractError> {
    let read_err = |source| ExtractError::Read {
        path: file_path.to_path_buf(),
        source,
    };

    let file = File::open(file_path).map_err(read_err)?;
    let file_size = file.metadata().map_err(read_err)?.len() as usize;

    let mut reader = BufReader::with_capacity(file_size.clamp(1, 8192), file);
    let mut content = String::with_capacity(file_size);
    reader.read_to_string(&mut content).map_err(read_err)?;
    Ok(content)
}

pub fn extract_text<'a>(node: &TSNode, source: &'a [u8]) -> &'a str {
    std::str::from_utf8(&source[node.byte_range()]).unwrap_or("")
}
