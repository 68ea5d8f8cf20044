use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::parsers::ScanMode;

pub const DEFAULT_CONFIG_PATH: &str = "config.xml";
pub const DEFAULT_IMAGE_PATH: &str = "./dependencies.png";
pub const DEFAULT_SOURCE_EXTENSION: &str = "java";

/// Settings for one run, loaded from an XML document such as:
///
/// ```xml
/// <config>
///     <graphvizPath>/usr/bin/dot</graphvizPath>
///     <packageName>com.example.pkg</packageName>
///     <outputPath>./dependencies.dot</outputPath>
///     <sourceDir>./src</sourceDir>
/// </config>
/// ```
///
/// `imagePath`, `sourceExtension` and `scanMode` are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub graphviz_path: String,
    pub package_name: String,
    pub output_path: PathBuf,
    pub source_dir: PathBuf,
    pub image_path: PathBuf,
    pub source_extension: String,
    pub scan_mode: ScanMode,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(rename = "graphvizPath")]
    graphviz_path: Option<String>,
    #[serde(rename = "packageName")]
    package_name: Option<String>,
    #[serde(rename = "outputPath")]
    output_path: Option<String>,
    #[serde(rename = "sourceDir")]
    source_dir: Option<String>,
    #[serde(rename = "imagePath")]
    image_path: Option<String>,
    #[serde(rename = "sourceExtension")]
    source_extension: Option<String>,
    #[serde(rename = "scanMode")]
    scan_mode: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ConfigError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ConfigError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;

        Self::parse(&text).map_err(|reason| ConfigError::Malformed {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn from_xml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text).map_err(|reason| ConfigError::Malformed {
            path: PathBuf::from("<memory>"),
            reason,
        })
    }

    fn parse(text: &str) -> Result<Self, String> {
        let raw: RawConfig = quick_xml::de::from_str(text).map_err(|e| e.to_string())?;

        let scan_mode = match optional(raw.scan_mode) {
            Some(mode) => mode.parse::<ScanMode>()?,
            None => ScanMode::default(),
        };

        let source_extension = optional(raw.source_extension)
            .map(|ext| ext.trim_start_matches('.').to_string())
            .unwrap_or_else(|| DEFAULT_SOURCE_EXTENSION.to_string());
        if source_extension.is_empty() {
            return Err("field `sourceExtension` is empty".to_string());
        }

        Ok(Self {
            graphviz_path: required(raw.graphviz_path, "graphvizPath")?,
            package_name: required(raw.package_name, "packageName")?,
            output_path: required(raw.output_path, "outputPath")?.into(),
            source_dir: required(raw.source_dir, "sourceDir")?.into(),
            image_path: optional(raw.image_path)
                .unwrap_or_else(|| DEFAULT_IMAGE_PATH.to_string())
                .into(),
            source_extension,
            scan_mode,
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, String> {
    optional(value).ok_or_else(|| format!("missing required field `{field}`"))
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
