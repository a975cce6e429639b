use std::{fmt, str::FromStr};

use thiserror::Error;

use super::types::TableManifest;

/// Errors that can occur while rendering a manifest document.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ManifestFormat {
    #[default]
    Yaml,
    Json,
}

impl ManifestFormat {
    /// File name the manifest is written under.
    pub fn file_name(&self) -> &'static str {
        match self {
            ManifestFormat::Yaml => "table-manifest.yaml",
            ManifestFormat::Json => "table-manifest.json",
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestFormat::Yaml => write!(f, "yaml"),
            ManifestFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for ManifestFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(ManifestFormat::Yaml),
            "json" => Ok(ManifestFormat::Json),
            other => Err(format!("unknown manifest format '{other}' (expected yaml or json)")),
        }
    }
}

/// Renders a manifest. Same manifest in, same bytes out.
pub fn render_manifest(
    manifest: &TableManifest,
    format: ManifestFormat,
) -> Result<String, RenderError> {
    let rendered = match format {
        ManifestFormat::Yaml => serde_yaml::to_string(manifest)?,
        ManifestFormat::Json => {
            let mut json = serde_json::to_string_pretty(manifest)?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}
