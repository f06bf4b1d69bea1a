//! Catalog manifest definitions.
//!
//! A collection may declare its templates in a JSON manifest at its root:
//!
//! ```json
//! {"templates": [{"name": "alpha", "description": "...", "path": "./alpha"}]}
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::template::TemplateDescriptor;
use crate::error::{Result, SproutError};

/// Catalog manifest declaring the templates of a collection, in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogManifest {
    /// Declared templates.
    #[serde(default)]
    pub templates: Vec<TemplateDescriptor>,
}

impl CatalogManifest {
    /// Read and parse a manifest file.
    ///
    /// Any read or parse failure is a [`SproutError::CatalogParseError`];
    /// a broken manifest never falls back to directory enumeration.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| SproutError::CatalogParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    /// Parse manifest JSON. `source_path` is only used for error reporting.
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| SproutError::CatalogParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
