//! Settings schema.
//!
//! ```yaml
//! source:
//!   url: https://github.com/acme/templates/archive/refs/heads/main.zip
//!   timeout: 30
//! catalog:
//!   manifest: template.json
//!   ignore: [node_modules]
//! ```

use serde::{Deserialize, Serialize};

use crate::registry::fetch::http::default_user_agent;

/// Collection fetched when no source is configured.
pub const DEFAULT_SOURCE_URL: &str =
    "https://github.com/squadbase/squadbase-template/archive/refs/heads/main.zip";

/// Catalog manifest file name at the collection root.
pub const DEFAULT_MANIFEST: &str = "template.json";

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Where the template collection comes from.
    pub source: SourceSettings,

    /// How the catalog is built from the collection.
    pub catalog: CatalogSettings,
}

/// Remote collection source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourceSettings {
    /// Archive URL (ZIP).
    pub url: String,

    /// Request timeout in seconds.
    pub timeout: u64,

    /// User-Agent header.
    pub user_agent: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            timeout: 30,
            user_agent: default_user_agent(),
        }
    }
}

/// Catalog construction options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSettings {
    /// Manifest file name looked up at the collection root.
    pub manifest: String,

    /// Extra directory names skipped when no manifest exists.
    /// Dot-directories and `__pycache__` are always skipped.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<String>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            manifest: DEFAULT_MANIFEST.to_string(),
            ignore: Vec::new(),
        }
    }
}
