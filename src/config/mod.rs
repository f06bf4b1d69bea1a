//! Settings for Sprout.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use sprout::config::{parse_settings, Settings};
//! use std::path::Path;
//!
//! let settings = parse_settings("catalog:\n  ignore: [dist]\n", Path::new("inline.yml")).unwrap();
//! assert_eq!(settings.catalog.ignore, vec!["dist".to_string()]);
//! assert_eq!(settings.source, Settings::default().source);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_settings, load_settings_file, parse_settings, user_config_path};
pub use schema::{
    CatalogSettings, Settings, SourceSettings, DEFAULT_MANIFEST, DEFAULT_SOURCE_URL,
};
