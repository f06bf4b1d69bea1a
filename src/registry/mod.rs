//! Template registry for Sprout.
//!
//! This module resolves template names against a remote collection and
//! materializes them on disk:
//! - [`fetch`] downloads and safely unpacks the collection archive
//! - [`catalog`] builds the existence-filtered catalog of a collection root
//! - [`resolver`] maps a template name to its directory
//! - [`materializer`] lists and copies a template's files
//! - [`TemplateRegistry`] ties them together over a [`CollectionCache`]
//!
//! # Example
//!
//! ```no_run
//! use sprout::config::Settings;
//! use sprout::registry::TemplateRegistry;
//! use std::path::Path;
//!
//! let registry = TemplateRegistry::from_settings(&Settings::default()).unwrap();
//! for template in &registry.list_templates().unwrap() {
//!     println!("{}: {}", template.name, template.description);
//! }
//! registry.copy_template_files("streamlit", Path::new("my-app")).unwrap();
//! ```
//!
//! [`CollectionCache`]: crate::cache::CollectionCache

pub mod catalog;
pub mod facade;
pub mod fetch;
pub mod manifest;
pub mod materializer;
pub mod resolver;
pub mod template;

// Re-exports
pub use catalog::{Catalog, CatalogBuilder};
pub use facade::TemplateRegistry;
pub use fetch::HttpFetcher;
pub use manifest::CatalogManifest;
pub use materializer::MaterializationResult;
pub use resolver::{resolve_in, CatalogResolver};
pub use template::{ResolvedTemplate, TemplateDescriptor};
