//! Sprout - Project scaffolding from remote template collections.
//!
//! Sprout downloads a collection of project templates published as a ZIP
//! archive, catalogs the templates it contains, and copies the one you pick
//! into a directory on disk.
//!
//! # Modules
//!
//! - [`cache`] - In-process memoization of the fetched collection
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings file loading
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Fetching, cataloging, resolving and copying templates
//! - [`ui`] - Spinners and terminal output
//!
//! # Example
//!
//! ```
//! use sprout::registry::TemplateDescriptor;
//!
//! // A manifest entry without a path lives in a directory named after it
//! let descriptor = TemplateDescriptor::new("streamlit", "Streamlit app");
//! assert_eq!(descriptor.relative_path(), "streamlit");
//! ```
//!
//! For end-to-end usage against a collection, see the integration tests.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod ui;

pub use error::{Result, SproutError};
