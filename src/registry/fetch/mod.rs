//! Collection fetching from remote sources.
//!
//! This module downloads a collection archive over HTTP and unpacks it into
//! a scratch directory, refusing entries that would escape it.

pub mod archive;
pub mod http;
pub mod safety;

pub use archive::{extract_archive, fetch_and_extract};
pub use http::HttpFetcher;
pub use safety::resolve_entry_path;
