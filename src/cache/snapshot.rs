//! Point-in-time view of a fetched collection.

use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::CatalogSettings;
use crate::error::{Result, SproutError};
use crate::registry::catalog::{Catalog, CatalogBuilder};

/// Top-level archive artifacts that are never a collection root.
pub const RESERVED_ROOT_NAMES: &[&str] = &["__MACOSX"];

/// A fetched collection: its root directory and effective catalog.
///
/// Never mutated after construction. When the snapshot owns the scratch
/// directory it was extracted into, dropping the last reference removes it.
#[derive(Debug)]
pub struct CollectionSnapshot {
    root_directory: PathBuf,
    catalog: Catalog,
    source_url: String,
    fetched_at: DateTime<Utc>,
    _scratch: Option<TempDir>,
}

impl CollectionSnapshot {
    /// Build a snapshot from a freshly extracted archive.
    ///
    /// Picks the collection root inside `scratch` and catalogs it. Fails with
    /// [`SproutError::EmptyCollection`] when there is no usable root.
    pub fn from_extraction(
        scratch: TempDir,
        source_url: &str,
        settings: &CatalogSettings,
    ) -> Result<Self> {
        let root = find_collection_root(scratch.path())?.ok_or_else(|| {
            SproutError::EmptyCollection {
                url: source_url.to_string(),
            }
        })?;
        tracing::debug!("Collection root: {}", root.display());

        Self::build(root, source_url, settings, Some(scratch))
    }

    /// Build a snapshot over a collection that is already on disk.
    ///
    /// The directory is not owned and is left in place when the snapshot
    /// is dropped.
    pub fn from_directory(root: impl Into<PathBuf>, settings: &CatalogSettings) -> Result<Self> {
        let root = root.into();
        let source = root.display().to_string();
        Self::build(root, &source, settings, None)
    }

    fn build(
        root: PathBuf,
        source_url: &str,
        settings: &CatalogSettings,
        scratch: Option<TempDir>,
    ) -> Result<Self> {
        if !has_visible_subdirectory(&root)? {
            return Err(SproutError::EmptyCollection {
                url: source_url.to_string(),
            });
        }

        let catalog = CatalogBuilder::new(settings).build(&root)?;
        if catalog.dropped() > 0 {
            tracing::warn!(
                "{} declared template(s) have no directory in {}",
                catalog.dropped(),
                source_url
            );
        }

        Ok(Self {
            root_directory: root,
            catalog,
            source_url: source_url.to_string(),
            fetched_at: Utc::now(),
            _scratch: scratch,
        })
    }

    /// Collection root directory.
    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    /// Effective catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Where the collection came from.
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// When the snapshot was taken.
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

/// First directory under `extraction_root`, by name, that is not a reserved artifact.
pub fn find_collection_root(extraction_root: &Path) -> Result<Option<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in fs::read_dir(extraction_root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        if RESERVED_ROOT_NAMES.iter().any(|r| name == *r) {
            continue;
        }
        candidates.push(entry.path());
    }

    candidates.sort();
    Ok(candidates.into_iter().next())
}

fn has_visible_subdirectory(root: &Path) -> Result<bool> {
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() && !entry.file_name().to_string_lossy().starts_with('.') {
            return Ok(true);
        }
    }
    Ok(false)
}
