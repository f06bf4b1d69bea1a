//! Template name resolution against the cached collection.

use std::sync::Arc;

use super::catalog::{template_dir, Catalog};
use super::template::ResolvedTemplate;
use crate::cache::{CollectionCache, CollectionSnapshot};
use crate::error::{Result, SproutError};

/// Lists and resolves templates using a [`CollectionCache`].
#[derive(Debug, Clone, Copy)]
pub struct CatalogResolver<'c> {
    cache: &'c CollectionCache,
}

impl<'c> CatalogResolver<'c> {
    /// Create a resolver over `cache`.
    pub fn new(cache: &'c CollectionCache) -> Self {
        Self { cache }
    }

    /// Effective catalog, fetching the collection on first use.
    pub fn list_templates(&self) -> Result<Catalog> {
        Ok(self.cache.get_or_fetch(false)?.catalog().clone())
    }

    /// Resolve `name` to its directory in the cached collection.
    pub fn resolve(&self, name: &str) -> Result<ResolvedTemplate> {
        let snapshot = self.cache.get_or_fetch(false)?;
        resolve_in(&snapshot, name)
    }
}

/// Resolve `name` against a specific snapshot.
///
/// Exact, case-sensitive match on the first catalog entry with that name.
/// The backing directory is checked again, so a directory removed after
/// cataloging is reported as not found rather than handed out.
pub fn resolve_in(snapshot: &Arc<CollectionSnapshot>, name: &str) -> Result<ResolvedTemplate> {
    let not_found = || SproutError::TemplateNotFound {
        name: name.to_string(),
    };

    let descriptor = snapshot.catalog().get(name).ok_or_else(not_found)?;
    let path = template_dir(snapshot.root_directory(), descriptor).ok_or_else(not_found)?;

    tracing::debug!("Resolved template '{}' to {}", name, path.display());
    Ok(ResolvedTemplate::new(
        descriptor.clone(),
        path,
        Arc::clone(snapshot),
    ))
}
