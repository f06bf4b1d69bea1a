//! Public entry point combining the cache, resolver and materializer.

use std::path::{Path, PathBuf};

use super::catalog::Catalog;
use super::materializer::{self, MaterializationResult};
use super::resolver::CatalogResolver;
use super::template::ResolvedTemplate;
use crate::cache::CollectionCache;
use crate::config::Settings;
use crate::error::Result;

/// Lists, previews and copies templates from one remote collection.
///
/// Owns a [`CollectionCache`], so every operation on the same registry
/// shares a single fetch unless [`refresh`](Self::refresh) is called.
#[derive(Debug)]
pub struct TemplateRegistry {
    cache: CollectionCache,
}

impl TemplateRegistry {
    /// Create a registry over an existing cache.
    pub fn new(cache: CollectionCache) -> Self {
        Self { cache }
    }

    /// Create a registry from settings. Nothing is fetched yet.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(CollectionCache::from_settings(settings)?))
    }

    /// The underlying cache.
    pub fn cache(&self) -> &CollectionCache {
        &self.cache
    }

    fn resolver(&self) -> CatalogResolver<'_> {
        CatalogResolver::new(&self.cache)
    }

    /// Fetch the collection again, replacing the cached snapshot.
    pub fn refresh(&self) -> Result<Catalog> {
        Ok(self.cache.get_or_fetch(true)?.catalog().clone())
    }

    /// Templates available in the collection.
    pub fn list_templates(&self) -> Result<Catalog> {
        self.resolver().list_templates()
    }

    /// Resolve a template name to its directory.
    pub fn resolve(&self, name: &str) -> Result<ResolvedTemplate> {
        self.resolver().resolve(name)
    }

    /// Relative paths of the files a copy of `name` would create.
    pub fn list_template_files(&self, name: &str) -> Result<Vec<PathBuf>> {
        materializer::list_files(&self.resolve(name)?)
    }

    /// Copy the files of template `name` into `destination`.
    pub fn copy_template_files(
        &self,
        name: &str,
        destination: &Path,
    ) -> Result<MaterializationResult> {
        materializer::copy(&self.resolve(name)?, destination)
    }
}
