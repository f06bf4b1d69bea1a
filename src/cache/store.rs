//! In-process collection cache.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::snapshot::CollectionSnapshot;
use crate::config::{CatalogSettings, Settings};
use crate::error::Result;
use crate::registry::fetch::{fetch_and_extract, HttpFetcher};

/// Memoizes the fetched collection for the lifetime of the cache.
///
/// The snapshot is only replaced when a fetch is forced or nothing has been
/// fetched yet. Fetch and replace happen under one lock, so concurrent
/// callers trigger at most one fetch and readers only ever see a complete
/// snapshot.
#[derive(Debug)]
pub struct CollectionCache {
    fetcher: HttpFetcher,
    source_url: String,
    catalog_settings: CatalogSettings,
    snapshot: Mutex<Option<Arc<CollectionSnapshot>>>,
    fetches: AtomicUsize,
}

impl CollectionCache {
    /// Create an empty cache for the collection at `source_url`.
    pub fn new(
        fetcher: HttpFetcher,
        source_url: impl Into<String>,
        catalog_settings: CatalogSettings,
    ) -> Self {
        Self {
            fetcher,
            source_url: source_url.into(),
            catalog_settings,
            snapshot: Mutex::new(None),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Create an empty cache from settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let fetcher = HttpFetcher::from_settings(&settings.source)?;
        Ok(Self::new(
            fetcher,
            settings.source.url.clone(),
            settings.catalog.clone(),
        ))
    }

    /// Collection URL this cache fetches from.
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Return the cached snapshot, fetching it if absent or if `force_refresh` is set.
    ///
    /// A failed fetch leaves any previous snapshot in place.
    pub fn get_or_fetch(&self, force_refresh: bool) -> Result<Arc<CollectionSnapshot>> {
        let mut slot = self.lock();

        if !force_refresh {
            if let Some(snapshot) = slot.as_ref() {
                tracing::debug!("Using cached collection from {}", self.source_url);
                return Ok(Arc::clone(snapshot));
            }
        }

        let fresh = Arc::new(self.fetch()?);
        *slot = Some(Arc::clone(&fresh));
        Ok(fresh)
    }

    /// The current snapshot, without fetching.
    pub fn current(&self) -> Option<Arc<CollectionSnapshot>> {
        self.lock().clone()
    }

    /// Forget the current snapshot. Returns whether one was held.
    pub fn invalidate(&self) -> bool {
        self.lock().take().is_some()
    }

    /// Number of network fetches performed by this cache.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn fetch(&self) -> Result<CollectionSnapshot> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("Fetching template collection from {}", self.source_url);

        let scratch = fetch_and_extract(&self.fetcher, &self.source_url)?;
        let snapshot =
            CollectionSnapshot::from_extraction(scratch, &self.source_url, &self.catalog_settings)?;

        tracing::debug!(
            "Loaded {} templates from {}",
            snapshot.catalog().len(),
            self.source_url
        );
        Ok(snapshot)
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<CollectionSnapshot>>> {
        self.snapshot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
