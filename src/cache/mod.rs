//! Collection caching.
//!
//! This module memoizes the fetched, cataloged collection for one process
//! (or one [`CollectionCache`] instance). There is no on-disk persistence:
//! a new cache always starts empty.

pub mod snapshot;
pub mod store;

pub use snapshot::{find_collection_root, CollectionSnapshot, RESERVED_ROOT_NAMES};
pub use store::CollectionCache;
