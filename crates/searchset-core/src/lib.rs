//! # searchset-core
//!
//! Foundation types for the searchset library: the [`SearchError`] taxonomy,
//! the [`CatalogConfig`] configuration surface, logging setup, and the
//! [`LazyCache`](lazy::LazyCache) memoization primitive used by the catalog
//! caches.

pub mod config;
pub mod error;
pub mod lazy;
pub mod logging;

pub use config::CatalogConfig;
pub use error::{SearchError, SearchResult};
pub use lazy::LazyCache;
