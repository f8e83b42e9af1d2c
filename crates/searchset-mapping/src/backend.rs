//! The backend collaborator contract.
//!
//! This module defines the [`SearchBackend`] trait: the two capabilities the
//! mapping layer consumes from concrete storage (an ORM, a database driver,
//! a search engine, ...). The trait lives here rather than in the backends
//! crate so catalogs can be defined without a dependency cycle.

use std::collections::HashSet;

use searchset_core::SearchResult;

/// The minimal storage interface consumed by the mapping layer.
///
/// Implementations answer two questions: which field names exist in the
/// backend schema, and which distinct values of given columns contain a
/// prefix. Both calls are synchronous; cancellation and timeout policy
/// belong to the implementation. Failures are surfaced as
/// [`SearchError::BackendUnavailable`](searchset_core::SearchError::BackendUnavailable)
/// and are propagated unmodified, never retried, by this layer.
pub trait SearchBackend: Send + Sync {
    /// Returns every field name known to the backend schema, in schema
    /// order, independent of declared fields.
    fn fetch_raw_field_names(&self) -> SearchResult<Vec<String>>;

    /// Returns distinct values across `sources` whose text rendering
    /// case-insensitively contains `prefix`, deduplicated across sources and
    /// truncated to `limit`.
    fn fetch_distinct_values(
        &self,
        sources: &[String],
        prefix: &str,
        limit: usize,
    ) -> SearchResult<HashSet<String>>;
}
