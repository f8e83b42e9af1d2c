//! A single exposed searchable name and its suggestion cache.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use searchset_core::SearchResult;

use crate::backend::SearchBackend;

/// Metadata for one exposed searchable name: either a declared field's
/// canonical name or a raw source name.
///
/// `name`, `sources`, and `show_suggestions` are fixed for the life of the
/// entry. The per-prefix value cache is the only mutable state; it is
/// append-only (one slot per distinct prefix, capped at the configured
/// maximum values) and cached on first use. Prefix keys are exact: a cached
/// result for `"ab"` is not reused for `"abc"`.
#[derive(Debug)]
pub struct MappingEntry {
    name: String,
    sources: Vec<String>,
    show_suggestions: bool,
    value_cache: RwLock<HashMap<String, Vec<String>>>,
}

impl MappingEntry {
    /// Creates an entry reading values from the given source columns.
    pub fn new<I, S>(name: impl Into<String>, sources: I, show_suggestions: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            sources: sources.into_iter().map(Into::into).collect(),
            show_suggestions,
            value_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Creates an entry for a name that reads values from itself (raw or
    /// auto-exposed source entries).
    pub fn self_sourced(name: impl Into<String>, show_suggestions: bool) -> Self {
        let name = name.into();
        let sources = vec![name.clone()];
        Self {
            name,
            sources,
            show_suggestions,
            value_cache: RwLock::new(HashMap::new()),
        }
    }

    /// The unique searchable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The backend columns this name reads values from.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Whether this name offers autocomplete suggestions.
    pub const fn show_suggestions(&self) -> bool {
        self.show_suggestions
    }

    /// Returns up to `limit` distinct values matching `prefix`, serving
    /// repeated identical prefixes from the cache.
    ///
    /// Only successful fetches populate the cache, so a backend failure is
    /// retried on the next call. Result ordering is not guaranteed.
    ///
    /// # Errors
    ///
    /// Propagates backend failures unmodified.
    pub fn values(
        &self,
        backend: &dyn SearchBackend,
        prefix: &str,
        limit: usize,
    ) -> SearchResult<Vec<String>> {
        if let Some(cached) = self
            .value_cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(prefix)
        {
            return Ok(cached.clone());
        }

        tracing::debug!(name = %self.name, prefix, limit, "fetching suggestion values");
        let mut values: Vec<String> = backend
            .fetch_distinct_values(&self.sources, prefix, limit)?
            .into_iter()
            .collect();
        values.truncate(limit);

        self.value_cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(prefix.to_string(), values.clone());
        Ok(values)
    }

    /// Returns `true` if a cached result exists for the exact prefix.
    pub fn has_cached_prefix(&self, prefix: &str) -> bool {
        self.value_cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(prefix)
    }
}
