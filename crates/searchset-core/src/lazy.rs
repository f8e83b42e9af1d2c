//! Fallible lazy caching primitive.
//!
//! [`LazyCache`] defers a fallible computation until first access and caches
//! only successful results. Unlike `OnceLock`, a failed computation leaves
//! the cache uninitialized, so a later access retries it.

use std::sync::{Arc, PoisonError, RwLock};

use crate::error::SearchResult;

/// A lazily computed, process-lifetime cache slot for a fallible computation.
///
/// The slot begins uninitialized. On access, a cached value is returned if
/// present; otherwise the supplied closure runs and, on success, its result
/// is stored and returned. Errors are propagated and never memoized.
///
/// Concurrent first accesses may each run the closure; the computation must
/// therefore be idempotent and side-effect-free beyond producing its value.
/// Both results are equivalent and last-write-wins. The lock is held only
/// while reading or writing the slot, never across the computation.
///
/// # Examples
///
/// ```
/// use searchset_core::lazy::LazyCache;
///
/// let cache: LazyCache<Vec<String>> = LazyCache::new();
/// let value = cache
///     .get_or_try_init(|| Ok(vec!["name".to_string()]))
///     .unwrap();
/// assert_eq!(value.len(), 1);
/// assert!(cache.is_initialized());
/// ```
#[derive(Default)]
pub struct LazyCache<T> {
    slot: RwLock<Option<Arc<T>>>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for LazyCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let guard = self.slot.read().unwrap_or_else(PoisonError::into_inner);
        match guard.as_ref() {
            Some(value) => f.debug_tuple("LazyCache").field(value).finish(),
            None => f.debug_tuple("LazyCache").field(&"<uninitialized>").finish(),
        }
    }
}

impl<T> LazyCache<T> {
    /// Creates a new, uninitialized cache slot.
    pub const fn new() -> Self {
        Self {
            slot: RwLock::new(None),
        }
    }

    /// Returns the cached value, computing it with `init` if absent.
    ///
    /// # Errors
    ///
    /// Propagates the error from `init`; the slot stays uninitialized so a
    /// subsequent call retries the computation.
    pub fn get_or_try_init(
        &self,
        init: impl FnOnce() -> SearchResult<T>,
    ) -> SearchResult<Arc<T>> {
        if let Some(value) = self
            .slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(Arc::clone(value));
        }

        let value = Arc::new(init()?);
        let mut guard = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(Arc::clone(&value));
        Ok(value)
    }

    /// Returns the cached value without computing it.
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns `true` if a value has been cached.
    pub fn is_initialized(&self) -> bool {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
