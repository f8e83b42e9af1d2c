//! The public search catalog facade.
//!
//! [`SearchCatalog`] owns the declared fields, the catalog configuration,
//! and the backend collaborator, and memoizes the two expensive values: the
//! backend's raw field-name list and the fully assembled [`Mapping`]. Both
//! are computed lazily on first access and retained for the life of the
//! catalog; picking up backend schema changes requires a new catalog.

use std::collections::HashMap;
use std::sync::Arc;

use searchset_core::{CatalogConfig, LazyCache, SearchError, SearchResult};
use searchset_query::{LookupKind, Predicate, SearchField};

use crate::assembler::MappingAssembler;
use crate::backend::SearchBackend;
use crate::mapping::Mapping;

/// The process-wide search facade for one declaring model/index.
///
/// Computing either cache is idempotent and side-effect-free, so concurrent
/// first accesses may compute twice and converge on equivalent values; the
/// caches exist to avoid duplicate backend work, not for correctness. Failed
/// computations are never memoized: a failed raw-mapping fetch is retried on
/// the next call.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use searchset_mapping::{SearchBackend, SearchCatalog};
/// use searchset_query::{LookupKind, SearchField};
///
/// fn catalog(backend: Arc<dyn SearchBackend>) {
///     let catalog = SearchCatalog::builder(backend)
///         .field("name", SearchField::text(["first_name", "last_name"]))
///         .field("age", SearchField::integer(["age"]))
///         .build();
///
///     let predicate = catalog.translate("name", LookupKind::Contains, "ali*").unwrap();
///     let suggestions = catalog.get_fields_values("name", "al").unwrap();
/// }
/// ```
pub struct SearchCatalog {
    backend: Arc<dyn SearchBackend>,
    fields: Vec<(String, SearchField)>,
    config: CatalogConfig,
    raw_mapping: LazyCache<Vec<String>>,
    full_mapping: LazyCache<Mapping>,
}

impl SearchCatalog {
    /// Starts building a catalog over the given backend.
    pub fn builder(backend: Arc<dyn SearchBackend>) -> SearchCatalogBuilder {
        SearchCatalogBuilder {
            backend,
            fields: Vec::new(),
            config: CatalogConfig::default(),
        }
    }

    /// The declared fields, in declaration order.
    pub fn fields(&self) -> &[(String, SearchField)] {
        &self.fields
    }

    /// Looks up a declared field by canonical name.
    pub fn field(&self, name: &str) -> Option<&SearchField> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f)
    }

    /// The catalog configuration.
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Returns the backend's raw field-name list, fetching it at most once
    /// on success.
    ///
    /// # Errors
    ///
    /// Propagates backend failures; the cache stays uninitialized so the
    /// next call retries the fetch.
    pub fn get_raw_mapping(&self) -> SearchResult<Arc<Vec<String>>> {
        self.raw_mapping.get_or_try_init(|| {
            tracing::debug!("fetching raw field names from backend");
            self.backend.fetch_raw_field_names()
        })
    }

    /// Returns the fully assembled mapping, computing it at most once on
    /// success.
    ///
    /// # Errors
    ///
    /// Propagates backend failures from the underlying raw-mapping fetch.
    pub fn get_full_mapping(&self) -> SearchResult<Arc<Mapping>> {
        self.full_mapping.get_or_try_init(|| {
            let raw = self.get_raw_mapping()?;
            Ok(MappingAssembler::new(&self.fields, &self.config).assemble(&raw))
        })
    }

    /// All exposed searchable names, in assembly order.
    ///
    /// # Errors
    ///
    /// Propagates backend failures from mapping assembly.
    pub fn get_mapping(&self) -> SearchResult<Vec<String>> {
        Ok(self.get_full_mapping()?.names())
    }

    /// The suggestion flag for every exposed name.
    ///
    /// # Errors
    ///
    /// Propagates backend failures from mapping assembly.
    pub fn get_mapping_to_suggestion(&self) -> SearchResult<HashMap<String, bool>> {
        Ok(self.get_full_mapping()?.suggestion_flags())
    }

    /// Returns autocomplete values for a field by prefix.
    ///
    /// Results for a given (name, prefix) pair are cached on first use and
    /// capped at the configured maximum per prefix. Names with suggestions
    /// disabled yield an empty sequence without a backend query.
    ///
    /// # Errors
    ///
    /// [`SearchError::UnknownField`] for names not exposed in the mapping;
    /// backend failures propagate unmodified.
    pub fn get_fields_values(&self, field_name: &str, prefix: &str) -> SearchResult<Vec<String>> {
        self.get_full_mapping()?.get_values(
            field_name,
            prefix,
            self.backend.as_ref(),
            self.config.max_cached_values_per_prefix,
        )
    }

    /// Translates a user field/value token into a backend-agnostic
    /// [`Predicate`].
    ///
    /// Declared fields translate through their own type rules without any
    /// backend contact. Undeclared names that the assembled mapping exposes
    /// (raw backend fields, auto-exposed sources) are searched as text over
    /// the column of the same name.
    ///
    /// # Errors
    ///
    /// [`SearchError::Cast`] for malformed tokens,
    /// [`SearchError::UnknownField`] for names absent from the mapping, and
    /// backend failures if the mapping had to be assembled first.
    pub fn translate(
        &self,
        field_name: &str,
        kind: LookupKind,
        raw: &str,
    ) -> SearchResult<Predicate> {
        if let Some(field) = self.field(field_name) {
            return field.build_predicate(field_name, kind, raw);
        }

        let mapping = self.get_full_mapping()?;
        let entry = mapping
            .get(field_name)
            .ok_or_else(|| SearchError::UnknownField(field_name.to_string()))?;
        SearchField::text(entry.sources().iter().cloned()).build_predicate(field_name, kind, raw)
    }
}

impl std::fmt::Debug for SearchCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchCatalog")
            .field("fields", &self.fields)
            .field("config", &self.config)
            .field("raw_mapping", &self.raw_mapping)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SearchCatalog`].
pub struct SearchCatalogBuilder {
    backend: Arc<dyn SearchBackend>,
    fields: Vec<(String, SearchField)>,
    config: CatalogConfig,
}

impl SearchCatalogBuilder {
    /// Declares a field under its canonical searchable name. Declaration
    /// order decides mapping collisions.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, field: SearchField) -> Self {
        self.fields.push((name.into(), field));
        self
    }

    /// Sets the catalog configuration.
    #[must_use]
    pub fn config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    /// Finishes the catalog. No backend call is made until first use.
    pub fn build(self) -> SearchCatalog {
        SearchCatalog {
            backend: self.backend,
            fields: self.fields,
            config: self.config,
            raw_mapping: LazyCache::new(),
            full_mapping: LazyCache::new(),
        }
    }
}
