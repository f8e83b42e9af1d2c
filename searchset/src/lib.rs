//! # searchset
//!
//! A query-field translation and metadata-mapping layer for faceted search.
//! Declared search fields translate user tokens (with `*` wildcards) into
//! backend-agnostic predicates, while a lazily cached catalog merges declared
//! fields with the backend schema and serves per-field autocomplete values.
//!
//! This is the meta-crate that re-exports all sub-crates for convenient
//! access; depend on the individual crates for finer-grained control.
//!
//! ```no_run
//! use std::sync::Arc;
//! use searchset::backends::MemoryBackend;
//! use searchset::mapping::SearchCatalog;
//! use searchset::query::{LookupKind, SearchField};
//!
//! let backend = MemoryBackend::new().with_column("name", ["Alice", "Bob"]);
//!
//! let catalog = SearchCatalog::builder(Arc::new(backend))
//!     .field("name", SearchField::text(["name"]))
//!     .build();
//!
//! let predicate = catalog.translate("name", LookupKind::Contains, "Ali*")?;
//! let suggestions = catalog.get_fields_values("name", "al")?;
//! # Ok::<(), searchset::core::SearchError>(())
//! ```

/// Core types: errors, configuration, logging, and lazy caching.
pub use searchset_core as core;

/// The field type system, wildcard compiler, and predicate tree.
pub use searchset_query as query;

/// Mapping assembly, suggestion caching, and the catalog facade.
pub use searchset_mapping as mapping;

/// Ready-made backends: in-memory, and SQLite behind the `sqlite` feature.
pub use searchset_backends as backends;
