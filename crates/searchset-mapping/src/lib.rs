//! # searchset-mapping
//!
//! The mapping half of searchset: the [`SearchBackend`](backend::SearchBackend)
//! collaborator contract, the canonical [`Mapping`](mapping::Mapping) of
//! exposed searchable names with per-name suggestion caches, the
//! [`MappingAssembler`](assembler::MappingAssembler) merge algorithm, and the
//! [`SearchCatalog`](catalog::SearchCatalog) facade.
//!
//! ## Architecture
//!
//! A catalog is built once per declaring model/index and shared. It holds
//! two lazily memoized values: the raw backend field-name list and the full
//! mapping assembled from declared fields, their sources, and the raw list.
//! Suggestion values are fetched per (name, prefix) pair and cached on first
//! use. All caches follow the same rule: computations are idempotent, only
//! successes are stored, and concurrent first accesses converge.

pub mod assembler;
pub mod backend;
pub mod catalog;
pub mod entry;
pub mod mapping;

pub use assembler::MappingAssembler;
pub use backend::SearchBackend;
pub use catalog::{SearchCatalog, SearchCatalogBuilder};
pub use entry::MappingEntry;
pub use mapping::Mapping;
