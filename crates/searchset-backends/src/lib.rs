//! # searchset-backends
//!
//! Ready-made [`SearchBackend`](searchset_mapping::SearchBackend)
//! implementations: an in-memory backend for tests and static data, and a
//! SQLite backend (feature `sqlite`) for real databases. Other storage
//! engines implement the trait themselves.

pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use memory::MemoryBackend;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteBackend;
