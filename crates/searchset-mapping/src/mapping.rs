//! The ordered table of exposed searchable names.

use std::collections::HashMap;

use searchset_core::{SearchError, SearchResult};

use crate::backend::SearchBackend;
use crate::entry::MappingEntry;

/// An ordered `name -> MappingEntry` table.
///
/// Names are unique; insertion is idempotent and first-writer-wins, so a
/// later insert of an existing name never alters the entry already present
/// (in particular it can never downgrade `show_suggestions`). Iteration
/// follows insertion order.
#[derive(Debug, Default)]
pub struct Mapping {
    entries: Vec<MappingEntry>,
    index: HashMap<String, usize>,
}

impl Mapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry if its name is not already present.
    ///
    /// Returns `true` if the entry was added, `false` if the name was
    /// already taken (the existing entry is kept untouched).
    pub fn add_entry(&mut self, entry: MappingEntry) -> bool {
        if self.index.contains_key(entry.name()) {
            return false;
        }
        self.index.insert(entry.name().to_string(), self.entries.len());
        self.entries.push(entry);
        true
    }

    /// Looks up an entry by name.
    pub fn get(&self, name: &str) -> Option<&MappingEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Returns `true` if the name is exposed.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All exposed names, in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name().to_string()).collect()
    }

    /// The suggestion flag per exposed name.
    pub fn suggestion_flags(&self) -> HashMap<String, bool> {
        self.entries
            .iter()
            .map(|e| (e.name().to_string(), e.show_suggestions()))
            .collect()
    }

    /// The number of exposed names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no names are exposed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns autocomplete values for `field_name` matching `prefix`.
    ///
    /// A name with suggestions disabled yields an empty sequence without
    /// touching the backend: disabled suggestions are a capability, not an
    /// error. Result ordering is not guaranteed; sort if stability matters.
    ///
    /// # Errors
    ///
    /// [`SearchError::UnknownField`] if the name is not exposed; backend
    /// failures propagate unmodified.
    pub fn get_values(
        &self,
        field_name: &str,
        prefix: &str,
        backend: &dyn SearchBackend,
        limit: usize,
    ) -> SearchResult<Vec<String>> {
        let entry = self
            .get(field_name)
            .ok_or_else(|| SearchError::UnknownField(field_name.to_string()))?;

        if !entry.show_suggestions() {
            return Ok(Vec::new());
        }
        entry.values(backend, prefix, limit)
    }
}
