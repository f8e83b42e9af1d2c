//! In-memory search backend.
//!
//! [`MemoryBackend`] keeps columns of string values in memory and answers
//! the collaborator contract over them. It exists for tests, examples, and
//! small static datasets.

use std::collections::HashSet;

use searchset_core::SearchResult;
use searchset_mapping::SearchBackend;

/// A search backend over in-memory columns.
///
/// # Examples
///
/// ```
/// use searchset_backends::MemoryBackend;
/// use searchset_mapping::SearchBackend;
///
/// let backend = MemoryBackend::new()
///     .with_column("name", ["Alice", "Bob"])
///     .with_column("city", ["Berlin"]);
///
/// assert_eq!(backend.fetch_raw_field_names().unwrap(), ["name", "city"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    columns: Vec<(String, Vec<String>)>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column with its values. Column order is schema order.
    #[must_use]
    pub fn with_column<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns
            .push((name.into(), values.into_iter().map(Into::into).collect()));
        self
    }

    fn column(&self, name: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, values)| values.as_slice())
    }
}

impl SearchBackend for MemoryBackend {
    fn fetch_raw_field_names(&self) -> SearchResult<Vec<String>> {
        Ok(self.columns.iter().map(|(n, _)| n.clone()).collect())
    }

    fn fetch_distinct_values(
        &self,
        sources: &[String],
        prefix: &str,
        limit: usize,
    ) -> SearchResult<HashSet<String>> {
        let prefix = prefix.to_lowercase();
        let mut out = HashSet::new();
        for source in sources {
            let Some(values) = self.column(source) else {
                continue;
            };
            for value in values {
                if value.to_lowercase().contains(&prefix) {
                    out.insert(value.clone());
                    if out.len() == limit {
                        return Ok(out);
                    }
                }
            }
        }
        Ok(out)
    }
}
