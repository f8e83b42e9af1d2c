//! Catalog configuration.
//!
//! [`CatalogConfig`] carries the per-catalog options recognized by the search
//! layer: the two name exclusion lists and the per-prefix suggestion cache
//! cap. Configurations can be built in code or loaded from TOML files, with
//! defaults for any keys left unspecified.
//!
//! ## Examples
//!
//! ```
//! use searchset_core::config::CatalogConfig;
//!
//! let config = CatalogConfig::from_toml_str(
//!     r#"
//!     exclude_from_mapping = ["password_hash"]
//!     exclude_from_suggestions = ["email"]
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(config.exclude_from_mapping.contains("password_hash"));
//! assert_eq!(config.max_cached_values_per_prefix, 10);
//! ```

use std::collections::HashSet;
use std::path::Path;

use crate::error::SearchError;

/// The default cap on cached suggestion values per prefix.
pub const DEFAULT_MAX_CACHED_VALUES_PER_PREFIX: usize = 10;

fn default_max_cached_values() -> usize {
    DEFAULT_MAX_CACHED_VALUES_PER_PREFIX
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration for a search catalog.
///
/// `exclude_from_mapping` names are never exposed as searchable, regardless
/// of whether they originate from a declared field, a field's sources, or the
/// raw backend schema. `exclude_from_suggestions` names remain searchable but
/// never offer autocomplete values.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CatalogConfig {
    /// Names never exposed in the assembled mapping.
    #[serde(default)]
    pub exclude_from_mapping: HashSet<String>,
    /// Names exposed but never offering autocomplete suggestions.
    #[serde(default)]
    pub exclude_from_suggestions: HashSet<String>,
    /// Maximum suggestion values cached (and returned) per prefix.
    #[serde(default = "default_max_cached_values")]
    pub max_cached_values_per_prefix: usize,
    /// Log filter directive used by [`setup_logging`](crate::logging::setup_logging).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            exclude_from_mapping: HashSet::new(),
            exclude_from_suggestions: HashSet::new(),
            max_cached_values_per_prefix: DEFAULT_MAX_CACHED_VALUES_PER_PREFIX,
            log_level: default_log_level(),
        }
    }
}

impl CatalogConfig {
    /// Loads a configuration from a TOML string.
    ///
    /// Missing keys take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Configuration`] if the TOML is malformed.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, SearchError> {
        toml::from_str(toml_str)
            .map_err(|e| SearchError::Configuration(format!("failed to parse TOML: {e}")))
    }

    /// Loads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Configuration`] if the file cannot be read or
    /// the TOML is malformed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, SearchError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            SearchError::Configuration(format!(
                "failed to read TOML file '{}': {e}",
                path.as_ref().display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Adds a name to the mapping exclusion list.
    #[must_use]
    pub fn exclude_from_mapping(mut self, name: impl Into<String>) -> Self {
        self.exclude_from_mapping.insert(name.into());
        self
    }

    /// Adds a name to the suggestion exclusion list.
    #[must_use]
    pub fn exclude_from_suggestions(mut self, name: impl Into<String>) -> Self {
        self.exclude_from_suggestions.insert(name.into());
        self
    }

    /// Sets the per-prefix suggestion cache cap.
    #[must_use]
    pub const fn max_cached_values_per_prefix(mut self, max: usize) -> Self {
        self.max_cached_values_per_prefix = max;
        self
    }
}
