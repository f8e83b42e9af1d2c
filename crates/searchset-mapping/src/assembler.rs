//! Mapping assembly: merging declared fields, their sources, and raw
//! backend names into one canonical table.

use searchset_core::CatalogConfig;
use searchset_query::SearchField;

use crate::entry::MappingEntry;
use crate::mapping::Mapping;

/// Builds a [`Mapping`] from field declarations, the catalog configuration's
/// exclusion lists, and the backend's raw field-name list.
///
/// Assembly runs three passes over an idempotent, first-writer-wins table,
/// so declaration order decides collisions (a source name that equals an
/// earlier field's canonical name keeps that earlier entry):
///
/// 1. each declared field, unless excluded from the mapping;
/// 2. each declared field's sources as standalone self-sourced names, unless
///    the field opts out or the source name itself is excluded;
/// 3. each raw backend name not yet present and not excluded.
///
/// The suggestion exclusion list is applied independently in every pass.
pub struct MappingAssembler<'a> {
    fields: &'a [(String, SearchField)],
    config: &'a CatalogConfig,
}

impl<'a> MappingAssembler<'a> {
    /// Creates an assembler over ordered field declarations and a config.
    pub const fn new(fields: &'a [(String, SearchField)], config: &'a CatalogConfig) -> Self {
        Self { fields, config }
    }

    /// Assembles the full mapping given the backend's raw field names.
    pub fn assemble(&self, raw_field_names: &[String]) -> Mapping {
        let excluded = &self.config.exclude_from_mapping;
        let no_suggestions = &self.config.exclude_from_suggestions;
        let mut mapping = Mapping::new();

        // Pass 1: declared fields under their canonical names.
        for (name, field) in self.fields {
            if excluded.contains(name) {
                continue;
            }
            mapping.add_entry(MappingEntry::new(
                name.clone(),
                field.sources().iter().cloned(),
                field.show_suggestions() && !no_suggestions.contains(name),
            ));
        }

        // Pass 2: sources exposed as independently searchable names.
        for (_, field) in self.fields {
            if field.sources_excluded_from_mapping() {
                continue;
            }
            for source in field.sources() {
                if excluded.contains(source) {
                    continue;
                }
                mapping.add_entry(MappingEntry::self_sourced(
                    source.clone(),
                    !no_suggestions.contains(source),
                ));
            }
        }

        // Pass 3: raw backend names not covered above.
        for name in raw_field_names {
            if excluded.contains(name) {
                continue;
            }
            mapping.add_entry(MappingEntry::self_sourced(
                name.clone(),
                !no_suggestions.contains(name),
            ));
        }

        tracing::debug!(
            declared = self.fields.len(),
            raw = raw_field_names.len(),
            exposed = mapping.len(),
            "assembled search mapping"
        );
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declare(pairs: Vec<(&str, SearchField)>) -> Vec<(String, SearchField)> {
        pairs
            .into_iter()
            .map(|(n, f)| (n.to_string(), f))
            .collect()
    }

    fn raw(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_declared_field_and_sources_exposed() {
        let fields = declare(vec![("status", SearchField::text(["status_code"]))]);
        let config = CatalogConfig::default();
        let mapping = MappingAssembler::new(&fields, &config)
            .assemble(&raw(&["status_code", "created_at"]));

        assert_eq!(mapping.names(), ["status", "status_code", "created_at"]);
        assert_eq!(
            mapping.get("status").unwrap().sources(),
            ["status_code".to_string()]
        );
        assert_eq!(
            mapping.get("status_code").unwrap().sources(),
            ["status_code".to_string()]
        );
    }

    #[test]
    fn test_source_in_raw_mapping_inserted_once() {
        // "status_code" arrives twice: as a field source and as a raw name.
        let fields = declare(vec![(
            "status",
            SearchField::text(["status_code"]).hide_suggestions(),
        )]);
        let config = CatalogConfig::default();
        let mapping =
            MappingAssembler::new(&fields, &config).assemble(&raw(&["status_code"]));

        assert_eq!(mapping.len(), 2);
        // The source entry keeps pass-2 suggestion behavior: the source name
        // is not excluded, so it suggests even though the field does not.
        assert!(!mapping.get("status").unwrap().show_suggestions());
        assert!(mapping.get("status_code").unwrap().show_suggestions());
    }

    #[test]
    fn test_exclude_sources_from_mapping() {
        let fields = declare(vec![(
            "name",
            SearchField::text(["first_name", "last_name"]).exclude_sources_from_mapping(),
        )]);
        let config = CatalogConfig::default();
        let mapping = MappingAssembler::new(&fields, &config).assemble(&raw(&[]));

        assert_eq!(mapping.names(), ["name"]);
        assert!(!mapping.contains("first_name"));
        assert!(!mapping.contains("last_name"));
    }

    #[test]
    fn test_exclude_from_mapping_applies_everywhere() {
        let fields = declare(vec![
            ("secret", SearchField::text(["secret_col"])),
            ("name", SearchField::text(["secret_col_2", "visible"])),
        ]);
        let config = CatalogConfig::default()
            .exclude_from_mapping("secret")
            .exclude_from_mapping("secret_col_2")
            .exclude_from_mapping("hidden_raw");
        let mapping =
            MappingAssembler::new(&fields, &config).assemble(&raw(&["hidden_raw", "other"]));

        // Declared name, source name, and raw name are all suppressed.
        assert!(!mapping.contains("secret"));
        assert!(!mapping.contains("secret_col_2"));
        assert!(!mapping.contains("hidden_raw"));
        assert_eq!(mapping.names(), ["name", "secret_col", "visible", "other"]);
    }

    #[test]
    fn test_exclude_from_suggestions_gates_but_exposes() {
        let fields = declare(vec![("email", SearchField::text(["email"]))]);
        let config = CatalogConfig::default().exclude_from_suggestions("email");
        let mapping = MappingAssembler::new(&fields, &config).assemble(&raw(&["email"]));

        assert!(mapping.contains("email"));
        assert!(!mapping.get("email").unwrap().show_suggestions());
    }

    #[test]
    fn test_field_suggestion_flag_combined_with_exclusions() {
        let fields = declare(vec![
            ("shown", SearchField::text(["shown_col"])),
            ("hidden_by_field", SearchField::text(["a"]).hide_suggestions()),
            ("hidden_by_config", SearchField::text(["b"])),
        ]);
        let config = CatalogConfig::default().exclude_from_suggestions("hidden_by_config");
        let mapping = MappingAssembler::new(&fields, &config).assemble(&raw(&[]));

        let flags = mapping.suggestion_flags();
        assert_eq!(flags.get("shown"), Some(&true));
        assert_eq!(flags.get("hidden_by_field"), Some(&false));
        assert_eq!(flags.get("hidden_by_config"), Some(&false));
    }

    #[test]
    fn test_source_colliding_with_field_name_keeps_field_entry() {
        // Field "b" is also field "a"'s source: pass 1 wins for "b".
        let fields = declare(vec![
            ("a", SearchField::text(["b"])),
            ("b", SearchField::integer(["b_col"]).hide_suggestions()),
        ]);
        let config = CatalogConfig::default();
        let mapping = MappingAssembler::new(&fields, &config).assemble(&raw(&[]));

        assert_eq!(mapping.names(), ["a", "b", "b_col"]);
        let b = mapping.get("b").unwrap();
        assert_eq!(b.sources(), ["b_col".to_string()]);
        assert!(!b.show_suggestions());
    }

    #[test]
    fn test_raw_names_appended_in_backend_order() {
        let fields = declare(vec![]);
        let config = CatalogConfig::default();
        let mapping =
            MappingAssembler::new(&fields, &config).assemble(&raw(&["z", "a", "m"]));
        assert_eq!(mapping.names(), ["z", "a", "m"]);
    }
}
