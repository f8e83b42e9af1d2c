//! Integration tests for the search catalog.
//!
//! These tests exercise the complete flow: field declarations and
//! configuration through mapping assembly against a backend schema, token
//! translation to predicates, and suggestion fetching with its caching
//! behavior.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use searchset_core::{CatalogConfig, SearchError, SearchResult};
use searchset_mapping::{SearchBackend, SearchCatalog};
use searchset_query::{Lookup, LookupKind, Predicate, SearchField, Value};

// ── Test backend ───────────────────────────────────────────────────────

/// A canned-schema backend that counts every call it receives.
struct TicketBackend {
    raw_fetches: AtomicUsize,
    value_fetches: AtomicUsize,
}

impl TicketBackend {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            raw_fetches: AtomicUsize::new(0),
            value_fetches: AtomicUsize::new(0),
        })
    }

    fn raw_fetches(&self) -> usize {
        self.raw_fetches.load(Ordering::SeqCst)
    }

    fn value_fetches(&self) -> usize {
        self.value_fetches.load(Ordering::SeqCst)
    }

    fn rows(source: &str) -> Vec<&'static str> {
        match source {
            "status_code" => vec!["open", "closed", "on_hold"],
            "assignee" => vec!["alice", "albert", "bob"],
            "reporter" => vec!["alice", "carol"],
            _ => vec![],
        }
    }
}

impl SearchBackend for TicketBackend {
    fn fetch_raw_field_names(&self) -> SearchResult<Vec<String>> {
        self.raw_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(vec![
            "status_code".to_string(),
            "created_at".to_string(),
            "internal_notes".to_string(),
        ])
    }

    fn fetch_distinct_values(
        &self,
        sources: &[String],
        prefix: &str,
        limit: usize,
    ) -> SearchResult<HashSet<String>> {
        self.value_fetches.fetch_add(1, Ordering::SeqCst);
        let prefix = prefix.to_lowercase();
        let mut out = HashSet::new();
        for source in sources {
            for value in Self::rows(source) {
                if value.to_lowercase().contains(&prefix) {
                    out.insert(value.to_string());
                    if out.len() == limit {
                        return Ok(out);
                    }
                }
            }
        }
        Ok(out)
    }
}

fn ticket_catalog(backend: Arc<TicketBackend>) -> SearchCatalog {
    SearchCatalog::builder(backend)
        .field("status", SearchField::nullable_boolean(["status_code"]))
        .field("person", SearchField::text(["assignee", "reporter"]))
        .field("priority", SearchField::integer(["priority_level"]))
        .config(
            CatalogConfig::default()
                .exclude_from_mapping("internal_notes")
                .exclude_from_suggestions("created_at"),
        )
        .build()
}

// ── Mapping assembly ───────────────────────────────────────────────────

#[test]
fn mapping_merges_declared_sources_and_raw_names() {
    let backend = TicketBackend::new();
    let catalog = ticket_catalog(Arc::clone(&backend));

    assert_eq!(
        catalog.get_mapping().unwrap(),
        [
            "status",
            "person",
            "priority",
            "status_code",
            "assignee",
            "reporter",
            "priority_level",
            "created_at",
        ]
    );
    // "status_code" appears once even though it arrives from both a field
    // source and the raw schema; "internal_notes" is suppressed everywhere.
}

#[test]
fn excluded_name_never_exposed() {
    let backend = TicketBackend::new();
    let catalog = ticket_catalog(backend);

    let names = catalog.get_mapping().unwrap();
    assert!(!names.contains(&"internal_notes".to_string()));

    let err = catalog
        .get_fields_values("internal_notes", "a")
        .unwrap_err();
    assert!(matches!(err, SearchError::UnknownField(_)));
}

#[test]
fn suggestion_exclusion_gates_without_hiding() {
    let backend = TicketBackend::new();
    let catalog = ticket_catalog(Arc::clone(&backend));

    let flags = catalog.get_mapping_to_suggestion().unwrap();
    assert_eq!(flags.get("created_at"), Some(&false));
    assert_eq!(flags.get("assignee"), Some(&true));

    // Disabled suggestions return empty without querying the backend.
    let values = catalog.get_fields_values("created_at", "20").unwrap();
    assert!(values.is_empty());
    assert_eq!(backend.value_fetches(), 0);
}

// ── Cache behavior ─────────────────────────────────────────────────────

#[test]
fn raw_mapping_fetched_at_most_once() {
    let backend = TicketBackend::new();
    let catalog = ticket_catalog(Arc::clone(&backend));

    catalog.get_mapping().unwrap();
    catalog.get_mapping_to_suggestion().unwrap();
    catalog.get_raw_mapping().unwrap();
    assert_eq!(backend.raw_fetches(), 1);
}

#[test]
fn suggestion_values_cached_per_exact_prefix() {
    let backend = TicketBackend::new();
    let catalog = ticket_catalog(Arc::clone(&backend));

    let mut first = catalog.get_fields_values("person", "al").unwrap();
    first.sort();
    assert_eq!(first, ["albert", "alice"]);
    assert_eq!(backend.value_fetches(), 1);

    // Identical prefix: served from cache.
    catalog.get_fields_values("person", "al").unwrap();
    assert_eq!(backend.value_fetches(), 1);

    // Different prefix: new backend fetch.
    let mut carol = catalog.get_fields_values("person", "ca").unwrap();
    carol.sort();
    assert_eq!(carol, ["carol"]);
    assert_eq!(backend.value_fetches(), 2);
}

#[test]
fn suggestion_values_deduplicated_across_sources() {
    let backend = TicketBackend::new();
    let catalog = ticket_catalog(backend);

    // "alice" exists in both assignee and reporter.
    let values = catalog.get_fields_values("person", "alice").unwrap();
    assert_eq!(values, ["alice"]);
}

#[test]
fn suggestion_values_capped_by_config() {
    let backend = TicketBackend::new();
    let catalog = SearchCatalog::builder(Arc::<TicketBackend>::clone(&backend))
        .field("person", SearchField::text(["assignee", "reporter"]))
        .config(CatalogConfig::default().max_cached_values_per_prefix(2))
        .build();

    let values = catalog.get_fields_values("person", "").unwrap();
    assert_eq!(values.len(), 2);
}

// ── Translation ────────────────────────────────────────────────────────

#[test]
fn scenario_nullable_status_over_source_column() {
    let backend = TicketBackend::new();
    let catalog = ticket_catalog(backend);

    assert!(catalog
        .get_mapping()
        .unwrap()
        .iter()
        .any(|n| n == "status_code"));

    let p = catalog
        .translate("status", LookupKind::Exact, "null")
        .unwrap();
    assert_eq!(
        p,
        Predicate::compare("status_code", Lookup::Exact(Value::Null))
    );
}

#[test]
fn translate_wildcard_token_across_sources() {
    let backend = TicketBackend::new();
    let catalog = ticket_catalog(backend);

    let p = catalog
        .translate("person", LookupKind::Contains, "al*ce")
        .unwrap();
    let per_source = |col: &str| {
        Predicate::compare(col, Lookup::IStartsWith("al".into()))
            & Predicate::compare(col, Lookup::IEndsWith("ce".into()))
    };
    assert_eq!(
        p,
        Predicate::Or(vec![per_source("assignee"), per_source("reporter")])
    );
}

#[test]
fn translate_star_is_match_all_for_every_declared_field() {
    let backend = TicketBackend::new();
    let catalog = ticket_catalog(backend);

    for name in ["status", "person", "priority"] {
        let p = catalog.translate(name, LookupKind::Exact, "*").unwrap();
        assert!(p.is_match_all(), "{name} should translate * to match-all");
    }
}

#[test]
fn translate_bad_integer_is_client_error() {
    let backend = TicketBackend::new();
    let catalog = ticket_catalog(backend);

    let err = catalog
        .translate("priority", LookupKind::Exact, "high")
        .unwrap_err();
    assert!(matches!(err, SearchError::Cast { .. }));
    assert_eq!(err.status_code(), 400);
}

#[test]
fn translate_raw_schema_name_defaults_to_text() {
    let backend = TicketBackend::new();
    let catalog = ticket_catalog(backend);

    let p = catalog
        .translate("created_at", LookupKind::Contains, "2024*")
        .unwrap();
    assert_eq!(
        p,
        Predicate::compare("created_at", Lookup::IStartsWith("2024".into()))
    );
}

// ── Concurrency smoke test ─────────────────────────────────────────────

#[test]
fn concurrent_first_access_converges() {
    let backend = TicketBackend::new();
    let catalog = Arc::new(ticket_catalog(Arc::clone(&backend)));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            std::thread::spawn(move || catalog.get_mapping().unwrap())
        })
        .collect();

    let mut results: Vec<Vec<String>> = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .collect();
    let first = results.pop().unwrap();
    assert!(results.iter().all(|r| *r == first));
    // Racing initializers may each fetch, but never more than one per thread.
    assert!(backend.raw_fetches() >= 1 && backend.raw_fetches() <= 8);
}
