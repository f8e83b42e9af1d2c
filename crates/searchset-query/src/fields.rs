//! Search field declarations: the field type system and the
//! wildcard-to-predicate compiler.
//!
//! A [`SearchField`] declares one logical search attribute: the backend
//! columns it reads (`sources`), its value domain ([`FieldKind`]), and its
//! mapping/suggestion behavior. [`SearchField::cast`] converts a raw user
//! token into a [`Value`], and [`SearchField::build_predicate`] compiles a
//! token (including `*` wildcards) into a backend-agnostic [`Predicate`].

use searchset_core::{SearchError, SearchResult};

use crate::predicate::{Lookup, LookupKind, Predicate};
use crate::value::Value;

/// The wildcard character recognized in text tokens.
pub const WILDCARD: char = '*';

/// Matching quote pairs stripped (one layer) from text tokens.
const QUOTE_PAIRS: [(char, char); 4] = [('"', '"'), ('\'', '\''), ('\u{201c}', '\u{201d}'), ('\u{2018}', '\u{2019}')];

/// The value domain of a search field.
///
/// A closed enumeration dispatched by exhaustive match: adding a kind forces
/// every cast and predicate rule to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FieldKind {
    /// Free text with `*` wildcard support.
    Text,
    /// 64-bit signed integer.
    Integer,
    /// 64-bit floating-point number.
    Float,
    /// Strict boolean: `true` or `false`.
    Boolean,
    /// Boolean that additionally accepts `null` for an absent value.
    NullableBoolean,
}

impl FieldKind {
    /// A short description of the expected token shape, used in cast errors.
    const fn expected(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean (`true` or `false`)",
            Self::NullableBoolean => "boolean (`true`, `false` or `null`)",
        }
    }
}

/// A declared logical search attribute.
///
/// Immutable once constructed. One logical field may read several backend
/// columns; a token then matches if any source matches.
///
/// # Examples
///
/// ```
/// use searchset_query::fields::SearchField;
///
/// let name = SearchField::text(["first_name", "last_name"]);
/// let age = SearchField::integer(["age"]).hide_suggestions();
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SearchField {
    sources: Vec<String>,
    kind: FieldKind,
    show_suggestions: bool,
    exclude_sources_from_mapping: bool,
}

impl SearchField {
    /// Creates a field of the given kind reading from `sources`.
    ///
    /// Suggestions are enabled and sources are exposed as standalone
    /// searchable names by default.
    ///
    /// # Panics
    ///
    /// Panics if `sources` is empty; a field must read at least one backend
    /// column.
    pub fn new<I, S>(kind: FieldKind, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sources: Vec<String> = sources.into_iter().map(Into::into).collect();
        assert!(
            !sources.is_empty(),
            "a search field requires at least one source column"
        );
        Self {
            sources,
            kind,
            show_suggestions: true,
            exclude_sources_from_mapping: false,
        }
    }

    /// Creates a text field.
    pub fn text<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(FieldKind::Text, sources)
    }

    /// Creates an integer field.
    pub fn integer<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(FieldKind::Integer, sources)
    }

    /// Creates a float field.
    pub fn float<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(FieldKind::Float, sources)
    }

    /// Creates a boolean field.
    pub fn boolean<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(FieldKind::Boolean, sources)
    }

    /// Creates a nullable-boolean field.
    pub fn nullable_boolean<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(FieldKind::NullableBoolean, sources)
    }

    /// Disables autocomplete suggestions for this field.
    #[must_use]
    pub const fn hide_suggestions(mut self) -> Self {
        self.show_suggestions = false;
        self
    }

    /// Keeps this field's sources out of the mapping as standalone names.
    #[must_use]
    pub const fn exclude_sources_from_mapping(mut self) -> Self {
        self.exclude_sources_from_mapping = true;
        self
    }

    /// The backend columns this field reads from.
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// The field's value domain.
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Whether this field offers autocomplete suggestions.
    pub const fn show_suggestions(&self) -> bool {
        self.show_suggestions
    }

    /// Whether this field's sources are kept out of the mapping.
    pub const fn sources_excluded_from_mapping(&self) -> bool {
        self.exclude_sources_from_mapping
    }

    /// Returns `true` if the raw token is the match-everything token `*`.
    pub fn is_match_all_token(raw: &str) -> bool {
        raw == "*"
    }

    /// Casts a raw token to this field's value domain.
    ///
    /// `field_name` only decorates the error.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Cast`] if the token cannot be converted.
    pub fn cast(&self, field_name: &str, raw: &str) -> SearchResult<Value> {
        match self.kind {
            FieldKind::Text => Ok(Value::String(clean_text_token(raw).to_string())),
            FieldKind::Integer => raw
                .trim()
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| SearchError::cast(field_name, raw, self.kind.expected())),
            FieldKind::Float => raw
                .trim()
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| SearchError::cast(field_name, raw, self.kind.expected())),
            FieldKind::Boolean => match raw.to_lowercase().as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err(SearchError::cast(field_name, raw, self.kind.expected())),
            },
            FieldKind::NullableBoolean => match raw.to_lowercase().as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                "null" => Ok(Value::Null),
                _ => Err(SearchError::cast(field_name, raw, self.kind.expected())),
            },
        }
    }

    /// Compiles a raw token into a [`Predicate`] over this field's sources.
    ///
    /// The token `*` yields the always-true predicate for every kind. Text
    /// tokens are decomposed on `*` into a conjunction of case-insensitive
    /// lookups; the requested [`LookupKind`] is not consulted for text, since
    /// the wildcard structure decides the comparisons. Scalar kinds cast the
    /// token and apply the requested comparison (booleans always compare by
    /// equality). A field with several sources ORs the per-source predicates.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Cast`] if the token cannot be cast.
    pub fn build_predicate(
        &self,
        field_name: &str,
        kind: LookupKind,
        raw: &str,
    ) -> SearchResult<Predicate> {
        if Self::is_match_all_token(raw) {
            return Ok(Predicate::match_all());
        }

        let lookups = self.lookup_plan(field_name, kind, raw)?;
        if lookups.is_empty() {
            // e.g. "**": every wildcard part is empty, vacuously true
            return Ok(Predicate::match_all());
        }

        if let [source] = self.sources.as_slice() {
            return Ok(conjoin(source, &lookups));
        }
        Ok(Predicate::Or(
            self.sources.iter().map(|s| conjoin(s, &lookups)).collect(),
        ))
    }

    /// Computes the conjunction of lookups a token contributes, shared by
    /// every source column.
    fn lookup_plan(
        &self,
        field_name: &str,
        kind: LookupKind,
        raw: &str,
    ) -> SearchResult<Vec<Lookup>> {
        match self.kind {
            FieldKind::Text => {
                let token = clean_text_token(raw);
                Ok(decompose_wildcards(token))
            }
            FieldKind::Integer | FieldKind::Float => {
                let value = self.cast(field_name, raw)?;
                Ok(vec![scalar_lookup(kind, value)])
            }
            // Booleans compare by equality regardless of the requested kind.
            FieldKind::Boolean | FieldKind::NullableBoolean => {
                let value = self.cast(field_name, raw)?;
                Ok(vec![Lookup::Exact(value)])
            }
        }
    }
}

/// Trims surrounding whitespace and one layer of matching straight or curly
/// quotes from a text token.
fn clean_text_token(raw: &str) -> &str {
    let token = raw.trim();
    let mut chars = token.chars();
    if let (Some(first), Some(last)) = (chars.next(), chars.next_back()) {
        if QUOTE_PAIRS
            .iter()
            .any(|&(open, close)| first == open && last == close)
        {
            return &token[first.len_utf8()..token.len() - last.len_utf8()];
        }
    }
    token
}

/// Splits a cleaned text token on `*` and assigns lookups positionally:
/// a non-empty leading part becomes starts-with, a non-empty trailing part
/// becomes ends-with, non-empty interior parts become contains. Without any
/// wildcard the whole token is a single contains lookup. Empty parts
/// (consecutive wildcards) contribute nothing.
fn decompose_wildcards(token: &str) -> Vec<Lookup> {
    let parts: Vec<&str> = token.split(WILDCARD).collect();

    if let [whole] = parts.as_slice() {
        return vec![Lookup::IContains((*whole).to_string())];
    }

    let last_index = parts.len() - 1;
    parts
        .iter()
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(index, part)| {
            let part = (*part).to_string();
            if index == 0 {
                Lookup::IStartsWith(part)
            } else if index == last_index {
                Lookup::IEndsWith(part)
            } else {
                Lookup::IContains(part)
            }
        })
        .collect()
}

/// Maps a requested lookup kind onto a cast scalar value. Non-equality kinds
/// match against the value's canonical text rendering.
fn scalar_lookup(kind: LookupKind, value: Value) -> Lookup {
    match kind {
        LookupKind::Exact => Lookup::Exact(value),
        LookupKind::Contains => Lookup::IContains(value.to_string()),
        LookupKind::StartsWith => Lookup::IStartsWith(value.to_string()),
        LookupKind::EndsWith => Lookup::IEndsWith(value.to_string()),
    }
}

/// ANDs per-column comparisons for one source, collapsing a single lookup to
/// a bare comparison.
fn conjoin(column: &str, lookups: &[Lookup]) -> Predicate {
    let mut predicates = lookups
        .iter()
        .cloned()
        .map(|lookup| Predicate::compare(column, lookup));
    match predicates.next() {
        None => Predicate::match_all(),
        Some(first) => predicates.fold(first, |acc, p| acc & p),
    }
}
