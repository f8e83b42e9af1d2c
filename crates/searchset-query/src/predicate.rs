//! Backend-agnostic filter predicates.
//!
//! This module provides the [`Lookup`] enum for column-level comparisons and
//! the [`Predicate`] tree for combining them with AND and OR. A backend
//! collaborator compiles a `Predicate` into its native filter representation
//! (SQL WHERE clause, search-engine query, ...), keeping the field and
//! wildcard logic independent of any single storage engine.
//!
//! # Examples
//!
//! ```
//! use searchset_query::predicate::{Lookup, Predicate};
//!
//! // name icontains "ali" AND name iendswith "ce"
//! let p = Predicate::compare("name", Lookup::IContains("ali".into()))
//!     & Predicate::compare("name", Lookup::IEndsWith("ce".into()));
//!
//! // A match-all predicate applies no filtering.
//! assert!(Predicate::match_all().is_match_all());
//! ```

use std::ops;

use crate::value::Value;

/// A column-level comparison.
///
/// String-valued variants are case-insensitive, matching the behavior of the
/// wildcard compiler which only ever emits case-insensitive text lookups.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Lookup {
    /// Exact match (`column = value`; `Exact(Value::Null)` is a null test).
    Exact(Value),
    /// Case-insensitive substring match.
    IContains(String),
    /// Case-insensitive starts-with.
    IStartsWith(String),
    /// Case-insensitive ends-with.
    IEndsWith(String),
}

/// The comparison a caller requests when translating a token.
///
/// Callers select a kind per field type; the text wildcard compiler derives
/// its own lookups from the wildcard structure instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LookupKind {
    /// Equality.
    Exact,
    /// Case-insensitive substring match.
    Contains,
    /// Case-insensitive starts-with.
    StartsWith,
    /// Case-insensitive ends-with.
    EndsWith,
}

/// A composable filter predicate.
///
/// `Predicate` values combine with `&` (AND) and `|` (OR). The empty
/// conjunction `Predicate::And([])` is vacuously true and represents
/// "match everything, no filter applied".
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Predicate {
    /// A single column comparison.
    Compare {
        /// The backend column the comparison applies to.
        column: String,
        /// The comparison operation.
        lookup: Lookup,
    },
    /// Logical AND of the child predicates.
    And(Vec<Predicate>),
    /// Logical OR of the child predicates.
    Or(Vec<Predicate>),
}

impl Predicate {
    /// Creates a single-column comparison predicate.
    pub fn compare(column: impl Into<String>, lookup: Lookup) -> Self {
        Self::Compare {
            column: column.into(),
            lookup,
        }
    }

    /// Creates the always-true predicate (empty conjunction, no filtering).
    pub const fn match_all() -> Self {
        Self::And(Vec::new())
    }

    /// Returns `true` if this predicate applies no filtering.
    pub fn is_match_all(&self) -> bool {
        match self {
            Self::And(children) => children.is_empty(),
            _ => false,
        }
    }
}

impl ops::BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            // Flatten nested ANDs; ANDing with match-all is identity
            (Self::And(mut left), Self::And(right)) => {
                left.extend(right);
                Self::And(left)
            }
            (Self::And(mut left), other) => {
                left.push(other);
                Self::And(left)
            }
            (other, Self::And(mut right)) => {
                right.insert(0, other);
                Self::And(right)
            }
            (left, right) => Self::And(vec![left, right]),
        }
    }
}

impl ops::BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            // Flatten nested ORs
            (Self::Or(mut left), Self::Or(right)) => {
                left.extend(right);
                Self::Or(left)
            }
            (Self::Or(mut left), other) => {
                left.push(other);
                Self::Or(left)
            }
            (other, Self::Or(mut right)) => {
                right.insert(0, other);
                Self::Or(right)
            }
            (left, right) => Self::Or(vec![left, right]),
        }
    }
}
