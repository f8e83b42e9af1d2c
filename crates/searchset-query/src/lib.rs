//! # searchset-query
//!
//! The query half of searchset: the [`SearchField`](fields::SearchField)
//! type system with its casting rules and wildcard compiler, the
//! backend-agnostic [`Predicate`](predicate::Predicate) tree it produces,
//! and the [`Value`](value::Value) domain of cast tokens.
//!
//! ## Architecture
//!
//! Translation is pure: no backend is consulted. A token flows through
//! `cast` (type conversion, quote/whitespace cleanup) and then predicate
//! construction (wildcard decomposition for text, comparison selection for
//! scalars, OR across a field's sources). Backends compile the resulting
//! predicate tree into their native filter representation.

pub mod fields;
pub mod predicate;
pub mod value;

pub use fields::{FieldKind, SearchField};
pub use predicate::{Lookup, LookupKind, Predicate};
pub use value::Value;
