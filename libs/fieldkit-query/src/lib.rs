//! Relational query collaborators for FieldStore field types.
//!
//! This crate carries the query-side contracts that field types consume:
//! dialect identification and rendering ([`Dialect`]), dialect-specific
//! aggregate fragments ([`group_concat_sql`]), the select builder wrapper
//! ([`SelectQuery`]), and the filter model ([`Filter`], [`Combinator`],
//! [`ContentQuery`]). Statement execution, connections, and transactions
//! belong to the enclosing persistence engine, not to this crate.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod dialect;
pub mod error;
pub mod filter;
pub mod select;

pub use dialect::{Dialect, group_concat_sql};
pub use error::{QueryError, QueryResult};
pub use filter::{Combinator, ContentQuery, Filter};
pub use select::SelectQuery;
