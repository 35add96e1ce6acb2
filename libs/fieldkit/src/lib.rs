//! Field types for structured content records.
//!
//! This crate implements the field-type layer of the FieldStore storage
//! engine: the capability interface every field variant exposes
//! (`query` / `load` / `hydrate` / `persist`), the registry that
//! dispatches declared type names to variants, and the taxonomy field:
//! the multi-valued relational field that presents join-table term
//! associations as an ordinary entity field.
//!
//! The crate constructs queries and write statements but never executes
//! them; connections and transactions belong to the enclosing persistence
//! engine.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod diff;
pub mod entity;
pub mod error;
pub mod registry;
pub mod row;
pub mod taxonomy;
pub mod text;
pub mod value;
pub mod writes;

pub use config::{StorageConfig, TaxonomyDefinition, TaxonomyFieldConfig};
pub use entity::{ContentEntity, TaxonomyEntries};
pub use error::{FieldError, FieldResult};
pub use registry::{FieldFactory, FieldRegistry, FieldType};
pub use row::Row;
pub use taxonomy::{AssociationSource, TaxonomyField, rewrite_filters};
pub use text::TextField;
pub use value::{AssociationRow, GroupDescriptor, ORDER_INDEX_SENTINEL, TaxonomyValue};
pub use writes::{WriteSet, WriteStatement};
