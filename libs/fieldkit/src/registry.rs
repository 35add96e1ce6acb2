//! Field-type dispatch.
//!
//! Field behavior is a closed set of variants behind one capability
//! interface; the registry maps declared type names to constructors so a
//! contenttype definition can say `type: taxonomy` and get the right
//! variant, without a class hierarchy.

use std::collections::BTreeMap;

use fieldkit_query::{ContentQuery, SelectQuery};

use crate::config::StorageConfig;
use crate::entity::ContentEntity;
use crate::error::{FieldError, FieldResult};
use crate::row::Row;
use crate::taxonomy::{AssociationSource, TaxonomyField};
use crate::text::TextField;
use crate::writes::WriteSet;

/// One field on a contenttype, dispatching the lifecycle hooks to its
/// variant.
#[derive(Debug, Clone)]
pub enum FieldType {
    Taxonomy(TaxonomyField),
    Text(TextField),
}

impl FieldType {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Taxonomy(field) => field.name(),
            Self::Text(field) => field.name(),
        }
    }

    /// Give the field a chance to rewrite filters during query
    /// construction.
    ///
    /// # Errors
    /// Propagates the variant's query-construction failure.
    pub fn query(&self, query: &mut ContentQuery) -> FieldResult<()> {
        match self {
            Self::Taxonomy(field) => field.query(query),
            Self::Text(_) => Ok(()),
        }
    }

    /// Let the field add its selects and joins to the base fetch.
    ///
    /// # Errors
    /// Propagates the variant's load failure.
    pub fn load(&self, query: &mut SelectQuery, contenttype: &str) -> FieldResult<()> {
        match self {
            Self::Taxonomy(field) => field.load(query, contenttype),
            Self::Text(field) => {
                field.load(query);
                Ok(())
            }
        }
    }

    /// Copy this field's columns from a fetched row onto the entity.
    ///
    /// # Errors
    /// Propagates the variant's hydration failure.
    pub fn hydrate(&self, row: &Row, entity: &mut ContentEntity) -> FieldResult<()> {
        match self {
            Self::Taxonomy(field) => field.hydrate(row, entity),
            Self::Text(field) => {
                field.hydrate(row, entity);
                Ok(())
            }
        }
    }

    /// Queue whatever writes this field needs beyond the main-row write.
    ///
    /// # Errors
    /// Propagates the variant's persist failure.
    pub fn persist(
        &self,
        writes: &mut WriteSet,
        entity: &ContentEntity,
        associations: &dyn AssociationSource,
    ) -> FieldResult<()> {
        match self {
            Self::Taxonomy(field) => field.persist(writes, entity, associations),
            Self::Text(_) => Ok(()),
        }
    }
}

/// Constructor for one declared field type.
pub type FieldFactory = fn(name: &str, config: &StorageConfig) -> FieldResult<FieldType>;

/// Maps declared type names to field constructors.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    factories: BTreeMap<String, FieldFactory>,
}

impl FieldRegistry {
    /// A registry with the built-in field types registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self {
            factories: BTreeMap::new(),
        };
        registry.register("taxonomy", build_taxonomy);
        registry.register("text", build_text);
        registry
    }

    pub fn register(&mut self, type_name: impl Into<String>, factory: FieldFactory) {
        self.factories.insert(type_name.into(), factory);
    }

    /// Construct the field `field_name` of declared type `type_name`.
    ///
    /// # Errors
    /// Returns [`FieldError::UnknownFieldType`] for an unregistered type
    /// name, or the factory's own failure.
    pub fn build(
        &self,
        type_name: &str,
        field_name: &str,
        config: &StorageConfig,
    ) -> FieldResult<FieldType> {
        let factory = self
            .factories
            .get(type_name)
            .ok_or_else(|| FieldError::UnknownFieldType(type_name.to_owned()))?;
        factory(field_name, config)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn build_taxonomy(name: &str, config: &StorageConfig) -> FieldResult<FieldType> {
    let field_config = config
        .taxonomy_field(name)
        .ok_or_else(|| FieldError::InvalidDefinition {
            field: name.to_owned(),
            message: "no taxonomy with this name is declared".to_owned(),
        })?;
    Ok(FieldType::Taxonomy(TaxonomyField::new(field_config)))
}

fn build_text(name: &str, _config: &StorageConfig) -> FieldResult<FieldType> {
    Ok(FieldType::Text(TextField::new(name)))
}
