//! Declarative storage configuration.
//!
//! Taxonomies are declared in a YAML document keyed by taxonomy name, with
//! their term options in declaration order. The declaration order of
//! `options` is load-bearing: it is the source of the ordering index
//! computed at hydration time.

use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

use crate::error::{FieldError, FieldResult};

const DEFAULT_JOIN_TABLE: &str = "taxonomy";

fn default_join_table() -> String {
    DEFAULT_JOIN_TABLE.to_owned()
}

/// Runtime configuration of one taxonomy field. Immutable per field
/// definition and shared read-only by every lifecycle hook.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxonomyFieldConfig {
    pub fieldname: String,
    #[serde(default = "default_join_table")]
    pub join_table: String,
    #[serde(default)]
    pub has_sortorder: bool,
    #[serde(default)]
    pub options: IndexMap<String, String>,
}

impl TaxonomyFieldConfig {
    pub fn new(fieldname: impl Into<String>) -> Self {
        Self {
            fieldname: fieldname.into(),
            join_table: default_join_table(),
            has_sortorder: false,
            options: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_join_table(mut self, join_table: impl Into<String>) -> Self {
        self.join_table = join_table.into();
        self
    }

    #[must_use]
    pub fn with_sortorder(mut self, has_sortorder: bool) -> Self {
        self.has_sortorder = has_sortorder;
        self
    }

    #[must_use]
    pub fn with_option(mut self, slug: impl Into<String>, label: impl Into<String>) -> Self {
        self.options.insert(slug.into(), label.into());
        self
    }

    /// The configured label for `slug`, if any.
    #[must_use]
    pub fn option_label(&self, slug: &str) -> Option<&str> {
        self.options.get(slug).map(String::as_str)
    }

    /// Position of `slug` within the declared option order.
    #[must_use]
    pub fn option_index(&self, slug: &str) -> Option<usize> {
        self.options.get_index_of(slug)
    }

    #[must_use]
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// One taxonomy as declared in configuration, before it is bound to a
/// field name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxonomyDefinition {
    #[serde(default)]
    pub options: IndexMap<String, String>,
    #[serde(default)]
    pub has_sortorder: bool,
    #[serde(default = "default_join_table")]
    pub join_table: String,
}

impl Default for TaxonomyDefinition {
    fn default() -> Self {
        Self {
            options: IndexMap::new(),
            has_sortorder: false,
            join_table: default_join_table(),
        }
    }
}

/// The declarative taxonomy catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub taxonomies: IndexMap<String, TaxonomyDefinition>,
}

impl StorageConfig {
    /// Load the catalog from a YAML file, with `FIELDSTORE_`-prefixed
    /// environment variables taking precedence.
    ///
    /// # Errors
    /// Returns [`FieldError::Config`] when the document cannot be read or
    /// does not match the expected shape.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> FieldResult<Self> {
        Figment::new()
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed("FIELDSTORE_").split("__"))
            .extract()
            .map_err(|e| FieldError::Config(Box::new(e)))
    }

    /// Load the catalog from an in-memory YAML document.
    ///
    /// # Errors
    /// Returns [`FieldError::Config`] when the document does not match the
    /// expected shape.
    pub fn from_yaml_str(document: &str) -> FieldResult<Self> {
        Figment::new()
            .merge(Yaml::string(document))
            .extract()
            .map_err(|e| FieldError::Config(Box::new(e)))
    }

    /// Bind the named taxonomy declaration to a field configuration.
    #[must_use]
    pub fn taxonomy_field(&self, name: &str) -> Option<TaxonomyFieldConfig> {
        self.taxonomies.get(name).map(|def| TaxonomyFieldConfig {
            fieldname: name.to_owned(),
            join_table: def.join_table.clone(),
            has_sortorder: def.has_sortorder,
            options: def.options.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r"
taxonomies:
  categories:
    options:
      news: News
      events: Events
      movies: Movies
  groups:
    has_sortorder: true
    options:
      main: Main listing
      meta: Meta
";

    #[test]
    fn parses_taxonomies_preserving_option_order() {
        let config = StorageConfig::from_yaml_str(DOCUMENT).unwrap();
        let categories = config.taxonomy_field("categories").unwrap();

        let slugs: Vec<&str> = categories.options.keys().map(String::as_str).collect();
        assert_eq!(slugs, ["news", "events", "movies"]);
        assert_eq!(categories.option_index("movies"), Some(2));
        assert_eq!(categories.option_label("news"), Some("News"));
        assert!(!categories.has_sortorder);
        assert_eq!(categories.join_table, "taxonomy");
    }

    #[test]
    fn binds_sortorder_behavior_from_declaration() {
        let config = StorageConfig::from_yaml_str(DOCUMENT).unwrap();
        let groups = config.taxonomy_field("groups").unwrap();
        assert!(groups.has_sortorder);
        assert_eq!(groups.fieldname, "groups");
    }

    #[test]
    fn unknown_taxonomy_is_absent() {
        let config = StorageConfig::from_yaml_str(DOCUMENT).unwrap();
        assert!(config.taxonomy_field("tags").is_none());
    }

    #[test]
    fn rejects_malformed_documents() {
        let err = StorageConfig::from_yaml_str("taxonomies: 3").unwrap_err();
        assert!(matches!(err, FieldError::Config(_)));
    }
}
