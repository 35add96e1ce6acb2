//! Taxonomy value types.

use std::sync::Arc;

use crate::config::TaxonomyFieldConfig;

/// Largest 32-bit signed value. Slugs missing from the configured options
/// take this ordering index so they sort after every configured term.
pub const ORDER_INDEX_SENTINEL: u32 = 2_147_483_647;

/// One taxonomy term attached to one content record. A plain value: two
/// instances with the same content are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyValue {
    fieldname: String,
    label: String,
    slug: String,
    sortorder: i64,
    config: Arc<TaxonomyFieldConfig>,
}

impl TaxonomyValue {
    pub fn new(
        fieldname: impl Into<String>,
        label: impl Into<String>,
        slug: impl Into<String>,
        sortorder: i64,
        config: Arc<TaxonomyFieldConfig>,
    ) -> Self {
        Self {
            fieldname: fieldname.into(),
            label: label.into(),
            slug: slug.into(),
            sortorder,
            config,
        }
    }

    /// Build a value for `slug` straight from configuration, resolving the
    /// label from the declared options (or falling back to the slug). This
    /// is the save-path constructor callers use to state desired terms.
    #[must_use]
    pub fn from_slug(slug: impl Into<String>, config: &Arc<TaxonomyFieldConfig>) -> Self {
        let slug = slug.into();
        let label = config
            .option_label(&slug)
            .unwrap_or(slug.as_str())
            .to_owned();
        Self {
            fieldname: config.fieldname.clone(),
            label,
            slug,
            sortorder: 0,
            config: Arc::clone(config),
        }
    }

    #[must_use]
    pub fn fieldname(&self) -> &str {
        &self.fieldname
    }

    /// The raw label as it came out of the aggregate string.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub fn sortorder(&self) -> i64 {
        self.sortorder
    }

    /// The field configuration this value was hydrated under.
    #[must_use]
    pub fn config(&self) -> &Arc<TaxonomyFieldConfig> {
        &self.config
    }
}

/// One persisted (content record, term) association row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationRow {
    pub content_id: i64,
    pub contenttype: String,
    pub taxonomytype: String,
    pub slug: String,
    pub name: String,
    pub sortorder: i64,
}

/// The single-slot summary of the last association value processed during
/// hydration. See the hydrator for why this reflects only the final value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDescriptor {
    pub slug: String,
    pub name: String,
    pub order: i64,
    pub index: u32,
}
