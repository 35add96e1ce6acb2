//! In-memory content entity state.

use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::TaxonomyFieldConfig;
use crate::value::{GroupDescriptor, TaxonomyValue};

/// Hydrated taxonomy entries for one field, keyed `<field>/<slug>`.
/// Insertion order is preserved; inserting an existing key replaces the
/// value in place.
pub type TaxonomyEntries = IndexMap<String, TaxonomyValue>;

/// One content record as the storage layer sees it between fetch and save.
#[derive(Debug, Clone, Default)]
pub struct ContentEntity {
    id: i64,
    contenttype: String,
    fields: BTreeMap<String, serde_json::Value>,
    taxonomy: BTreeMap<String, Option<TaxonomyEntries>>,
    group: Option<GroupDescriptor>,
    sortorder: Option<i64>,
}

impl ContentEntity {
    pub fn new(id: i64, contenttype: impl Into<String>) -> Self {
        Self {
            id,
            contenttype: contenttype.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn contenttype(&self) -> &str {
        &self.contenttype
    }

    /// Scalar field value, if hydrated.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
        self.fields.get(name)
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: serde_json::Value) {
        self.fields.insert(name.into(), value);
    }

    /// The taxonomy entries hydrated for `field`. `None` both when the
    /// field was never hydrated and when it hydrated empty; absence and
    /// emptiness are deliberately the same state.
    #[must_use]
    pub fn taxonomy_entries(&self, field: &str) -> Option<&TaxonomyEntries> {
        self.taxonomy.get(field).and_then(Option::as_ref)
    }

    pub fn set_taxonomy_entries(&mut self, field: impl Into<String>, entries: Option<TaxonomyEntries>) {
        self.taxonomy.insert(field.into(), entries);
    }

    /// State the desired term set for `field` on the save path, in order.
    /// Labels resolve from the configured options.
    pub fn set_taxonomy_slugs<I, S>(&mut self, config: &Arc<TaxonomyFieldConfig>, slugs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let field = config.fieldname.clone();
        let mut entries = TaxonomyEntries::new();
        for slug in slugs {
            let value = TaxonomyValue::from_slug(slug, config);
            entries.insert(format!("{field}/{}", value.slug()), value);
        }
        let entries = if entries.is_empty() { None } else { Some(entries) };
        self.taxonomy.insert(field, entries);
    }

    #[must_use]
    pub fn group(&self) -> Option<&GroupDescriptor> {
        self.group.as_ref()
    }

    pub fn set_group(&mut self, group: Option<GroupDescriptor>) {
        self.group = group;
    }

    #[must_use]
    pub fn sortorder(&self) -> Option<i64> {
        self.sortorder
    }

    pub fn set_sortorder(&mut self, sortorder: Option<i64>) {
        self.sortorder = sortorder;
    }
}
