#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use fieldkit::{
    AssociationRow, AssociationSource, ContentEntity, FieldResult, TaxonomyFieldConfig,
};

/// The usual three-term category taxonomy used across these tests.
pub fn categories() -> TaxonomyFieldConfig {
    TaxonomyFieldConfig::new("categories")
        .with_option("news", "News")
        .with_option("events", "Events")
        .with_option("movies", "Movies")
}

/// An in-memory stand-in for the engine's association lookup.
pub struct MemorySource {
    rows: Vec<AssociationRow>,
}

impl MemorySource {
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn with_slugs(content_id: i64, contenttype: &str, taxonomytype: &str, slugs: &[&str]) -> Self {
        let rows = slugs
            .iter()
            .map(|slug| AssociationRow {
                content_id,
                contenttype: contenttype.to_owned(),
                taxonomytype: taxonomytype.to_owned(),
                slug: (*slug).to_owned(),
                name: (*slug).to_owned(),
                sortorder: 0,
            })
            .collect();
        Self { rows }
    }
}

impl AssociationSource for MemorySource {
    fn existing(
        &self,
        entity: &ContentEntity,
        taxonomytype: &str,
    ) -> FieldResult<Vec<AssociationRow>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.content_id == entity.id() && row.taxonomytype == taxonomytype)
            .cloned()
            .collect())
    }
}

/// A lookup that always fails, for surfacing-unmodified tests.
pub struct BrokenSource;

impl AssociationSource for BrokenSource {
    fn existing(
        &self,
        _entity: &ContentEntity,
        _taxonomytype: &str,
    ) -> FieldResult<Vec<AssociationRow>> {
        Err(fieldkit::FieldError::Lookup("connection reset".to_owned()))
    }
}
