//! The taxonomy field type.
//!
//! A taxonomy field presents a content record's many-to-many term
//! associations (stored in a separate join table) as an ordinary field on
//! the entity. The lifecycle has four hooks:
//!
//! - `query` rewrites filters naming this field so they match the join
//!   table's slug column instead of the main table;
//! - `load` augments the base fetch with a left join and a group-concat
//!   aggregate so N association rows collapse into one row per record;
//! - `hydrate` parses the aggregated string back into ordered
//!   [`TaxonomyValue`]s on the entity;
//! - `persist` diffs the desired term set against the persisted one and
//!   queues only the minimal inserts and deletes.

use sea_query::{Alias, Cond, Expr, Query};
use std::sync::Arc;

use fieldkit_query::{group_concat_sql, ContentQuery, Filter, SelectQuery};

use crate::config::TaxonomyFieldConfig;
use crate::diff::difference;
use crate::entity::{ContentEntity, TaxonomyEntries};
use crate::error::FieldResult;
use crate::row::Row;
use crate::value::{AssociationRow, GroupDescriptor, TaxonomyValue, ORDER_INDEX_SENTINEL};
use crate::writes::{WriteSet, WriteStatement};

/// Sort position written for freshly inserted associations.
const DEFAULT_SORTORDER: i64 = 0;

/// Source of the currently persisted associations for one entity. The
/// enclosing engine implements this against a consistent read view.
pub trait AssociationSource {
    /// Fetch the persisted association rows for `entity` under
    /// `taxonomytype`, in storage order.
    ///
    /// # Errors
    /// Implementations surface their lookup failures unmodified; persist
    /// aborts without queueing any statement.
    fn existing(
        &self,
        entity: &ContentEntity,
        taxonomytype: &str,
    ) -> FieldResult<Vec<AssociationRow>>;
}

/// Rewrite every filter keyed on `fieldname` into an equivalent composite
/// over `joined_alias.slug`, keeping the combinator and the parameter keys
/// so external binding continues to work unmodified. Filters on other
/// fields are untouched.
pub fn rewrite_filters(filters: &mut [Filter], fieldname: &str, joined_alias: &str) {
    for filter in filters.iter_mut() {
        if filter.key() != fieldname {
            continue;
        }
        let predicates: Vec<String> = filter
            .parameters()
            .keys()
            .map(|param| format!("{joined_alias}.slug = :{param}"))
            .collect();
        tracing::debug!(
            field = fieldname,
            predicates = predicates.len(),
            "rewriting taxonomy filter onto join alias"
        );
        filter.set_expression(filter.combinator().compose(predicates));
    }
}

/// The field-type implementation. One instance per configured taxonomy
/// field; the configuration is shared read-only with every value it
/// hydrates.
#[derive(Debug, Clone)]
pub struct TaxonomyField {
    config: Arc<TaxonomyFieldConfig>,
}

impl TaxonomyField {
    pub fn new(config: TaxonomyFieldConfig) -> Self {
        Self {
            config: config.into_shared(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &Arc<TaxonomyFieldConfig> {
        &self.config
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        "taxonomy"
    }

    /// Because filters on this field actually match rows of the join
    /// table, replace their expressions with predicates on the joined
    /// alias (which `load` introduces under the field's name).
    ///
    /// # Errors
    /// Currently infallible; the signature matches the field capability
    /// interface.
    pub fn query(&self, query: &mut ContentQuery) -> FieldResult<()> {
        let field = self.config.fieldname.as_str();
        rewrite_filters(query.filters_mut(), field, field);
        Ok(())
    }

    /// Augment the base fetch so each result row carries this field's
    /// associations: slug and optional sortorder columns, the aggregated
    /// name string, the left join that brings the rows in, and the
    /// group-by that collapses them.
    ///
    /// # Errors
    /// Returns the dialect error when the query's platform has no
    /// aggregate syntax here.
    pub fn load(&self, query: &mut SelectQuery, contenttype: &str) -> FieldResult<()> {
        let field = self.config.fieldname.as_str();
        let target = self.config.join_table.as_str();
        let alias = query.from_alias().to_owned();

        let order = if self.config.has_sortorder {
            query.select_column_as(field, "sortorder", &format!("{field}_sortorder"));
            format!("{field}.sortorder")
        } else {
            format!("{field}.id")
        };

        query.select_column_as(field, "slug", &format!("{field}_slug"));
        let aggregate =
            group_concat_sql(query.platform_name(), &format!("{field}.name"), &order, field)?;
        query.select_raw(aggregate);
        query.left_join_as(
            target,
            field,
            format!(
                "{alias}.id = {field}.content_id AND {field}.contenttype = '{contenttype}' \
                 AND {field}.taxonomytype = '{field}'"
            ),
        );
        query.group_by(&alias, "id");
        Ok(())
    }

    /// Parse the aggregated row back into taxonomy entries on the entity.
    ///
    /// All labels in the aggregate share the row's single slug column, so
    /// every entry lands under the same `<field>/<slug>` key and the last
    /// label processed wins. The group/sortorder summaries are likewise
    /// rebuilt each iteration and keep only the final value, a quirk of
    /// the association model this layer reproduces deliberately.
    ///
    /// # Errors
    /// Currently infallible; an absent aggregate column is an empty
    /// association set, not an error.
    pub fn hydrate(&self, row: &Row, entity: &mut ContentEntity) -> FieldResult<()> {
        let field = self.config.fieldname.as_str();

        let sortorder_value = row.integer(&format!("{field}_sortorder")).unwrap_or(0);
        let slug = row
            .text(&format!("{field}_slug"))
            .unwrap_or_default()
            .to_owned();
        let aggregate = row.text(field).unwrap_or_default();

        let mut group = None;
        let mut sortorder = None;
        let mut entries = TaxonomyEntries::new();

        for label in aggregate.split(',').filter(|label| !label.is_empty()) {
            entries.insert(
                format!("{field}/{slug}"),
                TaxonomyValue::new(
                    field,
                    label,
                    slug.as_str(),
                    sortorder_value,
                    Arc::clone(&self.config),
                ),
            );

            if self.config.has_sortorder {
                let index = self
                    .config
                    .option_index(&slug)
                    .and_then(|position| u32::try_from(position).ok())
                    .unwrap_or(ORDER_INDEX_SENTINEL);
                sortorder = Some(sortorder_value);
                group = Some(GroupDescriptor {
                    slug: slug.clone(),
                    name: label.to_owned(),
                    order: sortorder_value,
                    index,
                });
            }
        }

        tracing::trace!(field, terms = entries.len(), "hydrated taxonomy entries");

        entity.set_taxonomy_entries(field, (!entries.is_empty()).then_some(entries));
        entity.set_group(group);
        entity.set_sortorder(sortorder);
        Ok(())
    }

    /// Queue the minimal writes that make the persisted association set
    /// equal to the entity's desired set. Unchanged associations produce
    /// no statements at all.
    ///
    /// # Errors
    /// Propagates association-lookup failures and statement build errors;
    /// nothing is queued past the first failure.
    pub fn persist(
        &self,
        writes: &mut WriteSet,
        entity: &ContentEntity,
        associations: &dyn AssociationSource,
    ) -> FieldResult<()> {
        let field = self.config.fieldname.as_str();

        let proposed: Vec<String> = entity
            .taxonomy_entries(field)
            .map(|entries| {
                entries
                    .values()
                    .map(|value| value.slug().to_owned())
                    .filter(|slug| !slug.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let existing: Vec<String> = associations
            .existing(entity, field)?
            .into_iter()
            .map(|row| row.slug)
            .collect();

        let to_insert = difference(&proposed, &existing);
        let to_delete = difference(&existing, &proposed);

        tracing::debug!(
            field,
            inserts = to_insert.len(),
            deletes = to_delete.len(),
            "computed taxonomy association diff"
        );

        for slug in &to_insert {
            let statement = self.insert_statement(entity, slug)?;
            writes.push(statement);
        }
        for slug in &to_delete {
            writes.push(self.delete_statement(entity, slug));
        }
        Ok(())
    }

    fn insert_statement(&self, entity: &ContentEntity, slug: &str) -> FieldResult<WriteStatement> {
        let name = self.config.option_label(slug).unwrap_or(slug);
        let mut stmt = Query::insert();
        stmt.into_table(Alias::new(&self.config.join_table))
            .columns([
                Alias::new("content_id"),
                Alias::new("contenttype"),
                Alias::new("taxonomytype"),
                Alias::new("slug"),
                Alias::new("name"),
                Alias::new("sortorder"),
            ])
            .values([
                entity.id().into(),
                entity.contenttype().into(),
                self.config.fieldname.as_str().into(),
                slug.into(),
                name.into(),
                DEFAULT_SORTORDER.into(),
            ])?;
        Ok(WriteStatement::Insert(stmt))
    }

    fn delete_statement(&self, entity: &ContentEntity, slug: &str) -> WriteStatement {
        let mut stmt = Query::delete();
        stmt.from_table(Alias::new(&self.config.join_table))
            .cond_where(
                Cond::all()
                    .add(Expr::col(Alias::new("content_id")).eq(entity.id()))
                    .add(Expr::col(Alias::new("taxonomytype")).eq(self.config.fieldname.as_str()))
                    .add(Expr::col(Alias::new("slug")).eq(slug)),
            );
        WriteStatement::Delete(stmt)
    }
}
