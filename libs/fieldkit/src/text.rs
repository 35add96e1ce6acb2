//! A minimal single-column scalar field.

use fieldkit_query::SelectQuery;

use crate::entity::ContentEntity;
use crate::row::Row;

/// Selects one column of the primary table and copies the fetched scalar
/// onto the entity. The main-row write path persists it, so the persist
/// hook has nothing to queue.
#[derive(Debug, Clone)]
pub struct TextField {
    column: String,
}

impl TextField {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        "text"
    }

    pub fn load(&self, query: &mut SelectQuery) {
        let alias = query.from_alias().to_owned();
        query.select_column_as(&alias, &self.column, &self.column);
    }

    pub fn hydrate(&self, row: &Row, entity: &mut ContentEntity) {
        if let Some(value) = row.text(&self.column) {
            entity.set_field(self.column.as_str(), value.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fieldkit_query::Dialect;

    #[test]
    fn hydrates_the_scalar_onto_the_entity() {
        let field = TextField::new("title");
        let row = Row::new().with("title", "Hello");
        let mut entity = ContentEntity::new(1, "pages");

        field.hydrate(&row, &mut entity);

        assert_eq!(
            entity.field("title").and_then(serde_json::Value::as_str),
            Some("Hello")
        );
    }

    #[test]
    fn selects_under_the_primary_alias() {
        let field = TextField::new("title");
        let mut query = SelectQuery::with_alias(Dialect::Postgres, "content_pages", "p");
        field.load(&mut query);
        assert!(query.to_sql().contains(r#""p"."title" AS "title""#));
    }
}
