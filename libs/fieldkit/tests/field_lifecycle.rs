#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Whole-lifecycle walk: declarative config → registry → query rewrite →
//! load augmentation → hydrate → persist diff.

mod common;

use indexmap::IndexMap;

use fieldkit::{ContentEntity, FieldRegistry, FieldType, Row, StorageConfig, WriteSet};
use fieldkit_query::{Combinator, ContentQuery, Dialect, Filter, SelectQuery};

use common::MemorySource;

const CONFIG: &str = r"
taxonomies:
  categories:
    has_sortorder: true
    options:
      news: News
      events: Events
";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("fieldkit=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn taxonomy_field_round_trips_through_all_hooks() {
    init_tracing();

    let config = StorageConfig::from_yaml_str(CONFIG).unwrap();
    let registry = FieldRegistry::with_defaults();
    let field = registry.build("taxonomy", "categories", &config).unwrap();
    let title = registry.build("text", "title", &config).unwrap();

    // Query construction: the categories filter moves onto the join alias.
    let mut params = IndexMap::new();
    params.insert("cat_1".to_owned(), "news".to_owned());
    let mut query = ContentQuery::new(SelectQuery::new(Dialect::Sqlite, "pages"));
    query.add_filter(Filter::new("categories", Combinator::Or, params));
    field.query(&mut query).unwrap();
    let sql = query.finish().to_sql();
    assert!(sql.contains("categories.slug = :cat_1"));

    // Load: both fields augment the same base fetch.
    let mut fetch = SelectQuery::new(Dialect::MySql, "pages");
    fetch.select_raw("pages.*");
    title.load(&mut fetch, "pages").unwrap();
    field.load(&mut fetch, "pages").unwrap();
    let sql = fetch.to_sql();
    assert!(sql.contains("`pages`.`title` AS `title`"));
    assert!(sql.contains("LEFT JOIN `taxonomy` AS `categories`"));

    // Hydrate one fetched row.
    let row = Row::new()
        .with("title", "Launch day")
        .with("categories", "News")
        .with("categories_slug", "news")
        .with("categories_sortorder", 1);
    let mut entity = ContentEntity::new(7, "pages");
    title.hydrate(&row, &mut entity).unwrap();
    field.hydrate(&row, &mut entity).unwrap();

    assert_eq!(
        entity.field("title").and_then(serde_json::Value::as_str),
        Some("Launch day")
    );
    assert_eq!(entity.group().unwrap().index, 0);

    // Persist: the hydrated state matches storage, so nothing is queued.
    let settled = MemorySource::with_slugs(7, "pages", "categories", &["news"]);
    let mut writes = WriteSet::new();
    field.persist(&mut writes, &entity, &settled).unwrap();
    assert!(writes.is_empty());

    // Changing the desired set queues exactly the delta.
    if let FieldType::Taxonomy(taxonomy) = &field {
        entity.set_taxonomy_slugs(taxonomy.config(), ["news", "events"]);
    }
    let mut writes = WriteSet::new();
    field.persist(&mut writes, &entity, &settled).unwrap();
    assert_eq!(writes.len(), 1);
    assert!(writes.to_sql(Dialect::Postgres)[0].contains("'events'"));
}
