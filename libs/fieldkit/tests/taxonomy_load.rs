#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use fieldkit::TaxonomyField;
use fieldkit_query::{Dialect, SelectQuery};

fn load_sql(dialect: Dialect, sortorder: bool) -> String {
    let field = TaxonomyField::new(common::categories().with_sortorder(sortorder));
    let mut query = SelectQuery::new(dialect, "pages");
    query.select_raw("pages.*");
    field.load(&mut query, "pages").unwrap();
    query.to_sql()
}

#[test]
fn mysql_aggregate_orders_by_the_join_row_id() {
    let sql = load_sql(Dialect::MySql, false);
    assert!(
        sql.contains("GROUP_CONCAT(DISTINCT categories.name ORDER BY categories.id ASC) as categories"),
        "unexpected SQL: {sql}"
    );
}

#[test]
fn sqlite_aggregate_carries_no_ordering() {
    let sql = load_sql(Dialect::Sqlite, false);
    assert!(
        sql.contains("GROUP_CONCAT(DISTINCT categories.name) as categories"),
        "unexpected SQL: {sql}"
    );
}

#[test]
fn postgresql_aggregate_uses_string_agg() {
    let sql = load_sql(Dialect::Postgres, false);
    assert!(
        sql.contains("string_agg(distinct categories.name, ',' ORDER BY categories.id) as categories"),
        "unexpected SQL: {sql}"
    );
}

#[test]
fn sortorder_fields_select_and_order_by_the_sort_column() {
    let sql = load_sql(Dialect::MySql, true);
    assert!(
        sql.contains("`categories`.`sortorder` AS `categories_sortorder`"),
        "unexpected SQL: {sql}"
    );
    assert!(
        sql.contains("ORDER BY categories.sortorder ASC) as categories"),
        "unexpected SQL: {sql}"
    );
}

#[test]
fn slug_column_is_selected_under_its_field_alias() {
    let sql = load_sql(Dialect::MySql, false);
    assert!(
        sql.contains("`categories`.`slug` AS `categories_slug`"),
        "unexpected SQL: {sql}"
    );
}

#[test]
fn join_discriminates_on_contenttype_and_taxonomytype() {
    let sql = load_sql(Dialect::MySql, false);
    assert!(
        sql.contains(
            "pages.id = categories.content_id AND categories.contenttype = 'pages' \
             AND categories.taxonomytype = 'categories'"
        ),
        "unexpected SQL: {sql}"
    );
    assert!(
        sql.contains("LEFT JOIN `taxonomy` AS `categories`"),
        "unexpected SQL: {sql}"
    );
}

#[test]
fn grouping_collapses_to_one_row_per_record() {
    let sql = load_sql(Dialect::MySql, false);
    assert!(sql.contains("GROUP BY `pages`.`id`"), "unexpected SQL: {sql}");
}

#[test]
fn explicit_from_alias_wins_over_the_table_name() {
    let field = TaxonomyField::new(common::categories());
    let mut query = SelectQuery::with_alias(Dialect::Postgres, "content_pages", "c");
    query.select_raw("c.*");
    field.load(&mut query, "pages").unwrap();
    let sql = query.to_sql();

    assert!(sql.contains("c.id = categories.content_id"), "unexpected SQL: {sql}");
    assert!(sql.contains(r#"GROUP BY "c"."id""#), "unexpected SQL: {sql}");
}
