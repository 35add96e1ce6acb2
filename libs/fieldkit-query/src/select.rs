//! A thin owned wrapper around `sea_query::SelectStatement`.
//!
//! The wrapper tracks the FROM table and alias itself so that field types
//! can introspect the primary alias when attaching joins; the underlying
//! statement does not expose its FROM parts. Everything else is delegated.

use sea_query::{Alias, Condition, Expr, JoinType, SelectStatement};

use crate::dialect::Dialect;

/// Base row-fetch query for one content table.
#[must_use]
#[derive(Debug, Clone)]
pub struct SelectQuery {
    dialect: Dialect,
    stmt: SelectStatement,
    table: String,
    alias: Option<String>,
}

impl SelectQuery {
    /// Start a select from `table` with no explicit alias.
    pub fn new(dialect: Dialect, table: impl Into<String>) -> Self {
        let table = table.into();
        let mut stmt = SelectStatement::new();
        stmt.from(Alias::new(&table));
        Self {
            dialect,
            stmt,
            table,
            alias: None,
        }
    }

    /// Start a select from `table` aliased as `alias`.
    pub fn with_alias(dialect: Dialect, table: impl Into<String>, alias: impl Into<String>) -> Self {
        let table = table.into();
        let alias = alias.into();
        let mut stmt = SelectStatement::new();
        stmt.from_as(Alias::new(&table), Alias::new(&alias));
        Self {
            dialect,
            stmt,
            table,
            alias: Some(alias),
        }
    }

    /// The alias the primary table answers to in this query: the explicit
    /// FROM alias when one was given, the raw table name otherwise.
    #[must_use]
    pub fn from_alias(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.table)
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The platform identifier of the active dialect.
    #[must_use]
    pub fn platform_name(&self) -> &'static str {
        self.dialect.name()
    }

    /// Select a verbatim SQL fragment (aggregates, expressions carrying
    /// their own output alias).
    pub fn select_raw(&mut self, fragment: impl Into<String>) -> &mut Self {
        self.stmt.expr(Expr::cust(fragment.into()));
        self
    }

    /// Select `table.column`, exposed under `out_alias` in the result row.
    pub fn select_column_as(&mut self, table: &str, column: &str, out_alias: &str) -> &mut Self {
        self.stmt.expr_as(
            Expr::col((Alias::new(table), Alias::new(column))),
            Alias::new(out_alias),
        );
        self
    }

    /// Left-join `table` under `alias` with a verbatim ON condition.
    pub fn left_join_as(&mut self, table: &str, alias: &str, on: impl Into<String>) -> &mut Self {
        self.stmt.join_as(
            JoinType::LeftJoin,
            Alias::new(table),
            Alias::new(alias),
            Expr::cust(on.into()),
        );
        self
    }

    /// Append `table.column` to the GROUP BY clause.
    pub fn group_by(&mut self, table: &str, column: &str) -> &mut Self {
        self.stmt
            .add_group_by([Expr::col((Alias::new(table), Alias::new(column))).into()]);
        self
    }

    /// Attach a WHERE condition.
    pub fn cond_where(&mut self, condition: Condition) -> &mut Self {
        self.stmt.cond_where(condition);
        self
    }

    /// Render the statement with the active dialect.
    #[must_use]
    pub fn to_sql(&self) -> String {
        self.dialect.render(&self.stmt)
    }

    /// Unwrap the inner statement for advanced use cases.
    #[must_use]
    pub fn into_inner(self) -> SelectStatement {
        self.stmt
    }
}
