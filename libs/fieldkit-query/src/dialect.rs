//! Database dialect identification and dialect-specific SQL.
//!
//! The active platform reaches this layer as the identifier string the
//! connection reports (`"mysql"`, `"sqlite"`, `"postgresql"`). Anything else
//! is rejected outright: an unknown platform must never produce an empty
//! aggregate fragment.

use sea_query::{MysqlQueryBuilder, PostgresQueryBuilder, QueryStatementWriter, SqliteQueryBuilder};
use std::fmt;

use crate::error::{QueryError, QueryResult};

/// The SQL dialects the storage layer can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    MySql,
    Sqlite,
    Postgres,
}

impl Dialect {
    /// Resolve a dialect from the platform identifier reported by the
    /// connection.
    ///
    /// # Errors
    /// Returns [`QueryError::UnsupportedPlatform`] for any identifier other
    /// than `mysql`, `sqlite`, or `postgresql`.
    pub fn from_name(name: &str) -> QueryResult<Self> {
        match name {
            "mysql" => Ok(Self::MySql),
            "sqlite" => Ok(Self::Sqlite),
            "postgresql" => Ok(Self::Postgres),
            other => Err(QueryError::UnsupportedPlatform(other.to_owned())),
        }
    }

    /// The platform identifier this dialect answers to.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::Sqlite => "sqlite",
            Self::Postgres => "postgresql",
        }
    }

    /// Render a statement with this dialect's query builder.
    #[must_use]
    pub fn render<S: QueryStatementWriter>(self, statement: &S) -> String {
        match self {
            Self::MySql => statement.to_string(MysqlQueryBuilder),
            Self::Sqlite => statement.to_string(SqliteQueryBuilder),
            Self::Postgres => statement.to_string(PostgresQueryBuilder),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the dialect-specific aggregate-select fragment that collapses the
/// joined rows' `column` into one delimited string per group.
///
/// SQLite has no ordering clause for this aggregate, so `order` is ignored
/// there and the concatenation order is not guaranteed.
///
/// # Errors
/// Returns [`QueryError::UnsupportedPlatform`] when `platform` is not one of
/// the supported identifiers.
pub fn group_concat_sql(
    platform: &str,
    column: &str,
    order: &str,
    alias: &str,
) -> QueryResult<String> {
    Ok(match Dialect::from_name(platform)? {
        Dialect::MySql => {
            format!("GROUP_CONCAT(DISTINCT {column} ORDER BY {order} ASC) as {alias}")
        }
        Dialect::Sqlite => format!("GROUP_CONCAT(DISTINCT {column}) as {alias}"),
        Dialect::Postgres => {
            format!("string_agg(distinct {column}, ',' ORDER BY {order}) as {alias}")
        }
    })
}
