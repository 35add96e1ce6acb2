use thiserror::Error;

/// Errors raised while building query-side SQL.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The connection reported a database platform this layer has no
    /// aggregate syntax for.
    #[error("unsupported database platform: {0}")]
    UnsupportedPlatform(String),

    /// A filter carried a combinator token other than AND/OR.
    #[error("invalid filter expression: {0}")]
    InvalidFilterExpression(String),
}

pub type QueryResult<T> = Result<T, QueryError>;
