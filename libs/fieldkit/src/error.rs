use thiserror::Error;

use fieldkit_query::QueryError;

/// Errors raised by the field-type layer.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error(transparent)]
    Query(#[from] QueryError),

    /// A field definition named a type the registry does not know.
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),

    /// A field definition was missing what its declared type requires.
    #[error("invalid field definition for '{field}': {message}")]
    InvalidDefinition { field: String, message: String },

    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// The external association lookup failed; surfaced unmodified.
    #[error("association lookup failed: {0}")]
    Lookup(String),

    #[error("statement build failed: {0}")]
    Statement(#[from] sea_query::error::Error),
}

pub type FieldResult<T> = Result<T, FieldError>;
