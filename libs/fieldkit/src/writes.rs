//! The pending-writes collection.
//!
//! Field types append insert/delete statements here during persist; the
//! enclosing engine executes the whole set inside the same transaction as
//! the owning entity's row write.

use fieldkit_query::Dialect;
use sea_query::{DeleteStatement, InsertStatement};

/// One queued write.
#[derive(Debug, Clone)]
pub enum WriteStatement {
    Insert(InsertStatement),
    Delete(DeleteStatement),
}

impl WriteStatement {
    /// Render the statement with `dialect`.
    #[must_use]
    pub fn to_sql(&self, dialect: Dialect) -> String {
        match self {
            Self::Insert(stmt) => dialect.render(stmt),
            Self::Delete(stmt) => dialect.render(stmt),
        }
    }
}

/// Ordered collection of queued writes for one entity save.
#[derive(Debug, Clone, Default)]
pub struct WriteSet {
    statements: Vec<WriteStatement>,
}

impl WriteSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, statement: WriteStatement) {
        self.statements.push(statement);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    #[must_use]
    pub fn statements(&self) -> &[WriteStatement] {
        &self.statements
    }

    /// Render every queued statement with `dialect`, in order.
    #[must_use]
    pub fn to_sql(&self, dialect: Dialect) -> Vec<String> {
        self.statements
            .iter()
            .map(|stmt| stmt.to_sql(dialect))
            .collect()
    }
}
