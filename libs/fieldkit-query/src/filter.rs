//! Query filters and their combinator algebra.
//!
//! A [`Filter`] carries the caller's predicate over one field: the field
//! key, the named parameters to bind, the AND/OR combinator, and a mutable
//! expression slot holding the compiled condition. Field types may replace
//! the expression during query construction (the taxonomy field rewrites
//! its filters onto the join alias) without touching the parameters, so
//! external parameter binding keeps working unmodified.

use indexmap::IndexMap;
use sea_query::{Cond, Condition, Expr};

use crate::error::{QueryError, QueryResult};
use crate::select::SelectQuery;

/// Logical combinator joining a filter's predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    And,
    Or,
}

impl Combinator {
    /// Parse a combinator token from caller input.
    ///
    /// Accepts `and`/`&&` and `or`/`||`, case-insensitive.
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidFilterExpression`] for any other token.
    pub fn from_token(token: &str) -> QueryResult<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "and" | "&&" => Ok(Self::And),
            "or" | "||" => Ok(Self::Or),
            other => Err(QueryError::InvalidFilterExpression(format!(
                "unsupported combinator: {other}"
            ))),
        }
    }

    /// Compose verbatim predicate fragments into one condition under this
    /// combinator.
    #[must_use]
    pub fn compose<I>(self, predicates: I) -> Condition
    where
        I: IntoIterator<Item = String>,
    {
        let seed = match self {
            Self::And => Cond::all(),
            Self::Or => Cond::any(),
        };
        predicates
            .into_iter()
            .fold(seed, |cond, predicate| cond.add(Expr::cust(predicate)))
    }
}

/// One predicate over one field, with named parameters bound externally.
#[derive(Debug, Clone)]
pub struct Filter {
    key: String,
    parameters: IndexMap<String, String>,
    combinator: Combinator,
    expression: Condition,
}

impl Filter {
    /// Build a filter whose initial expression matches `key = :param` on
    /// the primary table for every parameter, joined by `combinator`.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        combinator: Combinator,
        parameters: IndexMap<String, String>,
    ) -> Self {
        let key = key.into();
        let expression =
            combinator.compose(parameters.keys().map(|param| format!("{key} = :{param}")));
        Self {
            key,
            parameters,
            combinator,
            expression,
        }
    }

    /// Build a filter from a raw combinator token.
    ///
    /// # Errors
    /// Returns [`QueryError::InvalidFilterExpression`] when the token is not
    /// an AND/OR spelling.
    pub fn with_token(
        key: impl Into<String>,
        combinator_token: &str,
        parameters: IndexMap<String, String>,
    ) -> QueryResult<Self> {
        Ok(Self::new(
            key,
            Combinator::from_token(combinator_token)?,
            parameters,
        ))
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn parameters(&self) -> &IndexMap<String, String> {
        &self.parameters
    }

    #[must_use]
    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    #[must_use]
    pub fn expression(&self) -> &Condition {
        &self.expression
    }

    /// Replace the compiled expression, leaving key and parameters intact.
    pub fn set_expression(&mut self, expression: Condition) {
        self.expression = expression;
    }
}

/// A base fetch query plus the ordered filters applied to it. This is what
/// a field type's `query` hook receives.
#[must_use]
#[derive(Debug, Clone)]
pub struct ContentQuery {
    select: SelectQuery,
    filters: Vec<Filter>,
}

impl ContentQuery {
    pub fn new(select: SelectQuery) -> Self {
        Self {
            select,
            filters: Vec::new(),
        }
    }

    pub fn add_filter(&mut self, filter: Filter) -> &mut Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut [Filter] {
        &mut self.filters
    }

    #[must_use]
    pub fn select(&self) -> &SelectQuery {
        &self.select
    }

    pub fn select_mut(&mut self) -> &mut SelectQuery {
        &mut self.select
    }

    /// Attach every filter's expression to the select and return it.
    pub fn finish(self) -> SelectQuery {
        let mut select = self.select;
        for filter in self.filters {
            select.cond_where(filter.expression);
        }
        select
    }
}
