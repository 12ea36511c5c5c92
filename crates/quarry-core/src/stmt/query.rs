use super::Expr;
use crate::schema::app::ModelId;

/// Selects instances of `source` matching `filter`.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Model being queried
    pub source: ModelId,

    /// Filter rooted at `source`; `None` selects every row
    pub filter: Option<Expr>,
}

impl Query {
    pub fn all(source: ModelId) -> Self {
        Self {
            source,
            filter: None,
        }
    }

    pub fn filter(source: ModelId, filter: impl Into<Expr>) -> Self {
        Self {
            source,
            filter: Some(filter.into()),
        }
    }

    /// Adds `filter` to the query, AND-ing it with any existing filter.
    pub fn and(mut self, filter: impl Into<Expr>) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => Expr::and(existing, filter),
            None => filter.into(),
        });
        self
    }
}
