use super::{Expr, Path};

/// True when at least one model reached through `relation` satisfies
/// `filter`.
///
/// `relation` is rooted at the enclosing model and must end on a relation
/// field. `filter` is rooted at the relation's target model. A missing filter
/// tests for existence only.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAny {
    pub relation: Path,

    pub filter: Option<Box<Expr>>,
}

impl Expr {
    pub fn any(relation: impl Into<Path>, filter: impl Into<Expr>) -> Self {
        ExprAny {
            relation: relation.into(),
            filter: Some(Box::new(filter.into())),
        }
        .into()
    }

    pub fn exists(relation: impl Into<Path>) -> Self {
        ExprAny {
            relation: relation.into(),
            filter: None,
        }
        .into()
    }
}

impl From<ExprAny> for Expr {
    fn from(value: ExprAny) -> Self {
        Self::Any(value)
    }
}
