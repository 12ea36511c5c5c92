use super::{Expr, Path};
use crate::schema::app::FieldId;

/// References a field by path from the model being queried.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExprField {
    pub path: Path,
}

impl Expr {
    pub fn field(path: impl Into<Path>) -> Self {
        ExprField { path: path.into() }.into()
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(_))
    }
}

impl From<Path> for ExprField {
    fn from(path: Path) -> Self {
        ExprField { path }
    }
}

impl From<ExprField> for Expr {
    fn from(value: ExprField) -> Self {
        Self::Field(value)
    }
}

impl From<Path> for Expr {
    fn from(value: Path) -> Self {
        Self::field(value)
    }
}

impl From<FieldId> for Expr {
    fn from(value: FieldId) -> Self {
        Self::field(value)
    }
}
