use super::*;

/// A model-level expression.
///
/// Fields are referenced by path from the model being queried. Lowering
/// resolves paths into table-level columns and joins.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    And(ExprAnd),

    /// A related model matches a nested filter
    Any(ExprAny),

    /// A positional argument supplied when the query is compiled
    Arg(ExprArg),

    /// Comparison
    BinaryOp(ExprBinaryOp),

    /// References a field, possibly through relations
    Field(ExprField),

    IsNull(ExprIsNull),

    Not(ExprNot),

    Or(ExprOr),

    /// Literal
    Value(Value),
}

impl Expr {
    pub fn null() -> Self {
        Self::Value(Value::Null)
    }

    pub fn is_value_null(&self) -> bool {
        matches!(self, Self::Value(Value::Null))
    }

    /// The `true` literal.
    pub fn is_true(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(true)))
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Self::Value(Value::Bool(false)))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Calls `f` on every field path referenced by this expression, not
    /// descending into nested `Any` filters (their paths are rooted at the
    /// related model).
    pub fn for_each_path(&self, f: &mut impl FnMut(&Path)) {
        match self {
            Self::And(expr) => expr.operands.iter().for_each(|e| e.for_each_path(f)),
            Self::Or(expr) => expr.operands.iter().for_each(|e| e.for_each_path(f)),
            Self::Any(expr) => f(&expr.relation),
            Self::BinaryOp(expr) => {
                expr.lhs.for_each_path(f);
                expr.rhs.for_each_path(f);
            }
            Self::Field(expr) => f(&expr.path),
            Self::IsNull(expr) => expr.expr.for_each_path(f),
            Self::Not(expr) => expr.expr.for_each_path(f),
            Self::Arg(_) | Self::Value(_) => {}
        }
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Value(Value::from(value))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}
