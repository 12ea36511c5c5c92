use super::Expr;

/// `expr IS NULL`, or `expr IS NOT NULL` when `negate` is set.
///
/// On a relation path this tests whether the related record exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprIsNull {
    pub negate: bool,
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn is_null(expr: impl Into<Expr>) -> Expr {
        Expr::null_check(expr.into(), false)
    }

    pub fn is_not_null(expr: impl Into<Expr>) -> Expr {
        Expr::null_check(expr.into(), true)
    }

    fn null_check(expr: Expr, negate: bool) -> Expr {
        Expr::IsNull(ExprIsNull {
            negate,
            expr: Box::new(expr),
        })
    }
}

impl From<ExprIsNull> for Expr {
    fn from(src: ExprIsNull) -> Expr {
        Expr::IsNull(src)
    }
}
