use super::Expr;

/// Logical negation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprNot {
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn not(expr: impl Into<Expr>) -> Expr {
        match expr.into() {
            Expr::Value(super::Value::Bool(b)) => Expr::Value((!b).into()),
            expr => Expr::Not(ExprNot {
                expr: Box::new(expr),
            }),
        }
    }
}

impl From<ExprNot> for Expr {
    fn from(src: ExprNot) -> Expr {
        Expr::Not(src)
    }
}
