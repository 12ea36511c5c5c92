use super::Expr;

/// Placeholder for the argument at `position`, bound when the query is
/// compiled.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ExprArg {
    pub position: usize,
}

impl Expr {
    pub fn arg(position: impl Into<ExprArg>) -> Expr {
        Expr::Arg(position.into())
    }
}

impl From<usize> for ExprArg {
    fn from(position: usize) -> ExprArg {
        ExprArg { position }
    }
}

impl From<ExprArg> for Expr {
    fn from(arg: ExprArg) -> Expr {
        Expr::Arg(arg)
    }
}
