use super::{BinaryOp, Expr};

/// `lhs <op> rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

macro_rules! comparisons {
    ( $( $(#[$meta:meta])* $name:ident => $op:ident; )* ) => {
        impl Expr {
            $(
                $(#[$meta])*
                pub fn $name(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
                    Expr::binary_op(lhs, BinaryOp::$op, rhs)
                }
            )*
        }
    };
}

comparisons! {
    /// `lhs = rhs`
    eq => Eq;
    /// `lhs <> rhs`
    ne => Ne;
    gt => Gt;
    ge => Ge;
    lt => Lt;
    le => Le;
}

impl Expr {
    pub fn binary_op(lhs: impl Into<Expr>, op: BinaryOp, rhs: impl Into<Expr>) -> Expr {
        Expr::BinaryOp(ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        })
    }
}

impl From<ExprBinaryOp> for Expr {
    fn from(src: ExprBinaryOp) -> Expr {
        Expr::BinaryOp(src)
    }
}
