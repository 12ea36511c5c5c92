use super::Expr;

/// Disjunction.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// `lhs OR rhs`. `false` on either side is dropped.
    pub fn or(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        let (lhs, rhs) = (lhs.into(), rhs.into());

        match (lhs, rhs) {
            (lhs, rhs) if lhs.is_false() => rhs,
            (lhs, rhs) if rhs.is_false() => lhs,
            (Expr::Or(mut lhs), Expr::Or(rhs)) => {
                lhs.operands.extend(rhs.operands);
                Expr::Or(lhs)
            }
            (Expr::Or(mut lhs), rhs) => {
                lhs.operands.push(rhs);
                Expr::Or(lhs)
            }
            (lhs, Expr::Or(mut rhs)) => {
                rhs.operands.insert(0, lhs);
                Expr::Or(rhs)
            }
            (lhs, rhs) => Expr::Or(ExprOr {
                operands: vec![lhs, rhs],
            }),
        }
    }

    /// Joins `operands` with OR. An empty list is `false`.
    pub fn or_from_vec(mut operands: Vec<Expr>) -> Expr {
        match operands.len() {
            0 => Expr::Value(false.into()),
            1 => operands.swap_remove(0),
            _ => Expr::Or(ExprOr { operands }),
        }
    }
}

impl std::ops::Deref for ExprOr {
    type Target = [Expr];

    fn deref(&self) -> &[Expr] {
        &self.operands
    }
}

impl From<ExprOr> for Expr {
    fn from(src: ExprOr) -> Expr {
        Expr::Or(src)
    }
}
