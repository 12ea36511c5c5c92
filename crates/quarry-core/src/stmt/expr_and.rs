use super::Expr;

/// Conjunction. Built through [`Expr::and`], which keeps it flat.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

impl Expr {
    /// `lhs AND rhs`. `true` on either side is dropped and nested
    /// conjunctions are spliced in place.
    pub fn and(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        let (lhs, rhs) = (lhs.into(), rhs.into());

        if lhs.is_true() {
            return rhs;
        }

        if rhs.is_true() {
            return lhs;
        }

        let mut operands = match lhs {
            Expr::And(and) => and.operands,
            lhs => vec![lhs],
        };

        match rhs {
            Expr::And(and) => operands.extend(and.operands),
            rhs => operands.push(rhs),
        }

        Expr::And(ExprAnd { operands })
    }

    /// Joins `operands` with AND. An empty list is `true`.
    pub fn and_from_vec(mut operands: Vec<Expr>) -> Expr {
        if operands.len() > 1 {
            Expr::And(ExprAnd { operands })
        } else {
            operands.pop().unwrap_or(Expr::Value(true.into()))
        }
    }
}

impl std::ops::Deref for ExprAnd {
    type Target = [Expr];

    fn deref(&self) -> &[Expr] {
        &self.operands
    }
}

impl<'a> IntoIterator for &'a ExprAnd {
    type IntoIter = std::slice::Iter<'a, Expr>;
    type Item = &'a Expr;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl From<ExprAnd> for Expr {
    fn from(src: ExprAnd) -> Expr {
        Expr::And(src)
    }
}
