use super::{ColumnId, ParameterId, ScopeId, TableId};
use quarry_core::{schema::app::ModelId, stmt};

/// A table-level expression.
///
/// Leaves reference nodes registered in a [`BuilderContext`](super::BuilderContext)
/// by id.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A registered table, used as a whole (e.g. in a projection)
    Table(TableId),

    /// A registered column
    Column(ColumnId),

    /// An external parameter
    Parameter(ParameterId),

    /// The meta-table registered for a model
    MetaTable(ModelId),

    /// A constant
    Value(stmt::Value),

    BinaryOp(ExprBinaryOp),

    And(ExprAnd),

    Or(ExprOr),

    Not(Box<Expr>),

    IsNull(ExprIsNull),

    /// True when the subquery rooted at the scope yields at least one row.
    /// The scope's predicates correlate it with the enclosing query.
    Exists(ScopeId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: stmt::BinaryOp,
    pub rhs: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprAnd {
    pub operands: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprOr {
    pub operands: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExprIsNull {
    /// When `true`, this is an "is not null" check.
    pub negate: bool,
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn binary_op(lhs: impl Into<Expr>, op: stmt::BinaryOp, rhs: impl Into<Expr>) -> Expr {
        Expr::BinaryOp(ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        })
    }

    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::binary_op(lhs, stmt::BinaryOp::Eq, rhs)
    }

    pub fn and(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        let lhs = lhs.into();
        let rhs = rhs.into();

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

    /// Conjoins `operands` in order. No operands yields `true`; a single
    /// operand is returned as is.
    pub fn and_from_vec(mut operands: Vec<Expr>) -> Expr {
        match operands.len() {
            0 => Expr::from(true),
            1 => operands.swap_remove(0),
            _ => Expr::And(ExprAnd { operands }),
        }
    }

    pub fn or(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        let lhs = lhs.into();
        let rhs = rhs.into();

        if lhs.is_false() {
            return rhs;
        }

        if rhs.is_false() {
            return lhs;
        }

        let mut operands = match lhs {
            Expr::Or(or) => or.operands,
            lhs => vec![lhs],
        };

        match rhs {
            Expr::Or(or) => operands.extend(or.operands),
            rhs => operands.push(rhs),
        }

        Expr::Or(ExprOr { operands })
    }

    pub fn or_from_vec(mut operands: Vec<Expr>) -> Expr {
        match operands.len() {
            0 => Expr::from(false),
            1 => operands.swap_remove(0),
            _ => Expr::Or(ExprOr { operands }),
        }
    }

    pub fn not(expr: impl Into<Expr>) -> Expr {
        Expr::Not(Box::new(expr.into()))
    }

    pub fn is_null(expr: impl Into<Expr>, negate: bool) -> Expr {
        Expr::IsNull(ExprIsNull {
            negate,
            expr: Box::new(expr.into()),
        })
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Expr::Value(stmt::Value::Bool(true)))
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Expr::Value(stmt::Value::Bool(false)))
    }

    pub fn as_column(&self) -> Option<ColumnId> {
        match self {
            Expr::Column(id) => Some(*id),
            _ => None,
        }
    }

    /// Calls `f` on every direct sub-expression.
    pub fn for_each_child(&self, mut f: impl FnMut(&Expr)) {
        match self {
            Expr::BinaryOp(expr) => {
                f(&*expr.lhs);
                f(&*expr.rhs);
            }
            Expr::And(ExprAnd { operands }) | Expr::Or(ExprOr { operands }) => {
                operands.iter().for_each(f)
            }
            Expr::Not(expr) => f(&**expr),
            Expr::IsNull(expr) => f(&*expr.expr),
            Expr::Table(_)
            | Expr::Column(_)
            | Expr::Parameter(_)
            | Expr::MetaTable(_)
            | Expr::Value(_)
            | Expr::Exists(_) => {}
        }
    }

    /// Columns referenced by this expression, in pre-order. Subqueries
    /// behind `Exists` are not entered.
    pub fn columns(&self) -> Vec<ColumnId> {
        fn collect(expr: &Expr, out: &mut Vec<ColumnId>) {
            match expr {
                Expr::Column(id) => out.push(*id),
                _ => expr.for_each_child(|child| collect(child, out)),
            }
        }

        let mut out = vec![];
        collect(self, &mut out);
        out
    }
}

impl From<TableId> for Expr {
    fn from(value: TableId) -> Self {
        Expr::Table(value)
    }
}

impl From<ColumnId> for Expr {
    fn from(value: ColumnId) -> Self {
        Expr::Column(value)
    }
}

impl From<ParameterId> for Expr {
    fn from(value: ParameterId) -> Self {
        Expr::Parameter(value)
    }
}

impl From<ScopeId> for Expr {
    fn from(value: ScopeId) -> Self {
        Expr::Exists(value)
    }
}

impl From<stmt::Value> for Expr {
    fn from(value: stmt::Value) -> Self {
        Expr::Value(value)
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::Value(value.into())
    }
}

impl From<ExprAnd> for Expr {
    fn from(value: ExprAnd) -> Self {
        Expr::And(value)
    }
}

impl From<ExprOr> for Expr {
    fn from(value: ExprOr) -> Self {
        Expr::Or(value)
    }
}
