mod any;
mod path;

use crate::{
    query::{BuilderContext, Expr, TableId},
    Registrar,
};
use quarry_core::{stmt, Error, Result};

/// Lowers model-level queries into registrations on a [`BuilderContext`].
pub(crate) struct Lower<'a> {
    registrar: &'a Registrar,

    /// Values bound to the query's positional arguments
    args: &'a [stmt::Value],
}

impl<'a> Lower<'a> {
    pub(crate) fn new(registrar: &'a Registrar, args: &'a [stmt::Value]) -> Lower<'a> {
        Lower { registrar, args }
    }

    /// Registers `query`'s source table in the current scope and its filter
    /// as a where-predicate of that scope.
    pub(crate) fn lower_query(
        &self,
        query: &stmt::Query,
        cx: &mut BuilderContext,
    ) -> Result<TableId> {
        let Some(table) = self.registrar.register_model_table(query.source, cx)? else {
            return Err(Error::invalid_statement(format!(
                "{:?} is not mapped to a table",
                query.source
            )));
        };

        if let Some(filter) = &query.filter {
            let filter = self.lower_expr(filter, table, cx)?;
            self.registrar.register_where(filter, cx);
        }

        Ok(table)
    }

    /// Lowers `expr`, resolving field paths from `table`.
    fn lower_expr(
        &self,
        expr: &stmt::Expr,
        table: TableId,
        cx: &mut BuilderContext,
    ) -> Result<Expr> {
        Ok(match expr {
            stmt::Expr::And(expr) => Expr::and_from_vec(self.lower_all(&expr.operands, table, cx)?),
            stmt::Expr::Or(expr) => Expr::or_from_vec(self.lower_all(&expr.operands, table, cx)?),
            stmt::Expr::Any(expr) => self.lower_any(expr, table, cx)?,
            stmt::Expr::Arg(arg) => {
                let Some(value) = self.args.get(arg.position) else {
                    return Err(Error::invalid_statement(format!(
                        "argument {} is out of range; {} arguments were supplied",
                        arg.position,
                        self.args.len()
                    )));
                };

                Expr::Parameter(self.registrar.register_parameter(value.clone(), cx))
            }
            stmt::Expr::BinaryOp(expr) => Expr::binary_op(
                self.lower_expr(&expr.lhs, table, cx)?,
                expr.op,
                self.lower_expr(&expr.rhs, table, cx)?,
            ),
            stmt::Expr::Field(expr) => self.lower_path(&expr.path, table, cx)?,
            stmt::Expr::IsNull(expr) => {
                Expr::is_null(self.lower_expr(&expr.expr, table, cx)?, expr.negate)
            }
            stmt::Expr::Not(expr) => Expr::not(self.lower_expr(&expr.expr, table, cx)?),
            stmt::Expr::Value(value) => {
                Expr::Parameter(self.registrar.register_parameter(value.clone(), cx))
            }
        })
    }

    fn lower_all(
        &self,
        operands: &[stmt::Expr],
        table: TableId,
        cx: &mut BuilderContext,
    ) -> Result<Vec<Expr>> {
        operands
            .iter()
            .map(|operand| self.lower_expr(operand, table, cx))
            .collect()
    }
}
