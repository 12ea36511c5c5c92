use super::Lower;
use crate::query::{BuilderContext, ColumnId, Expr, TableId};
use quarry_core::{schema::app::FieldId, stmt, Error, Result};

impl Lower<'_> {
    /// Lowers a relation filter into a correlated subquery.
    ///
    /// The related table is registered as the root of a new scope. The
    /// association's key equalities become that scope's first predicate and
    /// tie it to the enclosing table; the nested filter follows.
    pub(super) fn lower_any(
        &self,
        expr: &stmt::ExprAny,
        table: TableId,
        cx: &mut BuilderContext,
    ) -> Result<Expr> {
        let Some((relation, init)) = expr.relation.fields.split_last() else {
            return Err(Error::invalid_statement(
                "relation filter without a relation field",
            ));
        };

        let outer = self.navigate(&expr.relation, init, table, cx)?;

        let model = cx.table(outer).model;
        let Some((association, name)) = self.registrar.resolve_association(model, *relation)?
        else {
            return Err(Error::invalid_statement(format!(
                "{relation:?} is not an association of table `{}`",
                cx.table(outer).name
            )));
        };

        // Registered before entering the subquery so the columns belong to
        // the enclosing scope.
        let mut joined_columns = Vec::with_capacity(association.joined_key.len());
        for member in &association.joined_key {
            joined_columns.push(self.key_column(outer, *relation, *member, cx)?);
        }

        let (scope, res) = cx.in_scope(|cx| -> Result<()> {
            let table = self.registrar.register_table(association.target, Some(name), None, cx)?;
            let Some(inner) = table else {
                return Err(Error::invalid_schema(format!(
                    "association {relation:?} has no target table"
                )));
            };

            let mut operands = Vec::with_capacity(joined_columns.len());
            for (member, joined) in association.foreign_key.iter().zip(&joined_columns) {
                let column = self.key_column(inner, *relation, *member, cx)?;
                operands.push(Expr::eq(column, *joined));
            }

            self.registrar.register_where(Expr::and_from_vec(operands), cx);

            if let Some(filter) = &expr.filter {
                let filter = self.lower_expr(filter, inner, cx)?;
                self.registrar.register_where(filter, cx);
            }

            Ok(())
        });

        res.map_err(|err| err.context(format!("lowering relation filter {relation:?}")))?;

        Ok(Expr::Exists(scope))
    }

    fn key_column(
        &self,
        table: TableId,
        relation: FieldId,
        member: FieldId,
        cx: &mut BuilderContext,
    ) -> Result<ColumnId> {
        match self.registrar.register_column(table, member, cx)? {
            Some(column) => Ok(column),
            None => Err(Error::invalid_schema(format!(
                "key member {member:?} of association {relation:?} is not a mapped column"
            ))),
        }
    }
}
