use super::Lower;
use crate::query::{BuilderContext, Expr, TableId};
use quarry_core::{
    schema::app::FieldId,
    stmt::Path,
    Error, Result,
};

impl Lower<'_> {
    /// Resolves `path` from `table`. Every step but the last must be an
    /// association and is joined. The last step yields a column, or the
    /// related table when it is an association.
    ///
    /// When a meta-table is registered for the model being resolved, an
    /// empty path yields the meta-table and an aliased member is read from
    /// the table it is aliased to.
    pub(super) fn lower_path(
        &self,
        path: &Path,
        table: TableId,
        cx: &mut BuilderContext,
    ) -> Result<Expr> {
        let Some((last, init)) = path.fields.split_last() else {
            let model = cx.table(table).model;
            return Ok(match self.registrar.get_registered_meta_table(model, cx) {
                Some(_) => Expr::MetaTable(model),
                None => Expr::Table(table),
            });
        };

        let table = self.navigate(path, init, table, cx)?;

        let source = self
            .registrar
            .get_registered_meta_table(cx.table(table).model, cx)
            .and_then(|meta| meta.table_for(*last))
            .unwrap_or(table);

        if let Some(column) = self.registrar.register_column(source, *last, cx)? {
            return Ok(Expr::Column(column));
        }

        match self.registrar.register_association(table, *last, cx)? {
            Some(related) => Ok(Expr::Table(related)),
            None => Err(not_a_member(*last, table, cx)),
        }
    }

    /// Joins each association in `steps`, starting at `table`, and returns
    /// the table the last one reaches.
    pub(super) fn navigate(
        &self,
        path: &Path,
        steps: &[FieldId],
        mut table: TableId,
        cx: &mut BuilderContext,
    ) -> Result<TableId> {
        if path.root != cx.table(table).model {
            return Err(Error::invalid_statement(format!(
                "path rooted at {:?} used on table `{}`",
                path.root,
                cx.table(table).name
            )));
        }

        for step in steps {
            table = match self.registrar.register_association(table, *step, cx)? {
                Some(related) => related,
                None => {
                    return Err(Error::invalid_statement(format!(
                        "{step:?} is not an association of table `{}`",
                        cx.table(table).name
                    )))
                }
            };
        }

        Ok(table)
    }
}

fn not_a_member(field: FieldId, table: TableId, cx: &BuilderContext) -> Error {
    Error::invalid_statement(format!(
        "{field:?} is neither a column nor an association of table `{}`",
        cx.table(table).name
    ))
}
