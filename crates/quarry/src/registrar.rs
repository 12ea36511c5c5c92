use crate::query::{
    BuilderContext, ColumnExpression, ColumnId, Expr, ExternalParameter, Join,
    MetaTableExpression, ParameterId, TableExpression, TableId,
};
use quarry_core::{
    schema::{
        app::{FieldId, ModelId},
        Association, DataMapper,
    },
    stmt, Error, Result,
};

use indexmap::IndexMap;
use std::sync::Arc;

/// Registers tables, columns, joins and parameters into a
/// [`BuilderContext`], reusing existing registrations where possible.
///
/// The registrar itself is stateless apart from the data mapper it consults;
/// all registrations live in the context passed to each call.
#[derive(Debug, Clone)]
pub struct Registrar {
    mapper: Arc<dyn DataMapper>,
}

impl Registrar {
    pub fn new(mapper: Arc<dyn DataMapper>) -> Registrar {
        Registrar { mapper }
    }

    pub fn mapper(&self) -> &dyn DataMapper {
        &*self.mapper
    }

    /// Finds the table registered under `name` in the current scope. Returns
    /// `None` when there is no such table or the name is ambiguous.
    pub fn get_registered_table(&self, name: &str, cx: &BuilderContext) -> Option<TableId> {
        let mut matches = cx
            .current()
            .tables
            .iter()
            .copied()
            .filter(|id| cx.table(*id).name == name);

        match (matches.next(), matches.next()) {
            (Some(id), None) => Some(id),
            _ => None,
        }
    }

    /// Returns the table registered under `name`, registering it in the
    /// current scope first if needed. `join` only applies to a newly
    /// created table.
    pub fn register_table(
        &self,
        model: ModelId,
        name: Option<&str>,
        join: Option<Join>,
        cx: &mut BuilderContext,
    ) -> Result<Option<TableId>> {
        let Some(name) = name else {
            return Ok(None);
        };

        if let Some(join) = &join {
            check_reachable(join.parent, cx)?;
        }

        if let Some(id) = self.get_registered_table(name, cx) {
            log::trace!("table `{name}` already registered as {id:?}");
            return Ok(Some(id));
        }

        let id = cx.insert_table(TableExpression {
            model,
            name: name.to_string(),
            join,
        });
        cx.current_mut().tables.push(id);

        log::debug!(
            "registered table `{name}` as {id:?} in {:?}",
            cx.current_scope()
        );

        Ok(Some(id))
    }

    /// Registers the table backing `model` as an unjoined table.
    pub fn register_model_table(
        &self,
        model: ModelId,
        cx: &mut BuilderContext,
    ) -> Result<Option<TableId>> {
        let name = self.mapper.table_name(model);
        self.register_table(model, name, None, cx)
    }

    /// Finds a registered column of `table` named `name`, searching from the
    /// current scope outward.
    pub fn get_registered_column(
        &self,
        table: TableId,
        name: &str,
        cx: &BuilderContext,
    ) -> Option<ColumnId> {
        cx.enumerate_columns().find(|id| {
            let column = cx.column(*id);
            column.table == table && column.name == name
        })
    }

    /// Returns the column of `table` named `name`, registering it in the
    /// current scope first if needed.
    pub fn register_named_column(
        &self,
        table: TableId,
        name: &str,
        ty: stmt::Type,
        cx: &mut BuilderContext,
    ) -> Result<ColumnId> {
        check_reachable(table, cx)?;

        if let Some(id) = self.get_registered_column(table, name, cx) {
            log::trace!("column `{name}` of {table:?} already registered as {id:?}");
            return Ok(id);
        }

        let id = cx.insert_column(ColumnExpression::new(table, name, ty));
        cx.current_mut().columns.push(id);

        log::debug!("registered column `{name}` of {table:?} as {id:?}");

        Ok(id)
    }

    /// Registers the column `field` maps to on `table`. Returns `None` when
    /// the field is not a mapped data member of the table's model.
    pub fn register_column(
        &self,
        table: TableId,
        field: FieldId,
        cx: &mut BuilderContext,
    ) -> Result<Option<ColumnId>> {
        check_reachable(table, cx)?;

        let Some(member) = self.mapper.data_member(cx.table(table).model, field) else {
            return Ok(None);
        };

        self.register_named_column(table, &member.name, member.ty, cx)
            .map(Some)
    }

    /// Builds the column `field` maps to on `table` without registering it.
    ///
    /// `table` only has to exist in the context; it need not be registered
    /// in a scope yet.
    pub fn create_column(
        &self,
        table: TableId,
        field: FieldId,
        cx: &BuilderContext,
    ) -> Result<Option<ColumnExpression>> {
        let Some(model) = cx.tables().get(table).map(|table| table.model) else {
            return Err(Error::invalid_statement(format!(
                "{table:?} does not exist in this context"
            )));
        };

        Ok(self
            .mapper
            .data_member(model, field)
            .map(|member| ColumnExpression::new(table, member.name, member.ty)))
    }

    /// Looks up the association `field` navigates from `model` and checks it
    /// can be joined: both key lists pair up, are non-empty and map to
    /// columns, and the target has a table. Returns the association with the
    /// target's table name, or `None` when `field` is not an association.
    pub(crate) fn resolve_association(
        &self,
        model: ModelId,
        field: FieldId,
    ) -> Result<Option<(Association, &str)>> {
        let Some(association) = self.mapper.association(model, field) else {
            return Ok(None);
        };

        if association.foreign_key.len() != association.joined_key.len() {
            return Err(Error::invalid_schema(format!(
                "association {field:?} has {} foreign key members and {} joined key members",
                association.foreign_key.len(),
                association.joined_key.len()
            )));
        }

        if association.foreign_key.is_empty() {
            return Err(Error::invalid_schema(format!(
                "association {field:?} has no key members"
            )));
        }

        let Some(name) = self.mapper.table_name(association.target) else {
            return Err(Error::invalid_schema(format!(
                "association {field:?} targets {:?}, which has no table",
                association.target
            )));
        };

        let keys = association
            .joined_key
            .iter()
            .map(|member| (model, *member))
            .chain(association.foreign_key.iter().map(|member| (association.target, *member)));

        for (owner, member) in keys {
            if self.mapper.data_member(owner, member).is_none() {
                return Err(unmapped_key_member(field, member));
            }
        }

        Ok(Some((association, name)))
    }

    /// Joins the table reached by navigating `field` from `joined_table`.
    ///
    /// Each key pair contributes `foreign = joined` to the join condition,
    /// AND-ed in key order. If the current scope already holds an equivalent
    /// join, that table is returned and nothing new is registered. Returns
    /// `None` when `field` is not an association.
    pub fn register_association(
        &self,
        joined_table: TableId,
        field: FieldId,
        cx: &mut BuilderContext,
    ) -> Result<Option<TableId>> {
        check_reachable(joined_table, cx)?;

        let model = cx.table(joined_table).model;
        let Some((association, name)) = self.resolve_association(model, field)? else {
            return Ok(None);
        };

        let mut joined_columns = Vec::with_capacity(association.joined_key.len());
        for member in &association.joined_key {
            let Some(column) = self.register_column(joined_table, *member, cx)? else {
                return Err(unmapped_key_member(field, *member));
            };
            joined_columns.push(column);
        }

        // The candidate table and its foreign key columns stay out of every
        // scope until it is known not to duplicate an existing join.
        let mark = cx.mark();
        let table = cx.insert_table(TableExpression::new(association.target, name));

        let mut foreign_columns = Vec::with_capacity(association.foreign_key.len());
        let mut operands = Vec::with_capacity(association.foreign_key.len());

        for (member, joined) in association.foreign_key.iter().zip(&joined_columns) {
            let column = match self.create_column(table, *member, cx) {
                Ok(Some(column)) => column,
                Ok(None) => {
                    cx.rollback(mark);
                    return Err(unmapped_key_member(field, *member));
                }
                Err(err) => {
                    cx.rollback(mark);
                    return Err(err);
                }
            };

            let column = cx.insert_column(column);
            foreign_columns.push(column);
            operands.push(Expr::eq(column, *joined));
        }

        cx.table_mut(table).join = Some(Join {
            parent: joined_table,
            kind: association.kind,
            condition: Expr::and_from_vec(operands),
        });

        if let Some(existing) = cx.find_equivalent_table(table) {
            cx.rollback(mark);
            log::trace!("association {field:?} already joined as {existing:?}");
            return Ok(Some(existing));
        }

        let scope = cx.current_mut();
        scope.tables.push(table);
        scope.columns.extend(foreign_columns);

        log::debug!(
            "registered association {field:?}: {} {:?} from {joined_table:?} as {table:?}",
            cx.table(table).name,
            association.kind,
        );

        Ok(Some(table))
    }

    /// Adds an external parameter. Every call creates a new parameter.
    pub fn register_parameter(&self, expr: impl Into<Expr>, cx: &mut BuilderContext) -> ParameterId {
        let id = cx.insert_parameter(ExternalParameter { expr: expr.into() });
        log::debug!("registered parameter {id:?}");
        id
    }

    /// Adds a filter predicate to the current scope.
    pub fn register_where(&self, predicate: impl Into<Expr>, cx: &mut BuilderContext) {
        cx.current_mut().predicates.push(predicate.into());
    }

    pub fn get_registered_meta_table<'a>(
        &self,
        model: ModelId,
        cx: &'a BuilderContext,
    ) -> Option<&'a MetaTableExpression> {
        cx.meta_table(model)
    }

    /// Registers the meta-table for `model`. When one is already registered
    /// it is returned unchanged and `aliases` is discarded.
    pub fn register_meta_table<'a>(
        &self,
        model: ModelId,
        aliases: IndexMap<FieldId, TableId>,
        cx: &'a mut BuilderContext,
    ) -> &'a MetaTableExpression {
        if cx.meta_table(model).is_none() {
            log::debug!("registered meta-table for {model:?} over {} members", aliases.len());
        }

        cx.insert_meta_table(MetaTableExpression { model, aliases })
    }
}

fn check_reachable(table: TableId, cx: &BuilderContext) -> Result<()> {
    if cx.is_reachable(table) {
        Ok(())
    } else {
        Err(Error::invalid_statement(format!(
            "{table:?} is not reachable from {:?}",
            cx.current_scope()
        )))
    }
}

fn unmapped_key_member(association: FieldId, member: FieldId) -> Error {
    Error::invalid_schema(format!(
        "key member {member:?} of association {association:?} is not a mapped column"
    ))
}
