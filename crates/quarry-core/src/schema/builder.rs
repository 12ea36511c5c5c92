use super::{app, db, mapping, Mapping, Schema};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    /// If set, prefix all table names with this string
    table_name_prefix: Option<String>,
}

/// Used to track state during the build process
struct BuildSchema<'a> {
    /// Build options
    builder: &'a Builder,

    /// Maps table names to identifiers, used to reject two models mapping to
    /// the same table.
    table_lookup: IndexMap<String, db::TableId>,

    /// Tables as they are built
    tables: Vec<db::Table>,

    /// App-level to db-level schema mapping
    mapping: Mapping,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    pub fn build(&self, app: app::Schema) -> Result<Schema> {
        let mut builder = BuildSchema {
            builder: self,
            table_lookup: IndexMap::new(),
            tables: vec![],
            mapping: Mapping::default(),
        };

        for model in app.models() {
            builder.build_table_for_model(model)?;
        }

        log::debug!(
            "built schema; models={} tables={}",
            app.models.len(),
            builder.tables.len()
        );

        Ok(Schema {
            app,
            db: Arc::new(db::Schema {
                tables: builder.tables,
            }),
            mapping: builder.mapping,
        })
    }
}

impl BuildSchema<'_> {
    fn build_table_for_model(&mut self, model: &app::Model) -> Result<()> {
        let table_name = self.table_name(model);
        let table_id = db::TableId(self.tables.len());

        if self.table_lookup.insert(table_name.clone(), table_id).is_some() {
            return Err(Error::invalid_schema(format!(
                "more than one model maps to table `{table_name}`"
            )));
        }

        let mut table = db::Table::new(table_id, table_name);
        let mut fields = Vec::with_capacity(model.fields.len());

        for field in &model.fields {
            let app::FieldTy::Primitive(primitive) = &field.ty else {
                fields.push(None);
                continue;
            };

            let column_id = db::ColumnId {
                table: table_id,
                index: table.columns.len(),
            };

            let name = field.name.storage_name();
            if table.column_by_name(name).is_some() {
                return Err(Error::invalid_schema(format!(
                    "column `{name}` is mapped more than once on table `{}`",
                    table.name
                )));
            }

            table.columns.push(db::Column {
                id: column_id,
                name: name.to_string(),
                ty: primitive.ty.clone(),
                nullable: field.nullable,
                primary_key: field.primary_key,
            });

            fields.push(Some(column_id));
        }

        for pk_field in &model.primary_key.fields {
            match fields.get(pk_field.index).copied().flatten() {
                Some(column) if pk_field.model == model.id => table.primary_key.push(column),
                _ => {
                    return Err(Error::invalid_schema(format!(
                        "primary key of `{}` references {:?}, which is not a primitive field",
                        model.name.upper_camel_case(),
                        pk_field
                    )))
                }
            }
        }

        self.mapping.models.insert(
            model.id,
            mapping::Model {
                id: model.id,
                table: table_id,
                fields,
            },
        );

        self.tables.push(table);
        Ok(())
    }

    fn table_name(&self, model: &app::Model) -> String {
        let base = match &model.table_name {
            Some(table_name) => table_name.clone(),
            None => model.name.table_name(),
        };

        match &self.builder.table_name_prefix {
            Some(prefix) => format!("{prefix}{base}"),
            None => base,
        }
    }
}
