use crate::{Catalog, ColumnDescriptor, ConstraintDescriptor, SchemaLoader};
use quarry_core::Result;

use indexmap::IndexSet;

/// Everything a loader read from one database.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    pub columns: Vec<ColumnDescriptor>,
    pub constraints: Vec<ConstraintDescriptor>,
}

impl Metadata {
    pub async fn load(
        loader: &dyn SchemaLoader,
        catalog: &dyn Catalog,
        database: &str,
    ) -> Result<Metadata> {
        let columns = loader
            .read_columns(catalog, database)
            .await
            .map_err(|err| err.context(format!("reading {} columns", loader.vendor())))?;

        let constraints = loader
            .read_constraints(catalog, database)
            .await
            .map_err(|err| err.context(format!("reading {} constraints", loader.vendor())))?;

        log::debug!(
            "loaded {} metadata for `{database}`; columns={} constraints={}",
            loader.vendor(),
            columns.len(),
            constraints.len()
        );

        Ok(Metadata {
            columns,
            constraints,
        })
    }

    /// Table names in the order the catalog first lists them.
    pub fn tables(&self) -> IndexSet<&str> {
        self.columns
            .iter()
            .map(|column| column.table.as_str())
            .collect()
    }

    pub fn columns_of<'a>(
        &'a self,
        table: &'a str,
    ) -> impl Iterator<Item = &'a ColumnDescriptor> + 'a {
        self.columns
            .iter()
            .filter(move |column| column.table == table)
    }

    /// Primary key column names of `table`, in catalog order.
    pub fn primary_key(&self, table: &str) -> Vec<&str> {
        self.constraints
            .iter()
            .filter(|constraint| constraint.table == table && constraint.is_primary_key())
            .map(|constraint| constraint.column.as_str())
            .collect()
    }

    /// Foreign key columns of `table`.
    pub fn foreign_keys(&self, table: &str) -> Vec<&ConstraintDescriptor> {
        self.constraints
            .iter()
            .filter(|constraint| constraint.table == table && constraint.is_foreign_key())
            .collect()
    }
}
