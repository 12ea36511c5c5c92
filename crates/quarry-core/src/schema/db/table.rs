use super::{Column, ColumnId};

use std::fmt;

/// A table derived from one mapped model.
#[derive(Debug, Clone)]
pub struct Table {
    pub id: TableId,
    pub name: String,
    pub columns: Vec<Column>,

    /// Key columns in declaration order. Composite keys keep their order so
    /// foreign keys can be matched up position by position.
    pub primary_key: Vec<ColumnId>,
}

#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct TableId(pub usize);

impl Table {
    pub(crate) fn new(id: TableId, name: String) -> Table {
        Table {
            id,
            name,
            columns: Vec::new(),
            primary_key: Vec::new(),
        }
    }

    /// # Panics
    ///
    /// Panics if `id` belongs to another table.
    pub fn column(&self, id: impl Into<ColumnId>) -> &Column {
        let id = id.into();
        assert_eq!(id.table, self.id, "column {id:?} is not on table `{}`", self.name);
        &self.columns[id.index]
    }

    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn primary_key_columns(&self) -> impl ExactSizeIterator<Item = &Column> + '_ {
        self.primary_key.iter().map(|&id| self.column(id))
    }
}

impl fmt::Debug for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TableId({})", self.0)
    }
}
