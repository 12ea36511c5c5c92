use super::TableId;
use crate::stmt;

use std::fmt;

/// A mapped column.
///
/// Columns only exist for primitive fields. Relations are expressed through
/// the foreign key columns of the `BelongsTo` side.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub id: ColumnId,

    /// Storage name; the field's storage name when one is set, else its
    /// application name.
    pub name: String,

    pub ty: stmt::Type,

    pub nullable: bool,

    /// Set when the owning field is part of the model's primary key.
    pub primary_key: bool,
}

/// Position of a column within its table.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
pub struct ColumnId {
    pub table: TableId,
    pub index: usize,
}

impl From<&Column> for ColumnId {
    fn from(column: &Column) -> ColumnId {
        column.id
    }
}

impl fmt::Debug for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ColumnId({}.{})", self.table.0, self.index)
    }
}
