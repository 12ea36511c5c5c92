use super::TableId;
use quarry_core::stmt;

/// A column of a registered table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnExpression {
    /// Table the column belongs to
    pub table: TableId,

    /// Column name in the database
    pub name: String,

    /// Type of the values held by the column
    pub ty: stmt::Type,
}

index_vec::define_index_type! {
    pub struct ColumnId = u32;
}

impl ColumnExpression {
    pub fn new(table: TableId, name: impl Into<String>, ty: stmt::Type) -> ColumnExpression {
        ColumnExpression {
            table,
            name: name.into(),
            ty,
        }
    }
}
