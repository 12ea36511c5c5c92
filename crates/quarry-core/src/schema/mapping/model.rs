use crate::schema::{
    app::{FieldId, ModelId},
    db::{ColumnId, TableId},
};

/// Maps a single model onto its backing table.
#[derive(Debug, Clone)]
pub struct Model {
    /// The model this mapping applies to.
    pub id: ModelId,

    /// The database table that stores this model's data.
    pub table: TableId,

    /// Per-field column, indexed by field index within the model. Relation
    /// fields have no column.
    pub fields: Vec<Option<ColumnId>>,
}

impl Model {
    pub fn column(&self, field: FieldId) -> Option<ColumnId> {
        if field.model != self.id {
            return None;
        }

        self.fields.get(field.index).copied().flatten()
    }
}
