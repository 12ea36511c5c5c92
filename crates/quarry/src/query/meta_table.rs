use super::TableId;
use quarry_core::schema::app::{FieldId, ModelId};

use indexmap::IndexMap;

/// Groups the tables a polymorphic model is spread over. Each member of the
/// model is read from the table it is aliased to.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaTableExpression {
    pub model: ModelId,

    pub aliases: IndexMap<FieldId, TableId>,
}

impl MetaTableExpression {
    pub fn table_for(&self, field: FieldId) -> Option<TableId> {
        self.aliases.get(&field).copied()
    }
}
