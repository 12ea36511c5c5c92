use super::Expr;
use quarry_core::schema::{app::ModelId, JoinKind};

/// A reference to one table, possibly joined from another registered table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableExpression {
    /// Model stored in the table
    pub model: ModelId,

    /// Table name in the database
    pub name: String,

    /// How the table is reached from its parent. `None` for a root table.
    pub join: Option<Join>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    /// Table the join hangs off
    pub parent: TableId,

    pub kind: JoinKind,

    /// Join predicate over columns of `parent` and the joined table
    pub condition: Expr,
}

index_vec::define_index_type! {
    pub struct TableId = u32;
}

impl TableExpression {
    pub fn new(model: ModelId, name: impl Into<String>) -> TableExpression {
        TableExpression {
            model,
            name: name.into(),
            join: None,
        }
    }

    pub fn join_kind(&self) -> JoinKind {
        self.join.as_ref().map(|join| join.kind).unwrap_or_default()
    }

    pub fn parent(&self) -> Option<TableId> {
        self.join.as_ref().map(|join| join.parent)
    }

    pub fn condition(&self) -> Option<&Expr> {
        self.join.as_ref().map(|join| &join.condition)
    }
}
