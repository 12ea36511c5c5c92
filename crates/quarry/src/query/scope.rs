use super::{ColumnId, Expr, TableId};

/// Registrations made at one query level.
#[derive(Debug, Default)]
pub struct Scope {
    /// Enclosing scope; `None` for the root
    pub parent: Option<ScopeId>,

    /// Tables registered in this scope, in registration order
    pub tables: Vec<TableId>,

    /// Columns registered in this scope, in registration order
    pub columns: Vec<ColumnId>,

    /// Filter predicates, implicitly AND-ed
    pub predicates: Vec<Expr>,
}

index_vec::define_index_type! {
    pub struct ScopeId = u32;
}

impl Scope {
    pub(crate) fn child_of(parent: ScopeId) -> Scope {
        Scope {
            parent: Some(parent),
            ..Scope::default()
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
