use super::{
    ColumnExpression, ColumnId, Expr, ExternalParameter, MetaTableExpression, ParameterId, Scope,
    ScopeId, TableExpression, TableId,
};
use quarry_core::schema::app::ModelId;

use index_vec::IndexVec;
use indexmap::IndexMap;
use std::ops;

/// All state built while compiling one query.
///
/// Tables, columns and parameters are stored in arenas; scopes only hold
/// ids. The scope tree is kept after a scope is left so the finished
/// context describes every query level.
#[derive(Debug)]
pub struct BuilderContext {
    tables: IndexVec<TableId, TableExpression>,
    columns: IndexVec<ColumnId, ColumnExpression>,

    /// Query-wide, in registration order
    parameters: IndexVec<ParameterId, ExternalParameter>,

    /// First registration per model wins
    meta_tables: IndexMap<ModelId, MetaTableExpression>,

    scopes: IndexVec<ScopeId, Scope>,

    /// Scope that receives new registrations
    current: ScopeId,
}

/// Keeps a child scope current until dropped.
///
/// Dereferences to the [`BuilderContext`], so registrations made through
/// the guard land in the child scope. Dropping the guard (including during
/// an early `?` return or unwinding) makes the parent current again.
#[derive(Debug)]
pub struct ScopeGuard<'a> {
    cx: &'a mut BuilderContext,
    scope: ScopeId,
}

/// Arena lengths at a point in time, used to discard speculative nodes.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Mark {
    tables: usize,
    columns: usize,
}

impl BuilderContext {
    pub fn new() -> BuilderContext {
        let mut scopes = IndexVec::new();
        let root = scopes.push(Scope::default());

        BuilderContext {
            tables: IndexVec::new(),
            columns: IndexVec::new(),
            parameters: IndexVec::new(),
            meta_tables: IndexMap::new(),
            scopes,
            current: root,
        }
    }

    /// Enters a new child of the current scope. The scope is left when the
    /// returned guard is dropped.
    pub fn scope(&mut self) -> ScopeGuard<'_> {
        let scope = self.push();
        ScopeGuard { cx: self, scope }
    }

    /// Runs `f` inside a new child scope, returning the scope's id along
    /// with `f`'s result.
    pub fn in_scope<R>(&mut self, f: impl FnOnce(&mut BuilderContext) -> R) -> (ScopeId, R) {
        let mut guard = self.scope();
        let scope = guard.id();
        let ret = f(&mut *guard);
        (scope, ret)
    }

    pub(crate) fn push(&mut self) -> ScopeId {
        let scope = self.scopes.push(Scope::child_of(self.current));
        self.current = scope;
        scope
    }

    pub(crate) fn pop(&mut self) {
        match self.scopes[self.current].parent {
            Some(parent) => self.current = parent,
            None => panic!("popped the root scope"),
        }
    }

    pub fn current_scope(&self) -> ScopeId {
        self.current
    }

    pub fn root_scope(&self) -> ScopeId {
        ScopeId::from_usize(0)
    }

    pub fn scope_of(&self, id: ScopeId) -> &Scope {
        &self.scopes[id]
    }

    pub fn parent(&self, id: ScopeId) -> Option<ScopeId> {
        self.scopes[id].parent
    }

    pub fn scopes(&self) -> impl ExactSizeIterator<Item = (ScopeId, &Scope)> + '_ {
        self.scopes.iter_enumerated()
    }

    /// The current scope followed by its ancestors, ending at the root.
    pub fn scope_chain(&self) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(self.current), move |id| self.scopes[*id].parent)
    }

    /// Tables visible from the current scope: the current scope's tables in
    /// registration order, then its parent's, up to the root.
    pub fn enumerate_tables(&self) -> impl Iterator<Item = TableId> + '_ {
        self.scope_chain()
            .flat_map(move |scope| self.scopes[scope].tables.iter().copied())
    }

    /// Columns visible from the current scope, in the same order as
    /// [`enumerate_tables`](Self::enumerate_tables).
    pub fn enumerate_columns(&self) -> impl Iterator<Item = ColumnId> + '_ {
        self.scope_chain()
            .flat_map(move |scope| self.scopes[scope].columns.iter().copied())
    }

    pub fn enumerate_parameters(&self) -> impl Iterator<Item = ParameterId> + '_ {
        self.parameters.indices()
    }

    pub fn is_reachable(&self, table: TableId) -> bool {
        self.enumerate_tables().any(|id| id == table)
    }

    pub fn table(&self, id: TableId) -> &TableExpression {
        &self.tables[id]
    }

    pub fn column(&self, id: ColumnId) -> &ColumnExpression {
        &self.columns[id]
    }

    pub fn parameter(&self, id: ParameterId) -> &ExternalParameter {
        &self.parameters[id]
    }

    pub fn tables(&self) -> &IndexVec<TableId, TableExpression> {
        &self.tables
    }

    pub fn columns(&self) -> &IndexVec<ColumnId, ColumnExpression> {
        &self.columns
    }

    pub fn parameters(&self) -> &IndexVec<ParameterId, ExternalParameter> {
        &self.parameters
    }

    pub fn where_predicates(&self, scope: ScopeId) -> &[Expr] {
        &self.scopes[scope].predicates
    }

    pub fn meta_table(&self, model: ModelId) -> Option<&MetaTableExpression> {
        self.meta_tables.get(&model)
    }

    pub(crate) fn current(&self) -> &Scope {
        &self.scopes[self.current]
    }

    pub(crate) fn current_mut(&mut self) -> &mut Scope {
        &mut self.scopes[self.current]
    }

    /// Adds a table to the arena without registering it in any scope.
    pub(crate) fn insert_table(&mut self, table: TableExpression) -> TableId {
        self.tables.push(table)
    }

    /// Adds a column to the arena without registering it in any scope.
    pub(crate) fn insert_column(&mut self, column: ColumnExpression) -> ColumnId {
        self.columns.push(column)
    }

    pub(crate) fn table_mut(&mut self, id: TableId) -> &mut TableExpression {
        &mut self.tables[id]
    }

    pub(crate) fn insert_parameter(&mut self, parameter: ExternalParameter) -> ParameterId {
        self.parameters.push(parameter)
    }

    /// Stores `meta_table` unless one is already registered for its model.
    /// Returns the registered entry either way.
    pub(crate) fn insert_meta_table(
        &mut self,
        meta_table: MetaTableExpression,
    ) -> &MetaTableExpression {
        self.meta_tables
            .entry(meta_table.model)
            .or_insert(meta_table)
    }

    pub(crate) fn mark(&self) -> Mark {
        Mark {
            tables: self.tables.len(),
            columns: self.columns.len(),
        }
    }

    /// Drops every table and column added to the arenas since `mark`.
    ///
    /// Only valid while none of them has been registered in a scope.
    pub(crate) fn rollback(&mut self, mark: Mark) {
        debug_assert!(self
            .scopes
            .iter()
            .flat_map(|scope| &scope.tables)
            .all(|id| id.index() < mark.tables));
        debug_assert!(self
            .scopes
            .iter()
            .flat_map(|scope| &scope.columns)
            .all(|id| id.index() < mark.columns));

        self.tables.truncate(mark.tables);
        self.columns.truncate(mark.columns);
    }

    /// Finds a table of the current scope structurally equal to `candidate`:
    /// same model, name, parent and join kind, with an equivalent join
    /// condition.
    pub(crate) fn find_equivalent_table(&self, candidate: TableId) -> Option<TableId> {
        let rhs = &self.tables[candidate];

        self.current().tables.iter().copied().find(|&id| {
            let lhs = &self.tables[id];

            id != candidate
                && lhs.model == rhs.model
                && lhs.name == rhs.name
                && lhs.parent() == rhs.parent()
                && lhs.join_kind() == rhs.join_kind()
                && match (lhs.condition(), rhs.condition()) {
                    (Some(a), Some(b)) => self.equivalent(a, id, b, candidate),
                    (None, None) => true,
                    _ => false,
                }
        })
    }

    /// Compares two join conditions. A column of `lhs_table` matches a
    /// column of `rhs_table` when both have the same name and type; any
    /// other column must be the very same column.
    fn equivalent(&self, lhs: &Expr, lhs_table: TableId, rhs: &Expr, rhs_table: TableId) -> bool {
        use Expr::*;

        match (lhs, rhs) {
            (Column(a), Column(b)) => {
                if a == b {
                    return true;
                }

                let a = &self.columns[*a];
                let b = &self.columns[*b];

                a.table == lhs_table && b.table == rhs_table && a.name == b.name && a.ty == b.ty
            }
            (BinaryOp(a), BinaryOp(b)) => {
                a.op == b.op
                    && self.equivalent(&a.lhs, lhs_table, &b.lhs, rhs_table)
                    && self.equivalent(&a.rhs, lhs_table, &b.rhs, rhs_table)
            }
            (And(a), And(b)) => self.all_equivalent(&a.operands, lhs_table, &b.operands, rhs_table),
            (Or(a), Or(b)) => self.all_equivalent(&a.operands, lhs_table, &b.operands, rhs_table),
            (Not(a), Not(b)) => self.equivalent(a, lhs_table, b, rhs_table),
            (IsNull(a), IsNull(b)) => {
                a.negate == b.negate && self.equivalent(&a.expr, lhs_table, &b.expr, rhs_table)
            }
            (a, b) => a == b,
        }
    }

    fn all_equivalent(
        &self,
        lhs: &[Expr],
        lhs_table: TableId,
        rhs: &[Expr],
        rhs_table: TableId,
    ) -> bool {
        lhs.len() == rhs.len()
            && lhs
                .iter()
                .zip(rhs)
                .all(|(a, b)| self.equivalent(a, lhs_table, b, rhs_table))
    }
}

impl Default for BuilderContext {
    fn default() -> Self {
        BuilderContext::new()
    }
}

impl ScopeGuard<'_> {
    /// The scope kept current by this guard
    pub fn id(&self) -> ScopeId {
        self.scope
    }
}

impl ops::Deref for ScopeGuard<'_> {
    type Target = BuilderContext;

    fn deref(&self) -> &BuilderContext {
        self.cx
    }
}

impl ops::DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut BuilderContext {
        self.cx
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        debug_assert_eq!(self.cx.current, self.scope, "scopes left out of order");
        self.cx.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_core::stmt;

    fn table(cx: &mut BuilderContext, name: &str) -> TableId {
        let id = cx.insert_table(TableExpression::new(ModelId(0), name));
        cx.current_mut().tables.push(id);
        id
    }

    #[test]
    fn new_context_has_current_root() {
        let cx = BuilderContext::new();
        assert_eq!(cx.current_scope(), cx.root_scope());
        assert!(cx.scope_of(cx.root_scope()).is_root());
    }

    #[test]
    fn push_and_pop_restore_parent() {
        let mut cx = BuilderContext::new();
        let root = cx.current_scope();

        let child = cx.push();
        assert_eq!(cx.current_scope(), child);
        assert_eq!(cx.parent(child), Some(root));

        cx.pop();
        assert_eq!(cx.current_scope(), root);
        // The scope tree is kept
        assert_eq!(cx.scopes().len(), 2);
    }

    #[test]
    fn guard_pops_on_panic() {
        let mut cx = BuilderContext::new();
        let root = cx.current_scope();

        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = cx.scope();
            panic!("boom");
        }));

        assert!(res.is_err());
        assert_eq!(cx.current_scope(), root);
    }

    #[test]
    fn rollback_discards_speculative_nodes() {
        let mut cx = BuilderContext::new();
        let kept = table(&mut cx, "kept");

        let mark = cx.mark();
        let dropped = cx.insert_table(TableExpression::new(ModelId(1), "dropped"));
        cx.insert_column(ColumnExpression::new(dropped, "id", stmt::Type::I64));
        cx.rollback(mark);

        assert_eq!(cx.tables().len(), 1);
        assert!(cx.columns().is_empty());
        assert_eq!(cx.table(kept).name, "kept");
    }

    #[test]
    fn meta_table_first_registration_wins() {
        let mut cx = BuilderContext::new();
        let a = table(&mut cx, "a");
        let b = table(&mut cx, "b");

        let first = MetaTableExpression {
            model: ModelId(3),
            aliases: IndexMap::from([(ModelId(3).field(0), a)]),
        };
        let second = MetaTableExpression {
            model: ModelId(3),
            aliases: IndexMap::from([(ModelId(3).field(0), b)]),
        };

        cx.insert_meta_table(first.clone());
        assert_eq!(cx.insert_meta_table(second), &first);
        assert_eq!(cx.meta_table(ModelId(3)), Some(&first));
    }
}
