//! The table-level query model.
//!
//! A compiled query is a tree of [`Scope`]s. Each scope lists the tables and
//! columns registered at that query level along with its filter predicates.
//! Nodes live in arenas owned by [`BuilderContext`] and are referenced by
//! typed ids, so two references denote the same node exactly when their ids
//! are equal.

mod column;
pub use column::{ColumnExpression, ColumnId};

mod context;
pub use context::{BuilderContext, ScopeGuard};

mod expr;
pub use expr::{Expr, ExprAnd, ExprBinaryOp, ExprIsNull, ExprOr};

mod meta_table;
pub use meta_table::MetaTableExpression;

mod parameter;
pub use parameter::{ExternalParameter, ParameterId};

mod scope;
pub use scope::{Scope, ScopeId};

mod table;
pub use table::{Join, TableExpression, TableId};
