//! Model-level statements and the value/type vocabulary shared with the
//! query model.
//!
//! Statements here reference application models and fields. They are lowered
//! into the table-level query model by the `quarry` crate.

mod expr;
pub use expr::Expr;

mod expr_and;
pub use expr_and::ExprAnd;

mod expr_any;
pub use expr_any::ExprAny;

mod expr_arg;
pub use expr_arg::ExprArg;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_field;
pub use expr_field::ExprField;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_or;
pub use expr_or::ExprOr;

mod op_binary;
pub use op_binary::BinaryOp;

mod path;
pub use path::Path;

mod query;
pub use query::Query;

mod ty;
pub use ty::Type;

mod value;
pub use value::Value;
