mod builder;
pub use builder::Builder;

mod compiler;
pub use compiler::Compiler;

mod lower;

pub mod query;
pub use query::BuilderContext;

mod registrar;
pub use registrar::Registrar;

pub use quarry_core::{schema, stmt, Error, Result, Schema};
