use crate::{
    lower::Lower,
    query::{BuilderContext, TableId},
    Builder, Registrar,
};
use quarry_core::{stmt, Result, Schema};

use std::sync::Arc;

/// Compiles model-level queries into the table-level query model.
///
/// A compiler is cheap to clone and can be shared across threads. Each
/// compile starts from a fresh [`BuilderContext`].
#[derive(Debug, Clone)]
pub struct Compiler {
    schema: Arc<Schema>,
    registrar: Registrar,
}

impl Compiler {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn new(schema: Arc<Schema>) -> Compiler {
        let registrar = Registrar::new(schema.clone());
        Compiler { schema, registrar }
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    pub fn registrar(&self) -> &Registrar {
        &self.registrar
    }

    /// Compiles `query`, binding `args` to its positional arguments.
    pub fn compile(&self, query: &stmt::Query, args: &[stmt::Value]) -> Result<BuilderContext> {
        let mut cx = BuilderContext::new();
        self.compile_into(query, args, &mut cx)?;
        Ok(cx)
    }

    /// Compiles `query` into an existing context and returns the table the
    /// query reads from. Tables and meta-tables already registered in the
    /// current scope are reused.
    pub fn compile_into(
        &self,
        query: &stmt::Query,
        args: &[stmt::Value],
        cx: &mut BuilderContext,
    ) -> Result<TableId> {
        let table = Lower::new(&self.registrar, args).lower_query(query, cx)?;

        log::debug!(
            "compiled query on {:?}; scopes={} tables={} columns={} parameters={}",
            query.source,
            cx.scopes().len(),
            cx.tables().len(),
            cx.columns().len(),
            cx.parameters().len(),
        );

        Ok(table)
    }
}
