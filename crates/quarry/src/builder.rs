use crate::Compiler;
use quarry_core::{
    schema::{self, app},
    Result,
};

use std::sync::Arc;

#[derive(Debug, Default)]
pub struct Builder {
    /// Schema builder
    core: schema::Builder,
}

impl Builder {
    pub fn new() -> Builder {
        Builder::default()
    }

    /// Set the table name prefix for all tables
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.core.table_name_prefix(prefix);
        self
    }

    pub fn build(&self, app: app::Schema) -> Result<Compiler> {
        let schema = self.core.build(app)?;
        Ok(Compiler::new(Arc::new(schema)))
    }
}
