#![allow(dead_code)]

use quarry_core::{err, stmt::Value, Result};
use quarry_schema_loader::{async_trait, Catalog, Row};

use std::sync::Mutex;

/// Answers queries with canned rows, picked by a fragment of the SQL text.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    responses: Vec<(&'static str, Vec<Row>)>,
    pub queries: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> FakeCatalog {
        FakeCatalog::default()
    }

    pub fn respond(mut self, fragment: &'static str, rows: Vec<Row>) -> FakeCatalog {
        self.responses.push((fragment, rows));
        self
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn query(&self, sql: &str) -> Result<Vec<Row>> {
        self.queries.lock().unwrap().push(sql.to_string());

        self.responses
            .iter()
            .find(|(fragment, _)| sql.contains(fragment))
            .map(|(_, rows)| rows.clone())
            .ok_or_else(|| err!("unexpected catalog query: {sql}"))
    }
}

pub fn row<const N: usize>(values: [Value; N]) -> Row {
    Row::from(values)
}

pub fn s(value: &str) -> Value {
    Value::from(value)
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
