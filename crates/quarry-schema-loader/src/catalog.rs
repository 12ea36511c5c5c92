use quarry_core::{err, stmt::Value, Result};

use async_trait::async_trait;
use std::fmt::Debug;

/// Runs read-only queries against a database's system catalog.
#[async_trait]
pub trait Catalog: Debug + Send + Sync {
    /// Executes `sql` and returns every row of the result.
    async fn query(&self, sql: &str) -> Result<Vec<Row>>;
}

/// One result row, as positional values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Row {
        Row { values }
    }

    pub fn get(&self, index: usize) -> Result<&Value> {
        self.values.get(index).ok_or_else(|| {
            err!(
                "catalog row has {} columns; column {index} requested",
                self.values.len()
            )
        })
    }

    /// The value at `index` as a trimmed string. `Null` reads as empty.
    pub fn get_str(&self, index: usize) -> Result<String> {
        Ok(self.get_opt_str(index)?.unwrap_or_default().trim().to_string())
    }

    /// The value at `index` as a string, or `None` when it is `Null`.
    /// Numbers are formatted; the text is not trimmed.
    pub fn get_opt_str(&self, index: usize) -> Result<Option<String>> {
        Ok(match self.get(index)? {
            Value::Null => None,
            Value::String(value) => Some(value.clone()),
            Value::Bool(value) => Some(value.to_string()),
            Value::I32(value) => Some(value.to_string()),
            Value::I64(value) => Some(value.to_string()),
            Value::U64(value) => Some(value.to_string()),
            Value::F64(value) => Some(value.to_string()),
            Value::List(_) => {
                return Err(err!("catalog column {index} holds a list, expected a string"))
            }
        })
    }

    /// The value at `index` as an integer, or `None` when it is `Null`.
    /// Strings holding a number are parsed.
    pub fn get_opt_i64(&self, index: usize) -> Result<Option<i64>> {
        let value = self.get(index)?;

        if value.is_null() {
            return Ok(None);
        }

        if let Some(value) = value.as_i64() {
            return Ok(Some(value));
        }

        match value {
            Value::String(value) if value.trim().is_empty() => Ok(None),
            Value::String(value) => Ok(Some(value.trim().parse()?)),
            value => Err(err!(
                "catalog column {index} holds {value:?}, expected an integer"
            )),
        }
    }
}

impl<const N: usize> From<[Value; N]> for Row {
    fn from(values: [Value; N]) -> Row {
        Row::new(values.into())
    }
}
