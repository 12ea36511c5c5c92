use crate::{
    vendor::{Ingres, SqlCe},
    Catalog, ColumnDescriptor, ConstraintDescriptor,
};
use quarry_core::{Error, Result};

use async_trait::async_trait;
use std::fmt::Debug;
use url::Url;

/// Reads a vendor's catalog into descriptors.
#[async_trait]
pub trait SchemaLoader: Debug + Send + Sync {
    /// Short vendor name, matching the URL scheme the loader is selected by
    fn vendor(&self) -> &'static str;

    /// Columns of every user table and view.
    async fn read_columns(
        &self,
        catalog: &dyn Catalog,
        database: &str,
    ) -> Result<Vec<ColumnDescriptor>>;

    /// Primary and foreign key columns.
    async fn read_constraints(
        &self,
        catalog: &dyn Catalog,
        database: &str,
    ) -> Result<Vec<ConstraintDescriptor>>;
}

/// Picks the loader for a connection URL by its scheme.
pub fn loader_for_url(url: &str) -> Result<Box<dyn SchemaLoader>> {
    let url = Url::parse(url)?;

    match url.scheme() {
        "ingres" => Ok(Box::new(Ingres)),
        "sqlce" => Ok(Box::new(SqlCe)),
        scheme => Err(Error::unsupported_feature(format!(
            "no schema loader for `{scheme}`; url={url}"
        ))),
    }
}
