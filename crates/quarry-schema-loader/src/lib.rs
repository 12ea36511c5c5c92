//! Reads table, column and key metadata out of a database's system catalog.
//!
//! Each supported vendor has a [`SchemaLoader`] that knows which catalog
//! views to query and how to interpret their rows. The catalog itself is
//! reached through the [`Catalog`] trait, so loaders are independent of how
//! the connection is made.

mod catalog;
pub use catalog::{Catalog, Row};

mod descriptor;
pub use descriptor::{ColumnDescriptor, ConstraintDescriptor};

mod loader;
pub use loader::{loader_for_url, SchemaLoader};

mod metadata;
pub use metadata::Metadata;

pub mod vendor;

pub use async_trait::async_trait;
