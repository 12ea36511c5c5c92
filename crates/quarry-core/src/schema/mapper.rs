use super::app::{FieldId, ModelId};
use crate::stmt;

use std::fmt;

/// Answers the metadata questions asked while a query is being compiled.
///
/// Implementations are shared by concurrent compiles, so they must be
/// immutable after construction or synchronize internally.
pub trait DataMapper: fmt::Debug + Send + Sync {
    /// Name of the table backing `model`, or `None` when the model is not
    /// mapped to a table.
    fn table_name(&self, model: ModelId) -> Option<&str>;

    /// The association navigated by `field` from an instance of `model`, or
    /// `None` when the field is not a relation.
    fn association(&self, model: ModelId, field: FieldId) -> Option<Association>;

    /// The column `field` maps to on `model`'s table, or `None` when the
    /// field is not a mapped data member of `model`.
    fn data_member(&self, model: ModelId, field: FieldId) -> Option<DataMember>;
}

/// A navigation from one model to another through key columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Association {
    /// The model reached by the navigation
    pub target: ModelId,

    /// Key fields on the target model, in key order
    pub foreign_key: Vec<FieldId>,

    /// Key fields on the model being navigated from, in key order. Pairs
    /// one-to-one with `foreign_key`.
    pub joined_key: Vec<FieldId>,

    /// How the target table is joined
    pub kind: JoinKind,
}

/// A mapped column as seen from the application.
#[derive(Debug, Clone, PartialEq)]
pub struct DataMember {
    /// Column name in the database
    pub name: String,

    /// Type of the values stored in the column
    pub ty: stmt::Type,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    /// Not joined; a root table of the query
    #[default]
    Default,
    Inner,
    LeftOuter,
    RightOuter,
    FullOuter,
}

impl<T: DataMapper + ?Sized> DataMapper for std::sync::Arc<T> {
    fn table_name(&self, model: ModelId) -> Option<&str> {
        (**self).table_name(model)
    }

    fn association(&self, model: ModelId, field: FieldId) -> Option<Association> {
        (**self).association(model, field)
    }

    fn data_member(&self, model: ModelId, field: FieldId) -> Option<DataMember> {
        (**self).data_member(model, field)
    }
}
