pub mod app;

mod builder;
pub use builder::Builder;

pub mod db;

mod mapper;
pub use mapper::{Association, DataMapper, DataMember, JoinKind};

pub mod mapping;
use mapping::Mapping;

mod name;
pub use name::Name;

use crate::Result;
use app::{FieldId, FieldTy, ModelId};
use db::{Table, TableId};
use std::sync::Arc;

#[derive(Debug)]
pub struct Schema {
    /// Application-level schema
    pub app: app::Schema,

    /// Database-level schema
    pub db: Arc<db::Schema>,

    /// Maps the app-level schema to the db-level schema
    pub mapping: Mapping,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Builds a schema with default options.
    pub fn from_app(app: app::Schema) -> Result<Schema> {
        Builder::default().build(app)
    }

    pub fn mapping_for(&self, id: impl Into<ModelId>) -> &mapping::Model {
        self.mapping.model(id)
    }

    pub fn table_for(&self, id: impl Into<ModelId>) -> &Table {
        self.db.table(self.table_id_for(id))
    }

    pub fn table_id_for(&self, id: impl Into<ModelId>) -> TableId {
        self.mapping.model(id).table
    }
}

impl DataMapper for Schema {
    fn table_name(&self, model: ModelId) -> Option<&str> {
        let mapping = self.mapping.get_model(model)?;
        Some(&self.db.table(mapping.table).name)
    }

    fn association(&self, model: ModelId, field: FieldId) -> Option<Association> {
        if field.model != model {
            return None;
        }

        let field = self.app.get_field(field)?;

        match &field.ty {
            FieldTy::Primitive(_) => None,
            // The navigated model holds the foreign key; the target is reached
            // through the columns it references.
            FieldTy::BelongsTo(belongs_to) => Some(Association {
                target: belongs_to.target,
                foreign_key: belongs_to.foreign_key.targets().collect(),
                joined_key: belongs_to.foreign_key.sources().collect(),
                kind: if field.nullable {
                    JoinKind::LeftOuter
                } else {
                    JoinKind::Inner
                },
            }),
            FieldTy::HasMany(app::HasMany { target, pair })
            | FieldTy::HasOne(app::HasOne { target, pair }) => {
                let belongs_to = self.app.get_field((*pair)?)?.ty.as_belongs_to()?;

                Some(Association {
                    target: *target,
                    foreign_key: belongs_to.foreign_key.sources().collect(),
                    joined_key: belongs_to.foreign_key.targets().collect(),
                    kind: JoinKind::LeftOuter,
                })
            }
        }
    }

    fn data_member(&self, model: ModelId, field: FieldId) -> Option<DataMember> {
        let column = self.mapping.get_model(model)?.column(field)?;
        let column = self.db.column(column);

        Some(DataMember {
            name: column.name.clone(),
            ty: column.ty.clone(),
        })
    }
}
