mod field;
pub use field::{Field, FieldId, FieldName, FieldPrimitive, FieldTy};

mod fk;
pub use fk::{ForeignKey, ForeignKeyField};

mod model;
pub use model::{Model, ModelId};

mod pk;
pub use pk::PrimaryKey;

mod relation;
pub use relation::{BelongsTo, HasMany, HasOne};

mod schema;
pub use schema::Schema;

use super::Name;
