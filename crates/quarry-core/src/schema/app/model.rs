use super::{Field, FieldId, Name, PrimaryKey};
use std::fmt;

/// An application entity.
#[derive(Debug, Clone)]
pub struct Model {
    pub id: ModelId,
    pub name: Name,

    /// Indexed by `FieldId::index`.
    pub fields: Vec<Field>,

    pub primary_key: PrimaryKey,

    /// Explicit table name. When unset, the schema builder derives one from
    /// the model name.
    pub table_name: Option<String>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub usize);

impl Model {
    /// # Panics
    ///
    /// Panics if `field` belongs to a different model.
    pub fn field(&self, field: impl Into<FieldId>) -> &Field {
        let id = field.into();
        assert_eq!(self.id, id.model, "{id:?} is not a field of {:?}", self.id);
        &self.fields[id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name.app_name == name)
    }

    pub fn primary_key_fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.primary_key.fields.iter().map(|&id| self.field(id))
    }
}

impl ModelId {
    /// The id of this model's field at `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }
}

impl From<&ModelId> for ModelId {
    fn from(id: &ModelId) -> ModelId {
        *id
    }
}

impl From<&Model> for ModelId {
    fn from(model: &Model) -> ModelId {
        model.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModelId({})", self.0)
    }
}
