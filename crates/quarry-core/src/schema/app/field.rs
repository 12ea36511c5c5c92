use super::{BelongsTo, HasMany, HasOne, ModelId};
use crate::stmt;
use std::fmt;

/// One field of a model: either a stored value or a relation to another
/// model.
#[derive(Debug, Clone)]
pub struct Field {
    pub id: FieldId,
    pub name: FieldName,
    pub ty: FieldTy,

    /// The field may hold no value. On a `BelongsTo` this makes the join
    /// outer.
    pub nullable: bool,

    pub primary_key: bool,
}

/// A field's position within its model.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

#[derive(Debug, Clone)]
pub struct FieldName {
    /// Name used in application code.
    pub app_name: String,

    /// Column name override.
    pub storage_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FieldPrimitive {
    pub ty: stmt::Type,
}

#[derive(Debug, Clone)]
pub enum FieldTy {
    Primitive(FieldPrimitive),
    BelongsTo(BelongsTo),
    HasMany(HasMany),
    HasOne(HasOne),
}

impl Field {
    /// A required, non-key field holding values of type `ty`.
    pub fn primitive(id: FieldId, name: &str, ty: stmt::Type) -> Field {
        Field {
            id,
            name: FieldName::new(name),
            ty: FieldTy::Primitive(FieldPrimitive { ty }),
            nullable: false,
            primary_key: false,
        }
    }

    pub fn is_relation(&self) -> bool {
        self.relation_target().is_some()
    }

    pub fn value_ty(&self) -> Option<&stmt::Type> {
        match &self.ty {
            FieldTy::Primitive(primitive) => Some(&primitive.ty),
            _ => None,
        }
    }

    pub fn relation_target(&self) -> Option<ModelId> {
        let target = match &self.ty {
            FieldTy::Primitive(_) => return None,
            FieldTy::BelongsTo(rel) => rel.target,
            FieldTy::HasMany(rel) => rel.target,
            FieldTy::HasOne(rel) => rel.target,
        };
        Some(target)
    }
}

impl FieldName {
    pub fn new(app_name: &str) -> FieldName {
        FieldName {
            app_name: app_name.into(),
            storage_name: None,
        }
    }

    /// The column name this field maps to.
    pub fn storage_name(&self) -> &str {
        self.storage_name.as_deref().unwrap_or(&self.app_name)
    }
}

impl FieldTy {
    pub fn is_primitive(&self) -> bool {
        matches!(self, FieldTy::Primitive(_))
    }

    pub fn as_belongs_to(&self) -> Option<&BelongsTo> {
        if let FieldTy::BelongsTo(rel) = self {
            Some(rel)
        } else {
            None
        }
    }

    pub fn as_has_many(&self) -> Option<&HasMany> {
        if let FieldTy::HasMany(rel) = self {
            Some(rel)
        } else {
            None
        }
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldId({}.{})", self.model.0, self.index)
    }
}

impl From<&FieldId> for FieldId {
    fn from(id: &FieldId) -> FieldId {
        *id
    }
}

impl From<&Field> for FieldId {
    fn from(field: &Field) -> FieldId {
        field.id
    }
}
