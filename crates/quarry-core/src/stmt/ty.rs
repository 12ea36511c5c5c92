use super::Value;
use crate::schema::app::ModelId;

/// Type of a field, column or value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    String,
    I32,
    I64,
    U64,
    F64,

    /// A record of the given model; the type of a relation field.
    Model(ModelId),

    List(Box<Type>),

    /// Type of the null literal. Accepted by every other type.
    Null,

    /// Not inferable, e.g. the items of an empty list.
    Unknown,
}

impl Type {
    pub fn list(item: impl Into<Type>) -> Type {
        Type::List(Box::new(item.into()))
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::I32 | Type::I64 | Type::U64 | Type::F64)
    }

    /// Whether `value` may be bound where this type is expected. `I32` values
    /// widen into `I64`.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) | (Type::Unknown, _) => true,
            (Type::I64, Value::I32(_)) => true,
            (Type::List(item), Value::List(items)) => items.iter().all(|v| item.accepts(v)),
            (ty, value) => *ty == value.infer_ty(),
        }
    }
}

impl From<&Type> for Type {
    fn from(ty: &Type) -> Type {
        ty.clone()
    }
}

impl From<ModelId> for Type {
    fn from(model: ModelId) -> Type {
        Type::Model(model)
    }
}
