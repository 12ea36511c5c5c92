use super::Type;

/// A literal.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I32(i32),
    I64(i64),
    U64(u64),
    F64(f64),
    String(String),
    List(Vec<Value>),
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    /// The value's type. `Null` has the null type, lists take the type of
    /// their first item.
    pub fn infer_ty(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::U64(_) => Type::U64,
            Self::F64(_) => Type::F64,
            Self::String(_) => Type::String,
            Self::Null => Type::Null,
            Self::List(items) => match items.first() {
                Some(item) => Type::list(item.infer_ty()),
                None => Type::list(Type::Unknown),
            },
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the value as an `i64` if it holds any integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I32(v) => Some(v as i64),
            Self::I64(v) => Some(v),
            Self::U64(v) => i64::try_from(v).ok(),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(src: $ty) -> Value {
                    Value::$variant(src)
                }
            }
        )*
    };
}

impl_from! {
    bool => Bool,
    i32 => I32,
    i64 => I64,
    u64 => U64,
    f64 => F64,
    String => String,
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Value {
        src.map_or(Value::Null, Into::into)
    }
}
