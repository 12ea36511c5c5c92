use crate::schema::app::{FieldId, ModelId};

/// Describes a traversal through fields, starting at `root`.
///
/// Each step after the first belongs to the model targeted by the previous
/// (relation) step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    /// Model the path originates from
    pub root: ModelId,

    /// Traversal through the fields
    pub fields: Vec<FieldId>,
}

impl Path {
    pub fn model(root: ModelId) -> Self {
        Self {
            root,
            fields: vec![],
        }
    }

    pub fn field(field: FieldId) -> Self {
        Self {
            root: field.model,
            fields: vec![field],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Appends a step, returning the extended path.
    pub fn then(mut self, field: FieldId) -> Self {
        self.fields.push(field);
        self
    }

    pub fn last(&self) -> Option<FieldId> {
        self.fields.last().copied()
    }
}

impl From<FieldId> for Path {
    fn from(value: FieldId) -> Self {
        Path::field(value)
    }
}

impl<const N: usize> From<[FieldId; N]> for Path {
    fn from(value: [FieldId; N]) -> Self {
        match value.first() {
            Some(first) => Path {
                root: first.model,
                fields: value.to_vec(),
            },
            None => panic!("a path needs at least one field"),
        }
    }
}
