use super::{FieldId, ForeignKey, ModelId};

#[derive(Debug, Clone)]
pub struct BelongsTo {
    /// Model that owns the relation
    pub target: ModelId,

    /// The `HasMany` or `HasOne` association that pairs with this
    pub pair: Option<FieldId>,

    /// The foreign key is a set of primitive fields that match the target's
    /// primary key.
    pub foreign_key: ForeignKey,
}

#[derive(Debug, Clone)]
pub struct HasMany {
    /// Associated model
    pub target: ModelId,

    /// The `BelongsTo` field on the target that pairs with this relation.
    /// Left `None` when defining the schema; resolved by
    /// [`Schema::from_models`](super::Schema::from_models).
    pub pair: Option<FieldId>,
}

#[derive(Debug, Clone)]
pub struct HasOne {
    /// Associated model
    pub target: ModelId,

    /// The `BelongsTo` field on the target that pairs with this relation.
    pub pair: Option<FieldId>,
}
