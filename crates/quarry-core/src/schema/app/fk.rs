use super::FieldId;

#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub fields: Vec<ForeignKeyField>,
}

#[derive(Debug, Clone)]
pub struct ForeignKeyField {
    /// The field on the source model that is acting as the foreign key
    pub source: FieldId,

    /// The field on the target model that this FK field maps to.
    pub target: FieldId,
}

impl ForeignKey {
    /// Builds a foreign key from `(source, target)` field pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (FieldId, FieldId)>) -> ForeignKey {
        ForeignKey {
            fields: pairs
                .into_iter()
                .map(|(source, target)| ForeignKeyField { source, target })
                .collect(),
        }
    }

    pub fn sources(&self) -> impl ExactSizeIterator<Item = FieldId> + '_ {
        self.fields.iter().map(|field| field.source)
    }

    pub fn targets(&self) -> impl ExactSizeIterator<Item = FieldId> + '_ {
        self.fields.iter().map(|field| field.target)
    }
}
