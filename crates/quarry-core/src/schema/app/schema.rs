use super::{Field, FieldId, FieldTy, Model, ModelId};
use crate::{Error, Result};

use indexmap::IndexMap;

#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,
}

impl Schema {
    /// Builds an app schema, linking each `HasMany`/`HasOne` with the
    /// `BelongsTo` that pairs with it.
    pub fn from_models(models: impl IntoIterator<Item = Model>) -> Result<Schema> {
        let mut schema = Schema::default();

        for model in models {
            if schema.models.contains_key(&model.id) {
                return Err(Error::invalid_schema(format!(
                    "duplicate model id {:?} ({})",
                    model.id,
                    model.name.upper_camel_case()
                )));
            }

            schema.models.insert(model.id, model);
        }

        schema.verify_relation_targets()?;
        schema.link_relations()?;

        Ok(schema)
    }

    /// Get a field by ID
    pub fn field(&self, id: FieldId) -> &Field {
        self.model(id.model)
            .fields
            .get(id.index)
            .expect("invalid field ID")
    }

    pub fn get_field(&self, id: FieldId) -> Option<&Field> {
        self.models.get(&id.model)?.fields.get(id.index)
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get a model by ID
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    pub fn get_model(&self, id: impl Into<ModelId>) -> Option<&Model> {
        self.models.get(&id.into())
    }

    fn verify_relation_targets(&self) -> Result<()> {
        for model in self.models() {
            for (index, field) in model.fields.iter().enumerate() {
                if field.id != model.id.field(index) {
                    return Err(Error::invalid_schema(format!(
                        "field `{}` has id {:?}, expected {:?}",
                        field.name.app_name,
                        field.id,
                        model.id.field(index)
                    )));
                }

                let Some(target) = field.relation_target() else {
                    continue;
                };

                if !self.models.contains_key(&target) {
                    return Err(Error::invalid_schema(format!(
                        "relation `{}` targets unknown model {:?}",
                        field.name.app_name, target
                    )));
                }

                if let FieldTy::BelongsTo(belongs_to) = &field.ty {
                    if belongs_to.foreign_key.fields.is_empty() {
                        return Err(Error::invalid_schema(format!(
                            "belongs-to `{}` has no foreign key fields",
                            field.name.app_name
                        )));
                    }

                    for fk in &belongs_to.foreign_key.fields {
                        let source = self.get_field(fk.source);
                        let target = self.get_field(fk.target);

                        let valid = fk.source.model == model.id
                            && fk.target.model == belongs_to.target
                            && source.is_some_and(|f| f.ty.is_primitive())
                            && target.is_some_and(|f| f.ty.is_primitive());

                        if !valid {
                            return Err(Error::invalid_schema(format!(
                                "foreign key of `{}` references {:?} -> {:?}, which are not \
                                 primitive fields of the related models",
                                field.name.app_name, fk.source, fk.target
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }

    fn link_relations(&mut self) -> Result<()> {
        let mut links = vec![];

        for model in self.models() {
            for field in &model.fields {
                let (target, pair) = match &field.ty {
                    FieldTy::HasMany(rel) => (rel.target, rel.pair),
                    FieldTy::HasOne(rel) => (rel.target, rel.pair),
                    _ => continue,
                };

                let pair = match pair {
                    Some(pair) => pair,
                    None => self.find_belongs_to(target, model.id, field)?,
                };

                match self.get_field(pair).map(|f| &f.ty) {
                    Some(FieldTy::BelongsTo(belongs_to)) if belongs_to.target == model.id => {}
                    _ => {
                        return Err(Error::invalid_schema(format!(
                            "`{}` pairs with {:?}, which is not a belongs-to relation \
                             back to the model",
                            field.name.app_name, pair
                        )))
                    }
                }

                links.push((field.id, pair));
            }
        }

        for (has, belongs_to) in links {
            match &mut self.models[&has.model].fields[has.index].ty {
                FieldTy::HasMany(rel) => rel.pair = Some(belongs_to),
                FieldTy::HasOne(rel) => rel.pair = Some(belongs_to),
                _ => unreachable!(),
            }

            if let FieldTy::BelongsTo(rel) =
                &mut self.models[&belongs_to.model].fields[belongs_to.index].ty
            {
                rel.pair = Some(has);
            }
        }

        Ok(())
    }

    fn find_belongs_to(&self, target: ModelId, source: ModelId, field: &Field) -> Result<FieldId> {
        let mut candidates = self.model(target).fields.iter().filter(|f| {
            f.ty.as_belongs_to()
                .is_some_and(|belongs_to| belongs_to.target == source)
        });

        match (candidates.next(), candidates.next()) {
            (Some(pair), None) => Ok(pair.id),
            (None, _) => Err(Error::invalid_schema(format!(
                "no belongs-to relation pairs with `{}`",
                field.name.app_name
            ))),
            (Some(_), Some(_)) => Err(Error::invalid_schema(format!(
                "more than one belongs-to relation could pair with `{}`; set the pair explicitly",
                field.name.app_name
            ))),
        }
    }
}
