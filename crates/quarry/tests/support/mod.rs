#![allow(dead_code)]

use quarry::schema::app::{self, *};
use quarry::schema::{Association, DataMapper, DataMember, JoinKind, Name, Schema};
use quarry::stmt;

use std::collections::HashMap;
use std::sync::Arc;

pub const CUSTOMER: ModelId = ModelId(0);
pub const ORDER: ModelId = ModelId(1);
pub const ORDER_LINE: ModelId = ModelId(2);
pub const SHIPMENT: ModelId = ModelId(3);

pub mod customer {
    use super::*;

    pub const ID: FieldId = CUSTOMER.field(0);
    pub const NAME: FieldId = CUSTOMER.field(1);
    pub const ORDERS: FieldId = CUSTOMER.field(2);
}

pub mod order {
    use super::*;

    pub const ID: FieldId = ORDER.field(0);
    pub const CUSTOMER_ID: FieldId = ORDER.field(1);
    pub const CUSTOMER: FieldId = ORDER.field(2);
    pub const LINES: FieldId = ORDER.field(3);
}

pub mod order_line {
    use super::*;

    pub const ORDER_ID: FieldId = ORDER_LINE.field(0);
    pub const LINE_NO: FieldId = ORDER_LINE.field(1);
    pub const PRODUCT: FieldId = ORDER_LINE.field(2);
    pub const ORDER: FieldId = ORDER_LINE.field(3);
}

pub mod shipment {
    use super::*;

    pub const ID: FieldId = SHIPMENT.field(0);
    pub const ORDER_ID: FieldId = SHIPMENT.field(1);
    pub const LINE_NO: FieldId = SHIPMENT.field(2);
    pub const LINE: FieldId = SHIPMENT.field(3);
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn key(id: FieldId, name: &str, ty: stmt::Type) -> Field {
    Field {
        primary_key: true,
        ..Field::primitive(id, name, ty)
    }
}

fn relation(id: FieldId, name: &str, ty: FieldTy) -> Field {
    Field {
        id,
        name: FieldName::new(name),
        ty,
        nullable: false,
        primary_key: false,
    }
}

fn belongs_to(target: ModelId, pairs: impl IntoIterator<Item = (FieldId, FieldId)>) -> FieldTy {
    FieldTy::BelongsTo(BelongsTo {
        target,
        pair: None,
        foreign_key: ForeignKey::from_pairs(pairs),
    })
}

fn has_many(target: ModelId) -> FieldTy {
    FieldTy::HasMany(HasMany { target, pair: None })
}

fn model(id: ModelId, name: &str, fields: Vec<Field>) -> Model {
    let primary_key = PrimaryKey {
        fields: fields
            .iter()
            .filter(|field| field.primary_key)
            .map(|field| field.id)
            .collect(),
    };

    Model {
        id,
        name: Name::new(name),
        fields,
        primary_key,
        table_name: None,
    }
}

/// Customer 1-* Order 1-* OrderLine 1-* Shipment. Order lines are keyed by
/// `(order_id, line_no)`, so shipments reference them through a two-column
/// foreign key.
pub fn shop_app() -> app::Schema {
    use stmt::Type::*;

    app::Schema::from_models([
        model(
            CUSTOMER,
            "Customer",
            vec![
                key(customer::ID, "id", I64),
                Field::primitive(customer::NAME, "name", String),
                relation(customer::ORDERS, "orders", has_many(ORDER)),
            ],
        ),
        model(
            ORDER,
            "Order",
            vec![
                key(order::ID, "id", I64),
                Field::primitive(order::CUSTOMER_ID, "customer_id", I64),
                relation(
                    order::CUSTOMER,
                    "customer",
                    belongs_to(CUSTOMER, [(order::CUSTOMER_ID, customer::ID)]),
                ),
                relation(order::LINES, "lines", has_many(ORDER_LINE)),
            ],
        ),
        model(
            ORDER_LINE,
            "OrderLine",
            vec![
                key(order_line::ORDER_ID, "order_id", I64),
                key(order_line::LINE_NO, "line_no", I32),
                Field::primitive(order_line::PRODUCT, "product", String),
                relation(
                    order_line::ORDER,
                    "order",
                    belongs_to(ORDER, [(order_line::ORDER_ID, order::ID)]),
                ),
            ],
        ),
        model(
            SHIPMENT,
            "Shipment",
            vec![
                key(shipment::ID, "id", I64),
                Field::primitive(shipment::ORDER_ID, "order_id", I64),
                Field::primitive(shipment::LINE_NO, "line_no", I32),
                relation(
                    shipment::LINE,
                    "line",
                    belongs_to(
                        ORDER_LINE,
                        [
                            (shipment::ORDER_ID, order_line::ORDER_ID),
                            (shipment::LINE_NO, order_line::LINE_NO),
                        ],
                    ),
                ),
            ],
        ),
    ])
    .unwrap()
}

pub fn shop() -> Arc<Schema> {
    Arc::new(Schema::from_app(shop_app()).unwrap())
}

/// A data mapper answering from hand-written tables. Used to describe
/// mappings a consistent schema cannot express.
#[derive(Debug, Default)]
pub struct FakeMapper {
    pub tables: HashMap<ModelId, String>,
    pub members: HashMap<FieldId, DataMember>,
    pub associations: HashMap<FieldId, Association>,
}

impl FakeMapper {
    pub fn table(mut self, model: ModelId, name: &str) -> Self {
        self.tables.insert(model, name.to_string());
        self
    }

    pub fn member(mut self, field: FieldId, name: &str, ty: stmt::Type) -> Self {
        self.members.insert(
            field,
            DataMember {
                name: name.to_string(),
                ty,
            },
        );
        self
    }

    pub fn association(
        mut self,
        field: FieldId,
        target: ModelId,
        foreign_key: Vec<FieldId>,
        joined_key: Vec<FieldId>,
        kind: JoinKind,
    ) -> Self {
        self.associations.insert(
            field,
            Association {
                target,
                foreign_key,
                joined_key,
                kind,
            },
        );
        self
    }
}

impl DataMapper for FakeMapper {
    fn table_name(&self, model: ModelId) -> Option<&str> {
        self.tables.get(&model).map(String::as_str)
    }

    fn association(&self, model: ModelId, field: FieldId) -> Option<Association> {
        if field.model != model {
            return None;
        }

        self.associations.get(&field).cloned()
    }

    fn data_member(&self, model: ModelId, field: FieldId) -> Option<DataMember> {
        if field.model != model {
            return None;
        }

        self.members.get(&field).cloned()
    }
}
