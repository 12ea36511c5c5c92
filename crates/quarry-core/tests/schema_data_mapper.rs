use quarry_core::schema::app::{self, *};
use quarry_core::schema::{Association, DataMapper, DataMember, JoinKind, Name, Schema};
use quarry_core::stmt;

const WAREHOUSE: ModelId = ModelId(0);
const SHIPMENT: ModelId = ModelId(1);

fn relation(id: FieldId, name: &str, ty: FieldTy, nullable: bool) -> Field {
    Field {
        id,
        name: FieldName::new(name),
        ty,
        nullable,
        primary_key: false,
    }
}

/// Schema:
///   Warehouse { region, code, shipments: [Shipment] }     key (region, code)
///   Shipment { id, warehouse_region, warehouse_code, warehouse: Warehouse?,
///              origin: Warehouse }
fn schema() -> Schema {
    let warehouse = Model {
        id: WAREHOUSE,
        name: Name::new("Warehouse"),
        fields: vec![
            Field {
                primary_key: true,
                ..Field::primitive(WAREHOUSE.field(0), "region", stmt::Type::String)
            },
            Field {
                primary_key: true,
                ..Field::primitive(WAREHOUSE.field(1), "code", stmt::Type::I32)
            },
            relation(
                WAREHOUSE.field(2),
                "shipments",
                FieldTy::HasMany(HasMany {
                    target: SHIPMENT,
                    pair: Some(SHIPMENT.field(3)),
                }),
                false,
            ),
        ],
        primary_key: PrimaryKey {
            fields: vec![WAREHOUSE.field(0), WAREHOUSE.field(1)],
        },
        table_name: None,
    };

    let shipment = Model {
        id: SHIPMENT,
        name: Name::new("Shipment"),
        fields: vec![
            Field {
                primary_key: true,
                ..Field::primitive(SHIPMENT.field(0), "id", stmt::Type::I64)
            },
            Field::primitive(SHIPMENT.field(1), "warehouse_region", stmt::Type::String),
            Field::primitive(SHIPMENT.field(2), "warehouse_code", stmt::Type::I32),
            relation(
                SHIPMENT.field(3),
                "warehouse",
                FieldTy::BelongsTo(BelongsTo {
                    target: WAREHOUSE,
                    pair: None,
                    foreign_key: ForeignKey::from_pairs([
                        (SHIPMENT.field(1), WAREHOUSE.field(0)),
                        (SHIPMENT.field(2), WAREHOUSE.field(1)),
                    ]),
                }),
                true,
            ),
            relation(
                SHIPMENT.field(4),
                "origin",
                FieldTy::BelongsTo(BelongsTo {
                    target: WAREHOUSE,
                    pair: None,
                    foreign_key: ForeignKey::from_pairs([
                        (SHIPMENT.field(1), WAREHOUSE.field(0)),
                        (SHIPMENT.field(2), WAREHOUSE.field(1)),
                    ]),
                }),
                false,
            ),
        ],
        primary_key: PrimaryKey {
            fields: vec![SHIPMENT.field(0)],
        },
        table_name: None,
    };

    let app = app::Schema::from_models([warehouse, shipment]).unwrap();
    Schema::from_app(app).unwrap()
}

#[test]
fn table_name_comes_from_db_schema() {
    let schema = schema();

    assert_eq!(schema.table_name(WAREHOUSE), Some("warehouses"));
    assert_eq!(schema.table_name(SHIPMENT), Some("shipments"));
    assert_eq!(schema.table_name(ModelId(9)), None);
}

#[test]
fn data_member_resolves_column_name_and_type() {
    let schema = schema();

    assert_eq!(
        schema.data_member(SHIPMENT, SHIPMENT.field(2)),
        Some(DataMember {
            name: "warehouse_code".to_string(),
            ty: stmt::Type::I32,
        })
    );
}

#[test]
fn data_member_is_none_for_relations_and_foreign_models() {
    let schema = schema();

    assert_eq!(schema.data_member(SHIPMENT, SHIPMENT.field(3)), None);
    // The field belongs to another model
    assert_eq!(schema.data_member(SHIPMENT, WAREHOUSE.field(0)), None);
    assert_eq!(schema.data_member(SHIPMENT, SHIPMENT.field(42)), None);
}

#[test]
fn belongs_to_joins_on_referenced_key() {
    let schema = schema();

    assert_eq!(
        schema.association(SHIPMENT, SHIPMENT.field(4)),
        Some(Association {
            target: WAREHOUSE,
            foreign_key: vec![WAREHOUSE.field(0), WAREHOUSE.field(1)],
            joined_key: vec![SHIPMENT.field(1), SHIPMENT.field(2)],
            kind: JoinKind::Inner,
        })
    );
}

#[test]
fn nullable_belongs_to_is_left_outer() {
    let schema = schema();

    let association = schema.association(SHIPMENT, SHIPMENT.field(3)).unwrap();
    assert_eq!(association.kind, JoinKind::LeftOuter);
}

#[test]
fn has_many_reverses_paired_belongs_to() {
    let schema = schema();

    assert_eq!(
        schema.association(WAREHOUSE, WAREHOUSE.field(2)),
        Some(Association {
            target: SHIPMENT,
            foreign_key: vec![SHIPMENT.field(1), SHIPMENT.field(2)],
            joined_key: vec![WAREHOUSE.field(0), WAREHOUSE.field(1)],
            kind: JoinKind::LeftOuter,
        })
    );
}

#[test]
fn primitive_fields_are_not_associations() {
    let schema = schema();

    assert_eq!(schema.association(SHIPMENT, SHIPMENT.field(1)), None);
    assert_eq!(schema.association(WAREHOUSE, SHIPMENT.field(3)), None);
}
