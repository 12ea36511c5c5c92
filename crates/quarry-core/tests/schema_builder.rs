use quarry_core::schema::app::{self, *};
use quarry_core::schema::{Name, Schema};
use quarry_core::stmt;

const CUSTOMER: ModelId = ModelId(0);
const ORDER: ModelId = ModelId(1);

fn id_field(model: ModelId) -> Field {
    Field {
        primary_key: true,
        ..Field::primitive(model.field(0), "id", stmt::Type::I64)
    }
}

fn models() -> Vec<Model> {
    let customer = Model {
        id: CUSTOMER,
        name: Name::new("Customer"),
        fields: vec![
            id_field(CUSTOMER),
            Field::primitive(CUSTOMER.field(1), "name", stmt::Type::String),
            Field {
                id: CUSTOMER.field(2),
                name: FieldName::new("orders"),
                ty: FieldTy::HasMany(HasMany {
                    target: ORDER,
                    pair: None,
                }),
                nullable: false,
                primary_key: false,
            },
        ],
        primary_key: PrimaryKey {
            fields: vec![CUSTOMER.field(0)],
        },
        table_name: None,
    };

    let order = Model {
        id: ORDER,
        name: Name::new("Order"),
        fields: vec![
            id_field(ORDER),
            Field {
                name: FieldName {
                    app_name: "customer_id".to_string(),
                    storage_name: Some("CustomerId".to_string()),
                },
                ..Field::primitive(ORDER.field(1), "customer_id", stmt::Type::I64)
            },
            Field {
                id: ORDER.field(2),
                name: FieldName::new("customer"),
                ty: FieldTy::BelongsTo(BelongsTo {
                    target: CUSTOMER,
                    pair: None,
                    foreign_key: ForeignKey::from_pairs([(ORDER.field(1), CUSTOMER.field(0))]),
                }),
                nullable: false,
                primary_key: false,
            },
        ],
        primary_key: PrimaryKey {
            fields: vec![ORDER.field(0)],
        },
        table_name: Some("purchase_orders".to_string()),
    };

    vec![customer, order]
}

#[test]
fn default_table_names_are_pluralized() {
    let schema = Schema::from_app(app_schema(models())).unwrap();

    assert_eq!(schema.table_for(CUSTOMER).name, "customers");
    assert_eq!(schema.table_for(ORDER).name, "purchase_orders");
}

#[test]
fn table_name_prefix_applies_to_every_table() {
    let schema = Schema::builder()
        .table_name_prefix("app_")
        .build(app_schema(models()))
        .unwrap();

    assert_eq!(schema.table_for(CUSTOMER).name, "app_customers");
    assert_eq!(schema.table_for(ORDER).name, "app_purchase_orders");
}

#[test]
fn relation_fields_have_no_column() {
    let schema = Schema::from_app(app_schema(models())).unwrap();

    let mapping = schema.mapping_for(ORDER);
    assert!(mapping.column(ORDER.field(1)).is_some());
    assert!(mapping.column(ORDER.field(2)).is_none());

    let table = schema.table_for(ORDER);
    let names: Vec<_> = table.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["id", "CustomerId"]);
}

#[test]
fn primary_key_columns_follow_model_key() {
    let schema = Schema::from_app(app_schema(models())).unwrap();
    let table = schema.table_for(CUSTOMER);

    let pk: Vec<_> = table
        .primary_key_columns()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(pk, ["id"]);
    assert!(table.column_by_name("id").unwrap().primary_key);
}

#[test]
fn has_many_is_paired_with_belongs_to() {
    let app = app_schema(models());

    let has_many = app.field(CUSTOMER.field(2)).ty.as_has_many().unwrap();
    assert_eq!(has_many.pair, Some(ORDER.field(2)));

    let belongs_to = app.field(ORDER.field(2)).ty.as_belongs_to().unwrap();
    assert_eq!(belongs_to.pair, Some(CUSTOMER.field(2)));
}

#[test]
fn duplicate_table_names_are_rejected() {
    let mut models = models();
    models[1].table_name = Some("customers".to_string());

    let err = Schema::from_app(app_schema(models)).unwrap_err();
    assert!(err.is_invalid_schema());
    assert_eq!(
        err.to_string(),
        "invalid schema: more than one model maps to table `customers`"
    );
}

#[test]
fn unpaired_has_many_is_rejected() {
    let mut models = models();
    models[1].fields.truncate(2);

    let err = app::Schema::from_models(models).unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn foreign_key_must_reference_primitive_fields() {
    let mut models = models();
    if let FieldTy::BelongsTo(belongs_to) = &mut models[1].fields[2].ty {
        belongs_to.foreign_key = ForeignKey::from_pairs([(ORDER.field(1), CUSTOMER.field(2))]);
    }

    let err = app::Schema::from_models(models).unwrap_err();
    assert!(err.is_invalid_schema());
}

#[test]
fn belongs_to_without_foreign_key_is_rejected() {
    let mut models = models();
    if let FieldTy::BelongsTo(belongs_to) = &mut models[1].fields[2].ty {
        belongs_to.foreign_key = ForeignKey { fields: vec![] };
    }

    let err = app::Schema::from_models(models).unwrap_err();
    assert!(err.is_invalid_schema());
    assert!(err.to_string().contains("`customer` has no foreign key fields"));
}

fn app_schema(models: Vec<Model>) -> app::Schema {
    app::Schema::from_models(models).unwrap()
}
