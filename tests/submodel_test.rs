//! Integration tests for submodel-backed columns
//!
//! Exercises the full declaration surface against an in-memory row standing
//! in for the host store: accessor semantics, equality, blank-to-NULL
//! persistence for each storage encoding, and validation delegation.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use submodel::column_codec::hstore;
use submodel::prelude::*;
use submodel::serde_json::{json, Map, Value};

const COUNTRY_CODES: &[&str] = &["AU", "CA", "DE", "FR", "GB", "JP", "ME", "NL", "US"];
const US_STATE_CODES: &[&str] = &["AK", "CA", "FL", "ME", "NY", "TX", "WA"];
const CA_PROVINCE_CODES: &[&str] = &["AB", "BC", "MB", "NS", "ON", "QC", "SK"];

static US_ZIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{5}").unwrap());
static CA_POSTAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[a-z]\d[a-z]\W*\d[a-z]\d").unwrap());

/// Address value object backing the order columns
#[derive(Debug, Clone, Default, Submodel)]
pub struct Address {
    pub street_1: Option<String>,
    pub street_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,

    // Internal bookkeeping; never part of the significant mapping.
    #[submodel(skip)]
    pub lookup_cache: Option<String>,
}

impl Validate for Address {
    fn validate(&self, errors: &mut Errors) {
        validate_inclusion(errors, "country", self.country.as_deref(), COUNTRY_CODES);
        match self.country.as_deref() {
            Some("US") => {
                validate_inclusion(errors, "state", self.state.as_deref(), US_STATE_CODES);
                validate_format(errors, "postal_code", self.postal_code.as_deref(), &US_ZIP);
            }
            Some("CA") => {
                validate_inclusion(errors, "state", self.state.as_deref(), CA_PROVINCE_CODES);
                validate_format(errors, "postal_code", self.postal_code.as_deref(), &CA_POSTAL);
            }
            _ => {}
        }
    }
}

/// Host record with one key-value column and one JSON column
#[derive(Debug, Clone, Default)]
pub struct Order {
    pub billing_address: SubmodelField<Address>,
    pub shipping_address: SubmodelField<Address>,
}

impl RecordSchema for Order {
    fn table_name() -> &'static str {
        "orders"
    }

    fn columns() -> &'static [(&'static str, ColumnType)] {
        &[
            ("billing_address", ColumnType::KeyValue),
            ("shipping_address", ColumnType::Json),
        ]
    }
}

static BILLING_ADDRESS: LazyLock<SubmodelColumn<Address>> =
    LazyLock::new(|| SubmodelColumn::declare::<Order>("billing_address").unwrap());

static SHIPPING_ADDRESS: LazyLock<SubmodelColumn<Address>> = LazyLock::new(|| {
    SubmodelColumn::declare::<Order>("shipping_address")
        .unwrap()
        .allow_blank(true)
        .extend(|address: &Wrapped<Address>, errors| {
            if let Some(country) = address.country.as_deref().filter(|c| !c.trim().is_empty()) {
                validate_inclusion(errors, "country", Some(country), &["US", "CA", "ME"]);
            }
        })
});

impl Order {
    fn validate(&self) -> Errors {
        let mut errors = Errors::new();
        BILLING_ADDRESS.validate_into(self.billing_address.peek(), &mut errors);
        SHIPPING_ADDRESS.validate_into(self.shipping_address.peek(), &mut errors);
        errors
    }

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("fixture must be an object"),
    }
}

fn valid_address_map() -> Map<String, Value> {
    object(json!({"country": "CA", "state": "QC", "postal_code": "G1K 3J3"}))
}

fn valid_address() -> Address {
    Address {
        country: Some("CA".to_string()),
        state: Some("QC".to_string()),
        postal_code: Some("G1K 3J3".to_string()),
        ..Address::default()
    }
}

/// Serialize a row the way the declarations register it with the host
fn dump_row(order: &Order) -> HashMap<String, ColumnValue> {
    HashMap::from([
        (
            "billing_address".to_string(),
            BILLING_ADDRESS.dump_field(&order.billing_address).unwrap(),
        ),
        (
            "shipping_address".to_string(),
            SHIPPING_ADDRESS.dump_field(&order.shipping_address).unwrap(),
        ),
    ])
}

fn load_row(row: &HashMap<String, ColumnValue>) -> Order {
    let mut order = Order::default();
    BILLING_ADDRESS
        .load_field(&row["billing_address"], &mut order.billing_address)
        .unwrap();
    SHIPPING_ADDRESS
        .load_field(&row["shipping_address"], &mut order.shipping_address)
        .unwrap();
    order
}

/// Re-textualize a stored value the way the engine hands columns back
fn stored_text(value: &ColumnValue) -> ColumnValue {
    match value {
        ColumnValue::Map(pairs) => ColumnValue::Text(hstore::to_text(pairs)),
        ColumnValue::Json(document) => ColumnValue::Text(document.to_string()),
        other => other.clone(),
    }
}

#[test]
fn test_type_name_is_preserved() {
    let mut order = Order::default();
    assert_eq!(Address::type_name(), "Address");
    assert_eq!(order.billing_address.get().to_string(), "<Address>");
}

#[test]
fn test_unset_attributes_stay_nil() {
    let order = Order::default();
    assert!(order.billing_address.peek().is_none());
    assert!(order.shipping_address.peek().is_none());

    let row = dump_row(&order);
    assert_eq!(row["billing_address"], ColumnValue::Null);
    assert_eq!(row["shipping_address"], ColumnValue::Null);
}

#[test]
fn test_getter_sets_attribute_to_blank_instance() {
    let mut order = Order::default();
    assert!(order.billing_address.get().is_blank());
    assert!(order.billing_address.is_set());

    let first = order.billing_address.get() as *const Wrapped<Address>;
    let second = order.billing_address.get() as *const Wrapped<Address>;
    assert_eq!(first, second);
}

#[test]
fn test_setter_builds_instance_from_mapping() {
    let mut order = Order::default();
    order
        .billing_address
        .set(object(json!({"street_1": "123 Fake Street"})))
        .unwrap();

    let billing = order.billing_address.peek().unwrap();
    assert_eq!(billing.street_1.as_deref(), Some("123 Fake Street"));
}

#[test]
fn test_blank_instance_comparisons() {
    let mut order = Order::default();
    assert_eq!(*order.billing_address.get(), json!({}));
    assert_ne!(*order.billing_address.get(), json!({"foo": "bar"}));
}

#[test]
fn test_equality_with_equivalent_instance() {
    let mut order = Order::default();
    order
        .billing_address
        .set(object(json!({"street_1": "123 Foo Street"})))
        .unwrap();

    let equivalent = Address {
        street_1: Some("123 Foo Street".to_string()),
        street_2: Some("".to_string()),
        ..Address::default()
    };
    let different = Address {
        street_1: Some("123 Bar Street".to_string()),
        ..Address::default()
    };

    assert_eq!(*order.billing_address.get(), equivalent);
    assert_ne!(*order.billing_address.get(), different);
}

#[test]
fn test_equality_with_mappings_and_other_values() {
    let mut order = Order::default();
    order
        .billing_address
        .set(object(json!({"street_1": "123 Foo Street"})))
        .unwrap();
    let billing = order.billing_address.get();

    assert_eq!(*billing, json!({"street_1": "123 Foo Street"}));
    assert_ne!(*billing, json!({"street_1": "blah blah blah"}));
    assert_ne!(*billing, json!(1));
    assert_ne!(*billing, json!("street"));
}

#[test]
fn test_setter_copies_other_instance() {
    let different = Address {
        street_1: Some("123 Bar Street".to_string()),
        ..Address::default()
    };

    let mut order = Order::default();
    order.billing_address.set(&different).unwrap();
    assert_eq!(
        order.billing_address.get().street_1.as_deref(),
        Some("123 Bar Street")
    );

    order.billing_address.get_mut().street_1 = Some("blah blah blah".to_string());
    assert_eq!(
        order.billing_address.get().street_1.as_deref(),
        Some("blah blah blah")
    );
    assert_eq!(different.street_1.as_deref(), Some("123 Bar Street"));
}

#[test]
fn test_setter_clears_on_nil() {
    let mut order = Order::default();
    order.billing_address.set(valid_address()).unwrap();
    order.billing_address.set(None::<Address>).unwrap();
    assert!(order.billing_address.peek().is_none());
}

#[test]
fn test_inspect_shows_significant_attributes() {
    let mut order = Order::default();
    order
        .billing_address
        .set(object(json!({"street_1": "123 Foo Street"})))
        .unwrap();
    order.billing_address.get_mut().street_2 = Some("apt. 2".to_string());

    assert_eq!(
        order.billing_address.get().to_string(),
        "<Address street_1=\"123 Foo Street\" street_2=\"apt. 2\">"
    );
}

#[test]
fn test_empty_mapping_persists_null() {
    let mut order = Order::default();
    order.billing_address.set(valid_address()).unwrap();
    order.shipping_address.set(object(json!({}))).unwrap();

    let row = dump_row(&order);
    assert_eq!(row["shipping_address"], ColumnValue::Null);

    let mut reloaded = load_row(&row);
    assert_eq!(*reloaded.billing_address.get(), valid_address());
    assert_eq!(*reloaded.shipping_address.get(), json!({}));
}

#[test]
fn test_blank_values_persist_null() {
    let mut order = Order::default();
    order.billing_address.set(valid_address()).unwrap();
    order
        .shipping_address
        .set(object(json!({"street_1": "", "city": "   "})))
        .unwrap();

    let row = dump_row(&order);
    assert_eq!(row["shipping_address"], ColumnValue::Null);

    let mut reloaded = load_row(&row);
    assert_eq!(*reloaded.shipping_address.get(), json!({}));
}

#[test]
fn test_mapping_persists_with_encoding_specific_form() {
    let mut order = Order::default();
    order.billing_address.set(valid_address()).unwrap();
    order
        .shipping_address
        .set(object(json!({
            "street_1": "123 Fake Street", "city": "Springfield", "country": "ME"
        })))
        .unwrap();

    let row = dump_row(&order);

    // Key-value columns keep the mapping; the engine textualizes it.
    let billing_text = stored_text(&row["billing_address"]);
    assert_eq!(
        billing_text.as_text(),
        Some(r#""state"=>"QC", "country"=>"CA", "postal_code"=>"G1K 3J3""#)
    );

    // JSON columns keep the document itself.
    assert_eq!(
        row["shipping_address"],
        ColumnValue::Json(json!({
            "street_1": "123 Fake Street", "city": "Springfield", "country": "ME"
        }))
    );

    let mut reloaded = load_row(&row);
    assert_eq!(*reloaded.billing_address.get(), valid_address());
    assert_eq!(
        *reloaded.shipping_address.get(),
        json!({"street_1": "123 Fake Street", "city": "Springfield", "country": "ME"})
    );
}

#[test]
fn test_round_trip_through_column_text_for_each_encoding() {
    for column in [ColumnType::Text, ColumnType::KeyValue, ColumnType::Json] {
        let declared = SubmodelColumn::<Address>::new("billing_address", column);

        let mut field = SubmodelField::<Address>::new();
        field.set(valid_address()).unwrap();

        let raw = stored_text(&declared.dump_field(&field).unwrap());
        let mut reloaded = SubmodelField::<Address>::new();
        declared.load_field(&raw, &mut reloaded).unwrap();

        assert_eq!(*reloaded.get(), valid_address(), "column {:?}", column);
    }
}

#[test]
fn test_plain_text_column_stores_block_document() {
    let declared = SubmodelColumn::<Address>::new("billing_address", ColumnType::Text);

    let mut field = SubmodelField::<Address>::new();
    field.set(valid_address()).unwrap();

    let raw = declared.dump_field(&field).unwrap();
    assert_eq!(
        raw.as_text(),
        Some("---\nstate: QC\ncountry: CA\npostal_code: G1K 3J3\n")
    );
}

#[test]
fn test_skipped_bookkeeping_field_never_persists() {
    let mut order = Order::default();
    order.billing_address.set(valid_address()).unwrap();
    order.billing_address.get_mut().lookup_cache = Some("resolved".to_string());

    let row = dump_row(&order);
    let billing_text = stored_text(&row["billing_address"]);
    assert!(!billing_text.as_text().unwrap().contains("lookup_cache"));

    // The cache also stays out of equality and representation.
    assert_eq!(*order.billing_address.get(), valid_address());
    assert!(!order.billing_address.get().to_string().contains("resolved"));
}

#[test]
fn test_blank_billing_address_is_invalid() {
    let mut order = Order::default();
    order
        .billing_address
        .set(object(json!({"state": " ", "postal_code": ""})))
        .unwrap();

    let errors = order.validate();
    assert!(!errors.is_empty());
    assert!(errors.attribute_names().contains(&"billing_address"));
}

#[test]
fn test_blank_shipping_address_is_allowed() {
    let mut order = Order::default();
    order.billing_address.set(valid_address_map()).unwrap();
    order
        .shipping_address
        .set(object(json!({"state": " ", "postal_code": ""})))
        .unwrap();

    assert!(order.is_valid());
}

#[test]
fn test_invalid_shipping_address_is_rejected() {
    let mut order = Order::default();
    order.billing_address.set(valid_address_map()).unwrap();
    order
        .shipping_address
        .set(object(json!({"country": "CA", "state": "FOO"})))
        .unwrap();

    let errors = order.validate();
    assert!(errors.attribute_names().contains(&"shipping_address"));
}

#[test]
fn test_extension_affects_only_its_column() {
    let mut order = Order::default();
    order
        .billing_address
        .set(object(json!({"country": "NL"})))
        .unwrap();
    order
        .shipping_address
        .set(object(json!({"country": "NL"})))
        .unwrap();

    let errors = order.validate();
    assert_eq!(errors.attribute_names(), vec!["shipping_address"]);
}

#[test]
fn test_error_messages_join_into_one_sentence() {
    let mut order = Order::default();
    order
        .billing_address
        .set(object(json!({
            "country": "US", "state": "QC", "postal_code": "H0H 0H0"
        })))
        .unwrap();

    let errors = order.validate();
    assert_eq!(
        errors.full_messages(),
        vec!["Billing address state is not included in the list and postal code is invalid"]
    );
}

#[test]
fn test_attributes_setter_alias() {
    let mut order = Order::default();
    order
        .billing_address
        .set_attributes(valid_address_map())
        .unwrap();
    assert_eq!(*order.billing_address.get(), valid_address());
}

#[test]
fn test_row_keys_survive_dump() {
    let mut order = Order::default();
    order.billing_address.set(valid_address_map()).unwrap();
    order.shipping_address.set(valid_address_map()).unwrap();

    let row = dump_row(&order);
    let mut keys: Vec<&str> = row.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["billing_address", "shipping_address"]);
}

#[test]
fn test_corrupt_stored_text_propagates_decode_error() {
    let mut field = SubmodelField::<Address>::new();

    let declared = SubmodelColumn::<Address>::new("billing_address", ColumnType::Json);
    let result = declared.load_field(&ColumnValue::Text("{broken".to_string()), &mut field);
    assert!(matches!(result, Err(CodecError::Json(_))));

    let declared = SubmodelColumn::<Address>::new("billing_address", ColumnType::KeyValue);
    let result = declared.load_field(&ColumnValue::Text("state=>QC".to_string()), &mut field);
    assert!(matches!(result, Err(CodecError::KeyValueSyntax { .. })));
}
