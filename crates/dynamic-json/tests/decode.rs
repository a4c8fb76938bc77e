use dynamic_json::{JsonRead, JsonRoot, JsonValue, ReadOnlyView, WritableView};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Address {
    city: String,
    zip: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct User {
    name: String,
    age: u8,
    address: Address,
}

const USER: &str = r#"{
    "name": "Ada",
    "age": 36,
    "address": {"city": "London", "zip": null}
}"#;

#[test]
fn test_decode_record() {
    let doc = ReadOnlyView::from_text(USER);
    let user: User = doc.decode_as().unwrap();
    assert_eq!(user.address.city, "London");
    assert_eq!(user.address.zip, None);

    let address: Address = doc.member("address").decode_as().unwrap();
    assert_eq!(address.city, "London");
}

#[test]
fn test_decode_mismatch_is_none() {
    let doc = ReadOnlyView::from_text(r#"{"name": "Ada", "age": 300}"#);
    assert_eq!(doc.decode_as::<User>(), None);
    assert_eq!(doc.member("name").decode_as::<String>(), None);
}

#[test]
fn test_record_round_trip_through_writable_view() {
    let user = User {
        name: "Ada".to_string(),
        age: 36,
        address: Address {
            city: "London".to_string(),
            zip: Some("N1".to_string()),
        },
    };
    let mut doc = WritableView::from_record(&user);
    {
        let mut address = doc.member_mut("address");
        address.set_member("city", "Cambridge");
    }
    let updated: User = doc.decode_as().unwrap();
    assert_eq!(updated.address.city, "Cambridge");
    assert_eq!(updated.address.zip.as_deref(), Some("N1"));
}

#[test]
fn test_text_output_policy() {
    let doc = ReadOnlyView::from_text(USER);
    let text = doc.to_text().unwrap();
    assert_eq!(ReadOnlyView::from_text(&text), doc);

    assert_eq!(ReadOnlyView::from_text("[1, 2]").to_text(), None);
    assert_eq!(doc.member("age").to_text(), None);
    assert_eq!(ReadOnlyView::null().to_text(), None);
}

#[test]
fn test_malformed_text_is_a_null_view() {
    let doc = ReadOnlyView::from_bytes(b"{\"a\": tru");
    assert!(doc.is_null());
    assert!(doc.member("a").is_null());
}

#[test]
fn test_root_literals() {
    let root: WritableView = JsonRoot::Array(vec![JsonValue::from(1)]).into();
    assert_eq!(root.get(0).map(JsonValue::from), Some(JsonValue::Integer(1)));
    assert!(root.get(1).is_none());
}
