//! Contract tests for signature extraction

use builtins::Realm;
use core_types::{PropertyDescriptor, PropertyKey, Value};
use type_identity::{signature, tagged_type};

#[test]
fn test_absent_argument() {
    let realm = Realm::new();
    assert_eq!(signature(&realm, None), None);
    assert_eq!(tagged_type(&realm, None), None);
}

#[test]
fn test_explicit_nullish_arguments() {
    let realm = Realm::new();
    assert_eq!(signature(&realm, Some(&Value::Undefined)).as_deref(), Some("[object Undefined]"));
    assert_eq!(signature(&realm, Some(&Value::Null)).as_deref(), Some("[object Null]"));
    assert_eq!(tagged_type(&realm, Some(&Value::Null)).as_deref(), Some("Null"));
}

#[test]
fn test_subclass_errors_share_a_tag() {
    let realm = Realm::new();
    let err = Value::Object(realm.new_error(core_types::ErrorKind::TypeError, ""));
    assert_eq!(tagged_type(&realm, Some(&err)).as_deref(), Some("Error"));
}

#[test]
fn test_tag_override_with_brackets() {
    let realm = Realm::new();
    let obj = realm.new_object();
    obj.define_own_property(PropertyKey::to_string_tag(), PropertyDescriptor::data(Value::string("a]b")));
    let value = Value::Object(obj);
    assert_eq!(signature(&realm, Some(&value)).as_deref(), Some("[object a]b]"));
    assert_eq!(tagged_type(&realm, Some(&value)).as_deref(), Some("a]b"));
}

#[test]
fn test_empty_tag() {
    let realm = Realm::new();
    let obj = realm.new_object();
    obj.define_own_property(PropertyKey::to_string_tag(), PropertyDescriptor::data(Value::string("")));
    let value = Value::Object(obj);
    assert_eq!(signature(&realm, Some(&value)).as_deref(), Some("[object ]"));
    assert_eq!(tagged_type(&realm, Some(&value)).as_deref(), Some(""));
}
