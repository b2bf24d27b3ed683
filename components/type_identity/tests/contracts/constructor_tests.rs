//! Contract tests for constructor resolution

use std::rc::Rc;

use builtins::{Intrinsic, Realm};
use core_types::{FunctionKind, PropertyDescriptor, PropertyKey, Value};
use type_identity::{defined_constructor, defined_constructor_name};

#[test]
fn test_primitives_resolve_to_wrappers() {
    let realm = Realm::new();
    let cases = [
        (Value::Number(0.0), "Number"),
        (Value::string(""), "String"),
        (Value::Boolean(true), "Boolean"),
        (realm.bigint(1), "BigInt"),
    ];
    for (value, expected) in cases {
        assert_eq!(defined_constructor_name(&realm, Some(&value)).as_deref(), Some(expected));
    }
}

#[test]
fn test_null_prototype_object_has_no_constructor() {
    let realm = Realm::new();
    let bare = Value::Object(realm.object_create(None));
    assert!(defined_constructor(&realm, Some(&bare)).is_none());
    assert_eq!(defined_constructor_name(&realm, Some(&bare)), None);
}

#[test]
fn test_own_getter_constructor_is_evaluated() {
    let realm = Realm::new();
    let class = realm.create_class("Lazy", None).unwrap();
    let obj = realm.object_create(None);
    let target = Value::Object(class.clone());
    realm.define_getter(&obj, "constructor".into(), Rc::new(move |_: &Value, _: &[Value]| target.clone()));
    let found = defined_constructor(&realm, Some(&Value::Object(obj))).unwrap();
    assert!(found.ptr_eq(&class));
}

#[test]
fn test_prototype_fallback_when_value_slot_is_poisoned() {
    let realm = Realm::new();
    let class = realm.create_class("Widget", None).unwrap();
    let instance = realm.construct(&Value::Object(class.clone())).unwrap();
    instance.define_own_property("constructor".into(), PropertyDescriptor::data(Value::string("nope")));
    let found = defined_constructor(&realm, Some(&Value::Object(instance))).unwrap();
    assert!(found.ptr_eq(&class));
}

#[test]
fn test_generator_objects_resolve_through_double_indirection() {
    let realm = Realm::new();
    let g = realm.create_function("g", FunctionKind::Generator);
    let generator = Value::Object(realm.call_generator(&g).unwrap());
    let found = defined_constructor(&realm, Some(&generator)).unwrap();
    assert!(found.ptr_eq(&realm.intrinsic(Intrinsic::GeneratorFunction)));
}

#[test]
fn test_constructor_name_reads_own_name_only() {
    let realm = Realm::new();
    let f = realm.create_function("Named", FunctionKind::Normal);
    f.delete(&PropertyKey::from("name"));
    let instance = Value::Object(realm.construct(&Value::Object(f)).unwrap());
    // Function.prototype.name is "", but it is not the constructor's own name
    assert_eq!(defined_constructor_name(&realm, Some(&instance)), None);
}
