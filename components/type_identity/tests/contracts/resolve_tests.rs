//! Contract tests for type name resolution

use builtins::{Intrinsic, Realm};
use core_types::{ErrorKind, FunctionKind, Value};
use type_identity::{resolve_type, tagged_type};

fn resolve(realm: &Realm, value: &Value) -> Option<String> {
    resolve_type(realm, Some(value))
}

#[test]
fn test_object_literals() {
    let realm = Realm::new();
    assert_eq!(resolve(&realm, &Value::Object(realm.new_object())).as_deref(), Some("Object"));
    assert_eq!(
        resolve(&realm, &Value::Object(realm.object_create(None))).as_deref(),
        Some("Object")
    );
}

#[test]
fn test_native_error_names() {
    let realm = Realm::new();
    let err = Value::Object(realm.new_error(ErrorKind::TypeError, ""));
    assert_eq!(resolve(&realm, &err).as_deref(), Some("TypeError"));
    assert_eq!(tagged_type(&realm, Some(&err)).as_deref(), Some("Error"));
}

#[test]
fn test_async_generator_instance_and_prototype() {
    let realm = Realm::new();
    let ag = realm.create_function("ag", FunctionKind::AsyncGenerator);
    let instance = realm.call_generator(&ag).unwrap();
    let prototype = instance.prototype().unwrap();
    assert_eq!(resolve(&realm, &Value::Object(instance)).as_deref(), Some("AsyncGenerator"));
    assert_eq!(resolve(&realm, &Value::Object(prototype)).as_deref(), Some("AsyncGenerator"));
    assert_eq!(
        resolve(&realm, &Value::Object(realm.intrinsic(Intrinsic::AsyncGeneratorPrototype))).as_deref(),
        Some("AsyncGenerator")
    );
    assert_eq!(resolve(&realm, &Value::Object(ag)).as_deref(), Some("AsyncGeneratorFunction"));
}

#[test]
fn test_functions_resolve_by_family() {
    let realm = Realm::new();
    let cases = [
        (FunctionKind::Normal, "Function"),
        (FunctionKind::Arrow, "Function"),
        (FunctionKind::Async, "AsyncFunction"),
        (FunctionKind::Generator, "GeneratorFunction"),
    ];
    for (kind, expected) in cases {
        let f = Value::Object(realm.create_function("f", kind));
        assert_eq!(resolve(&realm, &f).as_deref(), Some(expected));
    }
}

#[test]
fn test_class_instances_use_class_name() {
    let realm = Realm::new();
    let map = realm.intrinsic(Intrinsic::Map);
    let class = realm.create_class("Registry", Some(&map)).unwrap();
    let instance = Value::Object(realm.construct(&Value::Object(class)).unwrap());
    assert_eq!(resolve(&realm, &instance).as_deref(), Some("Registry"));
    assert_eq!(tagged_type(&realm, Some(&instance)).as_deref(), Some("Map"));
}

#[test]
fn test_nullish_values() {
    let realm = Realm::new();
    assert_eq!(resolve(&realm, &Value::Undefined).as_deref(), Some("Undefined"));
    assert_eq!(resolve(&realm, &Value::Null).as_deref(), Some("Null"));
    assert_eq!(resolve_type(&realm, None), None);
}
