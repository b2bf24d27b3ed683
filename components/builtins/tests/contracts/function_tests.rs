//! Contract tests for function, class and bound-function creation

use builtins::{Intrinsic, ReflectObject, Realm};
use core_types::{FunctionKind, ObjectError, PropertyKey, Value};

#[test]
fn test_function_name_descriptor_shape() {
    let realm = Realm::new();
    let f = realm.create_function("render", FunctionKind::Normal);
    let name = f.get_own_property(&"name".into()).unwrap();
    assert!(name.is_configurable());
    assert!(!name.is_enumerable());
    assert_eq!(name.writable(), Some(false));
    assert_eq!(name.value(), Some(&Value::string("render")));
}

#[test]
fn test_constructability_matches_kind() {
    let realm = Realm::new();
    let constructable = [FunctionKind::Normal];
    let not_constructable = [
        FunctionKind::Arrow,
        FunctionKind::Method,
        FunctionKind::Async,
        FunctionKind::AsyncArrow,
        FunctionKind::Generator,
        FunctionKind::AsyncGenerator,
    ];
    for kind in constructable {
        assert!(ReflectObject::is_constructor(&Value::Object(realm.create_function("f", kind))));
    }
    for kind in not_constructable {
        assert!(!ReflectObject::is_constructor(&Value::Object(realm.create_function("f", kind))));
    }
    let class = realm.create_class("C", None).unwrap();
    assert!(ReflectObject::is_constructor(&Value::Object(class)));
}

#[test]
fn test_construct_ordinary_function() {
    let realm = Realm::new();
    let f = realm.create_function("Legacy", FunctionKind::Normal);
    let instance = realm.construct(&Value::Object(f.clone())).unwrap();
    let constructor = realm.get(&Value::Object(instance), &"constructor".into());
    assert_eq!(constructor, Value::Object(f));
}

#[test]
fn test_construct_through_bound_function() {
    let realm = Realm::new();
    let class = realm.create_class("Widget", None).unwrap();
    let bound = realm.bind(&class).unwrap();
    let instance = realm.construct(&Value::Object(bound)).unwrap();
    let constructor = realm.get(&Value::Object(instance), &"constructor".into());
    assert_eq!(constructor, Value::Object(class));
}

#[test]
fn test_construct_non_constructor_fails() {
    let realm = Realm::new();
    let arrow = realm.create_function("a", FunctionKind::Arrow);
    assert_eq!(
        realm.construct(&Value::Object(arrow)).unwrap_err(),
        ObjectError::NotAConstructor
    );
}

#[test]
fn test_class_extending_builtin_inherits_tag() {
    let realm = Realm::new();
    let map = realm.intrinsic(Intrinsic::Map);
    let sub = realm.create_class("Registry", Some(&map)).unwrap();
    let instance = Value::Object(realm.construct(&Value::Object(sub)).unwrap());
    assert_eq!(
        realm.get(&instance, &PropertyKey::to_string_tag()),
        Value::string("Map")
    );
}

#[test]
fn test_function_constructor_creates_function() {
    let realm = Realm::new();
    let function = Value::Object(realm.intrinsic(Intrinsic::Function));
    let created = realm.construct(&function).unwrap();
    assert_eq!(created.function_kind(), Some(FunctionKind::Normal));
}
