//! Contract tests for Symbol values inside a realm
//!
//! Tests cover:
//! - Well-known symbols as property keys
//! - Iterator protocol methods on the iterator prototypes
//! - Symbol wrapper tagging

use builtins::{Intrinsic, ObjectPrototype, Realm};
use core_types::{ObjectError, PropertyKey, Symbol, Value};

#[test]
fn test_generators_inherit_iterator_protocol_methods() {
    let realm = Realm::new();
    let g = realm.create_function("g", core_types::FunctionKind::Generator);
    let generator = Value::Object(realm.call_generator(&g).unwrap());
    assert!(realm.get(&generator, &PropertyKey::Symbol(Symbol::iterator())).is_callable());
    assert!(!realm.get(&generator, &PropertyKey::Symbol(Symbol::async_iterator())).is_callable());

    let ag = realm.create_function("ag", core_types::FunctionKind::AsyncGenerator);
    let async_generator = Value::Object(realm.call_generator(&ag).unwrap());
    assert!(realm
        .get(&async_generator, &PropertyKey::Symbol(Symbol::async_iterator()))
        .is_callable());
}

#[test]
fn test_well_known_tag_key_is_shared() {
    assert_eq!(PropertyKey::to_string_tag(), PropertyKey::Symbol(Symbol::to_string_tag()));
}

#[test]
fn test_symbol_values_tag_as_symbol() {
    let realm = Realm::new();
    let sym = Value::Symbol(Symbol::new(Some("s")));
    assert_eq!(ObjectPrototype::to_string(&realm, &sym), "[object Symbol]");
    let boxed = Value::Object(realm.box_primitive(&sym).unwrap());
    assert_eq!(ObjectPrototype::to_string(&realm, &boxed), "[object Symbol]");
}

#[test]
fn test_symbol_is_not_newable() {
    let realm = Realm::new();
    let symbol = Value::Object(realm.intrinsic(Intrinsic::Symbol));
    assert_eq!(realm.construct(&symbol).unwrap_err(), ObjectError::NotAConstructor);
}
