//! Contract tests for the Reflect object

use builtins::{Realm, ReflectError, ReflectObject};
use core_types::{PropertyDescriptor, PropertyKey, Value};

#[test]
fn test_reflect_get_uses_receiver() {
    let realm = Realm::new();
    let proto = realm.new_object();
    realm.define_getter(
        &proto,
        "self".into(),
        std::rc::Rc::new(|this: &Value, _: &[Value]| this.clone()),
    );
    let obj = Value::Object(realm.object_create(Some(&proto)));
    let other = Value::Number(5.0);
    assert_eq!(ReflectObject::get(&obj, &"self".into(), None), Ok(obj.clone()));
    assert_eq!(ReflectObject::get(&obj, &"self".into(), Some(&other)), Ok(other));
}

#[test]
fn test_reflect_descriptor_read_does_not_invoke_getters() {
    let realm = Realm::new();
    let class = realm.create_class("Tagged", None).unwrap();
    let prototype = realm.get(&Value::Object(class), &"prototype".into());
    let getter = realm.constant_getter("get [Symbol.toStringTag]", Value::string("Tagged"));
    assert_eq!(
        ReflectObject::define_property(
            &prototype,
            PropertyKey::to_string_tag(),
            PropertyDescriptor::getter(getter, false, true)
        ),
        Ok(true)
    );
    let desc = ReflectObject::get_own_property_descriptor(&prototype, &PropertyKey::to_string_tag())
        .unwrap()
        .unwrap();
    assert_eq!(desc.value(), None);
    assert!(desc.is_configurable());
}

#[test]
fn test_reflect_is_constructor_never_calls() {
    let realm = Realm::new();
    let arrow = realm.create_function("a", core_types::FunctionKind::Arrow);
    let class = realm.create_class("C", None).unwrap();
    assert!(!ReflectObject::is_constructor(&Value::Object(arrow)));
    assert!(ReflectObject::is_constructor(&Value::Object(class)));
    assert!(!ReflectObject::is_constructor(&Value::Null));
}

#[test]
fn test_reflect_rejects_primitive_targets() {
    assert_eq!(
        ReflectObject::get(&Value::string("s"), &"length".into(), None),
        Err(ReflectError::NonObjectTarget("Reflect.get"))
    );
    assert_eq!(
        ReflectError::NonObjectTarget("Reflect.get").to_string(),
        "TypeError: Reflect.get called on non-object"
    );
    assert!(ReflectObject::is_extensible(&Value::Number(1.0)).is_err());
}
