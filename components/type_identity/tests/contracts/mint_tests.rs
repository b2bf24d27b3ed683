//! Contract tests for identity minting

use builtins::{Intrinsic, Realm};
use core_types::{FunctionKind, ObjectRef, PropertyDescriptor, PropertyKey, Value};
use type_identity::{
    define_stable_type_identity, has_custom_type_identity, has_stable_type_identity, resolve_type,
    tagged_type, IdentityError,
};

fn tagged_class(realm: &Realm, name: &str) -> ObjectRef {
    let class = realm.create_class(name, None).unwrap();
    let proto = class
        .get(&"prototype".into(), &Value::Object(class.clone()))
        .as_object()
        .cloned()
        .unwrap();
    let getter = realm.constant_getter("get [Symbol.toStringTag]", Value::string(name));
    proto.define_own_property(PropertyKey::to_string_tag(), PropertyDescriptor::getter(getter, false, true));
    class
}

fn instance_of(realm: &Realm, ctor: &ObjectRef) -> Value {
    Value::Object(realm.construct(&Value::Object(ctor.clone())).unwrap())
}

#[test]
fn test_minting_makes_class_instances_stable() {
    let realm = Realm::new();
    let class = tagged_class(&realm, "Tagged");
    let before = instance_of(&realm, &class);
    assert!(has_custom_type_identity(&realm, Some(&before)));
    assert!(!has_stable_type_identity(&realm, Some(&before)));

    let minted = define_stable_type_identity(&realm, &Value::Object(class.clone()), &Value::string("Tagged"), None);
    assert_eq!(minted, Ok(true));

    let after = instance_of(&realm, &class);
    assert!(has_stable_type_identity(&realm, Some(&after)));
    assert!(has_stable_type_identity(&realm, Some(&before)));
}

#[test]
fn test_minting_is_idempotent() {
    let realm = Realm::new();
    let class = realm.create_class("Shape", None).unwrap();
    let ctor = Value::Object(class.clone());

    assert_eq!(
        define_stable_type_identity(&realm, &ctor, &Value::string(" Circle "), Some(&Value::string("CircleTag"))),
        Ok(true)
    );
    assert_eq!(
        define_stable_type_identity(&realm, &ctor, &Value::string(" Circle "), Some(&Value::string("CircleTag"))),
        Ok(false)
    );
    assert_eq!(
        define_stable_type_identity(&realm, &ctor, &Value::string("Square"), None),
        Ok(false)
    );

    let instance = instance_of(&realm, &class);
    assert_eq!(resolve_type(&realm, Some(&instance)).as_deref(), Some("Circle"));
    assert_eq!(tagged_type(&realm, Some(&instance)).as_deref(), Some("CircleTag"));
}

#[test]
fn test_minted_descriptors_are_hardened() {
    let realm = Realm::new();
    let class = realm.create_class("Box", None).unwrap();
    define_stable_type_identity(&realm, &Value::Object(class.clone()), &Value::string("Box"), None).unwrap();

    let name = class.get_own_property(&"name".into()).unwrap();
    assert!(!name.is_configurable() && !name.is_enumerable());
    assert_eq!(name.writable(), Some(false));

    let proto = class
        .get(&"prototype".into(), &Value::Object(class.clone()))
        .as_object()
        .cloned()
        .unwrap();
    let tag = proto.get_own_property(&PropertyKey::to_string_tag()).unwrap();
    assert!(tag.is_accessor());
    assert!(!tag.is_configurable() && !tag.is_enumerable());

    // Redefinition after minting is rejected by the object model itself
    assert!(!class.define_own_property("name".into(), PropertyDescriptor::frozen(Value::string("Other"))));
}

#[test]
fn test_minting_es3_constructor() {
    let realm = Realm::new();
    let ctor = realm.create_function("Legacy", FunctionKind::Normal);
    assert_eq!(
        define_stable_type_identity(&realm, &Value::Object(ctor.clone()), &Value::string("Legacy"), None),
        Ok(true)
    );
    let proto = ctor
        .get(&"prototype".into(), &Value::Object(ctor.clone()))
        .as_object()
        .cloned()
        .unwrap();
    let proto = Value::Object(proto);
    assert_eq!(tagged_type(&realm, Some(&proto)).as_deref(), Some("Legacy"));
    assert!(has_stable_type_identity(&realm, Some(&proto)));
    // ES3 instances inherit the tag rather than owning it
    assert!(!has_stable_type_identity(&realm, Some(&instance_of(&realm, &ctor))));
}

#[test]
fn test_builtin_and_arrow_constructors_are_rejected() {
    let realm = Realm::new();
    let boolean = Value::Object(realm.intrinsic(Intrinsic::Boolean));
    let arrow = Value::Object(realm.create_function("a", FunctionKind::Arrow));
    assert_eq!(
        define_stable_type_identity(&realm, &boolean, &Value::string("Foo"), None),
        Err(IdentityError::UnsupportedBuiltinConstructor)
    );
    assert_eq!(
        define_stable_type_identity(&realm, &arrow, &Value::string("Foo"), None),
        Err(IdentityError::InvalidConstructorKind)
    );
}

#[test]
fn test_non_function_constructor() {
    let realm = Realm::new();
    for value in [Value::Undefined, Value::string("Foo"), Value::Object(realm.new_object())] {
        assert_eq!(
            define_stable_type_identity(&realm, &value, &Value::string("Foo"), None),
            Err(IdentityError::InvalidConstructorKind)
        );
    }
}

#[test]
fn test_error_messages_name_the_condition() {
    assert!(IdentityError::EmptyTagValue.to_string().starts_with("EmptyTagValue"));
    assert!(IdentityError::InvalidNameType.to_string().starts_with("InvalidNameType"));
}
