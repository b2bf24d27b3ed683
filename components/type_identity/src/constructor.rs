//! Constructor resolution.
//!
//! Finds the function that "defined" a value by looking at `constructor`
//! slots on the value and on its prototype. Each slot may be missing,
//! shadowed, replaced by a non-function, or reachable only through an
//! intermediate object, so the lookup falls back through several readings
//! before giving up.

use builtins::Realm;
use core_types::{ObjectRef, PropertyKey, Value};

fn constructor_key() -> PropertyKey {
    PropertyKey::from("constructor")
}

fn as_callable(value: Value) -> Option<ObjectRef> {
    match value {
        Value::Object(obj) if obj.is_callable() => Some(obj),
        _ => None,
    }
}

/// One level of the lookup: own slot, then inherited slot, then the
/// inherited slot's own `constructor` when the inherited slot is an object.
fn constructor_at(realm: &Realm, value: &Value) -> Option<ObjectRef> {
    let key = constructor_key();

    if let Some(own) = realm.get_own_property(value, &key) {
        if let Some(ctor) = as_callable(own.read(value)) {
            return Some(ctor);
        }
    }

    let inherited = realm.get(value, &key);
    if inherited.is_callable() {
        return as_callable(inherited);
    }
    if inherited.is_object() {
        return as_callable(realm.get(&inherited, &key));
    }
    None
}

/// The constructor that defined `value`, if any part of its `constructor`
/// chain survives.
///
/// `None` for no argument, `null`, `undefined` and objects whose whole
/// lookup (value, then prototype) finds no function.
pub fn defined_constructor(realm: &Realm, value: Option<&Value>) -> Option<ObjectRef> {
    let value = value.filter(|v| !v.is_nullish())?;
    if let Some(ctor) = constructor_at(realm, value) {
        return Some(ctor);
    }
    let prototype = realm.prototype_of(value)?;
    constructor_at(realm, &Value::Object(prototype))
}

/// The own `name` of [`defined_constructor`]. Getter-backed names are
/// evaluated; names that are not strings count as absent.
pub fn defined_constructor_name(realm: &Realm, value: Option<&Value>) -> Option<String> {
    let ctor = defined_constructor(realm, value)?;
    let desc = ctor.get_own_property(&PropertyKey::from("name"))?;
    match desc.read(&Value::Object(ctor)) {
        Value::String(name) => Some(name),
        _ => None,
    }
}
