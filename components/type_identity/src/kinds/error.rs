//! Error kind detection.
//!
//! `[[ErrorData]]` is only visible as the `"Error"` tagged type, and only when
//! no `@@toStringTag` on the chain could have produced that tag instead.

use builtins::Realm;
use core_types::{ErrorKind, ObjectRef, PropertyKey, Value, MAX_PROTOTYPE_CHAIN_DEPTH};

use crate::resolve::resolve_type;
use crate::signature::tagged_type;

/// An object with `[[ErrorData]]`, including subclass instances.
pub fn is_error(realm: &Realm, value: &Value) -> bool {
    if tagged_type(realm, Some(value)).as_deref() != Some("Error") {
        return false;
    }
    let key = PropertyKey::to_string_tag();
    !realm
        .lookup_chain(value)
        .iter()
        .any(|obj| obj.has_own_property(&key))
}

fn own_constructor(obj: &ObjectRef) -> Option<ObjectRef> {
    let desc = obj.get_own_property(&PropertyKey::from("constructor"))?;
    match desc.read(&Value::Object(obj.clone())) {
        Value::Object(ctor) if ctor.is_callable() => Some(ctor),
        _ => None,
    }
}

/// Whether `value` is `Error.prototype` or a prototype object derived from
/// it: each level owns a `constructor` whose `prototype` points back, up to
/// a constructor named `"Error"`.
pub fn is_error_prototype(value: &Value) -> bool {
    let mut current = value.as_object().cloned();
    for _ in 0..MAX_PROTOTYPE_CHAIN_DEPTH {
        let Some(obj) = current else {
            return false;
        };
        let Some(ctor) = own_constructor(&obj) else {
            return false;
        };
        let receiver = Value::Object(ctor.clone());
        let links_back = ctor
            .get(&PropertyKey::from("prototype"), &receiver)
            .as_object()
            .is_some_and(|proto| proto.ptr_eq(&obj));
        if !links_back {
            return false;
        }
        if ctor.get(&PropertyKey::from("name"), &receiver).as_str() == Some("Error") {
            return true;
        }
        current = obj.prototype();
    }
    false
}

/// Resolved type name of an error, `None` for non-errors.
pub fn error_type_name(realm: &Realm, value: &Value) -> Option<String> {
    if !is_error(realm, value) {
        return None;
    }
    resolve_type(realm, Some(value))
}

/// An error whose resolved name is one of the native error constructors.
pub fn is_native_error(realm: &Realm, value: &Value) -> bool {
    error_type_name(realm, value)
        .and_then(|name| ErrorKind::from_name(&name))
        .is_some()
}
