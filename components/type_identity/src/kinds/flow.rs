//! Control-flow object detection: generators, promises and thenables.

use builtins::Realm;
use core_types::{PropertyKey, Value};

use crate::kinds::function::is_generic_function;
use crate::resolve::resolve_type;
use crate::signature::tagged_type;

fn tagged_and_resolved(realm: &Realm, value: &Value, name: &str) -> bool {
    tagged_type(realm, Some(value)).as_deref() == Some(name)
        && resolve_type(realm, Some(value)).as_deref() == Some(name)
}

/// Generator object produced by calling a `function*`
pub fn is_generator(realm: &Realm, value: &Value) -> bool {
    tagged_and_resolved(realm, value, "Generator")
}

/// Generator object produced by calling an `async function*`
pub fn is_async_generator(realm: &Realm, value: &Value) -> bool {
    tagged_and_resolved(realm, value, "AsyncGenerator")
}

fn then_of(realm: &Realm, value: &Value) -> Option<Value> {
    if !value.is_object() {
        return None;
    }
    let then = realm.get(value, &PropertyKey::from("then"));
    then.is_callable().then_some(then)
}

/// Object or function with a callable `then`
pub fn is_thenable(realm: &Realm, value: &Value) -> bool {
    then_of(realm, value).is_some()
}

/// Thenable whose `then` is a generic function: async, generator and class
/// `then` implementations are rejected.
pub fn is_safe_thenable(realm: &Realm, value: &Value) -> bool {
    then_of(realm, value).is_some_and(|then| is_generic_function(realm, &then))
}

/// Promise-tagged thenable
pub fn is_promise(realm: &Realm, value: &Value) -> bool {
    tagged_type(realm, Some(value)).as_deref() == Some("Promise") && is_thenable(realm, value)
}
