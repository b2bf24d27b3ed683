//! Function kind detection.

use builtins::Realm;
use core_types::{FunctionKind, Value};

use crate::signature::tagged_type;

fn kind_of(value: &Value) -> Option<FunctionKind> {
    value.as_object().and_then(|obj| obj.function_kind())
}

fn tagged_as(realm: &Realm, value: &Value, tag: &str) -> bool {
    value.is_callable() && tagged_type(realm, Some(value)).as_deref() == Some(tag)
}

/// Any callable value
pub fn is_function(value: &Value) -> bool {
    value.is_callable()
}

/// `class C {}`
pub fn is_class(value: &Value) -> bool {
    kind_of(value).is_some_and(|kind| kind.is_class())
}

/// `function f() {}`
pub fn is_es3_function(value: &Value) -> bool {
    kind_of(value).is_some_and(|kind| kind.is_es3())
}

/// `() => {}` or `async () => {}`
pub fn is_arrow_function(value: &Value) -> bool {
    matches!(kind_of(value), Some(FunctionKind::Arrow | FunctionKind::AsyncArrow))
}

/// Result of `Function.prototype.bind`
pub fn is_bound_function(value: &Value) -> bool {
    matches!(kind_of(value), Some(FunctionKind::Bound { .. }))
}

/// Tagged as `AsyncFunction`
pub fn is_async_function(realm: &Realm, value: &Value) -> bool {
    tagged_as(realm, value, "AsyncFunction")
}

/// Tagged as `GeneratorFunction`
pub fn is_generator_function(realm: &Realm, value: &Value) -> bool {
    tagged_as(realm, value, "GeneratorFunction")
}

/// Tagged as `AsyncGeneratorFunction`
pub fn is_async_generator_function(realm: &Realm, value: &Value) -> bool {
    tagged_as(realm, value, "AsyncGeneratorFunction")
}

/// A callable that is not a class, async function, generator function or
/// async generator function.
pub fn is_generic_function(realm: &Realm, value: &Value) -> bool {
    is_function(value)
        && !is_class(value)
        && !is_async_function(realm, value)
        && !is_generator_function(realm, value)
        && !is_async_generator_function(realm, value)
}
