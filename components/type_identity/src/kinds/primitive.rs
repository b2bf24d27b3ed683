//! Primitive and boxed-primitive detection.
//!
//! `is_x` matches the primitive itself, `is_boxed_x` matches a wrapper
//! object whose tag is genuine, `is_x_value` accepts either.

use builtins::Realm;
use core_types::Value;

use crate::classify::has_builtin_type_identity;
use crate::signature::tagged_type;

fn is_boxed(realm: &Realm, value: &Value, tag: &str) -> bool {
    value.type_of() == "object"
        && tagged_type(realm, Some(value)).as_deref() == Some(tag)
        && has_builtin_type_identity(realm, Some(value))
}

/// Primitive string
pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

/// `new String(...)`
pub fn is_boxed_string(realm: &Realm, value: &Value) -> bool {
    is_boxed(realm, value, "String")
}

/// Primitive or boxed string
pub fn is_string_value(realm: &Realm, value: &Value) -> bool {
    is_string(value) || is_boxed_string(realm, value)
}

/// Primitive number
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

/// `new Number(...)`
pub fn is_boxed_number(realm: &Realm, value: &Value) -> bool {
    is_boxed(realm, value, "Number")
}

/// Primitive or boxed number
pub fn is_number_value(realm: &Realm, value: &Value) -> bool {
    is_number(value) || is_boxed_number(realm, value)
}

/// Primitive boolean
pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Boolean(_))
}

/// `new Boolean(...)`
pub fn is_boxed_boolean(realm: &Realm, value: &Value) -> bool {
    is_boxed(realm, value, "Boolean")
}

/// Primitive or boxed boolean
pub fn is_boolean_value(realm: &Realm, value: &Value) -> bool {
    is_boolean(value) || is_boxed_boolean(realm, value)
}

/// Primitive symbol
pub fn is_symbol(value: &Value) -> bool {
    matches!(value, Value::Symbol(_))
}

/// `Object(symbol)`
pub fn is_boxed_symbol(realm: &Realm, value: &Value) -> bool {
    is_boxed(realm, value, "Symbol")
}

/// Primitive or boxed symbol
pub fn is_symbol_value(realm: &Realm, value: &Value) -> bool {
    is_symbol(value) || is_boxed_symbol(realm, value)
}

/// Primitive bigint
pub fn is_bigint(value: &Value) -> bool {
    matches!(value, Value::BigInt(_))
}

/// `Object(bigint)`
pub fn is_boxed_bigint(realm: &Realm, value: &Value) -> bool {
    is_boxed(realm, value, "BigInt")
}

/// Primitive or boxed bigint
pub fn is_bigint_value(realm: &Realm, value: &Value) -> bool {
    is_bigint(value) || is_boxed_bigint(realm, value)
}
