//! Signature extraction.
//!
//! The signature of a value is the `[object <Name>]` string produced by
//! `Object.prototype.toString`. It reflects internal slots, overridden by any
//! string-valued `@@toStringTag` the value inherits.

use builtins::{ObjectPrototype, Realm};
use core_types::Value;

const SIGNATURE_PREFIX: &str = "[object ";
const SIGNATURE_SUFFIX: &str = "]";

/// `Object.prototype.toString.call(value)`.
///
/// `None` only when no value was supplied; an explicit `undefined` yields
/// `"[object Undefined]"`.
pub fn signature(realm: &Realm, value: Option<&Value>) -> Option<String> {
    value.map(|value| ObjectPrototype::to_string(realm, value))
}

/// The `<Name>` part of the signature.
///
/// Passes `None` through unchanged when no value was supplied.
pub fn tagged_type(realm: &Realm, value: Option<&Value>) -> Option<String> {
    signature(realm, value).map(|signature| unwrap_signature(&signature))
}

/// Strip the fixed `[object ` / `]` wrapper. Empty or malformed input is
/// returned as is.
pub(crate) fn unwrap_signature(signature: &str) -> String {
    signature
        .strip_prefix(SIGNATURE_PREFIX)
        .and_then(|rest| rest.strip_suffix(SIGNATURE_SUFFIX))
        .unwrap_or(signature)
        .to_string()
}
