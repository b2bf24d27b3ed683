//! Type name resolution.

use builtins::Realm;
use core_types::{PropertyKey, Value};

use crate::constructor::defined_constructor_name;
use crate::signature::tagged_type;

/// The canonical type name of `value`.
///
/// The defined constructor's name wins when the value's own-or-inherited
/// `constructor` slot is itself callable; otherwise the tagged type is used.
/// Generator objects land on the tagged path because their inherited
/// `constructor` is `%GeneratorFunction.prototype%`, an ordinary object, so
/// they resolve to `"Generator"` / `"AsyncGenerator"` rather than the shared
/// factory name.
pub fn resolve_type(realm: &Realm, value: Option<&Value>) -> Option<String> {
    let value = value?;

    let Some(name) = defined_constructor_name(realm, Some(value)) else {
        tracing::trace!(target: "type_identity::resolve", fallback = "no_constructor");
        return tagged_type(realm, Some(value));
    };

    if !realm.get(value, &PropertyKey::from("constructor")).is_callable() {
        tracing::trace!(target: "type_identity::resolve", fallback = "broken_constructor", %name);
        return tagged_type(realm, Some(value));
    }

    Some(name)
}
