//! Identity minting.
//!
//! Hardens a user constructor's `name` and installs a hardened
//! `@@toStringTag` getter on its prototype, so instances keep resolving to
//! the chosen name after minification or monkey-patching. The change is
//! permanent: both descriptors become non-configurable.

use builtins::{Realm, ReflectObject};
use core_types::{FunctionKind, ObjectRef, PropertyDescriptor, PropertyKey, Value};

use crate::error::{IdentityError, IdentityResult};

fn eligible_constructor(constructor: &Value) -> IdentityResult<&ObjectRef> {
    let ctor = constructor
        .as_object()
        .filter(|_| ReflectObject::is_constructor(constructor))
        .ok_or(IdentityError::InvalidConstructorKind)?;
    match ctor.function_kind() {
        Some(FunctionKind::Class { .. } | FunctionKind::Normal) => Ok(ctor),
        _ => Err(IdentityError::UnsupportedBuiltinConstructor),
    }
}

fn validated_name(constructor_name: &Value) -> IdentityResult<String> {
    let name = constructor_name
        .as_str()
        .ok_or(IdentityError::InvalidNameType)?
        .trim();
    if name.is_empty() {
        return Err(IdentityError::EmptyNameValue);
    }
    Ok(name.to_string())
}

fn validated_tag(tagged_type: Option<&Value>, name: &str) -> IdentityResult<String> {
    match tagged_type.and_then(Value::as_str) {
        Some(tag) => {
            let tag = tag.trim();
            if tag.is_empty() {
                return Err(IdentityError::EmptyTagValue);
            }
            Ok(tag.to_string())
        }
        None => Ok(name.to_string()),
    }
}

/// Give `constructor` a stable type identity.
///
/// Arguments are checked in order: `constructor` must be constructable, then
/// a class or ES3-style function; `constructor_name` must be a non-blank
/// string; `tagged_type`, when it is a string, must be non-blank (any other
/// value falls back to the name). Names and tags are trimmed.
///
/// Returns `Ok(false)` without changing anything when the constructor's
/// `name` cannot be redefined (a previous minting won, or the constructor
/// lost its own `name` and is no longer extensible) or when its `prototype`
/// slot holds no object to carry the tag.
pub fn define_stable_type_identity(
    realm: &Realm,
    constructor: &Value,
    constructor_name: &Value,
    tagged_type: Option<&Value>,
) -> IdentityResult<bool> {
    eligible_constructor(constructor)?;
    let name = validated_name(constructor_name)?;
    let tag = validated_tag(tagged_type, &name)?;

    let name_key = PropertyKey::from("name");
    match ReflectObject::get_own_property_descriptor(constructor, &name_key) {
        Ok(Some(desc)) if !desc.is_configurable() => {
            tracing::debug!(target: "type_identity::mint", %name, "name already hardened; skipping");
            return Ok(false);
        }
        Ok(None) if ReflectObject::is_extensible(constructor) != Ok(true) => {
            tracing::debug!(target: "type_identity::mint", %name, "constructor cannot take a name; skipping");
            return Ok(false);
        }
        _ => {}
    }

    let prototype = match ReflectObject::get(constructor, &PropertyKey::from("prototype"), None) {
        Ok(prototype @ Value::Object(_)) => prototype,
        _ => {
            tracing::warn!(target: "type_identity::mint", %name, "constructor prototype is not an object");
            return Ok(false);
        }
    };

    // The name is known to be definable, so a tag that lands is never orphaned.
    let getter = realm.constant_getter("get [Symbol.toStringTag]", Value::string(tag.clone()));
    let tag_slot = PropertyDescriptor::getter(getter, false, false);
    if ReflectObject::define_property(&prototype, PropertyKey::to_string_tag(), tag_slot) != Ok(true) {
        tracing::debug!(target: "type_identity::mint", %name, %tag, "prototype tag is locked; skipping");
        return Ok(false);
    }
    let name_slot = PropertyDescriptor::frozen(Value::string(name.clone()));
    if ReflectObject::define_property(constructor, name_key, name_slot) != Ok(true) {
        tracing::warn!(target: "type_identity::mint", %name, "constructor rejected name redefinition");
        return Ok(false);
    }

    tracing::debug!(target: "type_identity::mint", %name, %tag, "minted stable type identity");
    Ok(true)
}
