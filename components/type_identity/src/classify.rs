//! Identity classification: builtin, custom and stable.
//!
//! A value's type identity is *builtin* when it behaves exactly like the
//! engine left it, *custom* when user code installed a `@@toStringTag`
//! somewhere on its chain, and *stable* when it is builtin or when both the
//! tag and the constructor name are hardened against redefinition.
//!
//! `builtin` and `stable` inspect only the value and its immediate
//! prototype; `custom` walks the whole (bounded) chain.

use builtins::Realm;
use core_types::{FunctionKind, PropertyDescriptor, PropertyKey, Value};

use crate::constructor::defined_constructor;
use crate::descriptor::DescriptorShape;

/// Tags the engine installs directly on namespace objects.
pub const OWNED_BUILTIN_TAGS: [&str; 4] = ["Math", "JSON", "Reflect", "Atomics"];

/// Tags the engine installs on prototypes, seen by instances one level up.
pub const INHERITED_BUILTIN_TAGS: [&str; 13] = [
    "Promise",
    "Generator",
    "AsyncGenerator",
    "BigInt",
    "Symbol",
    "Map",
    "Set",
    "WeakMap",
    "WeakSet",
    "ArrayBuffer",
    "AsyncFunction",
    "GeneratorFunction",
    "AsyncGeneratorFunction",
];

/// Where a `@@toStringTag` override sits relative to the value.
#[derive(Debug, Clone)]
pub(crate) enum TagOverride {
    Absent,
    Own(PropertyDescriptor),
    Prototype(PropertyDescriptor),
    /// Both the value and its prototype own one
    Ambiguous,
}

pub(crate) fn locate_tag_override(realm: &Realm, value: &Value) -> TagOverride {
    let key = PropertyKey::to_string_tag();
    let own = realm.get_own_property(value, &key);
    let inherited = realm
        .prototype_of(value)
        .and_then(|proto| proto.get_own_property(&key));
    match (own, inherited) {
        (None, None) => TagOverride::Absent,
        (Some(desc), None) => TagOverride::Own(desc),
        (None, Some(desc)) => TagOverride::Prototype(desc),
        (Some(_), Some(_)) => TagOverride::Ambiguous,
    }
}

fn is_default_tag_in(desc: &PropertyDescriptor, allowed: &[&str]) -> bool {
    DescriptorShape::from(desc).is_engine_default_tag()
        && desc
            .value()
            .and_then(Value::as_str)
            .is_some_and(|tag| allowed.contains(&tag))
}

fn defined_by_class(realm: &Realm, value: &Value) -> bool {
    defined_constructor(realm, Some(value))
        .and_then(|ctor| ctor.function_kind())
        .is_some_and(|kind| kind.is_class())
}

/// Whether `value` shows the type identity the engine gave it.
///
/// `null` and `undefined` are builtin by definition. Instances of classes
/// never are, even when the class extends a builtin.
pub fn has_builtin_type_identity(realm: &Realm, value: Option<&Value>) -> bool {
    let Some(value) = value else {
        return false;
    };
    if value.is_nullish() {
        return true;
    }
    if defined_by_class(realm, value) {
        return false;
    }
    match locate_tag_override(realm, value) {
        TagOverride::Absent => true,
        TagOverride::Own(desc) => is_default_tag_in(&desc, &OWNED_BUILTIN_TAGS),
        TagOverride::Prototype(desc) => is_default_tag_in(&desc, &INHERITED_BUILTIN_TAGS),
        TagOverride::Ambiguous => false,
    }
}

/// Whether `value` carries a non-builtin `@@toStringTag` anywhere on its
/// prototype chain.
pub fn has_custom_type_identity(realm: &Realm, value: Option<&Value>) -> bool {
    let Some(value) = value else {
        return false;
    };
    if has_builtin_type_identity(realm, Some(value)) {
        return false;
    }
    let key = PropertyKey::to_string_tag();
    realm
        .lookup_chain(value)
        .iter()
        .any(|obj| obj.has_own_property(&key))
}

/// Whether `value`'s type identity can no longer change.
///
/// Builtin identities are stable. Otherwise the tag must be hardened and
/// sit where the constructor's kind puts it (on the prototype for classes,
/// on the value for ES3 functions), and the constructor's own `name` must be
/// hardened too.
///
/// Native error instances carry no tag override, so they are builtin and
/// answer `true` through that short-circuit. Instances of error subclasses
/// fail the class check and are not stable.
pub fn has_stable_type_identity(realm: &Realm, value: Option<&Value>) -> bool {
    if has_builtin_type_identity(realm, value) {
        return true;
    }
    let Some(value) = value else {
        return false;
    };

    let (tag, on_prototype) = match locate_tag_override(realm, value) {
        TagOverride::Own(desc) => (desc, false),
        TagOverride::Prototype(desc) => (desc, true),
        TagOverride::Absent | TagOverride::Ambiguous => return false,
    };
    if !DescriptorShape::from(&tag).is_hardened() {
        return false;
    }

    let Some(ctor) = defined_constructor(realm, Some(value)) else {
        return false;
    };
    let placed = match ctor.function_kind() {
        Some(FunctionKind::Class { .. }) => on_prototype,
        Some(FunctionKind::Normal) => !on_prototype,
        _ => false,
    };
    if !placed {
        return false;
    }

    ctor.get_own_property(&PropertyKey::from("name"))
        .is_some_and(|name| DescriptorShape::from(&name).is_hardened())
}
