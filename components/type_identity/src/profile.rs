//! Diagnostic snapshot of everything the core reports about one value.

use builtins::Realm;
use core_types::Value;
use serde::{Deserialize, Serialize};

use crate::classify::{has_builtin_type_identity, has_custom_type_identity, has_stable_type_identity};
use crate::constructor::defined_constructor_name;
use crate::resolve::resolve_type;
use crate::signature::{signature, tagged_type};

/// All type-identity verdicts for a single value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeProfile {
    /// `[object <Name>]`
    pub signature: Option<String>,
    /// `<Name>` from the signature
    pub tagged_type: Option<String>,
    /// Canonical type name
    pub resolved_type: Option<String>,
    /// Own `name` of the defined constructor
    pub constructor_name: Option<String>,
    /// Identity is the engine's own
    pub builtin: bool,
    /// Identity comes from a user-installed tag
    pub custom: bool,
    /// Identity cannot change any more
    pub stable: bool,
}

impl TypeProfile {
    /// Profile `value`
    pub fn of(realm: &Realm, value: &Value) -> Self {
        let value = Some(value);
        TypeProfile {
            signature: signature(realm, value),
            tagged_type: tagged_type(realm, value),
            resolved_type: resolve_type(realm, value),
            constructor_name: defined_constructor_name(realm, value),
            builtin: has_builtin_type_identity(realm, value),
            custom: has_custom_type_identity(realm, value),
            stable: has_stable_type_identity(realm, value),
        }
    }

    /// Render as a JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
