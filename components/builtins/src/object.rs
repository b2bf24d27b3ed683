//! Object.prototype methods

use core_types::{ObjectKind, ObjectRef, PropertyKey, Value};

use crate::realm::Realm;

/// Object.prototype methods
pub struct ObjectPrototype;

impl ObjectPrototype {
    /// Object.prototype.toString() (ES2024 §20.1.3.6)
    ///
    /// Always returns `"[object <Tag>]"`. A string-valued `@@toStringTag`
    /// found through `[[Get]]` wins over the tag derived from internal slots.
    pub fn to_string(realm: &Realm, this: &Value) -> String {
        let obj = match this {
            Value::Undefined => return "[object Undefined]".to_string(),
            Value::Null => return "[object Null]".to_string(),
            other => match realm.box_primitive(other) {
                Some(obj) => obj,
                None => return "[object Object]".to_string(),
            },
        };

        let builtin_tag = Self::builtin_tag(&obj);
        let receiver = Value::Object(obj.clone());
        let tag = match obj.get(&PropertyKey::to_string_tag(), &receiver) {
            Value::String(tag) => tag,
            _ => builtin_tag.to_string(),
        };
        format!("[object {}]", tag)
    }

    fn builtin_tag(obj: &ObjectRef) -> &'static str {
        match obj.kind() {
            ObjectKind::Array => "Array",
            ObjectKind::Arguments => "Arguments",
            ObjectKind::Function(_) => "Function",
            ObjectKind::Error(_) => "Error",
            ObjectKind::Boolean(_) => "Boolean",
            ObjectKind::Number(_) => "Number",
            ObjectKind::String(_) => "String",
            ObjectKind::Date(_) => "Date",
            ObjectKind::RegExp(_) => "RegExp",
            _ => "Object",
        }
    }
}
