//! Property keys and property descriptors (ES2024 §6.2.6).

use std::fmt;

use crate::{ObjectRef, Symbol, Value};

/// A property key: either a string or a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// String key
    String(String),
    /// Symbol key
    Symbol(Symbol),
}

impl PropertyKey {
    /// The `Symbol.toStringTag` key
    pub fn to_string_tag() -> Self {
        PropertyKey::Symbol(Symbol::to_string_tag())
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::String(s) => write!(f, "{}", s),
            PropertyKey::Symbol(sym) => write!(f, "[{}]", sym),
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey::String(s.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey::String(s)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(sym: Symbol) -> Self {
        PropertyKey::Symbol(sym)
    }
}

/// A complete property descriptor.
#[derive(Debug, Clone)]
pub enum PropertyDescriptor {
    /// Data descriptor: has `value` and `writable`
    Data {
        /// Stored value
        value: Value,
        /// `[[Writable]]`
        writable: bool,
        /// `[[Enumerable]]`
        enumerable: bool,
        /// `[[Configurable]]`
        configurable: bool,
    },
    /// Accessor descriptor: has `get` and/or `set`
    Accessor {
        /// Getter function object
        get: Option<ObjectRef>,
        /// Setter function object
        set: Option<ObjectRef>,
        /// `[[Enumerable]]`
        enumerable: bool,
        /// `[[Configurable]]`
        configurable: bool,
    },
}

impl PropertyDescriptor {
    /// Property created by assignment or an object literal:
    /// writable, enumerable, configurable.
    pub fn data(value: Value) -> Self {
        PropertyDescriptor::Data {
            value,
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    /// Shape of builtin methods and `prototype.constructor`:
    /// writable, non-enumerable, configurable.
    pub fn method(value: Value) -> Self {
        PropertyDescriptor::Data {
            value,
            writable: true,
            enumerable: false,
            configurable: true,
        }
    }

    /// Shape of function `name`/`length` and engine `@@toStringTag` values:
    /// read-only, non-enumerable, configurable.
    pub fn readonly(value: Value) -> Self {
        PropertyDescriptor::Data {
            value,
            writable: false,
            enumerable: false,
            configurable: true,
        }
    }

    /// Read-only, non-enumerable, non-configurable.
    pub fn frozen(value: Value) -> Self {
        PropertyDescriptor::Data {
            value,
            writable: false,
            enumerable: false,
            configurable: false,
        }
    }

    /// Getter-only accessor
    pub fn getter(get: ObjectRef, enumerable: bool, configurable: bool) -> Self {
        PropertyDescriptor::Accessor {
            get: Some(get),
            set: None,
            enumerable,
            configurable,
        }
    }

    /// Is this descriptor configurable?
    pub fn is_configurable(&self) -> bool {
        match self {
            PropertyDescriptor::Data { configurable, .. }
            | PropertyDescriptor::Accessor { configurable, .. } => *configurable,
        }
    }

    /// Is this descriptor enumerable?
    pub fn is_enumerable(&self) -> bool {
        match self {
            PropertyDescriptor::Data { enumerable, .. }
            | PropertyDescriptor::Accessor { enumerable, .. } => *enumerable,
        }
    }

    /// `[[Writable]]` of a data descriptor; accessors have no such field.
    pub fn writable(&self) -> Option<bool> {
        match self {
            PropertyDescriptor::Data { writable, .. } => Some(*writable),
            PropertyDescriptor::Accessor { .. } => None,
        }
    }

    /// Is this a data descriptor?
    pub fn is_data(&self) -> bool {
        matches!(self, PropertyDescriptor::Data { .. })
    }

    /// Is this an accessor descriptor?
    pub fn is_accessor(&self) -> bool {
        matches!(self, PropertyDescriptor::Accessor { .. })
    }

    /// Stored value of a data descriptor
    pub fn value(&self) -> Option<&Value> {
        match self {
            PropertyDescriptor::Data { value, .. } => Some(value),
            PropertyDescriptor::Accessor { .. } => None,
        }
    }

    /// Read the property the way `[[Get]]` does, with `receiver` as `this`
    /// for getters.
    pub fn read(&self, receiver: &Value) -> Value {
        match self {
            PropertyDescriptor::Data { value, .. } => value.clone(),
            PropertyDescriptor::Accessor { get: Some(get), .. } => get.call(receiver, &[]),
            PropertyDescriptor::Accessor { get: None, .. } => Value::Undefined,
        }
    }
}
