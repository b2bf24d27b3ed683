//! Ordinary objects and their internal methods (ES2024 §10.1).
//!
//! Objects are shared, mutable handles. The fields of [`ObjectData`] are only
//! reachable through the internal-method API on [`ObjectRef`], which keeps the
//! descriptor invariants and prevents prototype cycles.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use num_bigint::BigInt;

use crate::{
    ErrorKind, FunctionData, FunctionKind, ObjectError, PropertyDescriptor, PropertyKey, Symbol,
    Value,
};

/// Maximum prototype chain depth walked by any lookup.
pub const MAX_PROTOTYPE_CHAIN_DEPTH: usize = 1024;

/// Internal slots that distinguish exotic and builtin objects from ordinary ones.
#[derive(Debug, Clone)]
pub enum ObjectKind {
    /// Ordinary object
    Ordinary,
    /// Array exotic object
    Array,
    /// Arguments exotic object
    Arguments,
    /// Function object
    Function(FunctionData),
    /// Object with `[[ErrorData]]`
    Error(ErrorKind),
    /// `[[BooleanData]]`
    Boolean(bool),
    /// `[[NumberData]]`
    Number(f64),
    /// `[[StringData]]`
    String(String),
    /// `[[SymbolData]]`
    Symbol(Symbol),
    /// `[[BigIntData]]`
    BigInt(BigInt),
    /// `[[DateValue]]`
    Date(f64),
    /// `[[RegExpMatcher]]`, kept as source text
    RegExp(String),
    /// `[[MapData]]`
    Map,
    /// `[[SetData]]`
    Set,
    /// `[[WeakMapData]]`
    WeakMap,
    /// `[[WeakSetData]]`
    WeakSet,
    /// `[[PromiseState]]`
    Promise,
    /// `[[GeneratorState]]`
    Generator,
    /// `[[AsyncGeneratorState]]`
    AsyncGenerator,
    /// `[[ArrayBufferData]]`
    ArrayBuffer,
}

impl ObjectKind {
    /// Short label used by `Debug` output
    pub fn label(&self) -> &'static str {
        match self {
            ObjectKind::Ordinary => "Ordinary",
            ObjectKind::Array => "Array",
            ObjectKind::Arguments => "Arguments",
            ObjectKind::Function(_) => "Function",
            ObjectKind::Error(_) => "Error",
            ObjectKind::Boolean(_) => "Boolean",
            ObjectKind::Number(_) => "Number",
            ObjectKind::String(_) => "String",
            ObjectKind::Symbol(_) => "Symbol",
            ObjectKind::BigInt(_) => "BigInt",
            ObjectKind::Date(_) => "Date",
            ObjectKind::RegExp(_) => "RegExp",
            ObjectKind::Map => "Map",
            ObjectKind::Set => "Set",
            ObjectKind::WeakMap => "WeakMap",
            ObjectKind::WeakSet => "WeakSet",
            ObjectKind::Promise => "Promise",
            ObjectKind::Generator => "Generator",
            ObjectKind::AsyncGenerator => "AsyncGenerator",
            ObjectKind::ArrayBuffer => "ArrayBuffer",
        }
    }
}

/// Internal object data
#[derive(Debug)]
pub struct ObjectData {
    kind: ObjectKind,
    prototype: Option<ObjectRef>,
    extensible: bool,
    /// Own properties in insertion order
    properties: Vec<(PropertyKey, PropertyDescriptor)>,
}

impl ObjectData {
    fn position(&self, key: &PropertyKey) -> Option<usize> {
        self.properties.iter().position(|(k, _)| k == key)
    }
}

/// Shared handle to an object. Equality is identity.
#[derive(Clone)]
pub struct ObjectRef(Rc<RefCell<ObjectData>>);

impl ObjectRef {
    /// Allocate an object with the given internal slots and `[[Prototype]]`.
    pub fn new(kind: ObjectKind, prototype: Option<ObjectRef>) -> Self {
        ObjectRef(Rc::new(RefCell::new(ObjectData {
            kind,
            prototype,
            extensible: true,
            properties: Vec::new(),
        })))
    }

    /// Identity comparison
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Internal slots of this object
    pub fn kind(&self) -> ObjectKind {
        self.0.borrow().kind.clone()
    }

    /// Syntactic origin, when this object is a function
    pub fn function_kind(&self) -> Option<FunctionKind> {
        match &self.0.borrow().kind {
            ObjectKind::Function(data) => Some(data.kind),
            _ => None,
        }
    }

    /// `[[BoundTargetFunction]]`, when this object is a bound function
    pub fn bound_target(&self) -> Option<ObjectRef> {
        match &self.0.borrow().kind {
            ObjectKind::Function(data) => data.bound_target.clone(),
            _ => None,
        }
    }

    /// Whether the object has `[[Call]]`
    pub fn is_callable(&self) -> bool {
        matches!(self.0.borrow().kind, ObjectKind::Function(_))
    }

    /// Whether the object has `[[Construct]]`
    pub fn is_constructor(&self) -> bool {
        self.function_kind()
            .is_some_and(|kind| kind.is_constructor())
    }

    /// `[[Call]]`; non-callable objects and functions without behavior
    /// produce `undefined`.
    pub fn call(&self, this: &Value, args: &[Value]) -> Value {
        let behavior = match &self.0.borrow().kind {
            ObjectKind::Function(data) => data.behavior.clone(),
            _ => None,
        };
        match behavior {
            Some(behavior) => behavior(this, args),
            None => Value::Undefined,
        }
    }

    // -- [[GetPrototypeOf]] / [[SetPrototypeOf]] ---------------------------

    /// `[[GetPrototypeOf]]()`
    pub fn prototype(&self) -> Option<ObjectRef> {
        self.0.borrow().prototype.clone()
    }

    /// `[[SetPrototypeOf]](V)` (ES2024 §10.1.2.1)
    pub fn set_prototype(&self, prototype: Option<ObjectRef>) -> Result<(), ObjectError> {
        let current = self.prototype();
        let unchanged = match (&current, &prototype) {
            (Some(a), Some(b)) => a.ptr_eq(b),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            return Ok(());
        }
        if !self.is_extensible() {
            return Err(ObjectError::NotExtensible);
        }

        let mut cursor = prototype.clone();
        let mut depth = 0;
        while let Some(p) = cursor {
            if p.ptr_eq(self) {
                return Err(ObjectError::PrototypeCycle);
            }
            depth += 1;
            if depth > MAX_PROTOTYPE_CHAIN_DEPTH {
                return Err(ObjectError::PrototypeChainTooDeep {
                    max: MAX_PROTOTYPE_CHAIN_DEPTH,
                });
            }
            cursor = p.prototype();
        }

        self.0.borrow_mut().prototype = prototype;
        Ok(())
    }

    /// Iterate over the `[[Prototype]]` chain, excluding `self`.
    pub fn prototype_chain(&self) -> PrototypeChain {
        PrototypeChain {
            next: self.prototype(),
            depth: 0,
        }
    }

    // -- [[IsExtensible]] / [[PreventExtensions]] --------------------------

    /// `[[IsExtensible]]()`
    pub fn is_extensible(&self) -> bool {
        self.0.borrow().extensible
    }

    /// `[[PreventExtensions]]()`
    pub fn prevent_extensions(&self) {
        self.0.borrow_mut().extensible = false;
    }

    // -- Own properties ------------------------------------------------------

    /// `[[GetOwnProperty]](P)`
    pub fn get_own_property(&self, key: &PropertyKey) -> Option<PropertyDescriptor> {
        let data = self.0.borrow();
        data.position(key).map(|i| data.properties[i].1.clone())
    }

    /// `HasOwnProperty(O, P)`
    pub fn has_own_property(&self, key: &PropertyKey) -> bool {
        self.0.borrow().position(key).is_some()
    }

    /// `[[DefineOwnProperty]](P, Desc)` with a complete descriptor.
    ///
    /// Returns `false` when ValidateAndApplyPropertyDescriptor rejects the
    /// change: a new key on a non-extensible object, or an incompatible
    /// redefinition of a non-configurable property.
    pub fn define_own_property(&self, key: PropertyKey, desc: PropertyDescriptor) -> bool {
        let mut data = self.0.borrow_mut();
        match data.position(&key) {
            Some(i) => {
                if !is_compatible_redefinition(&data.properties[i].1, &desc) {
                    return false;
                }
                data.properties[i].1 = desc;
                true
            }
            None => {
                if !data.extensible {
                    return false;
                }
                data.properties.push((key, desc));
                true
            }
        }
    }

    /// `[[Delete]](P)`; `false` when the property is non-configurable.
    pub fn delete(&self, key: &PropertyKey) -> bool {
        let mut data = self.0.borrow_mut();
        match data.position(key) {
            Some(i) if !data.properties[i].1.is_configurable() => false,
            Some(i) => {
                data.properties.remove(i);
                true
            }
            None => true,
        }
    }

    // -- [[Get]] -------------------------------------------------------------

    /// Find the first object on the chain (starting at `self`) that owns
    /// `key`, with its descriptor.
    pub fn lookup(&self, key: &PropertyKey) -> Option<(ObjectRef, PropertyDescriptor)> {
        std::iter::once(self.clone())
            .chain(self.prototype_chain())
            .find_map(|holder| {
                holder
                    .get_own_property(key)
                    .map(|desc| (holder.clone(), desc))
            })
    }

    /// `[[Get]](P, Receiver)`
    pub fn get(&self, key: &PropertyKey, receiver: &Value) -> Value {
        match self.lookup(key) {
            Some((_, desc)) => desc.read(receiver),
            None => Value::Undefined,
        }
    }
}

/// ValidateAndApplyPropertyDescriptor for an existing property
/// (ES2024 §10.1.6.3, complete descriptors only).
fn is_compatible_redefinition(current: &PropertyDescriptor, desc: &PropertyDescriptor) -> bool {
    if current.is_configurable() {
        return true;
    }
    if desc.is_configurable() || desc.is_enumerable() != current.is_enumerable() {
        return false;
    }
    match (current, desc) {
        (
            PropertyDescriptor::Data {
                value: cur_value,
                writable: cur_writable,
                ..
            },
            PropertyDescriptor::Data {
                value: new_value,
                writable: new_writable,
                ..
            },
        ) => *cur_writable || (!*new_writable && cur_value.same_value(new_value)),
        (
            PropertyDescriptor::Accessor {
                get: cur_get,
                set: cur_set,
                ..
            },
            PropertyDescriptor::Accessor {
                get: new_get,
                set: new_set,
                ..
            },
        ) => cur_get == new_get && cur_set == new_set,
        _ => false,
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Prototype and constructor links form cycles; print only local facts.
        let data = self.0.borrow();
        f.debug_struct("ObjectRef")
            .field("kind", &data.kind.label())
            .field("properties", &data.properties.len())
            .field("has_prototype", &data.prototype.is_some())
            .finish()
    }
}

/// Iterator over a prototype chain, capped at [`MAX_PROTOTYPE_CHAIN_DEPTH`].
pub struct PrototypeChain {
    next: Option<ObjectRef>,
    depth: usize,
}

impl Iterator for PrototypeChain {
    type Item = ObjectRef;

    fn next(&mut self) -> Option<ObjectRef> {
        if self.depth >= MAX_PROTOTYPE_CHAIN_DEPTH {
            return None;
        }
        let current = self.next.take()?;
        self.depth += 1;
        self.next = current.prototype();
        Some(current)
    }
}
