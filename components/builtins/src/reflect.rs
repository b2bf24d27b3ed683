//! Reflect object implementation per ES2024 §28.1
//!
//! The Reflect functions surface the internal methods of [`ObjectRef`] with
//! the argument checks ECMAScript performs: every target must be an
//! object, otherwise a `TypeError` is raised.

use core_types::{ObjectRef, PropertyDescriptor, PropertyKey, Value};
use thiserror::Error;

/// Errors raised by the Reflect functions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectError {
    /// The target argument was not an object
    #[error("TypeError: {0} called on non-object")]
    NonObjectTarget(&'static str),
}

/// Result type for Reflect operations
pub type ReflectResult<T> = Result<T, ReflectError>;

/// Reflect object - static methods mirroring the internal methods
pub struct ReflectObject;

impl ReflectObject {
    fn target<'a>(target: &'a Value, method: &'static str) -> ReflectResult<&'a ObjectRef> {
        target.as_object().ok_or(ReflectError::NonObjectTarget(method))
    }

    /// Reflect.get(target, propertyKey [, receiver])
    pub fn get(target: &Value, key: &PropertyKey, receiver: Option<&Value>) -> ReflectResult<Value> {
        let obj = Self::target(target, "Reflect.get")?;
        Ok(obj.get(key, receiver.unwrap_or(target)))
    }

    /// Reflect.getOwnPropertyDescriptor(target, propertyKey)
    pub fn get_own_property_descriptor(
        target: &Value,
        key: &PropertyKey,
    ) -> ReflectResult<Option<PropertyDescriptor>> {
        let obj = Self::target(target, "Reflect.getOwnPropertyDescriptor")?;
        Ok(obj.get_own_property(key))
    }

    /// Reflect.defineProperty(target, propertyKey, attributes)
    pub fn define_property(target: &Value, key: PropertyKey, desc: PropertyDescriptor) -> ReflectResult<bool> {
        let obj = Self::target(target, "Reflect.defineProperty")?;
        Ok(obj.define_own_property(key, desc))
    }

    /// Reflect.getPrototypeOf(target); `Value::Null` for a null prototype
    pub fn get_prototype_of(target: &Value) -> ReflectResult<Value> {
        let obj = Self::target(target, "Reflect.getPrototypeOf")?;
        Ok(obj.prototype().map(Value::Object).unwrap_or(Value::Null))
    }

    /// Reflect.isExtensible(target)
    pub fn is_extensible(target: &Value) -> ReflectResult<bool> {
        let obj = Self::target(target, "Reflect.isExtensible")?;
        Ok(obj.is_extensible())
    }

    /// IsConstructor(argument) - not part of Reflect, but exposed alongside it
    pub fn is_constructor(value: &Value) -> bool {
        value.as_object().is_some_and(|obj| obj.is_constructor())
    }
}
