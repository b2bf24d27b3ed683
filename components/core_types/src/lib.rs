//! Core JavaScript value types and the ordinary object model.
//!
//! This crate provides the foundational types the introspection layers
//! reason about: values, symbols, property descriptors, function origins and
//! objects with their internal methods.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of JavaScript values
//! - [`ObjectRef`] - Shared handle to an object and its internal methods
//! - [`PropertyDescriptor`] - Data or accessor property record
//! - [`FunctionKind`] - Syntactic origin of a function object
//! - [`Symbol`] - Unique symbols and the well-known symbol set
//!
//! # Examples
//!
//! ```
//! use core_types::{ObjectKind, ObjectRef, PropertyDescriptor, Value};
//!
//! let proto = ObjectRef::new(ObjectKind::Ordinary, None);
//! proto.define_own_property("greeting".into(), PropertyDescriptor::data(Value::string("hi")));
//!
//! let obj = ObjectRef::new(ObjectKind::Ordinary, Some(proto));
//! let receiver = Value::Object(obj.clone());
//! assert_eq!(obj.get(&"greeting".into(), &receiver), Value::string("hi"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod function;
mod object;
mod property;
mod symbol;
mod value;

pub use error::{ErrorKind, ObjectError};
pub use function::{FunctionData, FunctionKind, NativeFn};
pub use object::{ObjectData, ObjectKind, ObjectRef, PrototypeChain, MAX_PROTOTYPE_CHAIN_DEPTH};
pub use property::{PropertyDescriptor, PropertyKey};
pub use symbol::Symbol;
pub use value::Value;
