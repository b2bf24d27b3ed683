//! ECMAScript 2024 intrinsics for a single realm
//!
//! This crate builds the builtin objects the type-identity layer inspects:
//! - The realm record and its intrinsic constructors and prototypes
//! - Function, class and bound-function creation
//! - Error constructors and instances
//! - Object.prototype.toString
//! - Reflect
//!
//! # Example
//!
//! ```
//! use builtins::{ObjectPrototype, Realm};
//! use core_types::Value;
//!
//! let realm = Realm::new();
//! let map = Value::Object(realm.new_map());
//!
//! assert_eq!(ObjectPrototype::to_string(&realm, &map), "[object Map]");
//! assert_eq!(ObjectPrototype::to_string(&realm, &Value::Null), "[object Null]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod function;
pub mod object;
pub mod realm;
pub mod reflect;

// Re-export main types for convenience
pub use object::ObjectPrototype;
pub use realm::{Intrinsic, Realm};
pub use reflect::{ReflectError, ReflectObject, ReflectResult};
