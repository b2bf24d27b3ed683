//! Runtime type identity for ECMAScript values.
//!
//! Three signals describe what a value is: its `Object.prototype.toString`
//! signature, its prototype chain and the function in its `constructor`
//! slot. Each can be spoofed on its own. This crate reconciles them:
//!
//! - [`signature`] / [`tagged_type`] read the internal class tag
//! - [`defined_constructor`] / [`defined_constructor_name`] recover the
//!   constructor through damaged or missing `constructor` slots
//! - [`resolve_type`] picks one canonical name
//! - [`has_builtin_type_identity`], [`has_custom_type_identity`] and
//!   [`has_stable_type_identity`] judge how far that name can be trusted
//! - [`define_stable_type_identity`] hardens a user constructor so its
//!   instances keep their identity
//!
//! Functions taking `Option<&Value>` distinguish "no argument" (`None`) from
//! an explicit `undefined` (`Some(&Value::Undefined)`).
//!
//! # Example
//!
//! ```
//! use builtins::Realm;
//! use core_types::{ErrorKind, Value};
//! use type_identity::{resolve_type, tagged_type};
//!
//! let realm = Realm::new();
//! let err = Value::Object(realm.new_error(ErrorKind::TypeError, "boom"));
//!
//! assert_eq!(tagged_type(&realm, Some(&err)).as_deref(), Some("Error"));
//! assert_eq!(resolve_type(&realm, Some(&err)).as_deref(), Some("TypeError"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod classify;
mod constructor;
mod descriptor;
mod error;
mod mint;
mod profile;
mod resolve;
mod signature;

pub mod kinds;

pub use classify::{
    has_builtin_type_identity, has_custom_type_identity, has_stable_type_identity,
    INHERITED_BUILTIN_TAGS, OWNED_BUILTIN_TAGS,
};
pub use constructor::{defined_constructor, defined_constructor_name};
pub use descriptor::{DescriptorKind, DescriptorShape};
pub use error::{IdentityError, IdentityResult};
pub use mint::define_stable_type_identity;
pub use profile::TypeProfile;
pub use resolve::resolve_type;
pub use signature::{signature, tagged_type};
