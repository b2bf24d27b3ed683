//! Function object internals.
//!
//! A function's syntactic origin decides what the engine may do with it:
//! whether it has a `[[Construct]]` method, whether its prototype slot is
//! writable, and what `Function.prototype.toString` would reveal about it.

use std::fmt;
use std::rc::Rc;

use crate::{ObjectRef, Value};

/// Native behavior invoked by `[[Call]]`: receives `this` and the arguments.
pub type NativeFn = Rc<dyn Fn(&Value, &[Value]) -> Value>;

/// The syntactic form a function object was created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// `function f() {}` - ES3-style, constructable
    Normal,
    /// `() => {}`
    Arrow,
    /// Object or class method, including getters and setters
    Method,
    /// `class C {}` or `class C extends B {}`
    Class {
        /// Whether the class has an `extends` clause
        derived: bool,
    },
    /// `async function f() {}`
    Async,
    /// `async () => {}`
    AsyncArrow,
    /// `function* g() {}`
    Generator,
    /// `async function* g() {}`
    AsyncGenerator,
    /// Result of `Function.prototype.bind`
    Bound {
        /// Whether the bound target has `[[Construct]]`
        constructable: bool,
    },
    /// Engine-provided function (`[native code]`)
    Builtin {
        /// Whether the builtin has `[[Construct]]`
        constructable: bool,
    },
}

impl FunctionKind {
    /// IsConstructor, answered from the function's origin alone.
    pub fn is_constructor(&self) -> bool {
        match self {
            FunctionKind::Normal | FunctionKind::Class { .. } => true,
            FunctionKind::Bound { constructable } | FunctionKind::Builtin { constructable } => {
                *constructable
            }
            FunctionKind::Arrow
            | FunctionKind::Method
            | FunctionKind::Async
            | FunctionKind::AsyncArrow
            | FunctionKind::Generator
            | FunctionKind::AsyncGenerator => false,
        }
    }

    /// Whether this is a class constructor
    pub fn is_class(&self) -> bool {
        matches!(self, FunctionKind::Class { .. })
    }

    /// Whether this is a plain `function` declaration or expression
    pub fn is_es3(&self) -> bool {
        matches!(self, FunctionKind::Normal)
    }

    /// Whether `Function.prototype.toString` reports `[native code]`
    pub fn is_native(&self) -> bool {
        matches!(
            self,
            FunctionKind::Builtin { .. } | FunctionKind::Bound { .. }
        )
    }
}

/// Internal data of a function object
#[derive(Clone)]
pub struct FunctionData {
    /// Syntactic origin
    pub kind: FunctionKind,
    /// Behavior of `[[Call]]`; `None` returns `undefined`
    pub behavior: Option<NativeFn>,
    /// `[[BoundTargetFunction]]` of a bound function
    pub bound_target: Option<ObjectRef>,
}

impl FunctionData {
    /// Function without call behavior
    pub fn new(kind: FunctionKind) -> Self {
        FunctionData {
            kind,
            behavior: None,
            bound_target: None,
        }
    }

    /// Function with call behavior
    pub fn with_behavior(kind: FunctionKind, behavior: NativeFn) -> Self {
        FunctionData {
            kind,
            behavior: Some(behavior),
            bound_target: None,
        }
    }

    /// Bound function exotic object data for `target`
    pub fn bound(target: ObjectRef) -> Self {
        let constructable = target.is_constructor();
        FunctionData {
            kind: FunctionKind::Bound { constructable },
            behavior: None,
            bound_target: Some(target),
        }
    }
}

impl fmt::Debug for FunctionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionData")
            .field("kind", &self.kind)
            .field("behavior", &self.behavior.as_ref().map(|_| "<native>"))
            .field("bound", &self.bound_target.is_some())
            .finish()
    }
}
