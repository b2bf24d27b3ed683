//! JavaScript error kinds and object-model errors.

use std::fmt;

use thiserror::Error;

/// The kind of a native JavaScript error.
///
/// These correspond to JavaScript's built-in error constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic Error
    Error,
    /// Type error (e.g., calling a non-function)
    TypeError,
    /// Reference to an undefined variable
    ReferenceError,
    /// Syntax error in JavaScript code
    SyntaxError,
    /// Value out of allowed range
    RangeError,
    /// Error in URI handling functions
    URIError,
    /// Error in eval() function (legacy)
    EvalError,
    /// Multiple errors combined
    AggregateError,
}

impl ErrorKind {
    /// Every native error kind, base `Error` first
    pub const ALL: [ErrorKind; 8] = [
        ErrorKind::Error,
        ErrorKind::TypeError,
        ErrorKind::ReferenceError,
        ErrorKind::SyntaxError,
        ErrorKind::RangeError,
        ErrorKind::URIError,
        ErrorKind::EvalError,
        ErrorKind::AggregateError,
    ];

    /// Constructor name of this error kind
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::URIError => "URIError",
            ErrorKind::EvalError => "EvalError",
            ErrorKind::AggregateError => "AggregateError",
        }
    }

    /// Look up a native error kind by constructor name
    pub fn from_name(name: &str) -> Option<ErrorKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Failures of host object-model operations.
///
/// In a running engine each of these surfaces as a `TypeError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObjectError {
    /// `new` applied to a value without `[[Construct]]`
    #[error("TypeError: value is not a constructor")]
    NotAConstructor,
    /// `[[Call]]` required but absent
    #[error("TypeError: value is not a function")]
    NotCallable,
    /// A generator factory was expected
    #[error("TypeError: value is not a generator function")]
    NotAGeneratorFunction,
    /// `[[SetPrototypeOf]]` would create a cycle
    #[error("TypeError: cyclic __proto__ value")]
    PrototypeCycle,
    /// `[[SetPrototypeOf]]` on a non-extensible object
    #[error("TypeError: object is not extensible")]
    NotExtensible,
    /// Prototype chain exceeds the engine limit
    #[error("TypeError: prototype chain exceeds {max} objects")]
    PrototypeChainTooDeep {
        /// The configured limit
        max: usize,
    },
}
