//! Errors raised by the identity minter

use thiserror::Error;

/// Rejected arguments to [`define_stable_type_identity`](crate::define_stable_type_identity).
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// The value has no `[[Construct]]`
    #[error("InvalidConstructorKind: value is not a constructor")]
    InvalidConstructorKind,
    /// The constructor is neither a class nor an ES3-style function
    #[error("UnsupportedBuiltinConstructor: cannot define a stable identity on a builtin constructor")]
    UnsupportedBuiltinConstructor,
    /// The constructor name is not a string
    #[error("InvalidNameType: constructor name must be a string")]
    InvalidNameType,
    /// The constructor name is blank
    #[error("EmptyNameValue: constructor name must not be empty")]
    EmptyNameValue,
    /// The tag was supplied as a blank string
    #[error("EmptyTagValue: tagged type must not be empty")]
    EmptyTagValue,
}

/// Result type for identity minting
pub type IdentityResult<T> = Result<T, IdentityError>;
