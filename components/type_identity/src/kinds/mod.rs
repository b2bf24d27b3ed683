//! Narrow kind detectors built on the resolution core.
//!
//! Each predicate compares tagged or resolved type names against fixed
//! literals; none of them adds resolution logic of its own.

pub mod error;
pub mod flow;
pub mod function;
pub mod primitive;
