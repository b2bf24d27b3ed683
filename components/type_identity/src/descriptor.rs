//! Shape predicates over property descriptors.
//!
//! Tag and name descriptors are untrusted input: user code may install them
//! with any attribute combination. Every classifier decision goes through
//! these predicates rather than reading attribute flags ad hoc.

use core_types::PropertyDescriptor;

/// Whether a descriptor stores a value or a getter/setter pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorKind {
    /// `{ value, writable }`
    Data,
    /// `{ get, set }`
    Accessor,
}

/// Attribute flags of a descriptor, detached from its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptorShape {
    /// Data or accessor
    pub kind: DescriptorKind,
    /// `[[Configurable]]`
    pub configurable: bool,
    /// `[[Enumerable]]`
    pub enumerable: bool,
    /// `[[Writable]]`; `None` for accessors
    pub writable: Option<bool>,
}

impl DescriptorShape {
    /// Shape of the engine's own `@@toStringTag` properties:
    /// `{ writable: false, enumerable: false, configurable: true }`.
    pub fn is_engine_default_tag(&self) -> bool {
        self.kind == DescriptorKind::Data
            && self.configurable
            && self.writable == Some(false)
            && !self.enumerable
    }

    /// Non-configurable, non-enumerable and not writable. Accessors, which
    /// carry no `writable` flag, pass the writability check.
    pub fn is_hardened(&self) -> bool {
        !self.configurable && !self.enumerable && self.writable != Some(true)
    }
}

impl From<&PropertyDescriptor> for DescriptorShape {
    fn from(desc: &PropertyDescriptor) -> Self {
        DescriptorShape {
            kind: if desc.is_accessor() {
                DescriptorKind::Accessor
            } else {
                DescriptorKind::Data
            },
            configurable: desc.is_configurable(),
            enumerable: desc.is_enumerable(),
            writable: desc.writable(),
        }
    }
}
