//! JavaScript Symbol primitive type
//!
//! Symbols are unique, immutable primitive values that can be used as property keys.
//! This module implements unique symbol creation (`Symbol()`) and the
//! well-known symbols the realm installs (`Symbol.toStringTag`,
//! `Symbol.iterator`, `Symbol.asyncIterator`).

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Well-known symbol storage
static WELL_KNOWN_SYMBOLS: LazyLock<WellKnownSymbols> = LazyLock::new(|| WellKnownSymbols {
    iterator: Symbol::allocate(Some("Symbol.iterator")),
    async_iterator: Symbol::allocate(Some("Symbol.asyncIterator")),
    to_string_tag: Symbol::allocate(Some("Symbol.toStringTag")),
});

struct WellKnownSymbols {
    iterator: Symbol,
    async_iterator: Symbol,
    to_string_tag: Symbol,
}

/// A JavaScript Symbol value
///
/// Each symbol has a unique internal ID and an optional description. Equality
/// and hashing only look at the ID.
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    description: Option<String>,
}

impl Symbol {
    fn allocate(description: Option<&str>) -> Self {
        let id = SYMBOL_COUNTER.fetch_add(1, Ordering::SeqCst);
        Symbol {
            id,
            description: description.map(str::to_string),
        }
    }

    /// `Symbol(description)` - create a new unique symbol
    pub fn new(description: Option<&str>) -> Self {
        Self::allocate(description)
    }

    /// `Symbol.toStringTag`
    pub fn to_string_tag() -> Self {
        WELL_KNOWN_SYMBOLS.to_string_tag.clone()
    }

    /// `Symbol.iterator`
    pub fn iterator() -> Self {
        WELL_KNOWN_SYMBOLS.iterator.clone()
    }

    /// `Symbol.asyncIterator`
    pub fn async_iterator() -> Self {
        WELL_KNOWN_SYMBOLS.async_iterator.clone()
    }

    /// Get the unique ID of this symbol
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the description of this symbol
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "Symbol({})", desc),
            None => write!(f, "Symbol()"),
        }
    }
}
