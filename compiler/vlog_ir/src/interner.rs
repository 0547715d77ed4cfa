//! String interner for identifier and literal text.
//!
//! One interner lives inside each [`AstArena`](crate::AstArena); a parse
//! session is single-threaded, so there is no sharding or locking.

use super::Name;
use rustc_hash::FxHashMap;

/// Maps strings to compact [`Name`] handles and back.
///
/// Index 0 always holds the empty string.
#[derive(Clone)]
pub struct StringInterner {
    /// Map from string content to its handle.
    map: FxHashMap<Box<str>, Name>,
    /// Storage indexed by `Name::index()`.
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create an interner holding only the empty string.
    pub fn new() -> Self {
        let mut interner = Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        interner.strings.push(Box::from(""));
        interner.map.insert(Box::from(""), Name::EMPTY);
        interner
    }

    /// Intern a string, returning the existing handle if already present.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` strings are interned.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.map.get(s) {
            return name;
        }
        let index = u32::try_from(self.strings.len())
            .unwrap_or_else(|_| panic!("interner overflow: {} strings", self.strings.len()));
        let name = Name::new(index);
        self.strings.push(Box::from(s));
        self.map.insert(Box::from(s), name);
        name
    }

    /// Look up a string without interning it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied()
    }

    /// Text of an interned name.
    ///
    /// Names from a released interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("", |s| s)
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always `false`: the empty string is pre-interned.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Drop every string except the pre-interned empty string.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.strings.len())
            .finish()
    }
}
