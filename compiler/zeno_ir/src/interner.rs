//! String interner.
//!
//! Deduplicates identifier and path text so later phases compare [`Name`]s
//! instead of bytes. Backed by an [`IndexSet`], so a name is simply the
//! 1-based id of its entry.

use crate::map::IndexSet;
use crate::Name;

/// Resolves names back to their text.
pub trait StringLookup {
    fn lookup(&self, name: Name) -> &str;
}

/// Single-threaded interner owned by one compilation unit.
#[derive(Default)]
pub struct StringInterner {
    strings: IndexSet<Box<str>>,
}

impl StringInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `text`, returning the existing name if it was seen before.
    pub fn intern(&mut self, text: &str) -> Name {
        let id = self.strings.get_or_insert_with(text, || (Box::from(text), ()));
        Name::from_entry(id)
    }

    /// Look up `text` without interning it.
    pub fn get(&self, text: &str) -> Option<Name> {
        self.strings.get_id(text).map(Name::from_entry)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl StringLookup for StringInterner {
    /// # Panics
    ///
    /// Panics if `name` came from a different interner.
    fn lookup(&self, name: Name) -> &str {
        match self.strings.key_by_id(name.entry()) {
            Some(text) => text,
            None => panic!("{name:?} was not interned here"),
        }
    }
}
