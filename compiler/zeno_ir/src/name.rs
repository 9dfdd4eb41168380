//! Interned identifier handle.

use std::fmt;
use std::num::NonZeroU32;

use crate::map::EntryId;

/// Handle to a string interned in a [`StringInterner`](crate::StringInterner).
///
/// Two names from the same interner are equal exactly when their text is
/// equal, so comparison never touches the bytes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Name(NonZeroU32);

impl Name {
    #[inline]
    pub(crate) const fn from_entry(id: EntryId) -> Self {
        Name(id.raw())
    }

    #[inline]
    pub(crate) const fn entry(self) -> EntryId {
        EntryId::from_raw(self.0)
    }

    /// Raw 1-based index of the name in its interner.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

const _: () = assert!(std::mem::size_of::<Option<Name>>() == 4);
