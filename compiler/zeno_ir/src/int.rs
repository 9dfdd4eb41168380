//! Integer literal values.

use std::fmt;

use crate::Name;

/// Largest literal stored inline.
pub const SMALL_INT_MAX: u64 = (1 << 62) - 1;

/// Value of an integer literal.
///
/// Literals up to [`SMALL_INT_MAX`] are stored inline. Larger ones keep
/// their digit text (separators and base prefix removed) without being
/// evaluated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntValue {
    Small(u64),
    Oversized { digits: Name, radix: u32 },
}

impl IntValue {
    pub fn as_small(self) -> Option<u64> {
        match self {
            IntValue::Small(value) => Some(value),
            IntValue::Oversized { .. } => None,
        }
    }
}

impl fmt::Display for IntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntValue::Small(value) => write!(f, "{value}"),
            IntValue::Oversized { .. } => f.write_str("<bigint>"),
        }
    }
}
