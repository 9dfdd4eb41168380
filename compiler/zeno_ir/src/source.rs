//! Loaded source files.
//!
//! The lexer reads through a [`SourceBuffer`]: the file bytes followed by a
//! `0x00` sentinel and zero padding. The sentinel is never part of the
//! logical length; it lets the lexer look up to three bytes ahead without a
//! bounds check against the end of the file.

use std::fmt;

use crate::Name;

/// Padding after the content: the sentinel plus room for lookahead.
const SENTINEL_PAD: usize = 4;

/// Allocation granularity of the backing buffer.
const CACHE_LINE: usize = 64;

/// UTF-8 encoded byte-order mark.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Sentinel-terminated copy of a source file.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, 0x00 padding...]
///  ^                ^
///  0                len (sentinel)
/// ```
#[derive(Clone)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    len: usize,
}

impl SourceBuffer {
    /// Copy `bytes` into a new nul-terminated buffer.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let len = bytes.len();
        let padded = (len + SENTINEL_PAD + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        let mut buf = vec![0u8; padded];
        buf[..len].copy_from_slice(bytes);
        SourceBuffer { buf, len }
    }

    /// Source bytes without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Source bytes followed by the sentinel and padding.
    ///
    /// `as_sentinel_bytes()[len()]` is always `0x00`, as are at least three
    /// bytes after it.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for SourceBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceBuffer").field("len", &self.len).finish()
    }
}

/// Handle to a file loaded into an [`AstContext`](crate::AstContext).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceId(u32);

impl SourceId {
    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        SourceId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A source file owned by its context.
#[derive(Debug)]
pub struct SourceFile {
    /// Display path (`<stdin>` for standard input).
    pub path: Name,
    pub buffer: SourceBuffer,
}
