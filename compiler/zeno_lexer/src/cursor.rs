//! Forward cursor over a sentinel-terminated buffer.
//!
//! Reads never need a bounds check against the logical end: the byte at
//! `len` is the `0x00` sentinel and at least three more zero bytes follow
//! it. A zero byte before `len` is an embedded NUL, not the end;
//! [`Cursor::is_eof`] tells the two apart.

use zeno_ir::SourceBuffer;

#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
    len: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a SourceBuffer) -> Self {
        let buf = source.as_sentinel_bytes();
        debug_assert!(buf.len() >= source.len() + 4);
        Cursor {
            buf,
            pos: 0,
            len: source.len(),
        }
    }

    /// Byte at the cursor; `0x00` at the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos]
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos + 1]
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos + 2]
    }

    #[inline]
    pub fn advance(&mut self) {
        debug_assert!(self.pos < self.len, "advance past the end");
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.len, "advance past the end");
        self.pos += n;
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.len
    }

    /// Bytes from the cursor to the logical end.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..self.len]
    }

    pub fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.buf[start..self.pos]
    }

    /// Distance to the next `\r`, `\n` or the end, without moving.
    pub fn distance_to_line_end(&self) -> usize {
        let rest = self.rest();
        memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len())
    }
}

#[cfg(test)]
mod tests;
