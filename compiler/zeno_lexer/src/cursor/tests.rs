use super::*;
use pretty_assertions::assert_eq;

#[test]
fn reads_and_lookahead() {
    let buf = SourceBuffer::from_bytes(b"abc");
    let mut cursor = Cursor::new(&buf);
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek2(), b'c');
    cursor.advance_n(2);
    assert_eq!(cursor.current(), b'c');
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn empty_source_is_eof() {
    let buf = SourceBuffer::from_bytes(b"");
    let cursor = Cursor::new(&buf);
    assert!(cursor.is_eof());
    assert_eq!(cursor.peek2(), 0);
}

#[test]
fn embedded_nul_is_not_eof() {
    let buf = SourceBuffer::from_bytes(b"\0x");
    let cursor = Cursor::new(&buf);
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_eof());
}

#[test]
fn slice_covers_consumed_bytes() {
    let buf = SourceBuffer::from_bytes(b"aaab");
    let mut cursor = Cursor::new(&buf);
    while cursor.current() == b'a' {
        cursor.advance();
    }
    assert_eq!(cursor.pos(), 3);
    assert_eq!(cursor.slice_from(0), b"aaa");
    assert_eq!(cursor.rest(), b"b");
    cursor.advance();
    assert!(cursor.is_eof());
}

#[test]
fn line_end_distance() {
    let buf = SourceBuffer::from_bytes(b"// hi\r\nnext");
    let cursor = Cursor::new(&buf);
    assert_eq!(cursor.distance_to_line_end(), 5);
    let buf = SourceBuffer::from_bytes(b"no newline");
    assert_eq!(Cursor::new(&buf).distance_to_line_end(), 10);
}
