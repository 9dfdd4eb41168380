use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn ascii() {
    assert_eq!(decode(b"a"), Some((0x61, 1)));
    assert_eq!(decode(b"\x7F"), Some((0x7F, 1)));
}

#[test]
fn multi_byte() {
    assert_eq!(decode("é".as_bytes()), Some((0xE9, 2)));
    assert_eq!(decode("€".as_bytes()), Some((0x20AC, 3)));
    assert_eq!(decode("𝄞".as_bytes()), Some((0x1D11E, 4)));
    assert_eq!(decode("\u{10FFFF}".as_bytes()), Some((0x10_FFFF, 4)));
}

#[test]
fn only_first_character_is_decoded() {
    assert_eq!(decode("éa".as_bytes()), Some((0xE9, 2)));
}

#[test]
fn empty_input() {
    assert_eq!(decode(b""), None);
}

#[test]
fn stray_continuation_byte() {
    assert_eq!(decode(b"\x80"), None);
    assert_eq!(decode(b"\xBF"), None);
}

#[test]
fn truncated_sequences() {
    assert_eq!(decode(b"\xC3"), None);
    assert_eq!(decode(b"\xE2\x82"), None);
    assert_eq!(decode(b"\xF0\x9D\x84"), None);
}

#[test]
fn bad_continuation() {
    assert_eq!(decode(b"\xC3\x28"), None);
    assert_eq!(decode(b"\xE2\x28\xA1"), None);
}

#[test]
fn overlong_encodings() {
    assert_eq!(decode(b"\xC0\xAF"), None);
    assert_eq!(decode(b"\xC1\xBF"), None);
    assert_eq!(decode(b"\xE0\x80\xAF"), None);
    assert_eq!(decode(b"\xF0\x80\x80\xAF"), None);
}

#[test]
fn surrogates() {
    assert_eq!(decode(b"\xED\xA0\x80"), None);
    assert_eq!(decode(b"\xED\xBF\xBF"), None);
}

#[test]
fn above_max_code_point() {
    assert_eq!(decode(b"\xF4\x90\x80\x80"), None);
    assert_eq!(decode(b"\xF8\x88\x80\x80\x80"), None);
}

proptest! {
    #[test]
    fn agrees_with_std(bytes in prop::collection::vec(any::<u8>(), 1..6)) {
        let expected = match std::str::from_utf8(&bytes) {
            Ok(text) => text.chars().next().map(|c| (u32::from(c), c.len_utf8())),
            Err(err) if err.valid_up_to() > 0 => {
                let text = std::str::from_utf8(&bytes[..err.valid_up_to()]).unwrap();
                text.chars().next().map(|c| (u32::from(c), c.len_utf8()))
            }
            Err(_) => None,
        };
        prop_assert_eq!(decode(&bytes), expected);
    }
}
