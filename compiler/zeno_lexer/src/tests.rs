use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use zeno_ir::{IntValue, SourcePos, StringLookup, TokenKind, TokenValue};

fn lex_bytes(bytes: &[u8]) -> Result<TokenList, LexError> {
    lex_with(bytes, LexerConfig::default())
}

fn lex_with(bytes: &[u8], config: LexerConfig) -> Result<TokenList, LexError> {
    let buffer = SourceBuffer::from_bytes(bytes);
    let mut interner = StringInterner::new();
    lex(&buffer, &mut interner, config)
}

fn kinds(src: &str) -> Vec<TokenKind> {
    lex_bytes(src.as_bytes()).unwrap().kinds()
}

fn error(bytes: &[u8]) -> LexError {
    lex_bytes(bytes).unwrap_err()
}

fn first_int(src: &str) -> IntValue {
    let tokens = lex_bytes(src.as_bytes()).unwrap();
    match tokens.get(0).map(|t| t.value) {
        Some(TokenValue::Int(value)) => value,
        other => panic!("expected integer literal, got {other:?}"),
    }
}

fn pos(line: u32, column: u32) -> SourcePos {
    SourcePos::new(line, column)
}

// === Basics ===

#[test]
fn empty_source() {
    let tokens = lex_bytes(b"").unwrap();
    assert_eq!(tokens.kinds(), vec![TokenKind::EndOfFile]);
    assert_eq!(tokens.get(0).unwrap().pos, pos(1, 1));
}

#[test]
fn function_definition() {
    use TokenKind::*;
    assert_eq!(
        kinds("def f() -> Int32 { return 42 }"),
        vec![
            Def, Identifier, LeftParen, RightParen, Arrow, Identifier, LeftBrace, Return,
            IntLiteral, RightBrace, EndOfFile,
        ]
    );
}

#[test]
fn token_positions() {
    let tokens = lex_bytes(b"def f\n  return 42").unwrap();
    let positions: Vec<SourcePos> = tokens.iter().map(|t| t.pos).collect();
    assert_eq!(
        positions,
        vec![pos(1, 1), pos(1, 5), pos(2, 3), pos(2, 10), pos(2, 12)]
    );
}

#[test]
fn identifiers_are_interned() {
    let buffer = SourceBuffer::from_bytes(b"abc _x1 abc");
    let mut interner = StringInterner::new();
    let tokens = lex(&buffer, &mut interner, LexerConfig::default()).unwrap();
    let names: Vec<_> = tokens
        .iter()
        .filter_map(|t| match t.value {
            TokenValue::Ident(name) => Some(name),
            _ => None,
        })
        .collect();
    assert_eq!(names.len(), 3);
    assert_eq!(names[0], names[2]);
    assert_eq!(interner.lookup(names[1]), "_x1");
}

#[test]
fn keywords_need_whole_words() {
    use TokenKind::*;
    assert_eq!(kinds("return returns _return"), vec![Return, Identifier, Identifier, EndOfFile]);
}

#[test]
fn lex_source_uses_context() {
    let mut ctx = zeno_ir::AstContext::new();
    let id = ctx.load_source("main.zn", b"value");
    let tokens = lex_source(&mut ctx, id, LexerConfig::default()).unwrap();
    match tokens.get(0).unwrap().value {
        TokenValue::Ident(name) => assert_eq!(ctx.name_text(name), "value"),
        other => panic!("unexpected payload {other:?}"),
    }
}

// === Symbols ===

#[test]
fn every_spelling_round_trips() {
    for &kind in TokenKind::ALL {
        let Some(text) = kind.spelling() else {
            continue;
        };
        assert_eq!(kinds(text), vec![kind, TokenKind::EndOfFile], "spelling {text:?}");
    }
}

#[test]
fn spellings_separated_by_spaces() {
    let spelled: Vec<TokenKind> = TokenKind::ALL
        .iter()
        .copied()
        .filter(|k| k.spelling().is_some())
        .collect();
    let text: Vec<&str> = spelled.iter().filter_map(|k| k.spelling()).collect();
    let mut expected = spelled.clone();
    expected.push(TokenKind::EndOfFile);
    assert_eq!(kinds(&text.join(" ")), expected);
}

#[test]
fn maximal_munch() {
    use TokenKind::*;
    assert_eq!(kinds("<<=<"), vec![LessLessEqual, Less, EndOfFile]);
    assert_eq!(kinds(">>>"), vec![GreaterGreater, Greater, EndOfFile]);
    assert_eq!(kinds("..."), vec![ClosedRange, EndOfFile]);
    assert_eq!(kinds("..<"), vec![HalfOpenRange, EndOfFile]);
    assert_eq!(kinds(".."), vec![Period, Period, EndOfFile]);
    assert_eq!(kinds("->="), vec![Arrow, Equal, EndOfFile]);
    assert_eq!(kinds("===>"), vec![EqualEqual, FatArrow, EndOfFile]);
    assert_eq!(kinds("&&&="), vec![AmpAmp, AmpEqual, EndOfFile]);
    assert_eq!(kinds("^^^^="), vec![CaretCaret, CaretCaretEqual, EndOfFile]);
}

// === Integer literals ===

#[test]
fn decimal_literals() {
    assert_eq!(first_int("0"), IntValue::Small(0));
    assert_eq!(first_int("42"), IntValue::Small(42));
    assert_eq!(first_int("1_000_000"), IntValue::Small(1_000_000));
}

#[test]
fn prefixed_literals() {
    assert_eq!(first_int("0xFF"), IntValue::Small(255));
    assert_eq!(first_int("0Xff_ff"), IntValue::Small(0xFFFF));
    assert_eq!(first_int("0b1010"), IntValue::Small(10));
    assert_eq!(first_int("0B1_1"), IntValue::Small(3));
}

#[test]
fn zero_followed_by_symbol() {
    use TokenKind::*;
    assert_eq!(kinds("0)"), vec![IntLiteral, RightParen, EndOfFile]);
}

#[test]
fn largest_small_literal() {
    assert_eq!(first_int("4611686018427387903"), IntValue::Small(zeno_ir::SMALL_INT_MAX));
}

#[test]
fn oversized_literal_keeps_digits() {
    let buffer = SourceBuffer::from_bytes(b"4_611_686_018_427_387_904");
    let mut interner = StringInterner::new();
    let tokens = lex(&buffer, &mut interner, LexerConfig::default()).unwrap();
    match tokens.get(0).unwrap().value {
        TokenValue::Int(IntValue::Oversized { digits, radix }) => {
            assert_eq!(interner.lookup(digits), "4611686018427387904");
            assert_eq!(radix, 10);
        }
        other => panic!("expected oversized literal, got {other:?}"),
    }
}

#[test]
fn bad_literals() {
    for src in ["0x", "0b", "0x_1", "1__0", "1_", "12ab", "0b12", "0xg", "0x1_"] {
        let err = error(src.as_bytes());
        assert_eq!(err.kind, LexErrorKind::BadIntLiteral, "source {src:?}");
    }
}

#[test]
fn bad_literal_reports_literal_start() {
    assert_eq!(error(b"def  0x"), LexError::new(LexErrorKind::BadIntLiteral, pos(1, 6)));
}

#[test]
fn leading_zero() {
    for src in ["00", "012", "0_1", "0a"] {
        assert_eq!(error(src.as_bytes()).kind, LexErrorKind::DecimalLeadingZero, "source {src:?}");
    }
}

// === Comments ===

#[test]
fn line_comment() {
    use TokenKind::*;
    assert_eq!(kinds("def // return 42 ü\nf"), vec![Def, Identifier, EndOfFile]);
    assert_eq!(kinds("// only"), vec![EndOfFile]);
}

#[test]
fn nested_block_comment() {
    use TokenKind::*;
    assert_eq!(kinds("a /* b /* c */ d */ e"), vec![Identifier, Identifier, EndOfFile]);
}

#[test]
fn block_comment_tracks_lines() {
    let tokens = lex_bytes(b"/* one\n two\r\n */ x").unwrap();
    assert_eq!(tokens.get(0).unwrap().pos, pos(3, 5));
}

#[test]
fn unclosed_nested_comment_reports_end_of_file() {
    assert_eq!(
        error(b"/* /* */ "),
        LexError::new(LexErrorKind::UnclosedBlockComment, pos(1, 10))
    );
}

#[test]
fn invalid_encoding_in_comment() {
    assert_eq!(error(b"// \xFF"), LexError::new(LexErrorKind::BadEncoding, pos(1, 4)));
    assert_eq!(error(b"/* \xC0\xAF */").kind, LexErrorKind::BadEncoding);
}

// === Characters ===

#[test]
fn unexpected_ascii_character() {
    assert_eq!(
        error(b"a $"),
        LexError::new(LexErrorKind::UnexpectedCharacter(u32::from(b'$')), pos(1, 3))
    );
    assert_eq!(error(b"a $").to_string(), "unexpected character U+0024");
}

#[test]
fn unexpected_non_ascii_character() {
    let err = error("x é".as_bytes());
    assert_eq!(err, LexError::new(LexErrorKind::UnexpectedCharacter(0xE9), pos(1, 3)));
}

#[test]
fn invalid_utf8() {
    assert_eq!(error(b"\xED\xA0\x80").kind, LexErrorKind::BadEncoding);
    assert_eq!(error(b"a\x80").kind, LexErrorKind::BadEncoding);
    assert_eq!(error(b"\xE2\x82").kind, LexErrorKind::BadEncoding);
}

#[test]
fn embedded_nul() {
    assert_eq!(
        error(b"a\0b"),
        LexError::new(LexErrorKind::UnexpectedCharacter(0), pos(1, 2))
    );
}

#[test]
fn byte_order_mark_is_skipped() {
    let tokens = lex_bytes(b"\xEF\xBB\xBFdef").unwrap();
    assert_eq!(tokens.kinds(), vec![TokenKind::Def, TokenKind::EndOfFile]);
    assert_eq!(tokens.get(0).unwrap().pos, pos(1, 1));
}

// === Whitespace and positions ===

#[test]
fn tabs_advance_to_next_stop() {
    let tokens = lex_bytes(b"\tx\n  \ty\nabcdefgh\tz").unwrap();
    let positions: Vec<SourcePos> = tokens.iter().map(|t| t.pos).collect();
    assert_eq!(
        positions,
        vec![pos(1, 8), pos(2, 8), pos(3, 1), pos(3, 16), pos(3, 17)]
    );
}

#[test]
fn custom_tab_stop() {
    let tokens = lex_with(b"\tx", LexerConfig::default().with_tab_stop(4)).unwrap();
    assert_eq!(tokens.get(0).unwrap().pos, pos(1, 4));
    let tokens = lex_with(b"abcd\tx", LexerConfig::default().with_tab_stop(4)).unwrap();
    assert_eq!(tokens.get(1).unwrap().pos, pos(1, 8));
}

#[test]
fn line_endings() {
    let tokens = lex_bytes(b"a\r\nb\rc\nd").unwrap();
    let lines: Vec<u32> = tokens.iter().map(|t| t.pos.line).collect();
    assert_eq!(lines, vec![1, 2, 3, 4, 4]);
}

// === Limits ===

fn limits(max_lines: u32, max_line_chars: u32, max_file_chars: u32) -> LexerConfig {
    LexerConfig::default().with_limits(LexLimits {
        max_lines,
        max_line_chars,
        max_file_chars,
    })
}

#[test]
fn line_limit() {
    assert!(lex_with(b"a\nb", limits(2, 100, 100)).is_ok());
    let err = lex_with(b"a\nb\nc", limits(2, 100, 100)).unwrap_err();
    assert_eq!(err, LexError::new(LexErrorKind::LineLimitExceeded, pos(2, 2)));
}

#[test]
fn column_limit() {
    assert!(lex_with(b"abcd\nabcd", limits(10, 4, 100)).is_ok());
    let err = lex_with(b"ab\nabcde", limits(10, 4, 100)).unwrap_err();
    assert_eq!(err, LexError::new(LexErrorKind::ColumnLimitExceeded, pos(2, 5)));
}

#[test]
fn file_limit_counts_line_breaks() {
    assert!(lex_with(b"ab\r\nc", limits(10, 10, 5)).is_ok());
    let err = lex_with(b"ab\r\ncd", limits(10, 10, 5)).unwrap_err();
    assert_eq!(err, LexError::new(LexErrorKind::CharacterLimitExceeded, pos(2, 2)));
}

#[test]
fn file_limit_counts_bom() {
    assert!(lex_with(b"\xEF\xBB\xBFab", limits(10, 10, 3)).is_ok());
    assert_eq!(
        lex_with(b"\xEF\xBB\xBFabc", limits(10, 10, 3)).unwrap_err().kind,
        LexErrorKind::CharacterLimitExceeded
    );
}

#[test]
fn limits_apply_inside_comments() {
    let err = lex_with(b"/* abcdef */", limits(10, 5, 100)).unwrap_err();
    assert_eq!(err.kind, LexErrorKind::ColumnLimitExceeded);
}

// === Properties ===

proptest! {
    #[test]
    fn never_panics_and_ends_with_eof(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        if let Ok(tokens) = lex_bytes(&bytes) {
            prop_assert_eq!(tokens.iter().last().map(|t| t.kind), Some(TokenKind::EndOfFile));
        }
    }

    #[test]
    fn ascii_programs_never_panic(src in "[a-z0-9_ \\t\\n(){}<>=!+*/%&|^.@;:,-]{0,128}") {
        let _ = lex_bytes(src.as_bytes());
    }

    #[test]
    fn identifiers_round_trip(words in prop::collection::vec("[a-zA-Z_][a-zA-Z0-9_]{0,12}", 1..8)) {
        let buffer = SourceBuffer::from_bytes(words.join(" ").as_bytes());
        let mut interner = StringInterner::new();
        let tokens = lex(&buffer, &mut interner, LexerConfig::default()).unwrap();
        prop_assert_eq!(tokens.len(), words.len() + 1);
        for (token, word) in tokens.iter().zip(&words) {
            match token.value {
                TokenValue::Ident(name) => prop_assert_eq!(interner.lookup(name), word.as_str()),
                _ => prop_assert_eq!(token.kind.spelling(), Some(word.as_str())),
            }
        }
    }
}
