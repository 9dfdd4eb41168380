use super::*;
use pretty_assertions::assert_eq;

#[test]
fn kind_table_is_complete() {
    assert_eq!(TokenKind::ALL.len(), 69);
    assert_eq!(TokenKind::ALL[0], TokenKind::EndOfFile);
}

#[test]
fn spellings() {
    assert_eq!(TokenKind::EndOfFile.spelling(), None);
    assert_eq!(TokenKind::Identifier.spelling(), None);
    assert_eq!(TokenKind::IntLiteral.spelling(), None);
    assert_eq!(TokenKind::GreaterGreaterEqual.spelling(), Some(">>="));
    assert_eq!(TokenKind::HalfOpenRange.spelling(), Some("..<"));
    assert_eq!(TokenKind::While.spelling(), Some("while"));
}

#[test]
fn names() {
    assert_eq!(TokenKind::LessLessEqual.name(), "LessLessEqual");
    assert_eq!(TokenKind::Def.name(), "Def");
    assert_eq!(TokenKind::IntLiteral.name(), "IntLiteral");
}

#[test]
fn keyword_lookup_covers_every_keyword() {
    for &kind in TokenKind::ALL.iter().filter(|k| k.is_keyword()) {
        let text = kind.spelling().unwrap();
        assert_eq!(TokenKind::keyword(text), Some(kind));
    }
    assert_eq!(TokenKind::keyword("Int32"), None);
    assert_eq!(TokenKind::keyword("returns"), None);
}

#[test]
fn keywords_and_symbols_are_disjoint() {
    for &kind in TokenKind::ALL {
        assert!(!(kind.is_keyword() && kind.is_symbol()), "{kind:?}");
    }
}

#[test]
fn descriptions() {
    assert_eq!(TokenKind::EndOfFile.to_string(), "end of file");
    assert_eq!(TokenKind::Identifier.to_string(), "identifier");
    assert_eq!(TokenKind::IntLiteral.to_string(), "integer literal");
    assert_eq!(TokenKind::Arrow.to_string(), "symbol `->`");
    assert_eq!(TokenKind::True.to_string(), "keyword `true`");
}

#[test]
fn token_list_grows() {
    let mut tokens = TokenList::new();
    for i in 0..1_000 {
        tokens.push(Token::new(TokenKind::Comma, SourcePos::new(1, i + 1)));
    }
    assert_eq!(tokens.len(), 1_000);
    assert_eq!(tokens.get(999).map(|t| t.pos.column), Some(1_000));
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Comma));
}
