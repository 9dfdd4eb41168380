//! Tokens produced by the lexer.

use std::fmt;

use crate::{IntValue, Name, SourcePos};

macro_rules! token_kinds {
    (
        special { $($special:ident => $description:literal,)* }
        symbols { $($symbol:ident => $symbol_text:literal,)* }
        keywords { $($keyword:ident => $keyword_text:literal,)* }
    ) => {
        /// Kind of a token.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum TokenKind {
            $($special,)*
            $($symbol,)*
            $($keyword,)*
        }

        impl TokenKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [TokenKind] = &[
                $(TokenKind::$special,)*
                $(TokenKind::$symbol,)*
                $(TokenKind::$keyword,)*
            ];

            /// Stable identifier of the kind, as used in token dumps.
            pub const fn name(self) -> &'static str {
                match self {
                    $(TokenKind::$special => stringify!($special),)*
                    $(TokenKind::$symbol => stringify!($symbol),)*
                    $(TokenKind::$keyword => stringify!($keyword),)*
                }
            }

            /// Source text of a symbol or keyword; `None` for kinds whose
            /// text varies.
            pub const fn spelling(self) -> Option<&'static str> {
                match self {
                    $(TokenKind::$special => None,)*
                    $(TokenKind::$symbol => Some($symbol_text),)*
                    $(TokenKind::$keyword => Some($keyword_text),)*
                }
            }

            pub const fn is_keyword(self) -> bool {
                matches!(self, $(TokenKind::$keyword)|*)
            }

            pub const fn is_symbol(self) -> bool {
                matches!(self, $(TokenKind::$symbol)|*)
            }

            /// Classify an identifier-shaped word.
            pub fn keyword(text: &str) -> Option<TokenKind> {
                match text {
                    $($keyword_text => Some(TokenKind::$keyword),)*
                    _ => None,
                }
            }

            const fn special_description(self) -> Option<&'static str> {
                match self {
                    $(TokenKind::$special => Some($description),)*
                    _ => None,
                }
            }
        }
    };
}

token_kinds! {
    special {
        EndOfFile => "end of file",
        Identifier => "identifier",
        IntLiteral => "integer literal",
    }
    symbols {
        LeftParen => "(",
        RightParen => ")",
        LeftBrace => "{",
        RightBrace => "}",
        LeftBracket => "[",
        RightBracket => "]",
        Period => ".",
        Comma => ",",
        Colon => ":",
        Semicolon => ";",
        Equal => "=",
        EqualEqual => "==",
        Bang => "!",
        BangEqual => "!=",
        Plus => "+",
        PlusEqual => "+=",
        Minus => "-",
        MinusEqual => "-=",
        Star => "*",
        StarEqual => "*=",
        Slash => "/",
        SlashEqual => "/=",
        Percent => "%",
        PercentEqual => "%=",
        Less => "<",
        LessEqual => "<=",
        LessLess => "<<",
        LessLessEqual => "<<=",
        Greater => ">",
        GreaterEqual => ">=",
        GreaterGreater => ">>",
        GreaterGreaterEqual => ">>=",
        Tilde => "~",
        Amp => "&",
        AmpEqual => "&=",
        AmpAmp => "&&",
        AmpAmpEqual => "&&=",
        Pipe => "|",
        PipeEqual => "|=",
        PipePipe => "||",
        PipePipeEqual => "||=",
        Caret => "^",
        CaretEqual => "^=",
        CaretCaret => "^^",
        CaretCaretEqual => "^^=",
        Arrow => "->",
        FatArrow => "=>",
        At => "@",
        ClosedRange => "...",
        HalfOpenRange => "..<",
    }
    keywords {
        Class => "class",
        Def => "def",
        Else => "else",
        False => "false",
        For => "for",
        If => "if",
        Import => "import",
        In => "in",
        Interface => "interface",
        Let => "let",
        Mut => "mut",
        Out => "out",
        Return => "return",
        True => "true",
        Var => "var",
        While => "while",
    }
}

/// Human description used in parse errors: `end of file`, ``symbol `(` ``,
/// ``keyword `def` ``.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(description) = self.special_description() {
            return f.write_str(description);
        }
        let text = self.spelling().unwrap_or_default();
        if self.is_keyword() {
            write!(f, "keyword `{text}`")
        } else {
            write!(f, "symbol `{text}`")
        }
    }
}

/// Payload carried by a token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenValue {
    None,
    Int(IntValue),
    Ident(Name),
}

/// A token and the position of its first character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub pos: SourcePos,
    pub value: TokenValue,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, pos: SourcePos) -> Self {
        Token {
            kind,
            pos,
            value: TokenValue::None,
        }
    }

    #[inline]
    pub fn ident(name: Name, pos: SourcePos) -> Self {
        Token {
            kind: TokenKind::Identifier,
            pos,
            value: TokenValue::Ident(name),
        }
    }

    #[inline]
    pub fn int(value: IntValue, pos: SourcePos) -> Self {
        Token {
            kind: TokenKind::IntLiteral,
            pos,
            value: TokenValue::Int(value),
        }
    }
}

const INITIAL_CAPACITY: usize = 64;

/// Growable token buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList {
            tokens: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }

    /// Append a token, growing the buffer by half when full.
    pub fn push(&mut self, token: Token) {
        if self.tokens.len() == self.tokens.capacity() {
            let extra = (self.tokens.capacity() / 2).max(INITIAL_CAPACITY);
            self.tokens.reserve_exact(extra);
        }
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
