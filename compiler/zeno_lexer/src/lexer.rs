//! The lexer state machine.
//!
//! Main dispatch looks at the byte under the cursor and calls a focused
//! method that consumes one token (or one run of trivia). Every consumed
//! character goes through the position bookkeeping below, which is also
//! where the resource limits are enforced.

use zeno_ir::{IntValue, SourceBuffer, SourcePos, StringInterner, Token, TokenKind, TokenList};

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind};
use crate::utf8;

type LexResult<T = ()> = Result<T, LexError>;

#[inline]
fn is_id_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

#[inline]
fn is_id_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

#[inline]
fn digit_value(byte: u8, radix: u32) -> Option<u32> {
    char::from(byte).to_digit(radix)
}

pub(crate) struct Lexer<'a> {
    cursor: Cursor<'a>,
    interner: &'a mut StringInterner,
    config: LexerConfig,
    line: u32,
    column: u32,
    line_chars: u32,
    file_chars: u32,
    tokens: TokenList,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(
        source: &'a SourceBuffer,
        interner: &'a mut StringInterner,
        config: LexerConfig,
    ) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            interner,
            config,
            line: 1,
            column: 1,
            line_chars: 0,
            file_chars: 0,
            tokens: TokenList::new(),
        }
    }

    pub(crate) fn run(mut self) -> LexResult<TokenList> {
        self.skip_bom()?;
        loop {
            let start = self.position();
            match self.cursor.current() {
                0 if self.cursor.is_eof() => {
                    self.tokens.push(Token::new(TokenKind::EndOfFile, start));
                    return Ok(self.tokens);
                }
                b' ' => self.bump()?,
                b'\t' => self.tab()?,
                b'\n' | b'\r' => self.line_break()?,
                b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start)?,
                b'0'..=b'9' => self.number(start)?,
                b'/' => self.slash(start)?,
                b'.' => self.period(start)?,
                b'=' => self.equal(start)?,
                b'-' => self.minus(start)?,
                b'(' => self.single(start, TokenKind::LeftParen)?,
                b')' => self.single(start, TokenKind::RightParen)?,
                b'{' => self.single(start, TokenKind::LeftBrace)?,
                b'}' => self.single(start, TokenKind::RightBrace)?,
                b'[' => self.single(start, TokenKind::LeftBracket)?,
                b']' => self.single(start, TokenKind::RightBracket)?,
                b',' => self.single(start, TokenKind::Comma)?,
                b':' => self.single(start, TokenKind::Colon)?,
                b';' => self.single(start, TokenKind::Semicolon)?,
                b'~' => self.single(start, TokenKind::Tilde)?,
                b'@' => self.single(start, TokenKind::At)?,
                b'!' => self.with_equal(start, TokenKind::Bang, TokenKind::BangEqual)?,
                b'+' => self.with_equal(start, TokenKind::Plus, TokenKind::PlusEqual)?,
                b'*' => self.with_equal(start, TokenKind::Star, TokenKind::StarEqual)?,
                b'%' => self.with_equal(start, TokenKind::Percent, TokenKind::PercentEqual)?,
                b'<' => self.doubled(
                    start,
                    [
                        TokenKind::Less,
                        TokenKind::LessEqual,
                        TokenKind::LessLess,
                        TokenKind::LessLessEqual,
                    ],
                )?,
                b'>' => self.doubled(
                    start,
                    [
                        TokenKind::Greater,
                        TokenKind::GreaterEqual,
                        TokenKind::GreaterGreater,
                        TokenKind::GreaterGreaterEqual,
                    ],
                )?,
                b'&' => self.doubled(
                    start,
                    [
                        TokenKind::Amp,
                        TokenKind::AmpEqual,
                        TokenKind::AmpAmp,
                        TokenKind::AmpAmpEqual,
                    ],
                )?,
                b'|' => self.doubled(
                    start,
                    [
                        TokenKind::Pipe,
                        TokenKind::PipeEqual,
                        TokenKind::PipePipe,
                        TokenKind::PipePipeEqual,
                    ],
                )?,
                b'^' => self.doubled(
                    start,
                    [
                        TokenKind::Caret,
                        TokenKind::CaretEqual,
                        TokenKind::CaretCaret,
                        TokenKind::CaretCaretEqual,
                    ],
                )?,
                byte if byte.is_ascii() => {
                    return Err(self.error(LexErrorKind::UnexpectedCharacter(u32::from(byte))));
                }
                _ => {
                    let (code_point, _) = self.decode_current()?;
                    return Err(self.error(LexErrorKind::UnexpectedCharacter(code_point)));
                }
            }
        }
    }

    // === Position bookkeeping ===

    #[inline]
    fn position(&self) -> SourcePos {
        SourcePos::new(self.line, self.column)
    }

    #[inline]
    fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.position())
    }

    fn count_file_char(&mut self, at: SourcePos) -> LexResult {
        self.file_chars = self.file_chars.saturating_add(1);
        if self.file_chars > self.config.limits.max_file_chars {
            return Err(LexError::new(LexErrorKind::CharacterLimitExceeded, at));
        }
        Ok(())
    }

    /// Account for one visible character spanning `width` columns.
    fn count_visible_char(&mut self, width: u32) -> LexResult {
        let at = self.position();
        self.line_chars = self.line_chars.saturating_add(1);
        if self.line_chars > self.config.limits.max_line_chars {
            return Err(LexError::new(LexErrorKind::ColumnLimitExceeded, at));
        }
        self.count_file_char(at)?;
        self.column = self.column.saturating_add(width);
        Ok(())
    }

    /// Consume one ASCII character.
    #[inline]
    fn bump(&mut self) -> LexResult {
        self.cursor.advance();
        self.count_visible_char(1)
    }

    fn bump_n(&mut self, n: usize) -> LexResult {
        for _ in 0..n {
            self.bump()?;
        }
        Ok(())
    }

    fn tab(&mut self) -> LexResult {
        let tab_stop = self.config.tab_stop.max(1);
        self.cursor.advance();
        self.count_visible_char(tab_stop - self.column % tab_stop)
    }

    /// Consume `\n`, `\r` or `\r\n` and move to the next line.
    fn line_break(&mut self) -> LexResult {
        let at = self.position();
        let first = self.cursor.current();
        self.cursor.advance();
        self.count_file_char(at)?;
        if first == b'\r' && self.cursor.current() == b'\n' {
            self.cursor.advance();
            self.count_file_char(at)?;
        }
        self.line = self.line.saturating_add(1);
        if self.line > self.config.limits.max_lines {
            return Err(LexError::new(LexErrorKind::LineLimitExceeded, at));
        }
        self.column = 1;
        self.line_chars = 0;
        Ok(())
    }

    fn skip_bom(&mut self) -> LexResult {
        if self.cursor.rest().starts_with(&zeno_ir::UTF8_BOM) {
            self.cursor.advance_n(zeno_ir::UTF8_BOM.len());
            self.count_file_char(SourcePos::START)?;
        }
        Ok(())
    }

    fn decode_current(&self) -> LexResult<(u32, usize)> {
        utf8::decode(self.cursor.rest()).ok_or_else(|| self.error(LexErrorKind::BadEncoding))
    }

    /// Consume any one character inside a comment.
    fn comment_char(&mut self) -> LexResult {
        match self.cursor.current() {
            b'\t' => self.tab(),
            b'\n' | b'\r' => self.line_break(),
            0 => Err(self.error(LexErrorKind::UnexpectedCharacter(0))),
            byte if byte.is_ascii() => self.bump(),
            _ => {
                let (_, len) = self.decode_current()?;
                self.cursor.advance_n(len);
                self.count_visible_char(1)
            }
        }
    }

    // === Trivia ===

    fn line_comment(&mut self) -> LexResult {
        self.bump_n(2)?;
        let end = self.cursor.pos() + self.cursor.distance_to_line_end();
        while self.cursor.pos() < end {
            self.comment_char()?;
        }
        Ok(())
    }

    /// Block comments nest: `/* /* */ */` is one comment.
    fn block_comment(&mut self) -> LexResult {
        self.bump_n(2)?;
        let mut depth = 1u32;
        loop {
            match (self.cursor.current(), self.cursor.peek()) {
                (0, _) if self.cursor.is_eof() => {
                    return Err(self.error(LexErrorKind::UnclosedBlockComment));
                }
                (b'/', b'*') => {
                    self.bump_n(2)?;
                    depth += 1;
                }
                (b'*', b'/') => {
                    self.bump_n(2)?;
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => self.comment_char()?,
            }
        }
    }

    // === Tokens ===

    fn push(&mut self, kind: TokenKind, start: SourcePos) {
        self.tokens.push(Token::new(kind, start));
    }

    fn single(&mut self, start: SourcePos, kind: TokenKind) -> LexResult {
        self.bump()?;
        self.push(kind, start);
        Ok(())
    }

    /// `X` or `X=`.
    fn with_equal(&mut self, start: SourcePos, plain: TokenKind, equal: TokenKind) -> LexResult {
        self.bump()?;
        let kind = if self.cursor.current() == b'=' {
            self.bump()?;
            equal
        } else {
            plain
        };
        self.push(kind, start);
        Ok(())
    }

    /// `X`, `X=`, `XX` or `XX=`, given in that order.
    fn doubled(&mut self, start: SourcePos, kinds: [TokenKind; 4]) -> LexResult {
        let byte = self.cursor.current();
        self.bump()?;
        let [plain, equal, double, double_equal] = kinds;
        let kind = if self.cursor.current() == byte {
            self.bump()?;
            if self.cursor.current() == b'=' {
                self.bump()?;
                double_equal
            } else {
                double
            }
        } else if self.cursor.current() == b'=' {
            self.bump()?;
            equal
        } else {
            plain
        };
        self.push(kind, start);
        Ok(())
    }

    fn slash(&mut self, start: SourcePos) -> LexResult {
        match self.cursor.peek() {
            b'/' => self.line_comment(),
            b'*' => self.block_comment(),
            _ => self.with_equal(start, TokenKind::Slash, TokenKind::SlashEqual),
        }
    }

    fn period(&mut self, start: SourcePos) -> LexResult {
        match (self.cursor.peek(), self.cursor.peek2()) {
            (b'.', b'.') => {
                self.bump_n(3)?;
                self.push(TokenKind::ClosedRange, start);
                Ok(())
            }
            (b'.', b'<') => {
                self.bump_n(3)?;
                self.push(TokenKind::HalfOpenRange, start);
                Ok(())
            }
            _ => self.single(start, TokenKind::Period),
        }
    }

    fn equal(&mut self, start: SourcePos) -> LexResult {
        match self.cursor.peek() {
            b'=' => {
                self.bump_n(2)?;
                self.push(TokenKind::EqualEqual, start);
                Ok(())
            }
            b'>' => {
                self.bump_n(2)?;
                self.push(TokenKind::FatArrow, start);
                Ok(())
            }
            _ => self.single(start, TokenKind::Equal),
        }
    }

    fn minus(&mut self, start: SourcePos) -> LexResult {
        match self.cursor.peek() {
            b'=' => {
                self.bump_n(2)?;
                self.push(TokenKind::MinusEqual, start);
                Ok(())
            }
            b'>' => {
                self.bump_n(2)?;
                self.push(TokenKind::Arrow, start);
                Ok(())
            }
            _ => self.single(start, TokenKind::Minus),
        }
    }

    fn identifier(&mut self, start: SourcePos) -> LexResult {
        debug_assert!(is_id_start(self.cursor.current()));
        let from = self.cursor.pos();
        while is_id_continue(self.cursor.current()) {
            self.bump()?;
        }
        let text = std::str::from_utf8(self.cursor.slice_from(from))
            .map_err(|_| LexError::new(LexErrorKind::BadEncoding, start))?;
        let token = match TokenKind::keyword(text) {
            Some(keyword) => Token::new(keyword, start),
            None => Token::ident(self.interner.intern(text), start),
        };
        self.tokens.push(token);
        Ok(())
    }

    /// Integer literal: decimal, `0x` hexadecimal or `0b` binary, with
    /// single `_` separators between digits.
    fn number(&mut self, start: SourcePos) -> LexResult {
        let bad_literal = LexError::new(LexErrorKind::BadIntLiteral, start);
        let mut radix = 10;
        if self.cursor.current() == b'0' {
            match self.cursor.peek() {
                b'x' | b'X' => radix = 16,
                b'b' | b'B' => radix = 2,
                next if is_id_continue(next) => {
                    return Err(LexError::new(LexErrorKind::DecimalLeadingZero, start));
                }
                _ => {
                    self.bump()?;
                    self.tokens.push(Token::int(IntValue::Small(0), start));
                    return Ok(());
                }
            }
            self.bump_n(2)?;
            if digit_value(self.cursor.current(), radix).is_none() {
                return Err(bad_literal);
            }
        }

        let mut value = Some(0u64);
        let mut digits = String::new();
        let mut after_separator = false;
        loop {
            let byte = self.cursor.current();
            if byte == b'_' {
                if after_separator {
                    return Err(bad_literal);
                }
                after_separator = true;
                self.bump()?;
                continue;
            }
            let Some(digit) = digit_value(byte, radix) else {
                if is_id_continue(byte) {
                    return Err(bad_literal);
                }
                break;
            };
            value = value
                .and_then(|v| v.checked_mul(u64::from(radix)))
                .and_then(|v| v.checked_add(u64::from(digit)))
                .filter(|&v| v <= zeno_ir::SMALL_INT_MAX);
            digits.push(char::from(byte));
            after_separator = false;
            self.bump()?;
        }
        if after_separator {
            return Err(bad_literal);
        }

        let value = match value {
            Some(small) => IntValue::Small(small),
            None => IntValue::Oversized {
                digits: self.interner.intern(&digits),
                radix,
            },
        };
        self.tokens.push(Token::int(value, start));
        Ok(())
    }
}
