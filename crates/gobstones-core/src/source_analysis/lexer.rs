// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Gobstones source code.
//!
//! [`Lexer::next_token`] produces one token per call, skipping whitespace and
//! comments (crossing file boundaries as needed) and evaluating region
//! pragmas on the way. After the input is exhausted it keeps returning an
//! EOF token at the terminal position.
//!
//! Errors are fatal: the first malformed literal, unclosed comment, or
//! unknown character aborts tokenization with a [`SyntaxError`]. Pragma
//! problems are the exception — an empty or unknown pragma only records a
//! [`Warning`], retrievable once lexing is done.
//!
//! # Comments
//!
//! Four forms: `--`, `//`, and `#` to end of line; `/* ... */` and
//! `{- ... -}` block comments. Block comments nest, each form tracking its
//! own delimiter pair only.
//!
//! # Pragmas
//!
//! A comment of the shape `/*@part1@part2@...@*/` is a pragma. Pragmas are
//! read with the reader's invisible operations, so they are zero-width: the
//! positions of surrounding tokens are as if the pragma were not there.
//! `BEGIN_REGION`/`END_REGION` manipulate the region stack; anything else
//! warns.

use ecow::EcoString;

use super::reader::{MultiReader, Reader};
use super::tuple_assignment::TupleAssignmentDetector;
use super::{Position, Span, SyntaxError, SyntaxErrorKind, Token, TokenKind, Warning, WarningKind};

/// The symbol table, longest overlapping prefixes first (maximal munch).
const SYMBOLS: &[(&str, TokenKind)] = &[
    ("(", TokenKind::LeftParen),
    (")", TokenKind::RightParen),
    ("{", TokenKind::LeftBrace),
    ("}", TokenKind::RightBrace),
    ("[", TokenKind::LeftBracket),
    ("]", TokenKind::RightBracket),
    (",", TokenKind::Comma),
    (";", TokenKind::Semicolon),
    ("..", TokenKind::Range),
    (":=", TokenKind::Assign),
    ("&&", TokenKind::And),
    ("||", TokenKind::Or),
    ("<-", TokenKind::Gets),
    ("|", TokenKind::Pipe),
    ("->", TokenKind::Arrow),
    ("==", TokenKind::Eq),
    ("/=", TokenKind::Ne),
    ("<=", TokenKind::Le),
    (">=", TokenKind::Ge),
    ("<", TokenKind::Lt),
    (">", TokenKind::Gt),
    ("++", TokenKind::Concat),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Times),
    ("^", TokenKind::Pow),
];

/// A lexer that tokenizes Gobstones source code.
pub struct Lexer {
    input: MultiReader,
    reader: Reader,
    warnings: Vec<Warning>,
    detector: TupleAssignmentDetector,
}

impl std::fmt::Debug for Lexer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("position", &self.reader.position())
            .field("warnings", &self.warnings.len())
            .finish()
    }
}

impl Lexer {
    /// Creates a lexer over a single anonymous source string.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self::over(MultiReader::from_string(source))
    }

    /// Creates a lexer over named sources, concatenated in order.
    #[must_use]
    pub fn from_files(files: Vec<(EcoString, EcoString)>) -> Self {
        Self::over(MultiReader::from_files(files))
    }

    fn over(mut input: MultiReader) -> Self {
        let reader = input
            .next_file()
            .unwrap_or_else(|| Reader::new("(program)", ""));
        Self {
            input,
            reader,
            warnings: Vec::new(),
            detector: TupleAssignmentDetector::new(),
        }
    }

    /// Returns the warnings accumulated so far.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Consumes the lexer, yielding its warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }

    /// Applies a reader transition in place.
    fn advance_reader(&mut self, f: impl FnOnce(Reader) -> Reader) {
        let reader = std::mem::replace(&mut self.reader, Reader::new("", ""));
        self.reader = f(reader);
    }

    /// Lexes the next token.
    ///
    /// # Errors
    ///
    /// Any lexical problem aborts with a [`SyntaxError`]; see the module
    /// docs for the taxonomy.
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        self.skip_whitespace_and_comments()?;

        let Some(c) = self.reader.peek() else {
            let end = self.reader.position();
            return Ok(Token::new(TokenKind::Eof, Span::at(end)));
        };

        let start = self.reader.position();
        let kind = if c.is_ascii_digit() {
            self.lex_number(&start)?
        } else if c.is_ascii_alphabetic() || c == '_' || c == '\'' {
            self.lex_identifier_or_keyword(&start)?
        } else if c == '"' {
            self.lex_string(&start)?
        } else {
            self.lex_symbol(&start)?
        };

        let span = Span::new(start, self.reader.position());
        if self.detector.feed(&kind) {
            return Err(SyntaxError::new(
                SyntaxErrorKind::ObsoleteTupleAssignment,
                span,
            ));
        }
        Ok(Token::new(kind, span))
    }

    /// Skips whitespace, comments, and pragmas, crossing file boundaries.
    fn skip_whitespace_and_comments(&mut self) -> Result<(), SyntaxError> {
        loop {
            if self.reader.eof() {
                if !self.input.more_files() {
                    return Ok(());
                }
                // The region stack survives the boundary: regions may open
                // in one file and close in another.
                let exhausted = std::mem::replace(&mut self.reader, Reader::new("", ""));
                let regions = exhausted.into_regions();
                if let Some(next) = self.input.next_file() {
                    self.reader = next.with_regions(regions);
                }
                continue;
            }

            if self.reader.starts_with("/*@") {
                self.read_pragma()?;
            } else if self.reader.starts_with("--") || self.reader.starts_with("//") {
                self.skip_line_comment();
            } else if self.reader.starts_with("/*") {
                self.skip_block_comment("/*", "*/")?;
            } else if self.reader.starts_with("{-") {
                self.skip_block_comment("{-", "-}")?;
            } else {
                match self.reader.peek() {
                    Some('#') => self.skip_line_comment(),
                    Some(c) if c.is_whitespace() => {
                        self.advance_reader(Reader::consume_char);
                    }
                    _ => return Ok(()),
                }
            }
        }
    }

    /// Skips to the end of the current line.
    fn skip_line_comment(&mut self) {
        while matches!(self.reader.peek(), Some(c) if c != '\n') {
            self.advance_reader(Reader::consume_char);
        }
    }

    /// Skips a nested block comment delimited by `open`/`close`.
    fn skip_block_comment(&mut self, open: &str, close: &str) -> Result<(), SyntaxError> {
        let start = self.reader.position();
        self.advance_reader(|r| r.consume_str(open));

        let mut depth = 1u32;
        while depth > 0 {
            if self.reader.eof() {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UnclosedMultilineComment,
                    Span::new(start, self.reader.position()),
                ));
            }
            if self.reader.starts_with(open) {
                depth += 1;
                self.advance_reader(|r| r.consume_str(open));
            } else if self.reader.starts_with(close) {
                depth -= 1;
                self.advance_reader(|r| r.consume_str(close));
            } else {
                self.advance_reader(Reader::consume_char);
            }
        }
        Ok(())
    }

    /// Reads a pragma `/*@part1@...@*/` with invisible advancement.
    fn read_pragma(&mut self) -> Result<(), SyntaxError> {
        let anchor = self.reader.position();
        self.advance_reader(|r| r.consume_invisible_str("/*@"));

        let mut parts: Vec<EcoString> = Vec::new();
        let mut current = String::new();
        loop {
            match self.reader.peek() {
                None => {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::UnclosedMultilineComment,
                        Span::new(anchor, self.reader.position()),
                    ));
                }
                Some('@') => {
                    self.advance_reader(Reader::consume_invisible_char);
                    parts.push(EcoString::from(std::mem::take(&mut current).as_str()));
                    if self.reader.starts_with("*/") {
                        self.advance_reader(|r| r.consume_invisible_str("*/"));
                        break;
                    }
                }
                Some(c) => {
                    self.advance_reader(Reader::consume_invisible_char);
                    current.push(c);
                }
            }
        }

        self.apply_pragma(parts, anchor);
        Ok(())
    }

    /// Applies a parsed pragma: region operations or a warning.
    ///
    /// The first part names the pragma; `END_REGION` tolerates a trailing
    /// region name and pops regardless.
    fn apply_pragma(&mut self, parts: Vec<EcoString>, anchor: Position) {
        match parts.as_slice() {
            [name, region] if name == "BEGIN_REGION" => {
                let region = region.clone();
                self.advance_reader(|r| r.begin_region(region));
            }
            [name, ..] if name == "END_REGION" => {
                self.advance_reader(Reader::end_region);
            }
            [only] if only.is_empty() => {
                self.warnings
                    .push(Warning::new(WarningKind::EmptyPragma, anchor));
            }
            _ => {
                let name = parts.into_iter().next().unwrap_or_default();
                self.warnings
                    .push(Warning::new(WarningKind::UnknownPragma { name }, anchor));
            }
        }
    }

    /// Lexes a numeric literal (a maximal run of decimal digits).
    fn lex_number(&mut self, start: &Position) -> Result<TokenKind, SyntaxError> {
        let mut digits = String::new();
        while let Some(c) = self.reader.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.advance_reader(Reader::consume_char);
        }

        if digits.len() >= 2 && digits.starts_with('0') {
            return Err(SyntaxError::new(
                SyntaxErrorKind::NumericConstantLeadingZeroes,
                Span::new(start.clone(), self.reader.position()),
            ));
        }
        Ok(TokenKind::Num(EcoString::from(digits.as_str())))
    }

    /// Lexes an identifier, keyword, or the reserved `_`.
    fn lex_identifier_or_keyword(&mut self, start: &Position) -> Result<TokenKind, SyntaxError> {
        let mut lexeme = String::new();
        while let Some(c) = self.reader.peek() {
            if !(c.is_ascii_alphanumeric() || c == '_' || c == '\'') {
                break;
            }
            lexeme.push(c);
            self.advance_reader(Reader::consume_char);
        }

        if let Some(keyword) = TokenKind::keyword(&lexeme) {
            return Ok(keyword);
        }
        match lexeme.chars().next() {
            Some(c) if c.is_ascii_uppercase() => Ok(TokenKind::UpperId(EcoString::from(
                lexeme.as_str(),
            ))),
            Some(c) if c.is_ascii_lowercase() => Ok(TokenKind::LowerId(EcoString::from(
                lexeme.as_str(),
            ))),
            _ => Err(SyntaxError::new(
                SyntaxErrorKind::IdentifierMustStartWithAlphabeticCharacter,
                Span::new(start.clone(), self.reader.position()),
            )),
        }
    }

    /// Lexes a string literal, applying escapes.
    ///
    /// `\a \b \f \n \r \t \v` map to their control characters; any other
    /// escaped character is included literally. Newlines may appear inside
    /// the literal.
    fn lex_string(&mut self, start: &Position) -> Result<TokenKind, SyntaxError> {
        self.advance_reader(Reader::consume_char); // opening quote

        let mut value = String::new();
        loop {
            match self.reader.peek() {
                None => {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::UnclosedStringConstant,
                        Span::new(start.clone(), self.reader.position()),
                    ));
                }
                Some('"') => {
                    self.advance_reader(Reader::consume_char);
                    return Ok(TokenKind::Str(EcoString::from(value.as_str())));
                }
                Some('\\') => {
                    self.advance_reader(Reader::consume_char);
                    let Some(escaped) = self.reader.peek() else {
                        return Err(SyntaxError::new(
                            SyntaxErrorKind::UnclosedStringConstant,
                            Span::new(start.clone(), self.reader.position()),
                        ));
                    };
                    self.advance_reader(Reader::consume_char);
                    value.push(unescape(escaped));
                }
                Some(c) => {
                    self.advance_reader(Reader::consume_char);
                    value.push(c);
                }
            }
        }
    }

    /// Lexes a symbol by maximal munch over [`SYMBOLS`].
    fn lex_symbol(&mut self, start: &Position) -> Result<TokenKind, SyntaxError> {
        for (text, kind) in SYMBOLS {
            if self.reader.starts_with(text) {
                self.advance_reader(|r| r.consume_str(text));
                return Ok(kind.clone());
            }
        }

        let Some(c) = self.reader.peek() else {
            return Ok(TokenKind::Eof);
        };
        self.advance_reader(Reader::consume_char);
        Err(SyntaxError::new(
            SyntaxErrorKind::UnknownToken {
                lexeme: ecow::eco_format!("{c}"),
            },
            Span::new(start.clone(), self.reader.position()),
        ))
    }
}

/// Maps an escaped character to its value.
const fn unescape(c: char) -> char {
    match c {
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{0B}',
        other => other,
    }
}

/// Tokenizes a source string, excluding the EOF token.
///
/// # Errors
///
/// Returns the first lexical error, if any.
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = tokenize_with_eof(source)?;
    tokens.pop();
    Ok(tokens)
}

/// Tokenizes a source string, including the terminal EOF token.
///
/// # Errors
///
/// Returns the first lexical error, if any.
pub fn tokenize_with_eof(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let is_eof = token.kind().is_eof();
        tokens.push(token);
        if is_eof {
            return Ok(tokens);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to lex and extract just the token kinds.
    fn lex_kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .expect("input should lex")
            .into_iter()
            .map(Token::into_kind)
            .collect()
    }

    fn lex_error(source: &str) -> SyntaxError {
        tokenize(source).expect_err("input should fail to lex")
    }

    #[test]
    fn lex_empty() {
        assert!(lex_kinds("").is_empty());
        assert!(lex_kinds("   \n\t ").is_empty());
        assert!(lex_kinds("-- just a comment").is_empty());
    }

    #[test]
    fn lex_identifiers_and_case() {
        assert_eq!(
            lex_kinds("foo Bar x1 camposLibres' PonerAl_Norte"),
            vec![
                TokenKind::LowerId("foo".into()),
                TokenKind::UpperId("Bar".into()),
                TokenKind::LowerId("x1".into()),
                TokenKind::LowerId("camposLibres'".into()),
                TokenKind::UpperId("PonerAl_Norte".into()),
            ]
        );
    }

    #[test]
    fn lex_keywords() {
        assert_eq!(
            lex_kinds("program if then else repeat foreach in while to let not div mod"),
            vec![
                TokenKind::Program,
                TokenKind::If,
                TokenKind::Then,
                TokenKind::Else,
                TokenKind::Repeat,
                TokenKind::Foreach,
                TokenKind::In,
                TokenKind::While,
                TokenKind::To,
                TokenKind::Let,
                TokenKind::Not,
                TokenKind::Div,
                TokenKind::Mod,
            ]
        );
    }

    #[test]
    fn lex_switch_and_match_same_tag() {
        assert_eq!(lex_kinds("switch match"), vec![TokenKind::Switch, TokenKind::Switch]);
    }

    #[test]
    fn lex_underscore_is_reserved() {
        assert_eq!(lex_kinds("_"), vec![TokenKind::Underscore]);
    }

    #[test]
    fn lex_identifier_bad_start() {
        assert_eq!(
            lex_error("_foo").kind,
            SyntaxErrorKind::IdentifierMustStartWithAlphabeticCharacter
        );
        assert_eq!(
            lex_error("'tic").kind,
            SyntaxErrorKind::IdentifierMustStartWithAlphabeticCharacter
        );
    }

    #[test]
    fn lex_numbers() {
        assert_eq!(
            lex_kinds("0 7 42 123456789012345678901234567890"),
            vec![
                TokenKind::Num("0".into()),
                TokenKind::Num("7".into()),
                TokenKind::Num("42".into()),
                TokenKind::Num("123456789012345678901234567890".into()),
            ]
        );
    }

    #[test]
    fn lex_number_leading_zero_rejected() {
        let err = lex_error("007");
        assert_eq!(err.kind, SyntaxErrorKind::NumericConstantLeadingZeroes);
        assert_eq!(lex_error("01").kind, SyntaxErrorKind::NumericConstantLeadingZeroes);
    }

    #[test]
    fn lex_symbols_maximal_munch() {
        assert_eq!(
            lex_kinds(".. := && || <- | -> == /= <= >= < > ++ + - * ^"),
            vec![
                TokenKind::Range,
                TokenKind::Assign,
                TokenKind::And,
                TokenKind::Or,
                TokenKind::Gets,
                TokenKind::Pipe,
                TokenKind::Arrow,
                TokenKind::Eq,
                TokenKind::Ne,
                TokenKind::Le,
                TokenKind::Ge,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Concat,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Times,
                TokenKind::Pow,
            ]
        );
    }

    #[test]
    fn lex_adjacent_symbols_prefer_longest() {
        // `<-2` is Gets then Num, not Lt Minus 2.
        assert_eq!(
            lex_kinds("<-2"),
            vec![TokenKind::Gets, TokenKind::Num("2".into())]
        );
        // `1..5` is a range, not two stray dots.
        assert_eq!(
            lex_kinds("1..5"),
            vec![
                TokenKind::Num("1".into()),
                TokenKind::Range,
                TokenKind::Num("5".into()),
            ]
        );
    }

    #[test]
    fn lex_unknown_token() {
        let err = lex_error("program ?");
        assert_eq!(err.kind, SyntaxErrorKind::UnknownToken { lexeme: "?".into() });
        assert_eq!(lex_error("=").kind, SyntaxErrorKind::UnknownToken { lexeme: "=".into() });
        assert_eq!(lex_error("/").kind, SyntaxErrorKind::UnknownToken { lexeme: "/".into() });
    }

    #[test]
    fn lex_strings() {
        assert_eq!(
            lex_kinds(r#""hola" "" "dos palabras""#),
            vec![
                TokenKind::Str("hola".into()),
                TokenKind::Str("".into()),
                TokenKind::Str("dos palabras".into()),
            ]
        );
    }

    #[test]
    fn lex_string_escapes() {
        assert_eq!(
            lex_kinds(r#""a\nb\tc\"d\\e""#),
            vec![TokenKind::Str("a\nb\tc\"d\\e".into())]
        );
        assert_eq!(
            lex_kinds(r#""\a\b\f\v\r""#),
            vec![TokenKind::Str("\u{07}\u{08}\u{0C}\u{0B}\r".into())]
        );
        // Unknown escapes keep the character.
        assert_eq!(lex_kinds(r#""\q""#), vec![TokenKind::Str("q".into())]);
    }

    #[test]
    fn lex_string_may_span_lines() {
        assert_eq!(
            lex_kinds("\"dos\nlineas\""),
            vec![TokenKind::Str("dos\nlineas".into())]
        );
    }

    #[test]
    fn lex_string_may_contain_comment_markers() {
        assert_eq!(
            lex_kinds("\"/* not a comment */ -- nor this\""),
            vec![TokenKind::Str("/* not a comment */ -- nor this".into())]
        );
    }

    #[test]
    fn lex_unclosed_string_anchors_at_opening_quote() {
        let err = lex_error("x := \"sin cerrar");
        assert_eq!(err.kind, SyntaxErrorKind::UnclosedStringConstant);
        assert_eq!(err.span.start().column(), 6);
    }

    #[test]
    fn lex_line_comment_forms() {
        assert_eq!(lex_kinds("1 -- comment\n2"), lex_kinds("1 // comment\n2"));
        assert_eq!(
            lex_kinds("1 # comment\n2"),
            vec![TokenKind::Num("1".into()), TokenKind::Num("2".into())]
        );
    }

    #[test]
    fn lex_double_minus_is_a_comment_not_two_minuses() {
        assert_eq!(lex_kinds("x--y\nz"), vec![
            TokenKind::LowerId("x".into()),
            TokenKind::LowerId("z".into()),
        ]);
    }

    #[test]
    fn lex_block_comments_nest_per_delimiter() {
        assert_eq!(
            lex_kinds("1 /* outer /* inner */ still outer */ 2"),
            vec![TokenKind::Num("1".into()), TokenKind::Num("2".into())]
        );
        assert_eq!(
            lex_kinds("1 {- outer {- inner -} still outer -} 2"),
            vec![TokenKind::Num("1".into()), TokenKind::Num("2".into())]
        );
    }

    #[test]
    fn lex_unclosed_block_comment() {
        assert_eq!(
            lex_error("1 /* sin cerrar").kind,
            SyntaxErrorKind::UnclosedMultilineComment
        );
        assert_eq!(
            lex_error("1 {- {- -}").kind,
            SyntaxErrorKind::UnclosedMultilineComment
        );
    }

    #[test]
    fn lex_eof_repeats_at_terminal_position() {
        let mut lexer = Lexer::new("x");
        let first = lexer.next_token().unwrap();
        assert_eq!(first.kind(), &TokenKind::LowerId("x".into()));

        let eof_a = lexer.next_token().unwrap();
        let eof_b = lexer.next_token().unwrap();
        assert!(eof_a.kind().is_eof());
        assert_eq!(eof_a, eof_b);
        assert_eq!(eof_a.span().start().column(), 2);
    }

    #[test]
    fn lex_token_positions() {
        let tokens = tokenize("x :=\n  42").unwrap();
        let [x, assign, num] = tokens.as_slice() else {
            panic!("expected three tokens");
        };
        assert_eq!((x.span().start().line(), x.span().start().column()), (1, 1));
        assert_eq!((x.span().end().line(), x.span().end().column()), (1, 2));
        assert_eq!(
            (assign.span().start().line(), assign.span().start().column()),
            (1, 3)
        );
        assert_eq!((num.span().start().line(), num.span().start().column()), (2, 3));
    }

    #[test]
    fn lex_obsolete_tuple_assignment() {
        let err = lex_error("(x, y) := f()");
        assert_eq!(err.kind, SyntaxErrorKind::ObsoleteTupleAssignment);
        assert_eq!(err.span.start().column(), 8);
    }

    #[test]
    fn lex_let_tuple_assignment_is_not_obsolete() {
        assert_eq!(lex_kinds("let (x, y) := f()").len(), 10);
    }

    #[test]
    fn pragma_regions_are_zero_width() {
        let tokens = tokenize("/*@BEGIN_REGION@A@*/x").unwrap();
        let x = &tokens[0];
        assert_eq!(x.span().start().column(), 1);
        assert_eq!(x.span().start().region(), "A");
    }

    #[test]
    fn pragma_end_region_restores_file_label() {
        let tokens = tokenize("/*@BEGIN_REGION@A@*/x/*@END_REGION@*/ y").unwrap();
        assert_eq!(tokens[0].span().start().region(), "A");
        assert_eq!(tokens[1].span().start().region(), "(program)");
    }

    #[test]
    fn pragma_end_region_tolerates_a_name() {
        let tokens = tokenize("/*@BEGIN_REGION@A@*/x/*@END_REGION@A@*/ y").unwrap();
        assert_eq!(tokens[0].span().start().region(), "A");
        assert_eq!(tokens[1].span().start().region(), "(program)");
    }

    #[test]
    fn pragma_empty_warns() {
        let mut lexer = Lexer::new("/*@@*/x");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.kind(), &TokenKind::LowerId("x".into()));
        assert_eq!(lexer.warnings().len(), 1);
        assert_eq!(lexer.warnings()[0].kind, WarningKind::EmptyPragma);
    }

    #[test]
    fn pragma_unknown_warns_with_name() {
        let mut lexer = Lexer::new("/*@TRACE@on@*/x");
        lexer.next_token().unwrap();
        assert_eq!(
            lexer.warnings()[0].kind,
            WarningKind::UnknownPragma { name: "TRACE".into() }
        );
    }

    #[test]
    fn ordinary_comments_are_visible_for_positions() {
        // A regular comment advances columns; a pragma does not.
        let tokens = tokenize("/*ignore*/x").unwrap();
        assert_eq!(tokens[0].span().start().column(), 11);
    }

    #[test]
    fn lexer_crosses_file_boundaries() {
        let mut lexer = Lexer::from_files(vec![
            ("a.gbs".into(), "uno".into()),
            ("b.gbs".into(), "dos".into()),
        ]);
        let first = lexer.next_token().unwrap();
        assert_eq!(first.span().start().file(), "a.gbs");
        let second = lexer.next_token().unwrap();
        assert_eq!(second.kind(), &TokenKind::LowerId("dos".into()));
        assert_eq!(second.span().start().file(), "b.gbs");
        assert!(lexer.next_token().unwrap().kind().is_eof());
    }

    #[test]
    fn regions_survive_file_boundaries() {
        let mut lexer = Lexer::from_files(vec![
            ("a.gbs".into(), "/*@BEGIN_REGION@shared@*/uno".into()),
            ("b.gbs".into(), "dos/*@END_REGION@*/ tres".into()),
        ]);
        assert_eq!(lexer.next_token().unwrap().span().start().region(), "shared");
        assert_eq!(lexer.next_token().unwrap().span().start().region(), "shared");
        assert_eq!(lexer.next_token().unwrap().span().start().region(), "b.gbs");
    }

    #[test]
    fn token_stream_reconstructs_source_offsets() {
        // Lexeme lengths plus span offsets stay consistent with the input.
        let source = "program { x := 10 }";
        for token in tokenize(source).unwrap() {
            let start = token.span().start().offset() as usize;
            let end = token.span().end().offset() as usize;
            assert_eq!(&source[start..end], token.kind().to_string());
        }
    }
}
