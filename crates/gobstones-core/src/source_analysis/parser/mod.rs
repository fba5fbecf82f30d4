// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for Gobstones source code.
//!
//! The parser pulls tokens from the [`Lexer`] one at a time — a single
//! current-token cell is its only lookahead and its only mutable state
//! beyond the lexer itself. Parsing stops at the first error; there is no
//! recovery, so the error that comes out always points at the first
//! offending position.
//!
//! # Position discipline
//!
//! Every node's span starts at its first token. The end position depends on
//! the construct:
//!
//! - blocks end at the start of their closing `}`; tuples, constructor
//!   forms, lists, and ranges at the start of their closing `)` / `]`;
//! - definitions and statements that end in a block inherit the block's end;
//! - everything else ends where the following token starts.
//!
//! # Usage
//!
//! ```
//! use gobstones_core::source_analysis::parse;
//!
//! let definitions = parse("program { x := 3 }").unwrap();
//! assert_eq!(definitions.len(), 1);
//! ```

use ecow::EcoString;

use crate::ast::{Definition, Identifier};
use crate::source_analysis::{
    Lexer, SyntaxError, SyntaxErrorKind, Token, TokenKind, Warning,
};

// Submodules with additional impl blocks for Parser
mod expressions;
mod statements;

#[cfg(test)]
mod property_tests;

/// Parses a source string into its top-level definitions.
///
/// # Errors
///
/// Returns the first lexical or syntactic error.
pub fn parse(source: &str) -> Result<Vec<Definition>, SyntaxError> {
    Ok(parse_with_warnings(source)?.0)
}

/// Parses a source string, also yielding the lexer's warnings.
///
/// # Errors
///
/// Returns the first lexical or syntactic error.
pub fn parse_with_warnings(source: &str) -> Result<(Vec<Definition>, Vec<Warning>), SyntaxError> {
    let mut parser = Parser::new(source)?;
    let definitions = parser.parse_program()?;
    Ok((definitions, parser.into_warnings()))
}

/// Parses named sources, concatenated in declaration order.
///
/// # Errors
///
/// Returns the first lexical or syntactic error.
pub fn parse_files(files: Vec<(EcoString, EcoString)>) -> Result<Vec<Definition>, SyntaxError> {
    Ok(parse_files_with_warnings(files)?.0)
}

/// Parses named sources, also yielding the lexer's warnings.
///
/// # Errors
///
/// Returns the first lexical or syntactic error.
pub fn parse_files_with_warnings(
    files: Vec<(EcoString, EcoString)>,
) -> Result<(Vec<Definition>, Vec<Warning>), SyntaxError> {
    let mut parser = Parser::from_files(files)?;
    let definitions = parser.parse_program()?;
    Ok((definitions, parser.into_warnings()))
}

/// The parser state: a lexer and the one-token lookahead cell.
pub struct Parser {
    lexer: Lexer,
    current: Token,
}

impl Parser {
    /// Creates a parser over a single anonymous source string.
    ///
    /// # Errors
    ///
    /// Fails if the very first token is malformed.
    pub fn new(source: &str) -> Result<Self, SyntaxError> {
        Self::over(Lexer::new(source))
    }

    /// Creates a parser over named sources.
    ///
    /// # Errors
    ///
    /// Fails if the very first token is malformed.
    pub fn from_files(files: Vec<(EcoString, EcoString)>) -> Result<Self, SyntaxError> {
        Self::over(Lexer::from_files(files))
    }

    fn over(mut lexer: Lexer) -> Result<Self, SyntaxError> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Returns the warnings the lexer has accumulated so far.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        self.lexer.warnings()
    }

    /// Consumes the parser, yielding the lexer's warnings.
    #[must_use]
    pub fn into_warnings(self) -> Vec<Warning> {
        self.lexer.into_warnings()
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Advances to the next token and returns the previous one.
    fn advance(&mut self) -> Result<Token, SyntaxError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Checks if the current token matches the given kind (by discriminant).
    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current.kind()) == std::mem::discriminant(kind)
    }

    /// Consumes the current token if it matches the given kind.
    fn match_token(&mut self, kind: &TokenKind) -> Result<bool, SyntaxError> {
        if self.check(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes the current token, requiring it to match the given kind.
    fn expect(&mut self, kind: &TokenKind, expected: &str) -> Result<Token, SyntaxError> {
        if self.check(kind) {
            self.advance()
        } else {
            Err(self.expected_error(expected))
        }
    }

    /// Consumes a lowercase identifier.
    fn expect_lower_id(&mut self, expected: &str) -> Result<Identifier, SyntaxError> {
        if let TokenKind::LowerId(name) = self.current.kind() {
            let name = name.clone();
            let token = self.advance()?;
            Ok(Identifier::new(name, token.span().clone()))
        } else {
            Err(self.expected_error(expected))
        }
    }

    /// Consumes an uppercase identifier.
    fn expect_upper_id(&mut self, expected: &str) -> Result<Identifier, SyntaxError> {
        if let TokenKind::UpperId(name) = self.current.kind() {
            let name = name.clone();
            let token = self.advance()?;
            Ok(Identifier::new(name, token.span().clone()))
        } else {
            Err(self.expected_error(expected))
        }
    }

    /// Builds an expected-but-found error at the current token.
    fn expected_error(&self, expected: impl Into<EcoString>) -> SyntaxError {
        SyntaxError::expected_but_found(
            expected,
            self.current.kind().description(),
            self.current.span().clone(),
        )
    }

    // ========================================================================
    // Definitions
    // ========================================================================

    /// Parses the whole token stream as a list of top-level definitions.
    ///
    /// # Errors
    ///
    /// An empty source is an error; so is any token that does not start a
    /// definition.
    pub fn parse_program(&mut self) -> Result<Vec<Definition>, SyntaxError> {
        if self.current.kind().is_eof() {
            return Err(SyntaxError::new(
                SyntaxErrorKind::EmptySource,
                self.current.span().clone(),
            ));
        }

        let mut definitions = Vec::new();
        while !self.current.kind().is_eof() {
            definitions.push(self.parse_definition()?);
        }
        Ok(definitions)
    }

    fn parse_definition(&mut self) -> Result<Definition, SyntaxError> {
        match self.current.kind() {
            TokenKind::Program => self.parse_program_definition(),
            TokenKind::Procedure => self.parse_procedure_definition(),
            TokenKind::Function => self.parse_function_definition(),
            // Recognized top-level forms without an implementation yet.
            TokenKind::Interactive => Err(self.not_yet_supported("interactive")),
            TokenKind::Type => Err(self.not_yet_supported("type")),
            _ => Err(self.expected_error("a definition")),
        }
    }

    fn not_yet_supported(&self, construct: &str) -> SyntaxError {
        SyntaxError::new(
            SyntaxErrorKind::NotYetSupported {
                construct: construct.into(),
            },
            self.current.span().clone(),
        )
    }

    /// Parses `program { ... }`.
    fn parse_program_definition(&mut self) -> Result<Definition, SyntaxError> {
        let start = self.current.span().clone();
        self.advance()?; // program
        let body = self.parse_block()?;
        let span = start.to(&body.span);
        Ok(Definition::Program { body, span })
    }

    /// Parses `procedure Name(params) { ... }`.
    fn parse_procedure_definition(&mut self) -> Result<Definition, SyntaxError> {
        let start = self.current.span().clone();
        self.advance()?; // procedure
        let name = self.expect_upper_id("an uppercase identifier")?;
        let parameters = self.parse_parameter_list()?;
        let body = self.parse_block()?;
        let span = start.to(&body.span);
        Ok(Definition::Procedure {
            name,
            parameters,
            body,
            span,
        })
    }

    /// Parses `function name(params) { ... }`.
    fn parse_function_definition(&mut self) -> Result<Definition, SyntaxError> {
        let start = self.current.span().clone();
        self.advance()?; // function
        let name = self.expect_lower_id("a lowercase identifier")?;
        let parameters = self.parse_parameter_list()?;
        let body = self.parse_block()?;
        let span = start.to(&body.span);
        Ok(Definition::Function {
            name,
            parameters,
            body,
            span,
        })
    }

    /// Parses a parenthesized, comma-separated list of lowercase identifiers.
    fn parse_parameter_list(&mut self) -> Result<Vec<Identifier>, SyntaxError> {
        use crate::source_analysis::alternative_list;

        self.expect(&TokenKind::LeftParen, "'('")?;
        let mut parameters = Vec::new();
        if self.match_token(&TokenKind::RightParen)? {
            return Ok(parameters);
        }
        loop {
            parameters.push(self.expect_lower_id("a lowercase identifier")?);
            if self.match_token(&TokenKind::Comma)? {
                continue;
            }
            self.expect(&TokenKind::RightParen, &alternative_list(&["','", "')'"]))?;
            return Ok(parameters);
        }
    }
}
