// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error and warning types for the Gobstones front end.
//!
//! Errors carry source locations ([`Span`]) for precise diagnostics and
//! integrate with [`miette`] for rendering. Every error kind corresponds to a
//! stable catalog key (see [`SyntaxErrorKind::key`]); a [`MessageCatalog`]
//! can override the built-in English text for localization, which is how the
//! external message catalog plugs into the core.
//!
//! Errors abort the parse — the contract is "first error wins". Warnings
//! never abort; the lexer accumulates them and hands them out at the end.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use ecow::{EcoString, eco_format};
use miette::Diagnostic;
use thiserror::Error;

use super::{Position, Span};

/// A syntax error produced by the lexer or parser.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic()]
pub struct SyntaxError {
    /// The kind of error.
    #[source]
    pub kind: SyntaxErrorKind,
    /// The source location of the error.
    #[label("here")]
    pub span: Span,
}

impl SyntaxError {
    /// Creates a new syntax error.
    #[must_use]
    pub fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates an "expected X, found Y" error.
    #[must_use]
    pub fn expected_but_found(
        expected: impl Into<EcoString>,
        found: impl Into<EcoString>,
        span: Span,
    ) -> Self {
        Self::new(
            SyntaxErrorKind::ExpectedButFound {
                expected: expected.into(),
                found: found.into(),
            },
            span,
        )
    }

    /// Returns the start position of the error.
    #[must_use]
    pub fn position(&self) -> &Position {
        self.span.start()
    }

    /// Returns the stable catalog key for this error.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.kind.key()
    }

    /// Renders the message through a catalog, falling back to English.
    #[must_use]
    pub fn localized(&self, catalog: &dyn MessageCatalog) -> EcoString {
        catalog
            .syntax_error(&self.kind)
            .unwrap_or_else(|| eco_format!("{}", self.kind))
    }
}

/// The kind of syntax error.
///
/// One variant per contractual message key; the rendered English text lives
/// on the `#[error]` attributes, the keys on [`SyntaxErrorKind::key`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// The source contained no definitions at all.
    #[error("the program cannot be empty")]
    EmptySource,

    /// The parser or lexer met a token other than the one required.
    #[error("expected {expected}, found {found}")]
    ExpectedButFound {
        /// What was required, possibly an alternative list.
        expected: EcoString,
        /// A description of the offending token.
        found: EcoString,
    },

    /// A multi-digit numeric literal started with `0`.
    #[error("numeric constants cannot start with leading zeroes")]
    NumericConstantLeadingZeroes,

    /// An identifier started with `_` or `'`.
    #[error("identifiers must start with an alphabetic character")]
    IdentifierMustStartWithAlphabeticCharacter,

    /// End of input inside a string literal.
    #[error("unclosed string constant")]
    UnclosedStringConstant,

    /// End of input inside a block comment.
    #[error("unclosed multi-line comment")]
    UnclosedMultilineComment,

    /// A character sequence that matches no token class.
    #[error("unknown token '{lexeme}'")]
    UnknownToken {
        /// The offending text.
        lexeme: EcoString,
    },

    /// A parenthesized tuple assignment without a leading `let`.
    #[error("the tuple assignment \"(x1, ..., xN) := expression\" is obsolete, use \"let (x1, ..., xN) := expression\"")]
    ObsoleteTupleAssignment,

    /// A tuple pattern with exactly one component.
    #[error("a tuple pattern cannot have exactly one component")]
    PatternTupleCannotBeSingleton,

    /// A tuple assignment with exactly one variable.
    #[error("a tuple assignment cannot have exactly one variable")]
    AssignmentTupleCannotBeSingleton,

    /// A reserved top-level construct that is recognized but not implemented.
    #[error("'{construct}' definitions are not yet supported")]
    NotYetSupported {
        /// The reserved keyword met at top level.
        construct: EcoString,
    },
}

impl SyntaxErrorKind {
    /// Returns the stable catalog key for this kind.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::EmptySource => "errmsg:empty-source",
            Self::ExpectedButFound { .. } => "errmsg:expected-but-found",
            Self::NumericConstantLeadingZeroes => {
                "errmsg:numeric-constant-should-not-have-leading-zeroes"
            }
            Self::IdentifierMustStartWithAlphabeticCharacter => {
                "errmsg:identifier-must-start-with-alphabetic-character"
            }
            Self::UnclosedStringConstant => "errmsg:unclosed-string-constant",
            Self::UnclosedMultilineComment => "errmsg:unclosed-multiline-comment",
            Self::UnknownToken { .. } => "errmsg:unknown-token",
            Self::ObsoleteTupleAssignment => "errmsg:obsolete-tuple-assignment",
            Self::PatternTupleCannotBeSingleton => "errmsg:pattern-tuple-cannot-be-singleton",
            Self::AssignmentTupleCannotBeSingleton => {
                "errmsg:assignment-tuple-cannot-be-singleton"
            }
            Self::NotYetSupported { .. } => "errmsg:not-yet-supported",
        }
    }
}

/// Joins alternative expectations for an expected-but-found message.
///
/// `["','", "'..'", "']'"]` renders as `"',', '..' or ']'"`.
#[must_use]
pub fn alternative_list(options: &[&str]) -> EcoString {
    match options {
        [] => EcoString::new(),
        [only] => EcoString::from(*only),
        [init @ .., last] => eco_format!("{} or {last}", init.join(", ")),
    }
}

/// A non-fatal diagnostic accumulated by the lexer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Warning {
    /// The kind of warning.
    #[source]
    pub kind: WarningKind,
    /// Where the warning was triggered.
    pub position: Position,
}

impl Warning {
    /// Creates a new warning.
    #[must_use]
    pub fn new(kind: WarningKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// Returns the stable catalog key for this warning.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.kind.key()
    }

    /// Renders the message through a catalog, falling back to English.
    #[must_use]
    pub fn localized(&self, catalog: &dyn MessageCatalog) -> EcoString {
        catalog
            .warning(&self.kind)
            .unwrap_or_else(|| eco_format!("{}", self.kind))
    }
}

/// The kind of warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WarningKind {
    /// A pragma comment with no content: `/*@@*/`.
    #[error("empty pragma")]
    EmptyPragma,

    /// A pragma whose name is not recognized.
    #[error("unknown pragma '{name}'")]
    UnknownPragma {
        /// The first pragma part.
        name: EcoString,
    },
}

impl WarningKind {
    /// Returns the stable catalog key for this kind.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::EmptyPragma => "warning:empty-pragma",
            Self::UnknownPragma { .. } => "warning:unknown-pragma",
        }
    }
}

/// The localization seam.
///
/// The core ships English messages only; a driver supplies a catalog that
/// maps structured kinds to localized text. Returning `None` falls back to
/// the built-in English rendering.
pub trait MessageCatalog {
    /// Localizes a syntax error, or `None` for the English fallback.
    fn syntax_error(&self, kind: &SyntaxErrorKind) -> Option<EcoString> {
        let _ = kind;
        None
    }

    /// Localizes a warning, or `None` for the English fallback.
    fn warning(&self, kind: &WarningKind) -> Option<EcoString> {
        let _ = kind;
        None
    }
}

/// The built-in English catalog: every message falls back to `Display`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl MessageCatalog for EnglishCatalog {}

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> Span {
        Span::at(Position::new("a.gbs", 1, 1, "a.gbs", 0))
    }

    #[test]
    fn syntax_error_display() {
        let err = SyntaxError::expected_but_found("a definition", "'x'", span());
        assert_eq!(err.to_string(), "expected a definition, found 'x'");

        let err = SyntaxError::new(SyntaxErrorKind::UnclosedStringConstant, span());
        assert_eq!(err.to_string(), "unclosed string constant");
    }

    #[test]
    fn syntax_error_keys_are_stable() {
        assert_eq!(
            SyntaxError::new(SyntaxErrorKind::EmptySource, span()).key(),
            "errmsg:empty-source"
        );
        assert_eq!(
            SyntaxErrorKind::ObsoleteTupleAssignment.key(),
            "errmsg:obsolete-tuple-assignment"
        );
        assert_eq!(
            SyntaxErrorKind::NumericConstantLeadingZeroes.key(),
            "errmsg:numeric-constant-should-not-have-leading-zeroes"
        );
    }

    #[test]
    fn alternative_list_rendering() {
        assert_eq!(alternative_list(&[]), "");
        assert_eq!(alternative_list(&["','"]), "','");
        assert_eq!(alternative_list(&["','", "']'"]), "',' or ']'");
        assert_eq!(alternative_list(&["','", "'..'", "']'"]), "',', '..' or ']'");
    }

    #[test]
    fn warning_display_and_key() {
        let warning = Warning::new(
            WarningKind::UnknownPragma { name: "TRACE".into() },
            Position::unknown(),
        );
        assert_eq!(warning.to_string(), "unknown pragma 'TRACE'");
        assert_eq!(warning.key(), "warning:unknown-pragma");
    }

    #[test]
    fn catalog_overrides_and_fallback() {
        struct Spanish;
        impl MessageCatalog for Spanish {
            fn syntax_error(&self, kind: &SyntaxErrorKind) -> Option<EcoString> {
                match kind {
                    SyntaxErrorKind::EmptySource => Some("el programa no puede ser vacío".into()),
                    _ => None,
                }
            }
        }

        let empty = SyntaxError::new(SyntaxErrorKind::EmptySource, span());
        assert_eq!(empty.localized(&Spanish), "el programa no puede ser vacío");

        let other = SyntaxError::new(SyntaxErrorKind::UnclosedStringConstant, span());
        assert_eq!(other.localized(&Spanish), "unclosed string constant");
        assert_eq!(other.localized(&EnglishCatalog), "unclosed string constant");
    }
}
