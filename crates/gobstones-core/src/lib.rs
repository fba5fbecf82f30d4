// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Gobstones language front end.
//!
//! This crate contains the lexical and syntactic analyzer for Gobstones, a
//! small pedagogical imperative language with algebraic data types, pattern
//! matching, tuples, and record-update syntax:
//!
//! - Position-tracking readers over one or more in-memory sources, with
//!   pragma-controlled *region* labels
//! - A lexer with nested comments, escape handling, and detection of the
//!   obsolete tuple-assignment form
//! - A recursive descent parser producing span-annotated ASTs and localized,
//!   position-bearing diagnostics
//!
//! Semantic analysis, evaluation, and tooling live downstream; this crate
//! stops at the AST.
//!
//! # Example
//!
//! ```
//! use gobstones_core::ast::Definition;
//! use gobstones_core::source_analysis::parse;
//!
//! let definitions = parse("program { Poner(Rojo) }").unwrap();
//! assert!(matches!(&definitions[0], Definition::Program { .. }));
//! ```

pub mod ast;
pub mod source_analysis;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::ast::{Block, Definition, Expression, Identifier, Pattern, Statement};
    pub use crate::source_analysis::{
        Position, Span, SyntaxError, Token, TokenKind, parse, parse_files, tokenize,
    };
}
