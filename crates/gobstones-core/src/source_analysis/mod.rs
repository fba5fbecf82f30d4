// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Parsing infrastructure for Gobstones source code.
//!
//! This module contains the reader, lexer, parser, and diagnostic types —
//! the pipeline from (possibly multi-file) source text to the AST defined in
//! [`crate::ast`].
//!
//! # Lexical Analysis
//!
//! The [`Lexer`] converts source text into [`Token`]s on demand. Each token
//! carries a [`Span`] of [`Position`]s, which track file, line, column, and
//! the pragma-controlled *region* label.
//!
//! ```
//! use gobstones_core::source_analysis::tokenize;
//!
//! let tokens = tokenize("x := 1").unwrap();
//! assert_eq!(tokens.len(), 3); // x, :=, 1
//! ```
//!
//! # Parsing
//!
//! The [`parse`] function converts source text into a list of top-level
//! [`Definition`](crate::ast::Definition)s, or the first [`SyntaxError`].
//! Warnings gathered during lexing come back through [`parse_with_warnings`].
//!
//! # Error Handling
//!
//! The front end stops at the first error ("first error wins"); there is no
//! recovery or resynchronization. Use [`MessageCatalog`] to localize the
//! messages of whatever error comes out.

mod error;
mod lexer;
mod parser;
mod position;
mod reader;
mod token;
mod tuple_assignment;


pub use error::{
    EnglishCatalog, MessageCatalog, SyntaxError, SyntaxErrorKind, Warning, WarningKind,
    alternative_list,
};
pub use lexer::{Lexer, tokenize, tokenize_with_eof};
pub use parser::{Parser, parse, parse_files, parse_files_with_warnings, parse_with_warnings};
pub use position::{Position, Span};
pub use reader::{DEFAULT_FILE, MultiReader, Reader};
pub use token::{Token, TokenKind};
