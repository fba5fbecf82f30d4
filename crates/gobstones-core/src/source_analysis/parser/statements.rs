// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Statement and pattern parsing for Gobstones.
//!
//! Statements only occur inside braced blocks. A semicolon is a permissive
//! separator: after any statement one optional `;` is consumed before the
//! next statement or the closing `}`.

use crate::ast::{Block, Pattern, Statement, SwitchBranch};
use crate::source_analysis::{SyntaxError, SyntaxErrorKind, Token, TokenKind, alternative_list};

use super::Parser;

impl Parser {
    /// Parses a braced block of statements.
    ///
    /// The block's span ends at the start of the closing `}`.
    pub(super) fn parse_block(&mut self) -> Result<Block, SyntaxError> {
        let open = self.expect(&TokenKind::LeftBrace, "'{'")?;
        let start = open.span().clone();

        let mut statements = Vec::new();
        loop {
            if self.check(&TokenKind::RightBrace) {
                let close = self.advance()?;
                let span = start.until(close.span().start());
                return Ok(Block { statements, span });
            }
            statements.push(self.parse_statement()?);
            self.match_token(&TokenKind::Semicolon)?;
        }
    }

    /// Parses a single statement, dispatching on the current token.
    fn parse_statement(&mut self) -> Result<Statement, SyntaxError> {
        match self.current.kind() {
            TokenKind::Return => self.parse_return(),
            TokenKind::If => self.parse_if(),
            TokenKind::Repeat => self.parse_repeat(),
            TokenKind::Foreach => self.parse_foreach(),
            TokenKind::While => self.parse_while(),
            TokenKind::Switch => self.parse_switch(),
            TokenKind::Let => self.parse_let(),
            TokenKind::LeftBrace => Ok(Statement::Block(self.parse_block()?)),
            TokenKind::LowerId(_) => self.parse_assign_variable(),
            TokenKind::UpperId(_) => self.parse_procedure_call(),
            _ => Err(self.expected_error("a statement")),
        }
    }

    /// Parses `return (e1, ..., eN)`.
    ///
    /// The value list is a tuple form: zero values yield the 0-tuple, one
    /// value yields the bare expression, two or more a tuple.
    fn parse_return(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current.span().clone();
        self.advance()?; // return
        let value = self.parse_tuple_or_parenthesized()?;
        let span = start.until(self.current.span().start());
        Ok(Statement::Return { value, span })
    }

    /// Parses `if (cond) [then] block [else block]`.
    fn parse_if(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current.span().clone();
        self.advance()?; // if
        self.expect(&TokenKind::LeftParen, "'('")?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RightParen, "')'")?;
        self.match_token(&TokenKind::Then)?; // `then` is optional
        let then_block = self.parse_block()?;
        let else_block = if self.match_token(&TokenKind::Else)? {
            Some(self.parse_block()?)
        } else {
            None
        };

        let end = else_block.as_ref().map_or(&then_block.span, |b| &b.span);
        let span = start.to(end);
        Ok(Statement::If {
            condition,
            then_block,
            else_block,
            span,
        })
    }

    /// Parses `repeat (times) block`.
    fn parse_repeat(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current.span().clone();
        self.advance()?; // repeat
        self.expect(&TokenKind::LeftParen, "'('")?;
        let times = self.parse_expression()?;
        self.expect(&TokenKind::RightParen, "')'")?;
        let body = self.parse_block()?;
        let span = start.to(&body.span);
        Ok(Statement::Repeat { times, body, span })
    }

    /// Parses `foreach index in iterable block`.
    fn parse_foreach(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current.span().clone();
        self.advance()?; // foreach
        let index = self.expect_lower_id("a lowercase identifier")?;
        self.expect(&TokenKind::In, "'in'")?;
        let iterable = self.parse_expression()?;
        let body = self.parse_block()?;
        let span = start.to(&body.span);
        Ok(Statement::Foreach {
            index,
            iterable,
            body,
            span,
        })
    }

    /// Parses `while (cond) block`.
    fn parse_while(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current.span().clone();
        self.advance()?; // while
        self.expect(&TokenKind::LeftParen, "'('")?;
        let condition = self.parse_expression()?;
        self.expect(&TokenKind::RightParen, "')'")?;
        let body = self.parse_block()?;
        let span = start.to(&body.span);
        Ok(Statement::While {
            condition,
            body,
            span,
        })
    }

    /// Parses `switch (subject) [to] { branch* }`.
    fn parse_switch(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current.span().clone();
        self.advance()?; // switch / match
        self.expect(&TokenKind::LeftParen, "'('")?;
        let subject = self.parse_expression()?;
        self.expect(&TokenKind::RightParen, "')'")?;
        self.match_token(&TokenKind::To)?; // `to` is optional
        self.expect(&TokenKind::LeftBrace, "'{'")?;

        let mut branches = Vec::new();
        while !self.check(&TokenKind::RightBrace) {
            branches.push(self.parse_switch_branch()?);
        }
        let close = self.advance()?;
        let span = start.until(close.span().start());
        Ok(Statement::Switch {
            subject,
            branches,
            span,
        })
    }

    /// Parses one `pattern -> block` branch.
    fn parse_switch_branch(&mut self) -> Result<SwitchBranch, SyntaxError> {
        let pattern = self.parse_pattern()?;
        self.expect(&TokenKind::Arrow, "'->'")?;
        let body = self.parse_block()?;
        let span = pattern.span().to(&body.span);
        Ok(SwitchBranch {
            pattern,
            body,
            span,
        })
    }

    /// Parses `let x := e` or `let (x1, ..., xN) := e` with N ≥ 2.
    fn parse_let(&mut self) -> Result<Statement, SyntaxError> {
        let start = self.current.span().clone();
        self.advance()?; // let

        match self.current.kind() {
            TokenKind::LowerId(_) => {
                let name = self.expect_lower_id("a lowercase identifier")?;
                self.expect(&TokenKind::Assign, "':='")?;
                let value = self.parse_expression()?;
                let span = start.until(self.current.span().start());
                Ok(Statement::AssignVariable { name, value, span })
            }
            TokenKind::LeftParen => {
                self.advance()?; // (
                let mut names = vec![self.expect_lower_id("a lowercase identifier")?];
                while self.match_token(&TokenKind::Comma)? {
                    names.push(self.expect_lower_id("a lowercase identifier")?);
                }
                let close = self.expect(&TokenKind::RightParen, &alternative_list(&["','", "')'"]))?;
                if names.len() == 1 {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::AssignmentTupleCannotBeSingleton,
                        start.to(close.span()),
                    ));
                }
                self.expect(&TokenKind::Assign, "':='")?;
                let value = self.parse_expression()?;
                let span = start.until(self.current.span().start());
                Ok(Statement::AssignTuple { names, value, span })
            }
            _ => Err(self.expected_error(alternative_list(&["a lowercase identifier", "'('"]))),
        }
    }

    /// Parses `x := e`.
    fn parse_assign_variable(&mut self) -> Result<Statement, SyntaxError> {
        let name = self.expect_lower_id("a lowercase identifier")?;
        self.expect(&TokenKind::Assign, "':='")?;
        let value = self.parse_expression()?;
        let span = name.span.until(self.current.span().start());
        Ok(Statement::AssignVariable { name, value, span })
    }

    /// Parses `Proc(e1, ..., eN)`.
    fn parse_procedure_call(&mut self) -> Result<Statement, SyntaxError> {
        let name = self.expect_upper_id("an uppercase identifier")?;
        let arguments = self.parse_argument_list()?;
        let span = name.span.until(self.current.span().start());
        Ok(Statement::ProcedureCall {
            name,
            arguments,
            span,
        })
    }

    /// Parses a `switch` branch pattern.
    ///
    /// A bare variable is not a pattern; tuple patterns have zero or at
    /// least two components and do not nest.
    fn parse_pattern(&mut self) -> Result<Pattern, SyntaxError> {
        match self.current.kind() {
            TokenKind::Underscore => {
                let token = self.advance()?;
                Ok(Pattern::Wildcard {
                    span: token.span().clone(),
                })
            }
            TokenKind::UpperId(_) => {
                let constructor = self.expect_upper_id("an uppercase identifier")?;
                if !self.check(&TokenKind::LeftParen) {
                    let span = constructor.span.until(self.current.span().start());
                    return Ok(Pattern::Constructor {
                        constructor,
                        parameters: Vec::new(),
                        span,
                    });
                }
                let (parameters, close) = self.parse_pattern_parameters()?;
                let span = constructor.span.until(close.span().start());
                Ok(Pattern::Constructor {
                    constructor,
                    parameters,
                    span,
                })
            }
            TokenKind::LeftParen => {
                let start = self.current.span().clone();
                let (parameters, close) = self.parse_pattern_parameters()?;
                if parameters.len() == 1 {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::PatternTupleCannotBeSingleton,
                        start.to(close.span()),
                    ));
                }
                let span = start.until(close.span().start());
                Ok(Pattern::Tuple { parameters, span })
            }
            _ => Err(self.expected_error("a pattern")),
        }
    }

    /// Parses a parenthesized, possibly empty list of pattern parameters.
    ///
    /// Returns the parameters together with the closing `)` token, which
    /// anchors the enclosing pattern's end position.
    fn parse_pattern_parameters(
        &mut self,
    ) -> Result<(Vec<crate::ast::Identifier>, Token), SyntaxError> {
        self.expect(&TokenKind::LeftParen, "'('")?;
        let mut parameters = Vec::new();
        if self.check(&TokenKind::RightParen) {
            let close = self.advance()?;
            return Ok((parameters, close));
        }
        loop {
            parameters.push(self.expect_lower_id("a lowercase identifier")?);
            if self.match_token(&TokenKind::Comma)? {
                continue;
            }
            let close = self.expect(&TokenKind::RightParen, &alternative_list(&["','", "')'"]))?;
            return Ok((parameters, close));
        }
    }
}
