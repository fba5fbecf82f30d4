// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Expression parsing for Gobstones.
//!
//! # Operator precedence
//!
//! The ladder, lowest binding first:
//!
//! | Level | Fixity    | Operators            |
//! |-------|-----------|----------------------|
//! | 1     | right     | `\|\|`               |
//! | 2     | right     | `&&`                 |
//! | 3     | prefix    | `not`                |
//! | 4     | non-assoc | `== /= <= >= < >`    |
//! | 5     | left      | `++`                 |
//! | 6     | left      | `+ -`                |
//! | 7     | left      | `*`                  |
//! | 8     | left      | `div mod`            |
//! | 9     | right     | `^`                  |
//! | 10    | prefix    | unary `-`            |
//!
//! `&&` and `||` build [`Expression::And`] / [`Expression::Or`]; every other
//! operator desugars to an [`Expression::FunctionCall`] named by its symbol,
//! with unary minus under [`UNARY_MINUS`]. Non-associative relational
//! operators simply end the expression when chained, so `a == b == c`
//! surfaces as an expected-but-found error from the enclosing context.
//!
//! # Constructors vs. updates
//!
//! `Ctor(e ...)` cannot be classified with one token of lookahead: the
//! parser reads the first expression and only then branches on `<-` (field
//! initializers), `|` (record update), or `)`/`,` (a misused procedure
//! call). No commitment is made before that decision point.

use ecow::EcoString;

use crate::ast::{Expression, FieldValue, Identifier, UNARY_MINUS};
use crate::source_analysis::{
    Span, SyntaxError, TokenKind, alternative_list,
};

use super::Parser;

/// The desugared function name for a binary operator token, if any at the
/// relational level.
const fn relational_name(kind: &TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Eq => Some("=="),
        TokenKind::Ne => Some("/="),
        TokenKind::Le => Some("<="),
        TokenKind::Ge => Some(">="),
        TokenKind::Lt => Some("<"),
        TokenKind::Gt => Some(">"),
        _ => None,
    }
}

/// Builds the desugared call for a binary operator.
fn binary_operator_call(
    name: &str,
    operator_span: Span,
    left: Expression,
    right: Expression,
) -> Expression {
    let span = left.span().to(right.span());
    Expression::FunctionCall {
        function: Identifier::new(name, operator_span),
        arguments: vec![left, right],
        span,
    }
}

impl Parser {
    /// Parses any expression (the bottom of the precedence ladder).
    pub(super) fn parse_expression(&mut self) -> Result<Expression, SyntaxError> {
        self.parse_or_expression()
    }

    /// Level 1: `||`, right-associative.
    fn parse_or_expression(&mut self) -> Result<Expression, SyntaxError> {
        let left = self.parse_and_expression()?;
        if !self.check(&TokenKind::Or) {
            return Ok(left);
        }
        self.advance()?;
        let right = self.parse_or_expression()?;
        let span = left.span().to(right.span());
        Ok(Expression::Or {
            left: Box::new(left),
            right: Box::new(right),
            span,
        })
    }

    /// Level 2: `&&`, right-associative.
    fn parse_and_expression(&mut self) -> Result<Expression, SyntaxError> {
        let left = self.parse_not_expression()?;
        if !self.check(&TokenKind::And) {
            return Ok(left);
        }
        self.advance()?;
        let right = self.parse_and_expression()?;
        let span = left.span().to(right.span());
        Ok(Expression::And {
            left: Box::new(left),
            right: Box::new(right),
            span,
        })
    }

    /// Level 3: prefix `not`.
    fn parse_not_expression(&mut self) -> Result<Expression, SyntaxError> {
        if !self.check(&TokenKind::Not) {
            return self.parse_relational_expression();
        }
        let operator = self.advance()?;
        let operand = self.parse_not_expression()?;
        let span = operator.span().to(operand.span());
        Ok(Expression::FunctionCall {
            function: Identifier::new("not", operator.span().clone()),
            arguments: vec![operand],
            span,
        })
    }

    /// Level 4: relational operators, non-associative.
    fn parse_relational_expression(&mut self) -> Result<Expression, SyntaxError> {
        let left = self.parse_concat_expression()?;
        let Some(name) = relational_name(self.current.kind()) else {
            return Ok(left);
        };
        let operator = self.advance()?;
        let right = self.parse_concat_expression()?;
        Ok(binary_operator_call(
            name,
            operator.span().clone(),
            left,
            right,
        ))
    }

    /// Level 5: `++`, left-associative.
    fn parse_concat_expression(&mut self) -> Result<Expression, SyntaxError> {
        let mut left = self.parse_additive_expression()?;
        while self.check(&TokenKind::Concat) {
            let operator = self.advance()?;
            let right = self.parse_additive_expression()?;
            left = binary_operator_call("++", operator.span().clone(), left, right);
        }
        Ok(left)
    }

    /// Level 6: binary `+` and `-`, left-associative.
    fn parse_additive_expression(&mut self) -> Result<Expression, SyntaxError> {
        let mut left = self.parse_multiplicative_expression()?;
        loop {
            let name = match self.current.kind() {
                TokenKind::Plus => "+",
                TokenKind::Minus => "-",
                _ => return Ok(left),
            };
            let operator = self.advance()?;
            let right = self.parse_multiplicative_expression()?;
            left = binary_operator_call(name, operator.span().clone(), left, right);
        }
    }

    /// Level 7: `*`, left-associative.
    fn parse_multiplicative_expression(&mut self) -> Result<Expression, SyntaxError> {
        let mut left = self.parse_division_expression()?;
        while self.check(&TokenKind::Times) {
            let operator = self.advance()?;
            let right = self.parse_division_expression()?;
            left = binary_operator_call("*", operator.span().clone(), left, right);
        }
        Ok(left)
    }

    /// Level 8: `div` and `mod`, left-associative.
    fn parse_division_expression(&mut self) -> Result<Expression, SyntaxError> {
        let mut left = self.parse_power_expression()?;
        loop {
            let name = match self.current.kind() {
                TokenKind::Div => "div",
                TokenKind::Mod => "mod",
                _ => return Ok(left),
            };
            let operator = self.advance()?;
            let right = self.parse_power_expression()?;
            left = binary_operator_call(name, operator.span().clone(), left, right);
        }
    }

    /// Level 9: `^`, right-associative.
    fn parse_power_expression(&mut self) -> Result<Expression, SyntaxError> {
        let left = self.parse_unary_minus_expression()?;
        if !self.check(&TokenKind::Pow) {
            return Ok(left);
        }
        let operator = self.advance()?;
        let right = self.parse_power_expression()?;
        Ok(binary_operator_call("^", operator.span().clone(), left, right))
    }

    /// Level 10: prefix unary `-`.
    fn parse_unary_minus_expression(&mut self) -> Result<Expression, SyntaxError> {
        if !self.check(&TokenKind::Minus) {
            return self.parse_atom();
        }
        let operator = self.advance()?;
        let operand = self.parse_unary_minus_expression()?;
        let span = operator.span().to(operand.span());
        Ok(Expression::FunctionCall {
            function: Identifier::new(UNARY_MINUS, operator.span().clone()),
            arguments: vec![operand],
            span,
        })
    }

    /// Parses an atomic expression.
    fn parse_atom(&mut self) -> Result<Expression, SyntaxError> {
        match self.current.kind() {
            TokenKind::LowerId(_) => {
                let name = self.expect_lower_id("a lowercase identifier")?;
                if self.check(&TokenKind::LeftParen) {
                    let arguments = self.parse_argument_list()?;
                    let span = name.span.until(self.current.span().start());
                    return Ok(Expression::FunctionCall {
                        function: name,
                        arguments,
                        span,
                    });
                }
                Ok(Expression::Variable(name))
            }
            TokenKind::Num(value) => {
                let value = value.clone();
                let token = self.advance()?;
                Ok(Expression::ConstantNumber {
                    value,
                    span: token.span().clone(),
                })
            }
            TokenKind::Str(value) => {
                let value = value.clone();
                let token = self.advance()?;
                Ok(Expression::ConstantString {
                    value,
                    span: token.span().clone(),
                })
            }
            TokenKind::UpperId(_) => self.parse_constructor_expression(),
            TokenKind::LeftParen => self.parse_tuple_or_parenthesized(),
            TokenKind::LeftBracket => self.parse_list_or_range(),
            _ => Err(self.expected_error("an expression")),
        }
    }

    /// Parses a parenthesized, comma-separated argument list.
    pub(super) fn parse_argument_list(&mut self) -> Result<Vec<Expression>, SyntaxError> {
        self.expect(&TokenKind::LeftParen, "'('")?;
        let mut arguments = Vec::new();
        if self.match_token(&TokenKind::RightParen)? {
            return Ok(arguments);
        }
        loop {
            arguments.push(self.parse_expression()?);
            if self.match_token(&TokenKind::Comma)? {
                continue;
            }
            self.expect(&TokenKind::RightParen, &alternative_list(&["','", "')'"]))?;
            return Ok(arguments);
        }
    }

    /// Parses `()`, `(e)`, or `(e1, ..., eN)`.
    ///
    /// A single parenthesized expression is returned unwrapped; zero or two
    /// and more yield a tuple whose span ends at the closing `)`.
    pub(super) fn parse_tuple_or_parenthesized(&mut self) -> Result<Expression, SyntaxError> {
        let open = self.expect(&TokenKind::LeftParen, "'('")?;

        if self.check(&TokenKind::RightParen) {
            let close = self.advance()?;
            let span = open.span().until(close.span().start());
            return Ok(Expression::Tuple {
                elements: Vec::new(),
                span,
            });
        }

        let mut elements = vec![self.parse_expression()?];
        while self.match_token(&TokenKind::Comma)? {
            elements.push(self.parse_expression()?);
        }
        let close = self.expect(&TokenKind::RightParen, &alternative_list(&["','", "')'"]))?;

        if elements.len() == 1 {
            return Ok(elements.swap_remove(0));
        }
        let span = open.span().until(close.span().start());
        Ok(Expression::Tuple { elements, span })
    }

    /// Parses the constructor family after an uppercase identifier.
    ///
    /// See the module docs: classification between a plain constructor, a
    /// field-initializer constructor, and a record update happens only after
    /// the first argument expression has been read.
    fn parse_constructor_expression(&mut self) -> Result<Expression, SyntaxError> {
        let constructor = self.expect_upper_id("an uppercase identifier")?;

        if !self.check(&TokenKind::LeftParen) {
            let span = constructor.span.clone();
            return Ok(Expression::Constructor {
                constructor,
                fields: Vec::new(),
                span,
            });
        }
        self.advance()?; // (

        if self.check(&TokenKind::RightParen) {
            let close = self.advance()?;
            let span = constructor.span.until(close.span().start());
            return Ok(Expression::Constructor {
                constructor,
                fields: Vec::new(),
                span,
            });
        }

        let first = self.parse_expression()?;
        match self.current.kind() {
            TokenKind::Gets => {
                // Field initializers: the expression read must be the first
                // field's name.
                let Expression::Variable(name) = first else {
                    return Err(SyntaxError::expected_but_found(
                        "'|'",
                        "'<-'",
                        self.current.span().clone(),
                    ));
                };
                self.advance()?; // <-
                let value = self.parse_expression()?;
                let span = name.span.to(value.span());
                let mut fields = vec![FieldValue { name, value, span }];
                while self.match_token(&TokenKind::Comma)? {
                    fields.push(self.parse_field_value()?);
                }
                let close =
                    self.expect(&TokenKind::RightParen, &alternative_list(&["','", "')'"]))?;
                let span = constructor.span.until(close.span().start());
                Ok(Expression::Constructor {
                    constructor,
                    fields,
                    span,
                })
            }
            TokenKind::Pipe => {
                self.advance()?; // |
                let mut fields = Vec::new();
                if !self.check(&TokenKind::RightParen) {
                    fields.push(self.parse_field_value()?);
                    while self.match_token(&TokenKind::Comma)? {
                        fields.push(self.parse_field_value()?);
                    }
                }
                let close =
                    self.expect(&TokenKind::RightParen, &alternative_list(&["','", "')'"]))?;
                let span = constructor.span.until(close.span().start());
                Ok(Expression::ConstructorUpdate {
                    constructor,
                    original: Box::new(first),
                    fields,
                    span,
                })
            }
            // `Ctor(e)` or `Ctor(e, ...)` reads like a procedure call used
            // as an expression; anchored at the constructor name.
            TokenKind::Comma | TokenKind::RightParen => Err(SyntaxError::expected_but_found(
                "an expression",
                "a procedure call",
                constructor.span.clone(),
            )),
            _ => {
                let expected = if matches!(first, Expression::Variable(_)) {
                    alternative_list(&["'<-'", "'|'"])
                } else {
                    EcoString::from("'|'")
                };
                Err(SyntaxError::expected_but_found(
                    expected,
                    self.current.kind().description(),
                    constructor.span.clone(),
                ))
            }
        }
    }

    /// Parses one `field <- value` entry.
    fn parse_field_value(&mut self) -> Result<FieldValue, SyntaxError> {
        let name = self.expect_lower_id("a lowercase identifier")?;
        self.expect(&TokenKind::Gets, "'<-'")?;
        let value = self.parse_expression()?;
        let span = name.span.to(value.span());
        Ok(FieldValue { name, value, span })
    }

    /// Parses the bracketed family: lists, ranges, and stepped ranges.
    fn parse_list_or_range(&mut self) -> Result<Expression, SyntaxError> {
        let open = self.expect(&TokenKind::LeftBracket, "'['")?;

        if self.check(&TokenKind::RightBracket) {
            let close = self.advance()?;
            let span = open.span().until(close.span().start());
            return Ok(Expression::List {
                elements: Vec::new(),
                span,
            });
        }

        let first = self.parse_expression()?;
        match self.current.kind() {
            TokenKind::RightBracket => {
                let close = self.advance()?;
                let span = open.span().until(close.span().start());
                Ok(Expression::List {
                    elements: vec![first],
                    span,
                })
            }
            TokenKind::Range => {
                self.advance()?; // ..
                let last = self.parse_expression()?;
                let close = self.expect(&TokenKind::RightBracket, "']'")?;
                let span = open.span().until(close.span().start());
                Ok(Expression::Range {
                    first: Box::new(first),
                    second: None,
                    last: Box::new(last),
                    span,
                })
            }
            TokenKind::Comma => {
                self.advance()?; // ,
                let second = self.parse_expression()?;
                match self.current.kind() {
                    TokenKind::RightBracket => {
                        let close = self.advance()?;
                        let span = open.span().until(close.span().start());
                        Ok(Expression::List {
                            elements: vec![first, second],
                            span,
                        })
                    }
                    TokenKind::Comma => {
                        let mut elements = vec![first, second];
                        while self.match_token(&TokenKind::Comma)? {
                            elements.push(self.parse_expression()?);
                        }
                        let close = self
                            .expect(&TokenKind::RightBracket, &alternative_list(&["','", "']'"]))?;
                        let span = open.span().until(close.span().start());
                        Ok(Expression::List { elements, span })
                    }
                    TokenKind::Range => {
                        self.advance()?; // ..
                        let last = self.parse_expression()?;
                        let close = self.expect(&TokenKind::RightBracket, "']'")?;
                        let span = open.span().until(close.span().start());
                        Ok(Expression::Range {
                            first: Box::new(first),
                            second: Some(Box::new(second)),
                            last: Box::new(last),
                            span,
                        })
                    }
                    _ => Err(self.expected_error(alternative_list(&["','", "'..'", "']'"]))),
                }
            }
            _ => Err(self.expected_error(alternative_list(&["','", "'..'", "']'"]))),
        }
    }
}
