// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Abstract Syntax Tree (AST) definitions for Gobstones.
//!
//! The AST represents the structure of a program after parsing. Every node
//! carries a [`Span`] whose start position is the first token of its
//! syntactic extent; what the end position is depends on the construct (see
//! the parser's position discipline).
//!
//! # Structural equality
//!
//! Nodes derive `PartialEq`, which compares spans too. Tooling that wants to
//! compare *shape* — the same program text parsed from different offsets or
//! files — uses `syntactically_equal`, which compares discriminants and
//! recurses into children while ignoring every span.
//!
//! # Operator desugaring
//!
//! The parser produces no dedicated operator nodes: `&&` and `||` become
//! [`Expression::And`] / [`Expression::Or`] (they short-circuit, so the
//! evaluator needs them first-class), and every other operator becomes a
//! [`Expression::FunctionCall`] named by the operator symbol, with unary
//! minus under the name `-(unary)`.

use ecow::EcoString;

use crate::source_analysis::Span;

/// The name unary minus desugars to.
pub const UNARY_MINUS: &str = "-(unary)";

/// An identifier with its source location.
///
/// Whether an upper- or lowercase identifier is required at a given spot is
/// enforced by the parser, not by this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The identifier text.
    pub name: EcoString,
    /// Source location of the identifier token.
    pub span: Span,
}

impl Identifier {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(name: impl Into<EcoString>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// A top-level definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// `program { ... }`
    Program {
        /// The program body.
        body: Block,
        /// Source location of the whole definition.
        span: Span,
    },
    /// `procedure Name(params) { ... }`; the name is an uppercase identifier.
    Procedure {
        /// The procedure name.
        name: Identifier,
        /// Parameter names (lowercase identifiers).
        parameters: Vec<Identifier>,
        /// The procedure body.
        body: Block,
        /// Source location of the whole definition.
        span: Span,
    },
    /// `function name(params) { ... }`; the name is a lowercase identifier.
    Function {
        /// The function name.
        name: Identifier,
        /// Parameter names (lowercase identifiers).
        parameters: Vec<Identifier>,
        /// The function body.
        body: Block,
        /// Source location of the whole definition.
        span: Span,
    },
}

impl Definition {
    /// Returns the source span of this definition.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::Program { span, .. }
            | Self::Procedure { span, .. }
            | Self::Function { span, .. } => span,
        }
    }

    /// Structural equality, ignoring spans.
    #[must_use]
    pub fn syntactically_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Program { body: a, .. }, Self::Program { body: b, .. }) => {
                a.syntactically_equal(b)
            }
            (
                Self::Procedure {
                    name: an,
                    parameters: ap,
                    body: ab,
                    ..
                },
                Self::Procedure {
                    name: bn,
                    parameters: bp,
                    body: bb,
                    ..
                },
            )
            | (
                Self::Function {
                    name: an,
                    parameters: ap,
                    body: ab,
                    ..
                },
                Self::Function {
                    name: bn,
                    parameters: bp,
                    body: bb,
                    ..
                },
            ) => an.name == bn.name && idents_equal(ap, bp) && ab.syntactically_equal(bb),
            _ => false,
        }
    }
}

/// A braced sequence of statements.
///
/// The span runs from the `{` to the start of the closing `}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The statements, in source order.
    pub statements: Vec<Statement>,
    /// Source location of the block.
    pub span: Span,
}

impl Block {
    /// Structural equality, ignoring spans.
    #[must_use]
    pub fn syntactically_equal(&self, other: &Self) -> bool {
        self.statements.len() == other.statements.len()
            && self
                .statements
                .iter()
                .zip(&other.statements)
                .all(|(a, b)| a.syntactically_equal(b))
    }
}

/// A statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A nested block used directly as a statement.
    Block(Block),
    /// `return (e1, ..., eN)`
    Return {
        /// The returned value; a tuple when N ≠ 1.
        value: Expression,
        /// Source location.
        span: Span,
    },
    /// `if (cond) [then] { ... } [else { ... }]`
    If {
        /// The condition.
        condition: Expression,
        /// The `then` branch.
        then_block: Block,
        /// The optional `else` branch.
        else_block: Option<Block>,
        /// Source location.
        span: Span,
    },
    /// `repeat (times) { ... }`
    Repeat {
        /// How many times to run the body.
        times: Expression,
        /// The loop body.
        body: Block,
        /// Source location.
        span: Span,
    },
    /// `foreach i in e { ... }`
    Foreach {
        /// The iteration variable.
        index: Identifier,
        /// The iterated expression.
        iterable: Expression,
        /// The loop body.
        body: Block,
        /// Source location.
        span: Span,
    },
    /// `while (cond) { ... }`
    While {
        /// The condition.
        condition: Expression,
        /// The loop body.
        body: Block,
        /// Source location.
        span: Span,
    },
    /// `switch (subject) [to] { pattern -> { ... } ... }`
    Switch {
        /// The matched expression.
        subject: Expression,
        /// The branches, in source order.
        branches: Vec<SwitchBranch>,
        /// Source location.
        span: Span,
    },
    /// `x := e` (with or without `let`)
    AssignVariable {
        /// The assigned variable.
        name: Identifier,
        /// The assigned value.
        value: Expression,
        /// Source location.
        span: Span,
    },
    /// `let (x1, ..., xN) := e` with N ≥ 2
    AssignTuple {
        /// The assigned variables.
        names: Vec<Identifier>,
        /// The assigned value.
        value: Expression,
        /// Source location.
        span: Span,
    },
    /// `Proc(e1, ..., eN)`
    ProcedureCall {
        /// The procedure name.
        name: Identifier,
        /// The arguments.
        arguments: Vec<Expression>,
        /// Source location.
        span: Span,
    },
}

impl Statement {
    /// Returns the source span of this statement.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::Block(block) => &block.span,
            Self::Return { span, .. }
            | Self::If { span, .. }
            | Self::Repeat { span, .. }
            | Self::Foreach { span, .. }
            | Self::While { span, .. }
            | Self::Switch { span, .. }
            | Self::AssignVariable { span, .. }
            | Self::AssignTuple { span, .. }
            | Self::ProcedureCall { span, .. } => span,
        }
    }

    /// Structural equality, ignoring spans.
    #[must_use]
    pub fn syntactically_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Block(a), Self::Block(b)) => a.syntactically_equal(b),
            (Self::Return { value: a, .. }, Self::Return { value: b, .. }) => {
                a.syntactically_equal(b)
            }
            (
                Self::If {
                    condition: ac,
                    then_block: at,
                    else_block: ae,
                    ..
                },
                Self::If {
                    condition: bc,
                    then_block: bt,
                    else_block: be,
                    ..
                },
            ) => {
                ac.syntactically_equal(bc)
                    && at.syntactically_equal(bt)
                    && match (ae, be) {
                        (None, None) => true,
                        (Some(a), Some(b)) => a.syntactically_equal(b),
                        _ => false,
                    }
            }
            (
                Self::Repeat {
                    times: ae, body: ab, ..
                },
                Self::Repeat {
                    times: be, body: bb, ..
                },
            )
            | (
                Self::While {
                    condition: ae,
                    body: ab,
                    ..
                },
                Self::While {
                    condition: be,
                    body: bb,
                    ..
                },
            ) => ae.syntactically_equal(be) && ab.syntactically_equal(bb),
            (
                Self::Foreach {
                    index: ai,
                    iterable: ae,
                    body: ab,
                    ..
                },
                Self::Foreach {
                    index: bi,
                    iterable: be,
                    body: bb,
                    ..
                },
            ) => {
                ai.name == bi.name
                    && ae.syntactically_equal(be)
                    && ab.syntactically_equal(bb)
            }
            (
                Self::Switch {
                    subject: ae,
                    branches: ab,
                    ..
                },
                Self::Switch {
                    subject: be,
                    branches: bb,
                    ..
                },
            ) => {
                ae.syntactically_equal(be)
                    && ab.len() == bb.len()
                    && ab
                        .iter()
                        .zip(bb)
                        .all(|(a, b)| a.syntactically_equal(b))
            }
            (
                Self::AssignVariable {
                    name: an, value: av, ..
                },
                Self::AssignVariable {
                    name: bn, value: bv, ..
                },
            ) => an.name == bn.name && av.syntactically_equal(bv),
            (
                Self::AssignTuple {
                    names: an, value: av, ..
                },
                Self::AssignTuple {
                    names: bn, value: bv, ..
                },
            ) => idents_equal(an, bn) && av.syntactically_equal(bv),
            (
                Self::ProcedureCall {
                    name: an,
                    arguments: aa,
                    ..
                },
                Self::ProcedureCall {
                    name: bn,
                    arguments: ba,
                    ..
                },
            ) => an.name == bn.name && exprs_equal(aa, ba),
            _ => false,
        }
    }
}

/// One branch of a `switch`: `pattern -> { ... }`.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchBranch {
    /// The branch pattern. Never a bare variable.
    pub pattern: Pattern,
    /// The branch body.
    pub body: Block,
    /// Source location.
    pub span: Span,
}

impl SwitchBranch {
    /// Structural equality, ignoring spans.
    #[must_use]
    pub fn syntactically_equal(&self, other: &Self) -> bool {
        self.pattern.syntactically_equal(&other.pattern)
            && self.body.syntactically_equal(&other.body)
    }
}

/// A pattern in a `switch` branch.
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// `_`
    Wildcard {
        /// Source location.
        span: Span,
    },
    /// `Ctor` or `Ctor(x1, ..., xN)`
    Constructor {
        /// The constructor name (uppercase identifier).
        constructor: Identifier,
        /// Bound parameter names.
        parameters: Vec<Identifier>,
        /// Source location.
        span: Span,
    },
    /// `()` or `(x1, ..., xN)` with N ≥ 2
    Tuple {
        /// Bound parameter names; empty or at least two.
        parameters: Vec<Identifier>,
        /// Source location.
        span: Span,
    },
}

impl Pattern {
    /// Returns the source span of this pattern.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::Wildcard { span }
            | Self::Constructor { span, .. }
            | Self::Tuple { span, .. } => span,
        }
    }

    /// Structural equality, ignoring spans.
    #[must_use]
    pub fn syntactically_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Wildcard { .. }, Self::Wildcard { .. }) => true,
            (
                Self::Constructor {
                    constructor: ac,
                    parameters: ap,
                    ..
                },
                Self::Constructor {
                    constructor: bc,
                    parameters: bp,
                    ..
                },
            ) => ac.name == bc.name && idents_equal(ap, bp),
            (Self::Tuple { parameters: ap, .. }, Self::Tuple { parameters: bp, .. }) => {
                idents_equal(ap, bp)
            }
            _ => false,
        }
    }
}

/// An expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A variable reference.
    Variable(Identifier),
    /// A numeric literal, kept as its digit string.
    ConstantNumber {
        /// The literal digits.
        value: EcoString,
        /// Source location.
        span: Span,
    },
    /// A string literal with escapes already applied.
    ConstantString {
        /// The string value.
        value: EcoString,
        /// Source location.
        span: Span,
    },
    /// `[e1, ..., eN]`
    List {
        /// The elements, in source order.
        elements: Vec<Expression>,
        /// Source location.
        span: Span,
    },
    /// `[first .. last]` or `[first, second .. last]`
    Range {
        /// The first element.
        first: Box<Expression>,
        /// The optional second element fixing the step.
        second: Option<Box<Expression>>,
        /// The last element.
        last: Box<Expression>,
        /// Source location.
        span: Span,
    },
    /// `()` or `(e1, ..., eN)` with N ≥ 2
    Tuple {
        /// The components.
        elements: Vec<Expression>,
        /// Source location.
        span: Span,
    },
    /// `Ctor`, `Ctor()`, or `Ctor(field1 <- e1, ...)`
    Constructor {
        /// The constructor name.
        constructor: Identifier,
        /// Field initializers, possibly empty.
        fields: Vec<FieldValue>,
        /// Source location.
        span: Span,
    },
    /// `Ctor(original | field1 <- e1, ...)`; keeps unmentioned fields.
    ConstructorUpdate {
        /// The constructor name.
        constructor: Identifier,
        /// The updated record.
        original: Box<Expression>,
        /// Field overrides, possibly empty.
        fields: Vec<FieldValue>,
        /// Source location.
        span: Span,
    },
    /// `left && right`, short-circuiting.
    And {
        /// Left operand.
        left: Box<Expression>,
        /// Right operand.
        right: Box<Expression>,
        /// Source location.
        span: Span,
    },
    /// `left || right`, short-circuiting.
    Or {
        /// Left operand.
        left: Box<Expression>,
        /// Right operand.
        right: Box<Expression>,
        /// Source location.
        span: Span,
    },
    /// `f(e1, ..., eN)`, which is also the desugared form of every non-logical
    /// operator, under the operator's symbol (see [`UNARY_MINUS`]).
    FunctionCall {
        /// The function name.
        function: Identifier,
        /// The arguments.
        arguments: Vec<Expression>,
        /// Source location.
        span: Span,
    },
}

impl Expression {
    /// Returns the source span of this expression.
    #[must_use]
    pub fn span(&self) -> &Span {
        match self {
            Self::Variable(identifier) => &identifier.span,
            Self::ConstantNumber { span, .. }
            | Self::ConstantString { span, .. }
            | Self::List { span, .. }
            | Self::Range { span, .. }
            | Self::Tuple { span, .. }
            | Self::Constructor { span, .. }
            | Self::ConstructorUpdate { span, .. }
            | Self::And { span, .. }
            | Self::Or { span, .. }
            | Self::FunctionCall { span, .. } => span,
        }
    }

    /// Structural equality, ignoring spans.
    #[must_use]
    pub fn syntactically_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Variable(a), Self::Variable(b)) => a.name == b.name,
            (Self::ConstantNumber { value: a, .. }, Self::ConstantNumber { value: b, .. })
            | (Self::ConstantString { value: a, .. }, Self::ConstantString { value: b, .. }) => {
                a == b
            }
            (Self::List { elements: a, .. }, Self::List { elements: b, .. })
            | (Self::Tuple { elements: a, .. }, Self::Tuple { elements: b, .. }) => {
                exprs_equal(a, b)
            }
            (
                Self::Range {
                    first: af,
                    second: as_,
                    last: al,
                    ..
                },
                Self::Range {
                    first: bf,
                    second: bs,
                    last: bl,
                    ..
                },
            ) => {
                af.syntactically_equal(bf)
                    && al.syntactically_equal(bl)
                    && match (as_, bs) {
                        (None, None) => true,
                        (Some(a), Some(b)) => a.syntactically_equal(b),
                        _ => false,
                    }
            }
            (
                Self::Constructor {
                    constructor: ac,
                    fields: af,
                    ..
                },
                Self::Constructor {
                    constructor: bc,
                    fields: bf,
                    ..
                },
            ) => ac.name == bc.name && fields_equal(af, bf),
            (
                Self::ConstructorUpdate {
                    constructor: ac,
                    original: ao,
                    fields: af,
                    ..
                },
                Self::ConstructorUpdate {
                    constructor: bc,
                    original: bo,
                    fields: bf,
                    ..
                },
            ) => {
                ac.name == bc.name && ao.syntactically_equal(bo) && fields_equal(af, bf)
            }
            (
                Self::And {
                    left: al, right: ar, ..
                },
                Self::And {
                    left: bl, right: br, ..
                },
            )
            | (
                Self::Or {
                    left: al, right: ar, ..
                },
                Self::Or {
                    left: bl, right: br, ..
                },
            ) => al.syntactically_equal(bl) && ar.syntactically_equal(br),
            (
                Self::FunctionCall {
                    function: af,
                    arguments: aa,
                    ..
                },
                Self::FunctionCall {
                    function: bf,
                    arguments: ba,
                    ..
                },
            ) => af.name == bf.name && exprs_equal(aa, ba),
            _ => false,
        }
    }
}

/// A `field <- value` entry inside a constructor or constructor update.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    /// The field name (lowercase identifier).
    pub name: Identifier,
    /// The field's value.
    pub value: Expression,
    /// Source location.
    pub span: Span,
}

impl FieldValue {
    /// Structural equality, ignoring spans.
    #[must_use]
    pub fn syntactically_equal(&self, other: &Self) -> bool {
        self.name.name == other.name.name && self.value.syntactically_equal(&other.value)
    }
}

fn idents_equal(a: &[Identifier], b: &[Identifier]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.name == y.name)
}

fn exprs_equal(a: &[Expression], b: &[Expression]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.syntactically_equal(y))
}

fn fields_equal(a: &[FieldValue], b: &[FieldValue]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.syntactically_equal(y))
}
