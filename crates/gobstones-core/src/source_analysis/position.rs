// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Source location tracking.
//!
//! Every token and AST node carries a [`Span`] of two [`Position`]s. Unlike a
//! plain byte range, a position knows its file, line, column, and *region* —
//! a logical label that region pragmas may override so generated code can be
//! traced back to its origin (see the lexer's pragma handling).

use ecow::EcoString;

/// A point in some source file.
///
/// Positions are immutable: the reader produces a fresh `Position` every time
/// one is requested, and nothing mutates one after creation. Lines and columns
/// are 1-based; a tab advances a single column.
///
/// The byte offset is kept alongside the human-readable coordinates so spans
/// can still be mapped onto source text (and into [`miette::SourceSpan`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    file: EcoString,
    line: u32,
    column: u32,
    region: EcoString,
    offset: u32,
}

impl Position {
    /// Creates a position with an explicit region label.
    #[must_use]
    pub fn new(
        file: impl Into<EcoString>,
        line: u32,
        column: u32,
        region: impl Into<EcoString>,
        offset: u32,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            region: region.into(),
            offset,
        }
    }

    /// The sentinel position used for synthesized tokens.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            file: EcoString::from("(unknown)"),
            line: 0,
            column: 0,
            region: EcoString::from("(unknown)"),
            offset: 0,
        }
    }

    /// Returns the file identifier this position belongs to.
    #[must_use]
    pub fn file(&self) -> &EcoString {
        &self.file
    }

    /// Returns the 1-based line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the 1-based column number.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Returns the region label.
    ///
    /// Defaults to the file identifier unless a `BEGIN_REGION` pragma was in
    /// effect when the position was created.
    #[must_use]
    pub fn region(&self) -> &EcoString {
        &self.region
    }

    /// Returns the byte offset within the file.
    #[must_use]
    pub const fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns `true` if `self` does not come after `other` in textual order.
    ///
    /// Only meaningful for positions in the same file; across files the
    /// declaration order of the files decides.
    #[must_use]
    pub fn precedes_or_equals(&self, other: &Self) -> bool {
        (self.line, self.column) <= (other.line, other.column)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)?;
        if self.region != self.file {
            write!(f, " ({})", self.region)?;
        }
        Ok(())
    }
}

/// A span of source code between two positions.
///
/// `start` points at the first character of the spanned text; `end` is the
/// position the construct ends at. The parser's position discipline decides
/// what `end` is for each node (closing delimiter start for blocks and
/// tuples, the following token's start otherwise).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    start: Position,
    end: Position,
}

impl Span {
    /// Creates a new span from two positions.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Creates a zero-width span at a single position.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self {
            start: position.clone(),
            end: position,
        }
    }

    /// The sentinel span used for synthesized nodes.
    #[must_use]
    pub fn unknown() -> Self {
        Self::at(Position::unknown())
    }

    /// Returns the start position.
    #[must_use]
    pub const fn start(&self) -> &Position {
        &self.start
    }

    /// Returns the end position.
    #[must_use]
    pub const fn end(&self) -> &Position {
        &self.end
    }

    /// Creates a span from `self`'s start to `other`'s end.
    #[must_use]
    pub fn to(&self, other: &Self) -> Self {
        Self {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }

    /// Creates a span from `self`'s start to the given position.
    #[must_use]
    pub fn until(&self, end: &Position) -> Self {
        Self {
            start: self.start.clone(),
            end: end.clone(),
        }
    }
}

impl From<&Span> for miette::SourceSpan {
    fn from(span: &Span) -> Self {
        let start = span.start.offset() as usize;
        let len = span.end.offset().saturating_sub(span.start.offset()) as usize;
        (start, len).into()
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (&span).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(line: u32, column: u32, offset: u32) -> Position {
        Position::new("test.gbs", line, column, "test.gbs", offset)
    }

    #[test]
    fn position_accessors() {
        let p = Position::new("main.gbs", 3, 7, "generated", 42);
        assert_eq!(p.file(), "main.gbs");
        assert_eq!(p.line(), 3);
        assert_eq!(p.column(), 7);
        assert_eq!(p.region(), "generated");
        assert_eq!(p.offset(), 42);
    }

    #[test]
    fn position_unknown_sentinel() {
        let p = Position::unknown();
        assert_eq!(p.file(), "(unknown)");
        assert_eq!(p.line(), 0);
        assert_eq!(p.column(), 0);
    }

    #[test]
    fn position_ordering() {
        assert!(pos(1, 5, 4).precedes_or_equals(&pos(1, 5, 4)));
        assert!(pos(1, 9, 8).precedes_or_equals(&pos(2, 1, 10)));
        assert!(!pos(2, 1, 10).precedes_or_equals(&pos(1, 9, 8)));
    }

    #[test]
    fn position_display_shows_region_only_when_overridden() {
        assert_eq!(pos(2, 3, 10).to_string(), "test.gbs:2:3");
        let p = Position::new("test.gbs", 2, 3, "template", 10);
        assert_eq!(p.to_string(), "test.gbs:2:3 (template)");
    }

    #[test]
    fn span_to_and_until() {
        let a = Span::new(pos(1, 1, 0), pos(1, 4, 3));
        let b = Span::new(pos(2, 1, 10), pos(2, 6, 15));
        let joined = a.to(&b);
        assert_eq!(joined.start(), a.start());
        assert_eq!(joined.end(), b.end());

        let cut = a.until(b.start());
        assert_eq!(cut.end(), b.start());
    }

    #[test]
    fn span_into_miette_source_span() {
        let span = Span::new(pos(1, 3, 2), pos(1, 8, 7));
        let source_span: miette::SourceSpan = (&span).into();
        assert_eq!(source_span.offset(), 2);
        assert_eq!(source_span.len(), 5);
    }
}
