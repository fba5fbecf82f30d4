// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Character readers for Gobstones source code.
//!
//! [`Reader`] is a cursor over a single file's text. It is a value, not a
//! mutable machine: every advancement consumes the reader and returns a new
//! one, so any [`Position`] handed out stays valid forever.
//!
//! Two advancement modes exist:
//!
//! - **visible** (`consume_char`, `consume_str`) updates line, column, and
//!   offset as usual;
//! - **invisible** (`consume_invisible_char`, `consume_invisible_str`) moves
//!   the byte offset only. The lexer reads region pragmas invisibly so they
//!   are zero-width with respect to the positions of surrounding tokens.
//!
//! [`MultiReader`] composes several named sources; the lexer drains one file
//! and asks for the next, transplanting the region stack across the boundary
//! so regions opened in one file may close in another.

use ecow::EcoString;

use super::Position;

/// The file identifier used when the input is a single anonymous string.
pub const DEFAULT_FILE: &str = "(program)";

/// An immutable cursor over one file's source text.
#[derive(Debug, Clone)]
pub struct Reader {
    source: EcoString,
    file: EcoString,
    offset: usize,
    line: u32,
    column: u32,
    regions: Vec<EcoString>,
}

impl Reader {
    /// Creates a reader at the start of the given file.
    #[must_use]
    pub fn new(file: impl Into<EcoString>, source: impl Into<EcoString>) -> Self {
        Self {
            source: source.into(),
            file: file.into(),
            offset: 0,
            line: 1,
            column: 1,
            regions: Vec::new(),
        }
    }

    /// Returns the current character, or `None` at end of file.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    /// Returns `true` if the reader is exhausted.
    #[must_use]
    pub fn eof(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Returns `true` if the remaining input starts with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.source[self.offset..].starts_with(prefix)
    }

    /// Consumes one character, updating line and column.
    ///
    /// Advancing past `\n` moves to the next line and resets the column to 1;
    /// any other character (tabs included) advances one column. A reader at
    /// end of file is returned unchanged.
    #[must_use]
    pub fn consume_char(mut self) -> Self {
        if let Some(c) = self.peek() {
            self.offset += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self
    }

    /// Consumes `text.chars().count()` characters visibly.
    ///
    /// The caller is expected to have checked [`Reader::starts_with`] first.
    #[must_use]
    pub fn consume_str(mut self, text: &str) -> Self {
        for _ in text.chars() {
            self = self.consume_char();
        }
        self
    }

    /// Consumes one character without touching line or column.
    #[must_use]
    pub fn consume_invisible_char(mut self) -> Self {
        if let Some(c) = self.peek() {
            self.offset += c.len_utf8();
        }
        self
    }

    /// Consumes `text.chars().count()` characters invisibly.
    #[must_use]
    pub fn consume_invisible_str(mut self, text: &str) -> Self {
        for _ in text.chars() {
            self = self.consume_invisible_char();
        }
        self
    }

    /// Pushes a region label; subsequent positions carry it.
    #[must_use]
    pub fn begin_region(mut self, name: impl Into<EcoString>) -> Self {
        self.regions.push(name.into());
        self
    }

    /// Pops the innermost region label. Popping an empty stack is a no-op.
    #[must_use]
    pub fn end_region(mut self) -> Self {
        self.regions.pop();
        self
    }

    /// Returns the position of the current character.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    pub fn position(&self) -> Position {
        let region = self.regions.last().unwrap_or(&self.file).clone();
        Position::new(
            self.file.clone(),
            self.line,
            self.column,
            region,
            self.offset as u32,
        )
    }

    /// Replaces the region stack wholesale.
    ///
    /// Used when the lexer crosses a file boundary: the next file's reader
    /// inherits the stack of the exhausted one.
    #[must_use]
    pub fn with_regions(mut self, regions: Vec<EcoString>) -> Self {
        self.regions = regions;
        self
    }

    /// Consumes the reader, yielding its region stack.
    #[must_use]
    pub fn into_regions(self) -> Vec<EcoString> {
        self.regions
    }
}

/// An ordered sequence of named sources with a cursor over them.
///
/// Iteration order is the declaration order of the `(file-id, text)` pairs,
/// which is also the concatenation order of the program.
#[derive(Debug, Clone)]
pub struct MultiReader {
    files: Vec<(EcoString, EcoString)>,
    index: usize,
}

impl MultiReader {
    /// Creates a multi-reader over a single anonymous source string.
    #[must_use]
    pub fn from_string(source: impl Into<EcoString>) -> Self {
        Self {
            files: vec![(EcoString::from(DEFAULT_FILE), source.into())],
            index: 0,
        }
    }

    /// Creates a multi-reader over named sources, in declaration order.
    ///
    /// An empty list behaves like a single empty anonymous source.
    #[must_use]
    pub fn from_files(files: Vec<(EcoString, EcoString)>) -> Self {
        if files.is_empty() {
            return Self::from_string("");
        }
        Self { files, index: 0 }
    }

    /// Returns `true` if another file remains.
    #[must_use]
    pub fn more_files(&self) -> bool {
        self.index < self.files.len()
    }

    /// Yields a reader over the next file and advances the cursor.
    #[must_use]
    pub fn next_file(&mut self) -> Option<Reader> {
        let (file, source) = self.files.get(self.index)?;
        let reader = Reader::new(file.clone(), source.clone());
        self.index += 1;
        Some(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_tracks_lines_and_columns() {
        let mut reader = Reader::new("a.gbs", "ab\ncd");
        assert_eq!(reader.peek(), Some('a'));
        assert_eq!((reader.position().line(), reader.position().column()), (1, 1));

        reader = reader.consume_char().consume_char();
        assert_eq!(reader.peek(), Some('\n'));
        assert_eq!((reader.position().line(), reader.position().column()), (1, 3));

        reader = reader.consume_char();
        assert_eq!(reader.peek(), Some('c'));
        assert_eq!((reader.position().line(), reader.position().column()), (2, 1));
    }

    #[test]
    fn reader_tab_counts_as_one_column() {
        let reader = Reader::new("a.gbs", "\tx").consume_char();
        assert_eq!(reader.position().column(), 2);
    }

    #[test]
    fn reader_invisible_advancement_keeps_position() {
        let reader = Reader::new("a.gbs", "abc").consume_invisible_str("ab");
        let position = reader.position();
        assert_eq!((position.line(), position.column()), (1, 1));
        assert_eq!(position.offset(), 2);
        assert_eq!(reader.peek(), Some('c'));
    }

    #[test]
    fn reader_consume_at_eof_is_noop() {
        let reader = Reader::new("a.gbs", "").consume_char().consume_invisible_char();
        assert!(reader.eof());
        assert_eq!(reader.position().column(), 1);
    }

    #[test]
    fn reader_starts_with() {
        let reader = Reader::new("a.gbs", "<- x");
        assert!(reader.starts_with("<-"));
        assert!(!reader.starts_with("<="));
    }

    #[test]
    fn reader_region_defaults_to_file() {
        let reader = Reader::new("main.gbs", "x");
        assert_eq!(reader.position().region(), "main.gbs");
    }

    #[test]
    fn reader_region_stack() {
        let reader = Reader::new("main.gbs", "x").begin_region("outer").begin_region("inner");
        assert_eq!(reader.position().region(), "inner");
        let reader = reader.end_region();
        assert_eq!(reader.position().region(), "outer");
        let reader = reader.end_region();
        assert_eq!(reader.position().region(), "main.gbs");
        // Popping past the bottom stays at the file label.
        let reader = reader.end_region();
        assert_eq!(reader.position().region(), "main.gbs");
    }

    #[test]
    fn multi_reader_yields_files_in_order() {
        let mut multi = MultiReader::from_files(vec![
            (EcoString::from("a.gbs"), EcoString::from("x")),
            (EcoString::from("b.gbs"), EcoString::from("y")),
        ]);
        assert!(multi.more_files());
        let first = multi.next_file().unwrap();
        assert_eq!(first.position().file(), "a.gbs");
        let second = multi.next_file().unwrap();
        assert_eq!(second.position().file(), "b.gbs");
        assert!(!multi.more_files());
        assert!(multi.next_file().is_none());
    }

    #[test]
    fn multi_reader_empty_input_behaves_like_empty_string() {
        let mut multi = MultiReader::from_files(Vec::new());
        let reader = multi.next_file().unwrap();
        assert!(reader.eof());
        assert_eq!(reader.position().file(), DEFAULT_FILE);
    }

    #[test]
    fn region_stack_transplants_across_readers() {
        let first = Reader::new("a.gbs", "").begin_region("shared");
        let regions = first.into_regions();
        let second = Reader::new("b.gbs", "x").with_regions(regions);
        assert_eq!(second.position().region(), "shared");
    }
}
