//! Source code span tracking for error reporting.

use serde::{Deserialize, Serialize};

/// Represents a location in source code (line, column, and byte offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Location {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            offset: 0,
        }
    }

    #[must_use]
    pub const fn with_offset(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

/// Represents a span of source code with start and end locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    #[must_use]
    pub const fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    /// Creates a zero-width span at the given line and column.
    #[must_use]
    pub const fn at(line: usize, column: usize) -> Self {
        Self {
            start: Location::new(line, column),
            end: Location::new(line, column),
        }
    }

    /// The source line this span starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.start.line
    }

    /// Merges two spans into a single span covering both.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let start = if self.start.line < other.start.line
            || (self.start.line == other.start.line && self.start.column < other.start.column)
        {
            self.start
        } else {
            other.start
        };

        let end = if self.end.line > other.end.line
            || (self.end.line == other.end.line && self.end.column > other.end.column)
        {
            self.end
        } else {
            other.end
        };

        Self { start, end }
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        Self::from(span.start.offset..span.end.offset)
    }
}
