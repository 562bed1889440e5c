//! Source location spans for mapping parsed model items to source code

/// A span of source code
///
/// A span is a pair of source locations, representing the start (inclusive)
/// and end (exclusive) of a region of the model file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    start: SourceLocation,
    end: SourceLocation,
}

impl Span {
    /// Creates a new span from a start and end source location
    ///
    /// # Panics
    ///
    /// Panics if `start` comes after `end`.
    #[must_use]
    pub fn new(start: SourceLocation, end: SourceLocation) -> Self {
        assert!(
            start.offset <= end.offset,
            "start offset must be before end offset"
        );

        assert!(
            start.line < end.line || (start.line == end.line && start.column <= end.column),
            "start line and column must be before end line and column"
        );

        Self { start, end }
    }

    /// Returns the start source location
    #[must_use]
    pub const fn start(&self) -> &SourceLocation {
        &self.start
    }

    /// Returns the end source location
    #[must_use]
    pub const fn end(&self) -> &SourceLocation {
        &self.end
    }

    /// Returns the length of the span in bytes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    /// Returns `true` if the span covers no source text
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a span with arbitrary, but valid, locations
    ///
    /// Tests that build model items by hand use this where the location is
    /// irrelevant to the behavior under test.
    #[cfg(feature = "random_span")]
    #[must_use]
    pub fn random() -> Self {
        use rand::Rng;

        let mut rng = rand::rng();

        let line = rng.random_range(1..1000);
        let start_column = rng.random_range(1..80);
        let length = rng.random_range(0..40);
        let start_offset = rng.random_range(0..10_000);

        let start = SourceLocation {
            offset: start_offset,
            line,
            column: start_column,
        };
        let end = SourceLocation {
            offset: start_offset + length,
            line,
            column: start_column + length,
        };

        Self::new(start, end)
    }
}

/// A source location
///
/// A source location is a position in the source code, represented by an
/// offset, line, and column.
///
/// It is assumed that the offset corresponds to the line and column. Code
/// that displays the line and column will be wrong if it does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// The byte offset from the beginning of the source code (0-indexed)
    pub offset: usize,
    /// The line number (1-indexed)
    pub line: usize,
    /// The column number (1-indexed)
    pub column: usize,
}
