/// Source location information for error reporting
///
/// Line and column numbers are 1-indexed. Tabs count as four columns so that
/// the caret lines up with the rendered source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLocation {
    offset: usize,
    line: usize,
    column: usize,
    length: Option<usize>,
    line_source: String,
}

impl ErrorLocation {
    fn new(source: &str, offset: usize, length: Option<usize>) -> Self {
        // the offset may sit just past the last character, for errors such
        // as "unexpected end of file"
        assert!(
            offset <= source.len(),
            "offset ({}) must be less than or equal to the length of the source ({})",
            offset,
            source.len()
        );

        if let Some(length) = length {
            assert!(length > 0, "length must not be 0");
            assert!(
                offset + length <= source.len(),
                "offset + length ({}) must be less than or equal to the length of the source ({})",
                offset + length,
                source.len()
            );

            // multi-line highlights are not supported
            assert!(
                !source[offset..offset + length].contains('\n'),
                "span ({:?}) must not contain newlines",
                &source[offset..offset + length]
            );
        }

        let line_start = source[..offset]
            .rfind('\n')
            .map_or(0, |newline_idx| newline_idx + 1);

        let num_tabs = source[line_start..offset]
            .chars()
            .filter(|c| *c == '\t')
            .count();

        let column_without_tabs = source[line_start..offset].chars().count() + 1;
        let column = column_without_tabs + num_tabs * 3;

        let line = source[..offset].chars().filter(|c| *c == '\n').count() + 1;

        // an offset at the very end of a file ending in a newline points at an
        // empty final line that `lines` does not yield
        let line_source = source
            .lines()
            .nth(line - 1)
            .unwrap_or_default()
            .replace('\t', "    ");

        Self {
            offset,
            line,
            column,
            length,
            line_source,
        }
    }

    /// Creates a new error location pointing at a single offset
    #[must_use]
    pub fn from_source_and_offset(source: &str, offset: usize) -> Self {
        Self::new(source, offset, None)
    }

    /// Creates a new error location highlighting `length` bytes from `offset`
    #[must_use]
    pub fn from_source_and_span(source: &str, offset: usize, length: usize) -> Self {
        Self::new(source, offset, Some(length))
    }

    /// Returns the byte offset from the beginning of the source file
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the line number where the error occurred (1-indexed)
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the column number where the error occurred (1-indexed)
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Returns the length of the highlighted region
    #[must_use]
    pub fn length(&self) -> usize {
        // a location without a length highlights a single character
        self.length.unwrap_or(1)
    }

    /// Returns the source line content where the error occurred
    #[must_use]
    pub fn line_source(&self) -> &str {
        &self.line_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_on_first_line() {
        let source = "Parameter('k1', 1.0)\n";
        let location = ErrorLocation::from_source_and_offset(source, 10);

        assert_eq!(location.line(), 1);
        assert_eq!(location.column(), 11);
        assert_eq!(location.length(), 1);
        assert_eq!(location.line_source(), "Parameter('k1', 1.0)");
    }

    #[test]
    fn location_on_later_line() {
        let source = "Model()\nRule('r', A() >> B(), kf)\n";
        let location = ErrorLocation::from_source_and_span(source, 30, 2);

        assert_eq!(location.line(), 2);
        assert_eq!(location.column(), 23);
        assert_eq!(location.length(), 2);
        assert_eq!(location.line_source(), "Rule('r', A() >> B(), kf)");
    }

    #[test]
    fn tabs_are_expanded() {
        let source = "\tRule('r', x, kf)";
        let location = ErrorLocation::from_source_and_offset(source, 1);

        assert_eq!(location.column(), 5);
        assert_eq!(location.line_source(), "    Rule('r', x, kf)");
    }

    #[test]
    fn offset_at_end_of_file() {
        let source = "Model()\n";
        let location = ErrorLocation::from_source_and_offset(source, source.len());

        assert_eq!(location.line(), 2);
        assert_eq!(location.column(), 1);
        assert_eq!(location.line_source(), "");
    }

    #[test]
    #[should_panic(expected = "must not contain newlines")]
    fn multi_line_span_panics() {
        let source = "Model()\nRule()";
        let _ = ErrorLocation::from_source_and_span(source, 5, 5);
    }
}
