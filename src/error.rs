use crate::atomic::Atomic;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub struct ReadablePosition {
    pub line: usize,
    pub offset: usize,
}

/// A location in the source slice, kept alongside every failure so that
/// diagnostics can render the surrounding input.
#[derive(Debug, Copy, Clone)]
pub struct CodeLoc<'code, T: Atomic = u8> {
    code: &'code [T],
    /// The position in `code` where the failure occurred
    loc: usize,
}

impl<'code, T: Atomic> CodeLoc<'code, T> {
    pub fn new(code: &'code [T], loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// Calculate line number and element offset within that line
    ///
    /// Note: we return element offset instead of column number because column
    /// calculation depends on encoding, tab rendering and terminal behavior.
    /// Element offset within the line is unambiguous and useful for debugging.
    fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, element) in self.code.iter().enumerate() {
            if i >= self.loc {
                break;
            }
            if element.is_newline() {
                line += 1;
                line_start = i + 1;
            }
        }

        let offset = self.loc - line_start;
        ReadablePosition { line, offset }
    }

    /// Get lines of context around the failure position
    /// Returns up to 2 lines before and after the failing line
    fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let mut lines = Vec::new();
        let mut current_line = 1;
        let mut line_start = 0;

        // Convert to string for easier line handling
        let text = T::format_slice(self.code);

        for (i, ch) in text.char_indices() {
            if ch == '\n' {
                if current_line >= pos.line.saturating_sub(2) && current_line <= pos.line + 2 {
                    let line_content = &text[line_start..i];
                    let prefix = if current_line == pos.line {
                        format!("  > {} | ", current_line)
                    } else {
                        format!("    {} | ", current_line)
                    };
                    lines.push(format!("{}{}", prefix, line_content));

                    if current_line == pos.line {
                        let pointer_offset = prefix.len() + pos.offset;
                        lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
                    }
                }

                current_line += 1;
                line_start = i + 1;
            }
        }

        // Handle last line if no trailing newline
        if line_start < text.len()
            && current_line >= pos.line.saturating_sub(2)
            && current_line <= pos.line + 2
        {
            let line_content = &text[line_start..];
            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, line_content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

/// Failure value produced by parsers
///
/// Failures are ordinary values, never aborts. The taxonomy:
/// - `Expected` is raised by leaf parsers when the input prefix does not
///   match ("expected X, found Y").
/// - `Failure` is a described failure without a specific expected token, used
///   by composite parsers that fail for structural reasons.
/// - `Exhausted` is produced only by exhausted alternation and carries every
///   candidate's failure in declaration order plus the shared entry location.
/// - The EOF variants are raised by cursor operations themselves.
#[derive(Debug)]
pub enum ParseError<'code, T: Atomic = u8> {
    UnexpectedEndOfFile(CodeLoc<'code, T>),
    AlreadyAtEndOfFile(CodeLoc<'code, T>),
    CannotReadValueAtEof(CodeLoc<'code, T>),
    Expected {
        expected: Cow<'static, str>,
        loc: CodeLoc<'code, T>,
    },
    Failure {
        message: Cow<'static, str>,
        loc: CodeLoc<'code, T>,
    },
    Exhausted {
        candidates: Vec<ParseError<'code, T>>,
        loc: CodeLoc<'code, T>,
    },
}

impl<'code, T: Atomic> fmt::Display for ParseError<'code, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEndOfFile(loc) => {
                write_located(f, loc, "Unexpected end of input")
            }
            ParseError::AlreadyAtEndOfFile(loc) => {
                write_located(f, loc, "Already at end of input")
            }
            ParseError::CannotReadValueAtEof(loc) => {
                write_located(f, loc, "Cannot read value at end of input")
            }
            ParseError::Expected { expected, loc } => {
                write_located(f, loc, &format!("Expected {}", expected))
            }
            ParseError::Failure { message, loc } => write_located(f, loc, message),
            ParseError::Exhausted { candidates, loc } => {
                let pos = loc.readable_position();
                writeln!(
                    f,
                    "All {} alternatives failed at line {}, offset {} (absolute position: {})",
                    candidates.len(),
                    pos.line,
                    pos.offset,
                    loc.loc
                )?;
                writeln!(f)?;
                for line in loc.context_lines() {
                    writeln!(f, "{}", line)?;
                }
                for (i, candidate) in candidates.iter().enumerate() {
                    writeln!(f)?;
                    writeln!(f, "  alternative {}:", i + 1)?;
                    for line in candidate.to_string().lines() {
                        writeln!(f, "    {}", line)?;
                    }
                }
                Ok(())
            }
        }
    }
}

fn write_located<'code, T: Atomic>(
    f: &mut fmt::Formatter<'_>,
    loc: &CodeLoc<'code, T>,
    message: &str,
) -> fmt::Result {
    let pos = loc.readable_position();
    writeln!(
        f,
        "{} at line {}, offset {} (absolute position: {})",
        message, pos.line, pos.offset, loc.loc
    )?;
    writeln!(f)?;
    for line in loc.context_lines() {
        writeln!(f, "{}", line)?;
    }
    Ok(())
}

impl<'code, T: Atomic> Error for ParseError<'code, T> {}

impl<'code, T: Atomic> ParseError<'code, T> {
    /// Build an expectation failure at the given location
    pub fn expected(expected: impl Into<Cow<'static, str>>, loc: CodeLoc<'code, T>) -> Self {
        ParseError::Expected {
            expected: expected.into(),
            loc,
        }
    }

    /// Build a generic failure at the given location
    pub fn failure(message: impl Into<Cow<'static, str>>, loc: CodeLoc<'code, T>) -> Self {
        ParseError::Failure {
            message: message.into(),
            loc,
        }
    }

    /// Returns the position where this failure occurred
    ///
    /// For aggregates this is the shared entry position of the alternation.
    pub fn position(&self) -> usize {
        self.loc().position()
    }

    /// Returns the location attached to this failure
    pub fn loc(&self) -> CodeLoc<'code, T> {
        match self {
            ParseError::UnexpectedEndOfFile(loc) => *loc,
            ParseError::AlreadyAtEndOfFile(loc) => *loc,
            ParseError::CannotReadValueAtEof(loc) => *loc,
            ParseError::Expected { loc, .. } => *loc,
            ParseError::Failure { loc, .. } => *loc,
            ParseError::Exhausted { loc, .. } => *loc,
        }
    }

    /// Flatten nested aggregates and return the failure that progressed
    /// furthest into the input
    ///
    /// When several alternatives fail, the one that consumed the most before
    /// failing is usually the branch the input was meant to take.
    pub fn furthest(&self) -> &ParseError<'code, T> {
        match self {
            ParseError::Exhausted { candidates, .. } => candidates
                .iter()
                .map(|c| c.furthest())
                .max_by_key(|c| c.position())
                .unwrap_or(self),
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codeloc_eos_empty_data() {
        let empty_data = b"";
        let loc = CodeLoc::new(empty_data, 0);
        let error = ParseError::AlreadyAtEndOfFile(loc);

        // Should not panic when displaying
        let display_str = format!("{}", error);
        assert!(display_str.contains("Already at end of input"));

        assert_eq!(loc.position(), 0);
    }

    #[test]
    fn test_codeloc_eos_multiline() {
        let data = b"hello\nworld";
        let loc = CodeLoc::new(data, 11); // Position 11 = past end
        let error = ParseError::UnexpectedEndOfFile(loc);

        let display_str = format!("{}", error);
        assert!(display_str.contains("Unexpected end of input"));
        assert!(display_str.contains("line 2"));
        assert!(display_str.contains("world"));
    }

    #[test]
    fn test_codeloc_readable_position_eos() {
        let data = b"line1\nline2";
        let loc = CodeLoc::new(data, 11);
        let pos = loc.readable_position();

        assert_eq!(pos.line, 2);
        assert_eq!(pos.offset, 5);
    }

    #[test]
    fn test_expected_display() {
        let data = b"London";
        let error = ParseError::expected("\"Berlin\"", CodeLoc::new(data, 0));

        let display_str = format!("{}", error);
        assert!(display_str.contains("Expected \"Berlin\""));
        assert!(display_str.contains("London"));
    }

    #[test]
    fn test_exhausted_preserves_candidates() {
        let data = b"London";
        let loc = CodeLoc::new(data, 0);
        let error = ParseError::Exhausted {
            candidates: vec![
                ParseError::expected("\"New York\"", loc),
                ParseError::expected("\"Berlin\"", loc),
            ],
            loc,
        };

        let display_str = format!("{}", error);
        assert!(display_str.contains("All 2 alternatives failed"));
        assert!(display_str.contains("alternative 1"));
        assert!(display_str.contains("New York"));
        assert!(display_str.contains("alternative 2"));
        assert!(display_str.contains("Berlin"));
    }

    #[test]
    fn test_furthest_picks_deepest_candidate() {
        let data = b"abcdef";
        let entry = CodeLoc::new(data, 0);
        let error = ParseError::Exhausted {
            candidates: vec![
                ParseError::expected("x", CodeLoc::new(data, 1)),
                ParseError::expected("y", CodeLoc::new(data, 4)),
                ParseError::expected("z", CodeLoc::new(data, 2)),
            ],
            loc: entry,
        };

        assert_eq!(error.furthest().position(), 4);
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_furthest_flattens_nested_aggregates() {
        let data = b"abcdef";
        let entry = CodeLoc::new(data, 0);
        let inner = ParseError::Exhausted {
            candidates: vec![ParseError::expected("deep", CodeLoc::new(data, 5))],
            loc: CodeLoc::new(data, 1),
        };
        let error = ParseError::Exhausted {
            candidates: vec![ParseError::expected("shallow", CodeLoc::new(data, 2)), inner],
            loc: entry,
        };

        assert_eq!(error.furthest().position(), 5);
    }
}
