/// Trait for atomic elements that cursors iterate over
///
/// This enables generic error formatting, position calculation and newline
/// handling across element representations (bytes, Unicode scalars, grapheme
/// clusters).
pub trait Atomic: Copy + PartialEq + std::fmt::Debug + std::fmt::Display {
    /// The newline element for this atomic type
    const NEWLINE: Self;

    /// The carriage-return element for this atomic type
    const CARRIAGE_RETURN: Self;

    /// Whether this element terminates a line on its own
    fn is_newline(&self) -> bool {
        *self == Self::NEWLINE
    }

    /// Convert a slice of elements to a displayable string for error reporting
    fn format_slice(slice: &[Self]) -> String;
}

impl Atomic for u8 {
    const NEWLINE: Self = b'\n';
    const CARRIAGE_RETURN: Self = b'\r';

    fn format_slice(slice: &[Self]) -> String {
        String::from_utf8_lossy(slice).to_string()
    }
}

impl Atomic for char {
    const NEWLINE: Self = '\n';
    const CARRIAGE_RETURN: Self = '\r';

    fn format_slice(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}

/// Grapheme clusters: `"\r\n"` is a single element and counts as a newline.
impl<'a> Atomic for &'a str {
    const NEWLINE: Self = "\n";
    const CARRIAGE_RETURN: Self = "\r";

    fn is_newline(&self) -> bool {
        *self == "\n" || *self == "\r\n"
    }

    fn format_slice(slice: &[Self]) -> String {
        slice.concat()
    }
}
