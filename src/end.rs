use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::printer::Printer;
use crate::{CodeLoc, ParseError};
use std::marker::PhantomData;

/// Parser that succeeds only at the end of input, consuming nothing
///
/// Append to a parser chain to require full consumption. Prints as an empty
/// fragment.
pub struct End<C> {
    _cursor: PhantomData<C>,
}

impl<C> End<C> {
    pub fn new() -> Self {
        End {
            _cursor: PhantomData,
        }
    }
}

impl<C> Default for End<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to create an End parser
pub fn end<C>() -> End<C> {
    End::new()
}

impl<'code, C> Parser<'code> for End<C>
where
    C: Cursor<'code>,
    C::Element: Atomic,
{
    type Cursor = C;
    type Output = ();
    type Error = ParseError<'code, C::Element>;

    fn parse(&self, cursor: C) -> Result<((), C), Self::Error> {
        if cursor.eos() {
            return Ok(((), cursor));
        }
        let (data, position) = cursor.inner();
        Err(ParseError::failure(
            format!(
                "expected end of input, {} elements remaining",
                data.len() - position
            ),
            CodeLoc::new(data, position),
        ))
    }
}

impl<'code, C> Printer<'code> for End<C>
where
    C: Cursor<'code>,
    C::Element: Atomic,
{
    type Element = C::Element;
    type Output = ();

    fn print(&self, _value: &(), _out: &mut Vec<C::Element>) -> Option<()> {
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ByteCursor;

    #[test]
    fn test_end_succeeds_on_empty() {
        let data = b"";
        let cursor = ByteCursor::new(data);
        let parser = end::<ByteCursor>();

        assert!(parser.parse(cursor).is_ok());
    }

    #[test]
    fn test_end_fails_with_remaining_input() {
        let data = b"abc";
        let cursor = ByteCursor::new(data);
        let parser = end::<ByteCursor>();

        let error = parser.parse(cursor).unwrap_err();
        assert!(error.to_string().contains("3 elements remaining"));
        assert_eq!(cursor.value().unwrap(), b'a');
    }

    #[test]
    fn test_end_succeeds_after_consumption() {
        let data = b"x";
        let cursor = ByteCursor::new(data).next();
        let parser = end::<ByteCursor>();

        assert!(parser.parse(cursor).is_ok());
    }
}
