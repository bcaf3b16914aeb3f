use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::printer::Printer;
use crate::{CodeLoc, ParseError};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always fails with the given message, consuming nothing
///
/// Useful as a placeholder alternative or to turn a structurally unreachable
/// branch into a described failure. The printer direction refuses every
/// value.
pub struct Fail<C, O> {
    message: Cow<'static, str>,
    _marker: PhantomData<(C, O)>,
}

impl<C, O> Fail<C, O> {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Fail {
            message: message.into(),
            _marker: PhantomData,
        }
    }
}

/// Convenience function to create a Fail parser
pub fn fail<C, O>(message: impl Into<Cow<'static, str>>) -> Fail<C, O> {
    Fail::new(message)
}

impl<'code, C, O> Parser<'code> for Fail<C, O>
where
    C: Cursor<'code>,
    C::Element: Atomic,
{
    type Cursor = C;
    type Output = O;
    type Error = ParseError<'code, C::Element>;

    fn parse(&self, cursor: C) -> Result<(Self::Output, C), Self::Error> {
        let (data, position) = cursor.inner();
        Err(ParseError::failure(
            self.message.clone(),
            CodeLoc::new(data, position),
        ))
    }
}

impl<'code, C, O> Printer<'code> for Fail<C, O>
where
    C: Cursor<'code>,
    C::Element: Atomic,
{
    type Element = C::Element;
    type Output = O;

    fn print(&self, _value: &O, _out: &mut Vec<C::Element>) -> Option<()> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ByteCursor;

    #[test]
    fn test_fail_always_fails() {
        let data = b"anything";
        let cursor = ByteCursor::new(data);
        let parser = fail::<ByteCursor, u8>("not supported");

        let error = parser.parse(cursor).unwrap_err();
        assert_eq!(error.position(), 0);
        assert!(error.to_string().contains("not supported"));

        // The caller's cursor is untouched
        assert_eq!(cursor.value().unwrap(), b'a');
    }

    #[test]
    fn test_fail_never_prints() {
        let parser = fail::<ByteCursor, u8>("no");
        let mut out = Vec::new();
        assert!(parser.print(&1, &mut out).is_none());
    }
}
