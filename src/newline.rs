use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::printer::Printer;
use crate::{CodeLoc, ParseError};
use std::marker::PhantomData;

/// Parser that consumes one line ending: `\n` or `\r\n`
///
/// A lone carriage return is not a line ending; it fails without consuming.
/// The printer direction always emits `\n` — round-tripping input that used
/// `\r\n` reproduces it with `\n`, the one documented normalization in this
/// crate.
pub struct Newline<C> {
    _cursor: PhantomData<C>,
}

impl<C> Newline<C> {
    pub fn new() -> Self {
        Newline {
            _cursor: PhantomData,
        }
    }
}

impl<C> Default for Newline<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to create a Newline parser
pub fn newline<C>() -> Newline<C> {
    Newline::new()
}

impl<'code, C, T> Parser<'code> for Newline<C>
where
    C: Cursor<'code, Element = T>,
    T: Atomic + 'code,
{
    type Cursor = C;
    type Output = ();
    type Error = ParseError<'code, T>;

    fn parse(&self, cursor: C) -> Result<((), C), Self::Error> {
        let expected_here = |at: &C| {
            let (data, position) = (*at).inner();
            ParseError::expected("newline", CodeLoc::new(data, position))
        };

        match cursor.value() {
            // Covers '\n', and the single "\r\n" grapheme cluster
            Ok(element) if element.is_newline() => Ok(((), cursor.next())),
            Ok(element) if element == T::CARRIAGE_RETURN => {
                let second = cursor.next();
                match second.value() {
                    Ok(element) if element == T::NEWLINE => Ok(((), second.next())),
                    _ => Err(expected_here(&cursor)),
                }
            }
            _ => Err(expected_here(&cursor)),
        }
    }
}

impl<'code, C, T> Printer<'code> for Newline<C>
where
    C: Cursor<'code, Element = T>,
    T: Atomic + 'code,
{
    type Element = T;
    type Output = ();

    fn print(&self, _value: &(), out: &mut Vec<T>) -> Option<()> {
        out.push(T::NEWLINE);
        Some(())
    }
}
