use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::printer::Printer;
use crate::{CodeLoc, ParseError};
use std::marker::PhantomData;

/// Parser that consumes everything up to the first occurrence of a delimiter
///
/// Yields the consumed prefix as a slice of the source; the delimiter itself
/// is not consumed. An empty delimiter matches immediately with an empty
/// result and no consumption; this zero-width success is a success, not a
/// failure. If the delimiter never occurs, the parse fails without
/// consuming.
///
/// The printer direction emits the slice, refusing values that contain the
/// delimiter: printing such a value would parse back short.
pub struct TakeUntil<C, T: Atomic> {
    delimiter: Vec<T>,
    _cursor: PhantomData<C>,
}

impl<C, T: Atomic> TakeUntil<C, T> {
    pub fn new(delimiter: &[T]) -> Self {
        TakeUntil {
            delimiter: delimiter.to_vec(),
            _cursor: PhantomData,
        }
    }
}

/// Convenience function to create a TakeUntil parser
pub fn take_until<C, T: Atomic>(delimiter: &[T]) -> TakeUntil<C, T> {
    TakeUntil::new(delimiter)
}

impl<'code, C, T> Parser<'code> for TakeUntil<C, T>
where
    C: Cursor<'code, Element = T>,
    T: Atomic + 'code,
{
    type Cursor = C;
    type Output = &'code [T];
    type Error = ParseError<'code, T>;

    fn parse(&self, cursor: C) -> Result<(Self::Output, C), Self::Error> {
        let (data, start) = cursor.inner();

        if self.delimiter.is_empty() {
            return Ok((&data[start..start], cursor));
        }

        let haystack = &data[start..];
        for offset in 0..haystack.len() {
            if haystack[offset..].starts_with(&self.delimiter) {
                let mut advanced = cursor;
                for _ in 0..offset {
                    advanced = advanced.next();
                }
                return Ok((&data[start..start + offset], advanced));
            }
        }

        Err(ParseError::expected(
            format!(
                "input containing \"{}\"",
                T::format_slice(&self.delimiter)
            ),
            CodeLoc::new(data, start),
        ))
    }
}

impl<'code, C, T> Printer<'code> for TakeUntil<C, T>
where
    C: Cursor<'code, Element = T>,
    T: Atomic + 'code,
{
    type Element = T;
    type Output = &'code [T];

    fn print(&self, value: &Self::Output, out: &mut Vec<T>) -> Option<()> {
        if !self.delimiter.is_empty()
            && value
                .windows(self.delimiter.len())
                .any(|window| window == self.delimiter)
        {
            return None;
        }
        out.extend(value.iter().copied());
        Some(())
    }
}
