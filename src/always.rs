use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::printer::Printer;
use crate::ParseError;
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input and returns a fixed value
///
/// This is the terminal "attach a result" step after a run of structural
/// matchers: once the discriminating prefix of an alternative has matched,
/// `always` commits the alternative to its value. The printer direction is
/// what makes alternation printing dispatch by case: it emits an empty
/// fragment when asked to print its own value and refuses any other value.
pub struct Always<C, O> {
    value: O,
    _cursor: PhantomData<C>,
}

impl<C, O> Always<C, O> {
    pub fn new(value: O) -> Self {
        Always {
            value,
            _cursor: PhantomData,
        }
    }
}

/// Convenience function to create an Always parser
pub fn always<C, O>(value: O) -> Always<C, O> {
    Always::new(value)
}

impl<'code, C, O> Parser<'code> for Always<C, O>
where
    C: Cursor<'code>,
    C::Element: Atomic,
    O: Clone,
{
    type Cursor = C;
    type Output = O;
    type Error = ParseError<'code, C::Element>;

    fn parse(&self, cursor: C) -> Result<(Self::Output, C), Self::Error> {
        Ok((self.value.clone(), cursor))
    }
}

impl<'code, C, O> Printer<'code> for Always<C, O>
where
    C: Cursor<'code>,
    C::Element: Atomic,
    O: PartialEq,
{
    type Element = C::Element;
    type Output = O;

    fn print(&self, value: &O, _out: &mut Vec<C::Element>) -> Option<()> {
        if *value == self.value { Some(()) } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ByteCursor;

    #[test]
    fn test_always_consumes_nothing() {
        let data = b"hello";
        let cursor = ByteCursor::new(data);
        let parser = always::<ByteCursor, _>(42);

        let (result, remaining) = parser.parse(cursor).unwrap();
        assert_eq!(result, 42);
        assert_eq!(remaining.value().unwrap(), b'h');
    }

    #[test]
    fn test_always_on_empty_input() {
        let data = b"";
        let cursor = ByteCursor::new(data);
        let parser = always::<ByteCursor, _>("tag");

        let (result, remaining) = parser.parse(cursor).unwrap();
        assert_eq!(result, "tag");
        assert!(remaining.eos());
    }

    #[test]
    fn test_always_prints_empty_for_own_value() {
        let parser = always::<ByteCursor, _>(7u32);
        let mut out = Vec::new();

        assert!(parser.print(&7, &mut out).is_some());
        assert!(out.is_empty());
    }

    #[test]
    fn test_always_refuses_other_values() {
        let parser = always::<ByteCursor, _>(7u32);
        let mut out = Vec::new();

        assert!(parser.print(&8, &mut out).is_none());
        assert!(out.is_empty());
    }
}
