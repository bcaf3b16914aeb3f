use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::printer::Printer;
use crate::{CodeLoc, ParseError};

/// Binary ordered alternation: tries the first parser, then the second
///
/// Both candidates see the identical entry cursor; the first success commits.
/// When both fail, the failures are aggregated in declaration order so that
/// neither branch's diagnostics are lost. For alternation over a dynamic or
/// conditional candidate set, use [`one_of`](crate::one_of::one_of).
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, C, O> Parser<'code> for Or<P1, P2>
where
    C: Cursor<'code>,
    C::Element: Atomic,
    P1: Parser<'code, Cursor = C, Output = O, Error = ParseError<'code, C::Element>>,
    P2: Parser<'code, Cursor = C, Output = O, Error = ParseError<'code, C::Element>>,
{
    type Cursor = C;
    type Output = O;
    type Error = ParseError<'code, C::Element>;

    fn parse(&self, cursor: C) -> Result<(Self::Output, C), Self::Error> {
        let first = match self.parser1.parse(cursor) {
            Ok(result) => return Ok(result),
            Err(error) => error,
        };
        let second = match self.parser2.parse(cursor) {
            Ok(result) => return Ok(result),
            Err(error) => error,
        };
        let (data, position) = cursor.inner();
        Err(ParseError::Exhausted {
            candidates: vec![first, second],
            loc: CodeLoc::new(data, position),
        })
    }
}

impl<'code, P1, P2, O> Printer<'code> for Or<P1, P2>
where
    P1: Printer<'code, Output = O>,
    P2: Printer<'code, Element = P1::Element, Output = O>,
{
    type Element = P1::Element;
    type Output = O;

    fn print(&self, value: &O, out: &mut Vec<Self::Element>) -> Option<()> {
        let checkpoint = out.len();
        if self.parser1.print(value, out).is_some() {
            return Some(());
        }
        out.truncate(checkpoint);
        if self.parser2.print(value, out).is_some() {
            return Some(());
        }
        out.truncate(checkpoint);
        None
    }
}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, C, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    C: Cursor<'code>,
    C::Element: Atomic,
    P1: Parser<'code, Cursor = C, Output = O, Error = ParseError<'code, C::Element>>,
    P2: Parser<'code, Cursor = C, Output = O, Error = ParseError<'code, C::Element>>,
{
    Or::new(parser1, parser2)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor, Output = Self::Output, Error = Self::Error>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}
