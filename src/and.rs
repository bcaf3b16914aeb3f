use crate::parser::Parser;
use crate::printer::Printer;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// The caller's cursor is passed by value and threaded from step to step; the
/// intermediate cursor only ever lives inside this call, so a failure at any
/// step hands the caller back to the untouched pre-sequence position. This is
/// what makes sequencing compose safely under alternation.
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. This is due
/// to Rust's lack of variadic generics; the destructuring pattern is explicit
/// about the parsing order.
///
/// The printer direction decomposes the tuple, prints each side in order, and
/// rolls the buffer back to its entry length when either side refuses.
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2, E> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code, Error = E>,
    P2: Parser<'code, Cursor = P1::Cursor, Error = E>,
{
    type Cursor = P1::Cursor;
    type Output = (P1::Output, P2::Output);
    type Error = E;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

impl<'code, P1, P2> Printer<'code> for And<P1, P2>
where
    P1: Printer<'code>,
    P2: Printer<'code, Element = P1::Element>,
{
    type Element = P1::Element;
    type Output = (P1::Output, P2::Output);

    fn print(&self, value: &Self::Output, out: &mut Vec<Self::Element>) -> Option<()> {
        let checkpoint = out.len();
        let printed = self
            .parser1
            .print(&value.0, out)
            .and_then(|()| self.parser2.print(&value.1, out));
        if printed.is_none() {
            out.truncate(checkpoint);
        }
        printed
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2, E>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code, Error = E>,
    P2: Parser<'code, Cursor = P1::Cursor, Error = E>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor, Error = Self::Error>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
