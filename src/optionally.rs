use crate::parser::Parser;
use crate::printer::Printer;

/// Parser combinator for zero-or-one occurrence of the given parser
///
/// A failed child never consumes input, so the `None` case leaves the cursor
/// exactly where it was. Printing `None` emits nothing; printing `Some`
/// delegates to the child.
pub struct Optionally<P> {
    parser: P,
}

impl<P> Optionally<P> {
    pub fn new(parser: P) -> Self {
        Optionally { parser }
    }
}

impl<'code, P> Parser<'code> for Optionally<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = Option<P::Output>;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        match self.parser.parse(cursor) {
            Ok((value, cursor)) => Ok((Some(value), cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

impl<'code, P> Printer<'code> for Optionally<P>
where
    P: Printer<'code>,
{
    type Element = P::Element;
    type Output = Option<P::Output>;

    fn print(&self, value: &Self::Output, out: &mut Vec<Self::Element>) -> Option<()> {
        match value {
            Some(inner) => self.parser.print(inner, out),
            None => Some(()),
        }
    }
}

/// Convenience function to create an Optionally parser
pub fn optionally<'code, P>(parser: P) -> Optionally<P>
where
    P: Parser<'code>,
{
    Optionally::new(parser)
}

/// Extension trait to add .optionally() method support for parsers
pub trait OptionallyExt<'code>: Parser<'code> + Sized {
    fn optionally(self) -> Optionally<Self> {
        Optionally::new(self)
    }
}

/// Implement OptionallyExt for all parsers
impl<'code, P> OptionallyExt<'code> for P where P: Parser<'code> {}
