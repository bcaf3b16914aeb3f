use crate::parser::Parser;

/// Printing direction of the parser/printer contract
///
/// A printer appends the encoding of a value onto an element buffer.
/// Printing can fail: `None` signals that the value is outside the printer's
/// representable domain (for example the inverse of a non-surjective map, or
/// an alternation candidate asked to print another candidate's case). A
/// failed print must leave the buffer exactly as it was on entry; printers
/// that delegate to several children truncate back to their entry length
/// when a child refuses.
pub trait Printer<'code> {
    /// The element type fragments are made of
    type Element;
    type Output;

    /// Append the encoding of `value` to `out`, or signal non-representability
    fn print(&self, value: &Self::Output, out: &mut Vec<Self::Element>) -> Option<()>;
}

impl<'code, P: Printer<'code> + ?Sized> Printer<'code> for &P {
    type Element = P::Element;
    type Output = P::Output;

    fn print(&self, value: &Self::Output, out: &mut Vec<Self::Element>) -> Option<()> {
        (**self).print(value, out)
    }
}

/// Object-safe union of the parse and print directions
///
/// Builders that collect a dynamically-sized set of same-shaped combinators
/// (alternation candidates, sequence steps) store them as
/// `Box<dyn ParserPrinter<..>>`. Every type implementing both [`Parser`] and
/// [`Printer`] with a matching output gets this for free.
pub trait ParserPrinter<'code> {
    type Cursor: Copy;
    type Element;
    type Output;
    type Error;

    fn parse(
        &self,
        cursor: Self::Cursor,
    ) -> Result<(Self::Output, Self::Cursor), Self::Error>;

    fn print(&self, value: &Self::Output, out: &mut Vec<Self::Element>) -> Option<()>;
}

impl<'code, P> ParserPrinter<'code> for P
where
    P: Parser<'code> + Printer<'code, Output = <P as Parser<'code>>::Output>,
{
    type Cursor = <P as Parser<'code>>::Cursor;
    type Element = <P as Printer<'code>>::Element;
    type Output = <P as Parser<'code>>::Output;
    type Error = <P as Parser<'code>>::Error;

    fn parse(
        &self,
        cursor: Self::Cursor,
    ) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        Parser::parse(self, cursor)
    }

    fn print(&self, value: &Self::Output, out: &mut Vec<Self::Element>) -> Option<()> {
        Printer::print(self, value, out)
    }
}
