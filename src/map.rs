use crate::parser::Parser;
use crate::printer::Printer;

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// `Map` is one-directional: without an inverse there is nothing to print, so
/// its printer refuses every value. Use [`bimap`](crate::bimap::BiMapExt) to
/// keep the printing direction through a transform.
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    type Cursor = P::Cursor;
    type Output = U;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let mapped_value = (self.mapper)(value);
        Ok((mapped_value, cursor))
    }
}

impl<'code, P, F, T, U> Printer<'code> for Map<P, F>
where
    P: Parser<'code, Output = T> + Printer<'code>,
    F: Fn(T) -> U,
{
    type Element = <P as Printer<'code>>::Element;
    type Output = U;

    fn print(&self, _value: &U, _out: &mut Vec<Self::Element>) -> Option<()> {
        None
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}
