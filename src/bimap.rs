use crate::parser::Parser;
use crate::printer::Printer;

/// Bidirectional map: transforms parsed output and inverts the transform when printing
///
/// The inverse returns `Option` because a transform need not be surjective:
/// values outside the upstream parser's image are reported as unrepresentable
/// rather than printed incorrectly.
pub struct BiMap<P, F, G> {
    parser: P,
    forward: F,
    back: G,
}

impl<P, F, G> BiMap<P, F, G> {
    pub fn new(parser: P, forward: F, back: G) -> Self {
        BiMap {
            parser,
            forward,
            back,
        }
    }
}

impl<'code, P, F, G, T, U> Parser<'code> for BiMap<P, F, G>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
    G: Fn(&U) -> Option<T>,
{
    type Cursor = P::Cursor;
    type Output = U;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.forward)(value), cursor))
    }
}

impl<'code, P, F, G, T, U> Printer<'code> for BiMap<P, F, G>
where
    P: Parser<'code, Output = T> + Printer<'code, Output = T>,
    F: Fn(T) -> U,
    G: Fn(&U) -> Option<T>,
{
    type Element = <P as Printer<'code>>::Element;
    type Output = U;

    fn print(&self, value: &U, out: &mut Vec<Self::Element>) -> Option<()> {
        let upstream = (self.back)(value)?;
        self.parser.print(&upstream, out)
    }
}

/// Convenience function to create a BiMap parser
pub fn bimap<'code, P, F, G, T, U>(parser: P, forward: F, back: G) -> BiMap<P, F, G>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
    G: Fn(&U) -> Option<T>,
{
    BiMap::new(parser, forward, back)
}

/// Extension trait to add .bimap() method support for parsers
pub trait BiMapExt<'code>: Parser<'code> + Sized {
    fn bimap<F, G, U>(self, forward: F, back: G) -> BiMap<Self, F, G>
    where
        F: Fn(Self::Output) -> U,
        G: Fn(&U) -> Option<Self::Output>,
    {
        BiMap::new(self, forward, back)
    }
}

/// Implement BiMapExt for all parsers
impl<'code, P> BiMapExt<'code> for P where P: Parser<'code> {}
