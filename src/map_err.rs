use crate::parser::Parser;
use crate::printer::Printer;
use std::fmt;

/// Parser combinator that transforms the error of a parser using a mapping function
///
/// This is the seam for layering user-defined error types over the built-in
/// failures, e.g. field-focused combinators over a structured input that
/// report in the vocabulary of their own domain.
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<P, F> fmt::Debug for MapErr<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<'code, P, F, E1, E2> Parser<'code> for MapErr<P, F>
where
    P: Parser<'code, Error = E1>,
    F: Fn(E1) -> E2,
    E2: std::error::Error,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = E2;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        self.parser.parse(cursor).map_err(&self.mapper)
    }
}

impl<'code, P, F> Printer<'code> for MapErr<P, F>
where
    P: Printer<'code>,
{
    type Element = P::Element;
    type Output = P::Output;

    fn print(&self, value: &Self::Output, out: &mut Vec<Self::Element>) -> Option<()> {
        self.parser.print(value, out)
    }
}

/// Extension trait to add .map_err() method support for parsers
pub trait MapErrExt<'code>: Parser<'code> + Sized {
    fn map_err<F, E2>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(Self::Error) -> E2,
        E2: std::error::Error,
    {
        MapErr::new(self, mapper)
    }
}

/// Implement MapErrExt for all parsers
impl<'code, P> MapErrExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ByteCursor;
    use crate::literal::literal;

    #[derive(Debug)]
    struct RouteError(String);

    impl fmt::Display for RouteError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "route failed: {}", self.0)
        }
    }

    impl std::error::Error for RouteError {}

    #[test]
    fn test_map_err_transforms_error() {
        let data = b"xyz";
        let cursor = ByteCursor::new(data);
        let parser = literal(b"abc").map_err(|e| RouteError(e.to_string()));

        let error = parser.parse(cursor).unwrap_err();
        assert!(error.to_string().starts_with("route failed"));
    }

    #[test]
    fn test_map_err_passes_success_through() {
        let data = b"abc!";
        let cursor = ByteCursor::new(data);
        let parser = literal(b"abc").map_err(|e| RouteError(e.to_string()));

        let ((), cursor) = parser.parse(cursor).unwrap();
        assert_eq!(crate::Cursor::value(&cursor).unwrap(), b'!');
    }

    #[test]
    fn test_map_err_printing_unaffected() {
        let parser = literal::<ByteCursor, _>(b"abc").map_err(|e| RouteError(e.to_string()));
        let mut out = Vec::new();

        assert!(parser.print(&(), &mut out).is_some());
        assert_eq!(out, b"abc");
    }
}
