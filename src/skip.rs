use crate::parser::Parser;
use crate::printer::Printer;

/// Sequencing where the first, void step contributes nothing to the output
///
/// A purely structural step (`Output = ()`) drops out of the aggregate: the
/// sequence's output is the second parser's output alone. Printing still
/// emits the structural step's canonical form in position.
pub struct SkipThen<P1, P2> {
    skipped: P1,
    parser: P2,
}

impl<P1, P2> SkipThen<P1, P2> {
    pub fn new(skipped: P1, parser: P2) -> Self {
        SkipThen { skipped, parser }
    }
}

impl<'code, P1, P2, E> Parser<'code> for SkipThen<P1, P2>
where
    P1: Parser<'code, Output = (), Error = E>,
    P2: Parser<'code, Cursor = P1::Cursor, Error = E>,
{
    type Cursor = P1::Cursor;
    type Output = P2::Output;
    type Error = E;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let ((), cursor) = self.skipped.parse(cursor)?;
        self.parser.parse(cursor)
    }
}

impl<'code, P1, P2> Printer<'code> for SkipThen<P1, P2>
where
    P1: Printer<'code, Output = ()>,
    P2: Printer<'code, Element = P1::Element>,
{
    type Element = P1::Element;
    type Output = P2::Output;

    fn print(&self, value: &Self::Output, out: &mut Vec<Self::Element>) -> Option<()> {
        let checkpoint = out.len();
        let printed = self
            .skipped
            .print(&(), out)
            .and_then(|()| self.parser.print(value, out));
        if printed.is_none() {
            out.truncate(checkpoint);
        }
        printed
    }
}

/// Sequencing where the second, void step contributes nothing to the output
pub struct ThenSkip<P1, P2> {
    parser: P1,
    skipped: P2,
}

impl<P1, P2> ThenSkip<P1, P2> {
    pub fn new(parser: P1, skipped: P2) -> Self {
        ThenSkip { parser, skipped }
    }
}

impl<'code, P1, P2, E> Parser<'code> for ThenSkip<P1, P2>
where
    P1: Parser<'code, Error = E>,
    P2: Parser<'code, Cursor = P1::Cursor, Output = (), Error = E>,
{
    type Cursor = P1::Cursor;
    type Output = P1::Output;
    type Error = E;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (value, cursor) = self.parser.parse(cursor)?;
        let ((), cursor) = self.skipped.parse(cursor)?;
        Ok((value, cursor))
    }
}

impl<'code, P1, P2> Printer<'code> for ThenSkip<P1, P2>
where
    P1: Printer<'code>,
    P2: Printer<'code, Element = P1::Element, Output = ()>,
{
    type Element = P1::Element;
    type Output = P1::Output;

    fn print(&self, value: &Self::Output, out: &mut Vec<Self::Element>) -> Option<()> {
        let checkpoint = out.len();
        let printed = self
            .parser
            .print(value, out)
            .and_then(|()| self.skipped.print(&(), out));
        if printed.is_none() {
            out.truncate(checkpoint);
        }
        printed
    }
}

/// Extension trait to add .skip_then() and .then_skip() support for parsers
pub trait SkipExt<'code>: Parser<'code> + Sized {
    /// Run `self` for structure only, then `other` for the output
    fn skip_then<P>(self, other: P) -> SkipThen<Self, P>
    where
        Self: Parser<'code, Output = ()>,
        P: Parser<'code, Cursor = Self::Cursor, Error = Self::Error>,
    {
        SkipThen::new(self, other)
    }

    /// Run `self` for the output, then `other` for structure only
    fn then_skip<P>(self, other: P) -> ThenSkip<Self, P>
    where
        P: Parser<'code, Cursor = Self::Cursor, Output = (), Error = Self::Error>,
    {
        ThenSkip::new(self, other)
    }
}

/// Implement SkipExt for all parsers
impl<'code, P> SkipExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ByteCursor;
    use crate::cursor::Cursor;
    use crate::literal::literal;
    use crate::take_until::take_until;

    #[test]
    fn test_skip_then_drops_structural_output() {
        let data = b"id:42\n";
        let cursor = ByteCursor::new(data);
        let parser = literal(b"id:").skip_then(take_until(b"\n"));

        let (value, _) = parser.parse(cursor).unwrap();
        assert_eq!(value, b"42");
    }

    #[test]
    fn test_then_skip_drops_trailing_structure() {
        let data = b"42;rest";
        let cursor = ByteCursor::new(data);
        let parser = take_until(b";").then_skip(literal(b";"));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, b"42");
        assert_eq!(cursor.value().unwrap(), b'r');
    }

    #[test]
    fn test_skip_then_failure_leaves_cursor() {
        let data = b"id:";
        let cursor = ByteCursor::new(data);
        let parser = literal(b"key:").skip_then(take_until(b"\n"));

        assert!(parser.parse(cursor).is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_skip_then_prints_structure_in_place() {
        let parser = literal::<ByteCursor, _>(b"id:").skip_then(literal(b"42"));
        let mut out = Vec::new();

        assert!(parser.print(&(), &mut out).is_some());
        assert_eq!(out, b"id:42");
    }
}
