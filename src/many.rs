use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::printer::Printer;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Stops at the first failure. Also stops after a child succeeds without
/// consuming: a zero-width success repeated forever would never terminate, so
/// repetition requires progress. Wrap only parsers that consume on success if
/// every occurrence matters.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
    P::Cursor: Cursor<'code>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(&self, mut cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    let progressed = next_cursor.position() > cursor.position();
                    results.push(value);
                    cursor = next_cursor;
                    if !progressed {
                        break;
                    }
                }
                Err(_) => {
                    // Many matches zero or more, so error is not propagated
                    break;
                }
            }
        }

        Ok((results, cursor))
    }
}

impl<'code, P> Printer<'code> for Many<P>
where
    P: Printer<'code>,
{
    type Element = P::Element;
    type Output = Vec<P::Output>;

    fn print(&self, value: &Self::Output, out: &mut Vec<Self::Element>) -> Option<()> {
        let checkpoint = out.len();
        for item in value {
            if self.parser.print(item, out).is_none() {
                out.truncate(checkpoint);
                return None;
            }
        }
        Some(())
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}
