use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::one_of::BoxedCandidate;
use crate::parser::Parser;
use crate::printer::Printer;

/// Builder-driven sequence: ordered structural steps committed to a value
///
/// Runs each step strictly in declaration order on the same threaded cursor
/// and, once all have matched, yields the attached value. Steps are void
/// (`Output = ()`): they match structure and contribute nothing to the
/// output. A failure at any step hands the caller back its untouched
/// pre-sequence cursor, however deep the sequence got.
///
/// This is the shape of an alternation candidate: match the discriminating
/// prefix, then commit to a case. Printing accepts only the attached value
/// and emits every step's canonical form in order, rolling the buffer back
/// if a step refuses.
pub struct Seq<'code, C, O>
where
    C: Cursor<'code>,
    C::Element: Atomic,
{
    steps: Vec<BoxedCandidate<'code, C, ()>>,
    value: O,
}

/// Builder for [`Seq`]
///
/// ```
/// use bicomb::{seq, literal, newline, ByteCursor, Parser};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Header;
///
/// let data = b"BEGIN\nrest";
/// let cursor = ByteCursor::new(data);
/// let parser = seq::<ByteCursor>()
///     .then(literal(b"BEGIN"))
///     .then(newline())
///     .value(Header);
///
/// let (header, _) = parser.parse(cursor).unwrap();
/// assert_eq!(header, Header);
/// ```
pub struct SeqBuilder<'code, C>
where
    C: Cursor<'code>,
    C::Element: Atomic,
{
    steps: Vec<BoxedCandidate<'code, C, ()>>,
}

impl<'code, C> SeqBuilder<'code, C>
where
    C: Cursor<'code>,
    C::Element: Atomic,
{
    /// Append a structural step; declaration order is match order
    pub fn then<P>(mut self, parser: P) -> Self
    where
        P: Parser<
                'code,
                Cursor = C,
                Output = (),
                Error = crate::ParseError<'code, C::Element>,
            > + Printer<'code, Element = C::Element, Output = ()>
            + 'code,
    {
        self.steps.push(Box::new(parser));
        self
    }

    /// Finish the sequence, committing it to `value`
    pub fn value<O>(self, value: O) -> Seq<'code, C, O> {
        Seq {
            steps: self.steps,
            value,
        }
    }
}

/// Start building a structural sequence
pub fn seq<'code, C>() -> SeqBuilder<'code, C>
where
    C: Cursor<'code>,
    C::Element: Atomic,
{
    SeqBuilder { steps: Vec::new() }
}

impl<'code, C, O> Parser<'code> for Seq<'code, C, O>
where
    C: Cursor<'code>,
    C::Element: Atomic,
    O: Clone,
{
    type Cursor = C;
    type Output = O;
    type Error = crate::ParseError<'code, C::Element>;

    fn parse(&self, cursor: C) -> Result<(Self::Output, C), Self::Error> {
        let mut current = cursor;
        for step in &self.steps {
            let ((), advanced) = crate::printer::ParserPrinter::parse(&**step, current)?;
            current = advanced;
        }
        Ok((self.value.clone(), current))
    }
}

impl<'code, C, O> Printer<'code> for Seq<'code, C, O>
where
    C: Cursor<'code>,
    C::Element: Atomic,
    O: PartialEq,
{
    type Element = C::Element;
    type Output = O;

    fn print(&self, value: &O, out: &mut Vec<C::Element>) -> Option<()> {
        if *value != self.value {
            return None;
        }
        let checkpoint = out.len();
        for step in &self.steps {
            if crate::printer::ParserPrinter::print(&**step, &(), out).is_none() {
                out.truncate(checkpoint);
                return None;
            }
        }
        Some(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ByteCursor;
    use crate::literal::literal;
    use crate::newline::newline;

    #[derive(Debug, Clone, PartialEq)]
    enum Token {
        Begin,
        End,
    }

    fn begin<'code>() -> Seq<'code, ByteCursor<'code>, Token> {
        seq()
            .then(literal(b"BEGIN"))
            .then(newline())
            .value(Token::Begin)
    }

    #[test]
    fn test_seq_matches_in_order() {
        let data = b"BEGIN\nbody";
        let cursor = ByteCursor::new(data);

        let (token, cursor) = begin().parse(cursor).unwrap();
        assert_eq!(token, Token::Begin);
        assert_eq!(cursor.value().unwrap(), b'b');
    }

    #[test]
    fn test_seq_atomicity_on_late_failure() {
        // First step matches five elements, second fails; the caller's
        // cursor is as it was before step one ran
        let data = b"BEGIN body";
        let cursor = ByteCursor::new(data);

        assert!(begin().parse(cursor).is_err());
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.value().unwrap(), b'B');
    }

    #[test]
    fn test_seq_empty_steps_is_always() {
        let data = b"anything";
        let cursor = ByteCursor::new(data);
        let parser = seq::<ByteCursor>().value(Token::End);

        let (token, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(token, Token::End);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_seq_prints_own_value_only() {
        let parser = begin();
        let mut out = Vec::new();

        assert!(parser.print(&Token::Begin, &mut out).is_some());
        assert_eq!(out, b"BEGIN\n");

        out.clear();
        assert!(parser.print(&Token::End, &mut out).is_none());
        assert!(out.is_empty());
    }
}
