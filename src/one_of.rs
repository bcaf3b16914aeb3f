use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::printer::Printer;
use crate::{CodeLoc, ParseError};

// `ParserPrinter` is referenced by path rather than imported: its methods
// share names with `Parser`/`Printer`, and having all three traits in scope
// would make method calls on `OneOf` itself ambiguous.

/// Boxed alternation candidate: any parser/printer pair over cursor `C`
/// producing output `O`
pub type BoxedCandidate<'code, C, O> = Box<
    dyn crate::printer::ParserPrinter<
            'code,
            Cursor = C,
            Element = <C as Cursor<'code>>::Element,
            Output = O,
            Error = ParseError<'code, <C as Cursor<'code>>::Element>,
        > + 'code,
>;

/// Ordered alternation over a dynamically-sized candidate set
///
/// Candidates are tried in declaration order against the identical entry
/// cursor. The first success commits immediately: no ambiguity detection, no
/// longest match. A failed candidate cannot have consumed anything (cursors
/// are by-value), so the next candidate starts from the same position. When
/// every candidate fails, the result is an aggregate failure carrying each
/// candidate's failure in order plus the entry location.
///
/// The printer direction dispatches structurally: the first candidate whose
/// printer accepts the value wins. Candidates built from the
/// match-structure-then-[`always`](crate::always::always) pattern accept only
/// their own case, which makes the dispatch deterministic per value as long
/// as the candidates cover disjoint output cases.
///
/// Built once via [`one_of`]; the conditional and repeated inclusion rules
/// run at construction time, never per parse.
pub struct OneOf<'code, C, O>
where
    C: Cursor<'code>,
    C::Element: Atomic,
{
    candidates: Vec<BoxedCandidate<'code, C, O>>,
}

/// Builder for [`OneOf`]
///
/// ```
/// use bicomb::{one_of, always, literal, ByteCursor, Parser, SkipExt};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum City {
///     NewYork,
///     Berlin,
/// }
///
/// let data = b"Berlin, Hello!";
/// let cursor = ByteCursor::new(data);
/// let parser = one_of::<ByteCursor, City>()
///     .candidate(literal(b"New York").skip_then(always(City::NewYork)))
///     .candidate(literal(b"Berlin").skip_then(always(City::Berlin)))
///     .build();
///
/// let (city, _) = parser.parse(cursor).unwrap();
/// assert_eq!(city, City::Berlin);
/// ```
pub struct OneOfBuilder<'code, C, O>
where
    C: Cursor<'code>,
    C::Element: Atomic,
{
    candidates: Vec<BoxedCandidate<'code, C, O>>,
}

impl<'code, C, O> OneOfBuilder<'code, C, O>
where
    C: Cursor<'code>,
    C::Element: Atomic,
{
    /// Append a candidate; declaration order is match order
    pub fn candidate<P>(mut self, parser: P) -> Self
    where
        P: Parser<'code, Cursor = C, Output = O, Error = ParseError<'code, C::Element>>
            + Printer<'code, Element = C::Element, Output = O>
            + 'code,
    {
        self.candidates.push(Box::new(parser));
        self
    }

    /// Append a candidate only when `condition` holds
    ///
    /// Resolved here, at construction time: an absent candidate does not
    /// shift the ordering of the remaining candidates and never appears in
    /// aggregated failures. Equivalent to building two different alternation
    /// sets depending on the condition.
    pub fn candidate_if<P>(self, condition: bool, parser: P) -> Self
    where
        P: Parser<'code, Cursor = C, Output = O, Error = ParseError<'code, C::Element>>
            + Printer<'code, Element = C::Element, Output = O>
            + 'code,
    {
        if condition { self.candidate(parser) } else { self }
    }

    /// Append one same-shaped candidate per element, in iteration order
    ///
    /// This is how a finite enumeration (one candidate per enum case) expands
    /// without hand-written repetition.
    pub fn candidates<P, I>(mut self, parsers: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Parser<'code, Cursor = C, Output = O, Error = ParseError<'code, C::Element>>
            + Printer<'code, Element = C::Element, Output = O>
            + 'code,
    {
        for parser in parsers {
            self = self.candidate(parser);
        }
        self
    }

    pub fn build(self) -> OneOf<'code, C, O> {
        OneOf {
            candidates: self.candidates,
        }
    }
}

/// Start building an ordered alternation
pub fn one_of<'code, C, O>() -> OneOfBuilder<'code, C, O>
where
    C: Cursor<'code>,
    C::Element: Atomic,
{
    OneOfBuilder {
        candidates: Vec::new(),
    }
}

impl<'code, C, O> Parser<'code> for OneOf<'code, C, O>
where
    C: Cursor<'code>,
    C::Element: Atomic,
{
    type Cursor = C;
    type Output = O;
    type Error = ParseError<'code, C::Element>;

    fn parse(&self, cursor: C) -> Result<(Self::Output, C), Self::Error> {
        let mut failures = Vec::with_capacity(self.candidates.len());

        for candidate in &self.candidates {
            match crate::printer::ParserPrinter::parse(&**candidate, cursor) {
                Ok(committed) => return Ok(committed),
                Err(failure) => failures.push(failure),
            }
        }

        let (data, position) = cursor.inner();
        Err(ParseError::Exhausted {
            candidates: failures,
            loc: CodeLoc::new(data, position),
        })
    }
}

impl<'code, C, O> Printer<'code> for OneOf<'code, C, O>
where
    C: Cursor<'code>,
    C::Element: Atomic,
{
    type Element = C::Element;
    type Output = O;

    fn print(&self, value: &O, out: &mut Vec<C::Element>) -> Option<()> {
        let checkpoint = out.len();
        for candidate in &self.candidates {
            if crate::printer::ParserPrinter::print(&**candidate, value, out).is_some() {
                return Some(());
            }
            out.truncate(checkpoint);
        }
        None
    }
}
