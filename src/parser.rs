/// Core parser trait for parser combinators
///
/// A parser consumes zero or more elements from the front of a cursor to
/// produce an output value. The cursor is taken by value and the advanced
/// cursor is returned only inside `Ok`, so a failed parse cannot leave the
/// caller's cursor partially consumed: the caller still holds its own copy,
/// untouched. Sequencing and alternation rely on this invariant.
///
/// Parsers are immutable and reentrant. Running the same parser on
/// independent cursors, including from multiple threads, is safe; the only
/// effect of a parse is the returned cursor.
pub trait Parser<'code> {
    /// The cursor type this parser consumes
    type Cursor: Copy;
    type Output;
    type Error;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and advanced cursor on success, or
    /// Err if the parse fails. Failures never consume input.
    fn parse(
        &self,
        cursor: Self::Cursor,
    ) -> Result<(Self::Output, Self::Cursor), Self::Error>;
}

impl<'code, P: Parser<'code> + ?Sized> Parser<'code> for &P {
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(
        &self,
        cursor: Self::Cursor,
    ) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        (**self).parse(cursor)
    }
}
