use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::Parser;
use crate::printer::Printer;
use crate::{CodeLoc, ParseError};
use std::marker::PhantomData;

/// Parser that matches an exact element sequence, element by element
///
/// Output is `()`: the match is structural. Compose with
/// [`always`](crate::always::always) to commit a matched prefix to a value.
/// The printer direction always emits the sequence.
pub struct Literal<C, T: Atomic> {
    elements: Vec<T>,
    _cursor: PhantomData<C>,
}

impl<C, T: Atomic> Literal<C, T> {
    pub fn new(elements: &[T]) -> Self {
        Literal {
            elements: elements.to_vec(),
            _cursor: PhantomData,
        }
    }
}

/// Convenience function to create a Literal parser
pub fn literal<C, T: Atomic>(elements: &[T]) -> Literal<C, T> {
    Literal::new(elements)
}

impl<'code, C, T> Parser<'code> for Literal<C, T>
where
    C: Cursor<'code, Element = T>,
    T: Atomic + 'code,
{
    type Cursor = C;
    type Output = ();
    type Error = ParseError<'code, T>;

    fn parse(&self, cursor: C) -> Result<((), C), Self::Error> {
        let mut current = cursor;

        for expected in &self.elements {
            match current.value() {
                Ok(found) if found == *expected => {
                    current = current.next();
                }
                Ok(found) => {
                    let (data, _) = cursor.inner();
                    return Err(ParseError::expected(
                        format!(
                            "'{}' while matching \"{}\", found '{}'",
                            expected,
                            T::format_slice(&self.elements),
                            found
                        ),
                        CodeLoc::new(data, current.position()),
                    ));
                }
                Err(_) => {
                    let (data, _) = cursor.inner();
                    return Err(ParseError::expected(
                        format!(
                            "'{}' while matching \"{}\", but reached end of input",
                            expected,
                            T::format_slice(&self.elements)
                        ),
                        CodeLoc::new(data, current.position()),
                    ));
                }
            }
        }

        Ok(((), current))
    }
}

impl<'code, C, T> Printer<'code> for Literal<C, T>
where
    C: Cursor<'code, Element = T>,
    T: Atomic + 'code,
{
    type Element = T;
    type Output = ();

    fn print(&self, _value: &(), out: &mut Vec<T>) -> Option<()> {
        out.extend(self.elements.iter().copied());
        Some(())
    }
}
