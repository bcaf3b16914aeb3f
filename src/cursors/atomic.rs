use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::{CodeLoc, ParseError};

/// Index-based cursor over a slice of atomic elements
///
/// Copying the cursor is the snapshot: backtracking is "keep your copy",
/// never undo.
#[derive(Debug, Copy, Clone)]
pub enum AtomicCursor<'code, T: Atomic> {
    Valid { data: &'code [T], position: usize },
    EndOfFile { data: &'code [T] },
}

impl<'code, T: Atomic> AtomicCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        if data.is_empty() {
            return AtomicCursor::EndOfFile { data };
        }
        AtomicCursor::Valid { data, position: 0 }
    }
}

impl<'code, T: Atomic> Cursor<'code> for AtomicCursor<'code, T> {
    type Element = T;
    type Error = ParseError<'code, T>;

    fn value(&self) -> Result<Self::Element, Self::Error> {
        match self {
            AtomicCursor::Valid { data, position } => Ok(data[*position]),
            AtomicCursor::EndOfFile { data } => Err(ParseError::CannotReadValueAtEof(
                CodeLoc::new(data, data.len()),
            )),
        }
    }

    fn next(self) -> Self {
        match self {
            AtomicCursor::Valid { data, position } => {
                if position + 1 >= data.len() {
                    AtomicCursor::EndOfFile { data }
                } else {
                    AtomicCursor::Valid {
                        data,
                        position: position + 1,
                    }
                }
            }
            AtomicCursor::EndOfFile { data } => AtomicCursor::EndOfFile { data },
        }
    }

    fn try_next(self) -> Result<Self, Self::Error> {
        match self {
            AtomicCursor::Valid { .. } => {
                let next = self.next();
                match next {
                    AtomicCursor::Valid { .. } => Ok(next),
                    AtomicCursor::EndOfFile { data } => Err(ParseError::UnexpectedEndOfFile(
                        CodeLoc::new(data, data.len()),
                    )),
                }
            }
            AtomicCursor::EndOfFile { data } => Err(ParseError::AlreadyAtEndOfFile(
                CodeLoc::new(data, data.len()),
            )),
        }
    }

    fn position(&self) -> usize {
        match self {
            AtomicCursor::Valid { position, .. } => *position,
            AtomicCursor::EndOfFile { data } => data.len(),
        }
    }

    fn source(&self) -> &'code [Self::Element] {
        match self {
            AtomicCursor::Valid { data, .. } => data,
            AtomicCursor::EndOfFile { data } => data,
        }
    }

    fn inner(self) -> (&'code [Self::Element], usize) {
        match self {
            AtomicCursor::Valid { data, position } => (data, position),
            AtomicCursor::EndOfFile { data } => (data, data.len()),
        }
    }
}
