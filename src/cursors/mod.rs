mod atomic;
mod byte;
mod grapheme;

pub use atomic::AtomicCursor;
pub use byte::ByteCursor;
pub use grapheme::{GraphemeCursor, graphemes};

/// A specialized cursor for Unicode scalar values
pub type CharCursor<'code> = AtomicCursor<'code, char>;
