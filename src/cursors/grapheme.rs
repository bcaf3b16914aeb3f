use crate::AtomicCursor;
use unicode_segmentation::UnicodeSegmentation;

/// A cursor over extended grapheme clusters
///
/// Each element is one user-perceived character, so combining sequences and
/// `"\r\n"` are single elements. Build the backing slice with [`graphemes`].
pub type GraphemeCursor<'code> = AtomicCursor<'code, &'code str>;

/// Split a string into extended grapheme clusters for [`GraphemeCursor`]
///
/// The returned vector borrows from `text`; keep it alive for as long as the
/// cursor is in use.
pub fn graphemes(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}
