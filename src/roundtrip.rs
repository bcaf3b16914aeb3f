//! Round-trip support: the contract tying the two directions together
//!
//! For any combinator implementing both [`Parser`](crate::Parser) and
//! [`Printer`](crate::Printer), the crate's correctness contract is:
//!
//! 1. for every value in the printer's representable domain,
//!    parsing the printed fragment yields the value back with nothing left
//!    over;
//! 2. for every input the parser fully consumes, printing the parsed value
//!    reproduces the input — up to documented normalization (in this crate,
//!    [`newline`](crate::newline::newline) reprints `\r\n` as `\n`; there
//!    are no other exceptions).
//!
//! Any other divergence between the directions is a defect in the
//! combinator. The [`assert_roundtrip`](crate::assert_roundtrip) macro
//! checks law 1 for a combinator built over an [`AtomicCursor`]; law 2 is a
//! parse followed by [`print_to_vec`] compared against the original input.
//!
//! [`AtomicCursor`]: crate::AtomicCursor

use crate::printer::Printer;

/// Print a value into a fresh buffer, or `None` if it is unrepresentable
pub fn print_to_vec<'code, P>(printer: &P, value: &P::Output) -> Option<Vec<P::Element>>
where
    P: Printer<'code>,
{
    let mut out = Vec::new();
    printer.print(value, &mut out)?;
    Some(out)
}

/// Assert that printing a value and parsing it back yields the value with an
/// empty remaining cursor
///
/// Takes an expression building the combinator rather than the combinator
/// itself: the parse side borrows the freshly printed buffer, so the
/// combinator for that direction must be constructed after the buffer
/// exists.
///
/// ```
/// use bicomb::{assert_roundtrip, literal, ByteCursor};
///
/// assert_roundtrip!(literal::<ByteCursor, u8>(b"Berlin"), ());
/// ```
#[macro_export]
macro_rules! assert_roundtrip {
    ($make:expr, $value:expr) => {{
        let printed = $crate::print_to_vec(&$make, &$value)
            .expect("value should be in the printable domain");
        let parser = $make;
        let cursor = $crate::AtomicCursor::new(&printed);
        let (parsed, rest) = $crate::Parser::parse(&parser, cursor)
            .expect("printed fragment should parse back");
        assert_eq!(parsed, $value, "round-trip changed the value");
        assert!(
            $crate::Cursor::eos(&rest),
            "round-trip left unconsumed input"
        );
    }};
}
