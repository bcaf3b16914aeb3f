//! # BiComb - Bidirectional Parser Combinator Library
//!
//! BiComb provides composable, type-safe parser-printers: small units that
//! each consume a prefix of a cursor-like input to produce a structured
//! value, and can run in reverse to reconstitute input from a value. Complex
//! decoders and encoders are built by combining simple building blocks. The
//! library emphasizes:
//!
//! - **Zero panics**: All parsing failures are values handled through
//!   `Result` types; printing failures are an `Option` absence signal
//! - **No partial consumption**: A failed parse leaves the caller's cursor
//!   exactly as it was, a hard invariant every combinator upholds and that
//!   sequencing and alternation rely on
//! - **First-match alternation**: [`one_of`] tries candidates in declaration
//!   order, commits to the first success and aggregates every failure when
//!   all candidates fail
//! - **Round-trip coherence**: For any combinator implementing both
//!   directions, print-then-parse returns the value and parse-then-print
//!   reproduces the input, up to documented normalization (see
//!   [`roundtrip`])
//! - **Cursor generality**: The same combinators run over bytes, Unicode
//!   scalars, grapheme clusters, or user-defined structured inputs via the
//!   [`Cursor`] contract
//!
//! Combinators are built once, typically at startup, and reused across
//! arbitrarily many independent parse and print invocations; they hold no
//! mutable state, so sharing them across threads is safe as long as each
//! invocation owns its cursor.

pub mod always;
pub mod and;
pub mod atomic;
pub mod bimap;
pub mod cursor;
pub mod cursors;
pub mod end;
pub mod error;
pub mod fail;
pub mod literal;
pub mod many;
pub mod map;
pub mod map_err;
pub mod newline;
pub mod one_of;
pub mod optionally;
pub mod or;
pub mod parser;
pub mod printer;
pub mod roundtrip;
pub mod seq;
pub mod skip;
pub mod take_until;

pub use always::{Always, always};
pub use and::{And, AndExt, and};
pub use atomic::Atomic;
pub use bimap::{BiMap, BiMapExt, bimap};
pub use cursor::Cursor;
pub use cursors::{AtomicCursor, ByteCursor, CharCursor, GraphemeCursor, graphemes};
pub use end::{End, end};
pub use error::{CodeLoc, ParseError};
pub use fail::{Fail, fail};
pub use literal::{Literal, literal};
pub use many::{Many, many};
pub use map::{Map, MapExt, map};
pub use map_err::{MapErr, MapErrExt};
pub use newline::{Newline, newline};
pub use one_of::{BoxedCandidate, OneOf, OneOfBuilder, one_of};
pub use optionally::{Optionally, OptionallyExt, optionally};
pub use or::{Or, OrExt, or};
pub use parser::Parser;
pub use printer::{ParserPrinter, Printer};
pub use roundtrip::print_to_vec;
pub use seq::{Seq, SeqBuilder, seq};
pub use skip::{SkipExt, SkipThen, ThenSkip};
pub use take_until::{TakeUntil, take_until};
