//! Cursor adaptation over a user-defined structured record
//!
//! A multi-field request type adapts to the combinator engine by holding one
//! independent sub-cursor per field. Field-focused combinators project a
//! field, run an ordinary combinator over its sub-cursor, and write the
//! advanced sub-cursor back; the engine itself is unchanged. Because the
//! whole record is a `Copy` value, a failed field parse leaves every field
//! exactly where it was.

use bicomb::{
    AtomicCursor, ByteCursor, Cursor, ParseError, Parser, SkipExt, always, end, literal, one_of,
};

#[derive(Debug, Copy, Clone)]
struct RequestCursor<'r> {
    method: AtomicCursor<'r, &'r str>,
    path: AtomicCursor<'r, &'r str>,
    query: &'r [(&'r str, &'r str)],
    body: ByteCursor<'r>,
}

impl<'r> RequestCursor<'r> {
    fn new(
        method: &'r [&'r str],
        path: &'r [&'r str],
        query: &'r [(&'r str, &'r str)],
        body: &'r [u8],
    ) -> Self {
        RequestCursor {
            method: AtomicCursor::new(method),
            path: AtomicCursor::new(path),
            query,
            body: ByteCursor::new(body),
        }
    }
}

/// Runs a segment-level combinator against the path field
struct Path<P> {
    inner: P,
}

impl<'r, P> Parser<'r> for Path<P>
where
    P: Parser<'r, Cursor = AtomicCursor<'r, &'r str>>,
{
    type Cursor = RequestCursor<'r>;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(
        &self,
        cursor: RequestCursor<'r>,
    ) -> Result<(Self::Output, RequestCursor<'r>), Self::Error> {
        let (value, path) = self.inner.parse(cursor.path)?;
        Ok((value, RequestCursor { path, ..cursor }))
    }
}

/// Runs a token-level combinator against the method field
struct Method<P> {
    inner: P,
}

impl<'r, P> Parser<'r> for Method<P>
where
    P: Parser<'r, Cursor = AtomicCursor<'r, &'r str>>,
{
    type Cursor = RequestCursor<'r>;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(
        &self,
        cursor: RequestCursor<'r>,
    ) -> Result<(Self::Output, RequestCursor<'r>), Self::Error> {
        let (value, method) = self.inner.parse(cursor.method)?;
        Ok((value, RequestCursor { method, ..cursor }))
    }
}

/// Runs a byte-level combinator against the body field
struct Body<P> {
    inner: P,
}

impl<'r, P> Parser<'r> for Body<P>
where
    P: Parser<'r, Cursor = ByteCursor<'r>>,
{
    type Cursor = RequestCursor<'r>;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(
        &self,
        cursor: RequestCursor<'r>,
    ) -> Result<(Self::Output, RequestCursor<'r>), Self::Error> {
        let (value, body) = self.inner.parse(cursor.body)?;
        Ok((value, RequestCursor { body, ..cursor }))
    }
}

#[test]
fn path_segment_consumes_one_segment() {
    let method = ["GET"];
    let segments = ["contact-us"];
    let request = RequestCursor::new(&method, &segments, &[], b"");

    let parser = Path {
        inner: literal(&["contact-us"]),
    };

    let ((), request) = parser.parse(request).unwrap();
    assert!(request.path.eos());
    // Untouched fields are where they were
    assert_eq!(request.method.value().unwrap(), "GET");
}

#[test]
fn failed_field_parse_restores_the_whole_record() {
    let method = ["GET"];
    let segments = ["about-us", "team"];
    let request = RequestCursor::new(&method, &segments, &[], b"");

    let parser = Path {
        inner: literal(&["contact-us"]),
    };

    assert!(parser.parse(request).is_err());
    // The caller's record still sees the full path
    assert_eq!(request.path.value().unwrap(), "about-us");
    assert_eq!(request.path.position(), 0);
}

#[test]
fn fields_compose_across_the_record() {
    let method = ["POST"];
    let segments = ["users", "42"];
    let query = [("page", "1")];
    let request = RequestCursor::new(&method, &segments, &query, b"payload");

    let method = Method {
        inner: literal(&["POST"]),
    };
    let user_path = Path {
        inner: literal(&["users"]),
    };

    let ((), request) = method.parse(request).unwrap();
    let ((), request) = user_path.parse(request).unwrap();

    assert!(request.method.eos());
    assert_eq!(request.path.value().unwrap(), "42");
    assert_eq!(request.query, &[("page", "1")]);
}

#[test]
fn body_field_uses_byte_combinators() {
    let method = ["POST"];
    let segments: [&str; 0] = [];
    let request = RequestCursor::new(&method, &segments, &[], b"payload");

    let parser = Body {
        inner: literal(b"payload").then_skip(end()),
    };

    let ((), request) = parser.parse(request).unwrap();
    assert!(request.body.eos());
}

#[test]
fn route_alternation_runs_inside_a_field() {
    #[derive(Debug, Clone, PartialEq)]
    enum Route {
        Home,
        Contact,
    }

    let method = ["GET"];
    let segments = ["contact-us"];
    let request = RequestCursor::new(&method, &segments, &[], b"");

    let parser = Path {
        inner: one_of::<AtomicCursor<&str>, Route>()
            .candidate(literal(&["home"]).skip_then(always(Route::Home)))
            .candidate(literal(&["contact-us"]).skip_then(always(Route::Contact)))
            .build(),
    };

    let (route, request) = parser.parse(request).unwrap();
    assert_eq!(route, Route::Contact);
    assert!(request.path.eos());
}

#[test]
fn exhausted_route_alternation_keeps_the_record_intact() {
    let method = ["GET"];
    let segments = ["pricing"];
    let request = RequestCursor::new(&method, &segments, &[], b"");

    let parser = Path {
        inner: one_of::<AtomicCursor<&str>, ()>()
            .candidate(literal(&["home"]).skip_then(always(())))
            .candidate(literal(&["contact-us"]).skip_then(always(())))
            .build(),
    };

    let error = parser.parse(request).unwrap_err();
    match error {
        ParseError::Exhausted { ref candidates, .. } => assert_eq!(candidates.len(), 2),
        ref other => panic!("expected aggregate failure, got {:?}", other),
    }
    assert_eq!(request.path.value().unwrap(), "pricing");
}
