// src/capture.rs
use tracing::debug;

/// The outer record. Its method `bar` is the ordinary, dynamically
/// dispatched kind of function: it operates on whichever record it is
/// invoked on (`&self`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outer {
    pub foo: i64,
}

/// A record carrying both kinds of field-function.
///
/// `p` is fixed-context: a closure that captured a reference to the
/// record enclosing its definition, at definition time. Invoking it
/// through an `Inner` does not rebind it to that `Inner`.
///
/// `q` is dynamically dispatched: a plain function with no captured
/// context, so the caller passes the record it should read.
pub struct Inner<'a> {
    pub foo: i64,
    pub p: Box<dyn Fn() -> i64 + 'a>,
    pub q: fn(&Inner<'a>) -> i64,
}

impl Outer {
    /// Demonstrates fixed-context capture. Returns the two reported
    /// values; both are this record's `foo`, never the inner record's.
    pub fn bar(&self) -> (i64, i64) {
        // Context is fixed here, where the closure is written, not at
        // the call site.
        let f = || self.foo;
        let direct = f();
        debug!(direct, "direct closure call");

        let inner = Inner {
            foo: 234,
            // Written inside `bar`, so the captured record is `self`
            // even though the closure becomes a field of `inner`.
            p: Box::new(move || self.foo),
            q: |rec| rec.foo,
        };
        let via_inner = (inner.p)();
        debug!(via_inner, inner_foo = inner.foo, "field-function call through inner record");

        (direct, via_inner)
    }
}
