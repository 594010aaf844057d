//! Per-request capability surface. The core never talks to an HTTP framework
//! directly; the host adapts its request/response types to this trait.

use bytes::Bytes;
use http::{HeaderName, HeaderValue, Method, StatusCode};

/// One in-flight request as seen by a [`Handler`](crate::route::Handler).
///
/// The response status defaults to `200 OK` when the handler never sets one.
pub trait RequestContext {
    fn method(&self) -> &Method;

    /// Full request path, as matched by the router.
    fn path(&self) -> &str;

    /// Suffix captured by a trailing `/*` route pattern, if the matched
    /// pattern had one.
    fn wildcard(&self) -> Option<&str>;

    /// First value of the named request header, when it decodes as a string.
    fn header(&self, name: &HeaderName) -> Option<&str>;

    fn set_status(&mut self, status: StatusCode);

    /// Sets a response header, replacing any previous value.
    fn insert_header(&mut self, name: HeaderName, value: HeaderValue);

    /// Adds a response header without replacing earlier values (`Vary`
    /// accumulation).
    fn append_header(&mut self, name: HeaderName, value: HeaderValue);

    /// Writes the response body. The host HTTP layer owns `Content-Length`
    /// bookkeeping for bodies written this way.
    fn write_body(&mut self, body: Bytes);
}
