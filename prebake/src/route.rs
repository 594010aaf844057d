//! Route-registration capability surface.

use std::sync::Arc;

use http::Method;

use crate::ctx::RequestContext;

/// A request handler shared immutably across concurrent invocations.
pub trait Handler: Send + Sync {
    fn handle(&self, ctx: &mut dyn RequestContext);
}

/// Binds handlers onto path patterns. Patterns may end with a `/*` wildcard;
/// the captured suffix must be surfaced through
/// [`RequestContext::wildcard`](crate::ctx::RequestContext::wildcard).
pub trait Router {
    fn bind(&mut self, method: Method, pattern: &str, handler: Arc<dyn Handler>);
}
