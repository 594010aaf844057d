use std::sync::Arc;

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};

use prebake::{Handler, RequestContext, Router};

/// Minimal router speaking the binding contract `register_embedded_static`
/// expects: exact patterns plus trailing `/*` wildcards whose captured
/// suffix reaches the handler.
#[derive(Default)]
pub struct TestRouter {
    routes: Vec<Route>,
}

struct Route {
    method: Method,
    pattern: String,
    handler: Arc<dyn Handler>,
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn header(&self, name: &HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }
}

impl Router for TestRouter {
    fn bind(&mut self, method: Method, pattern: &str, handler: Arc<dyn Handler>) {
        self.routes.push(Route {
            method,
            pattern: pattern.to_string(),
            handler,
        });
    }
}

impl TestRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn has_route(&self, method: &Method, pattern: &str) -> bool {
        self.routes
            .iter()
            .any(|route| &route.method == method && route.pattern == pattern)
    }

    /// Dispatches a request the way an HTTP framework would: exact patterns
    /// win, wildcard patterns capture the suffix. Unrouted requests get a
    /// bare 404.
    pub fn dispatch(
        &self,
        method: Method,
        path: &str,
        headers: &[(HeaderName, &str)],
    ) -> TestResponse {
        let Some((route, wildcard)) = self.match_route(&method, path) else {
            return TestResponse {
                status: StatusCode::NOT_FOUND,
                headers: HeaderMap::new(),
                body: Bytes::new(),
            };
        };

        let mut request_headers = HeaderMap::new();
        for (name, value) in headers {
            request_headers.insert(
                name.clone(),
                HeaderValue::from_str(value).expect("invalid test header value"),
            );
        }

        let mut ctx = TestContext {
            method,
            path: path.to_string(),
            wildcard,
            request_headers,
            status: StatusCode::OK,
            response_headers: HeaderMap::new(),
            body: Bytes::new(),
        };
        route.handler.handle(&mut ctx);

        TestResponse {
            status: ctx.status,
            headers: ctx.response_headers,
            body: ctx.body,
        }
    }

    fn match_route(&self, method: &Method, path: &str) -> Option<(&Route, Option<String>)> {
        // Exact patterns take precedence over wildcards.
        for route in &self.routes {
            if &route.method == method
                && !route.pattern.ends_with("/*")
                && route.pattern == path
            {
                return Some((route, None));
            }
        }

        for route in &self.routes {
            if &route.method != method {
                continue;
            }
            let Some(base) = route.pattern.strip_suffix("/*") else {
                continue;
            };
            let captured = if base.is_empty() {
                Some(path.trim_start_matches('/').to_string())
            } else {
                path.strip_prefix(base)
                    .and_then(|rest| rest.strip_prefix('/'))
                    .map(str::to_string)
            };
            if let Some(suffix) = captured {
                return Some((route, Some(suffix)));
            }
        }

        None
    }
}

struct TestContext {
    method: Method,
    path: String,
    wildcard: Option<String>,
    request_headers: HeaderMap,
    status: StatusCode,
    response_headers: HeaderMap,
    body: Bytes,
}

impl RequestContext for TestContext {
    fn method(&self) -> &Method {
        &self.method
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn wildcard(&self) -> Option<&str> {
        self.wildcard.as_deref()
    }

    fn header(&self, name: &HeaderName) -> Option<&str> {
        self.request_headers
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.response_headers.insert(name, value);
    }

    fn append_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.response_headers.append(name, value);
    }

    fn write_body(&mut self, body: Bytes) {
        self.body = body;
    }
}
