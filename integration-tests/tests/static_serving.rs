use http::{header, Method, StatusCode};

use integration_tests::harness::{
    decompress, fixture_fs, repeat_body, TestResponse, TestRouter, DOCS_INDEX_BODY, HELLO_BODY,
    ROOT_INDEX_BODY,
};
use prebake::{register_embedded_static, Coding};

fn serve_router() -> TestRouter {
    let mut router = TestRouter::new();
    register_embedded_static(&mut router, "/assets", &fixture_fs(), "static", None)
        .expect("registration failed");
    router
}

fn get(router: &TestRouter, path: &str, accept_encoding: Option<&str>) -> TestResponse {
    let headers: Vec<_> = accept_encoding
        .map(|value| (header::ACCEPT_ENCODING, value))
        .into_iter()
        .collect();
    router.dispatch(Method::GET, path, &headers)
}

fn content_coding(response: &TestResponse) -> Option<Coding> {
    response
        .header(&header::CONTENT_ENCODING)
        .map(|value| Coding::parse(value).expect("unknown content-encoding in response"))
}

//-----------------------------------------------------------------------------
// Negotiation end to end
//-----------------------------------------------------------------------------

#[test]
fn serves_raw_body_without_accept_encoding() {
    // Arrange
    let router = serve_router();

    // Act
    let response = get(&router, "/assets/repeat.txt", None);

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header(&header::CONTENT_ENCODING), None);
    assert_eq!(response.body.as_ref(), repeat_body().as_bytes());
    assert_eq!(response.header(&header::VARY), Some("Accept-Encoding"));
    assert_eq!(response.header(&header::CONTENT_TYPE), Some("text/plain"));
}

#[test]
fn each_coding_round_trips_to_the_raw_bytes() {
    // Arrange
    let router = serve_router();
    let cases = [
        ("gzip", Some(Coding::Gzip)),
        ("deflate", Some(Coding::Deflate)),
        ("br", Some(Coding::Brotli)),
        ("zstd", Some(Coding::Zstd)),
    ];

    for (accept, expected) in cases {
        // Act
        let response = get(&router, "/assets/repeat.txt", Some(accept));

        // Assert
        assert_eq!(response.status, StatusCode::OK, "accept: {accept}");
        assert_eq!(content_coding(&response), expected, "accept: {accept}");
        let body = decompress(expected, &response.body).expect("failed to decode body");
        assert_eq!(body, repeat_body().as_bytes(), "accept: {accept}");
    }
}

#[test]
fn quality_preference_picks_the_higher_q() {
    let router = serve_router();

    let response = get(&router, "/assets/repeat.txt", Some("gzip;q=0.5, br;q=0.9"));

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(content_coding(&response), Some(Coding::Brotli));
}

#[test]
fn wildcard_falls_to_server_preference() {
    let router = serve_router();

    let response = get(&router, "/assets/repeat.txt", Some("*;q=1"));

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(content_coding(&response), Some(Coding::Zstd));
}

#[test]
fn explicit_identity_preference_wins() {
    let router = serve_router();

    let response = get(&router, "/assets/repeat.txt", Some("identity;q=1, br;q=0.4"));

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header(&header::CONTENT_ENCODING), None);
    assert_eq!(response.body.as_ref(), repeat_body().as_bytes());
}

#[test]
fn explicit_identity_wins_quality_ties() {
    let router = serve_router();

    let response = get(&router, "/assets/repeat.txt", Some("identity;q=0.7, br;q=0.7"));

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header(&header::CONTENT_ENCODING), None);
}

//-----------------------------------------------------------------------------
// Effective-only policy
//-----------------------------------------------------------------------------

#[test]
fn tiny_asset_serves_identity_even_when_gzip_is_requested() {
    let router = serve_router();

    let response = get(&router, "/assets/hello.txt", Some("gzip"));

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.header(&header::CONTENT_ENCODING), None);
    assert_eq!(response.body.as_ref(), HELLO_BODY.as_bytes());
}

#[test]
fn tiny_asset_with_identity_banned_is_not_acceptable() {
    let router = serve_router();

    let response = get(
        &router,
        "/assets/hello.txt",
        Some("gzip;q=1, identity;q=0, *;q=0"),
    );

    assert_eq!(response.status, StatusCode::NOT_ACCEPTABLE);
    assert!(response.body.is_empty());
}

#[test]
fn zeroing_every_coding_is_not_acceptable() {
    let router = serve_router();

    let response = get(
        &router,
        "/assets/hello.txt",
        Some("identity;q=0, br;q=0, gzip;q=0, deflate;q=0, zstd;q=0"),
    );

    assert_eq!(response.status, StatusCode::NOT_ACCEPTABLE);
}

//-----------------------------------------------------------------------------
// Index fallback and 404
//-----------------------------------------------------------------------------

#[test]
fn prefix_root_serves_the_root_index() {
    let router = serve_router();

    for path in ["/assets", "/assets/"] {
        let response = get(&router, path, None);

        assert_eq!(response.status, StatusCode::OK, "path: {path}");
        assert_eq!(response.body.as_ref(), ROOT_INDEX_BODY.as_bytes());
        assert_eq!(response.header(&header::CONTENT_TYPE), Some("text/html"));
    }
}

#[test]
fn directory_requests_with_and_without_slash_serve_the_index() {
    let router = serve_router();

    for path in ["/assets/docs", "/assets/docs/"] {
        let response = get(&router, path, None);

        assert_eq!(response.status, StatusCode::OK, "path: {path}");
        assert_eq!(response.body.as_ref(), DOCS_INDEX_BODY.as_bytes());
    }
}

#[test]
fn missing_assets_return_not_found() {
    let router = serve_router();

    let response = get(&router, "/assets/missing.txt", None);

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.is_empty());
}

#[test]
fn traversal_attempts_stay_inside_the_catalog() {
    let router = serve_router();

    let response = get(&router, "/assets/../assets/hello.txt", None);

    // Lexical cleaning resolves the dot segments; nothing above the catalog
    // root is reachable.
    assert_ne!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}

//-----------------------------------------------------------------------------
// HEAD
//-----------------------------------------------------------------------------

#[test]
fn head_reports_the_negotiated_variant_length() {
    let router = serve_router();

    let full = get(&router, "/assets/repeat.txt", Some("br"));
    assert_eq!(content_coding(&full), Some(Coding::Brotli));
    let brotli_len = full.body.len();

    let head = router.dispatch(
        Method::HEAD,
        "/assets/repeat.txt",
        &[(header::ACCEPT_ENCODING, "br")],
    );

    assert_eq!(head.status, StatusCode::OK);
    assert_eq!(content_coding(&head), Some(Coding::Brotli));
    assert_eq!(
        head.header(&header::CONTENT_LENGTH),
        Some(brotli_len.to_string().as_str())
    );
    assert!(head.body.is_empty());
}

//-----------------------------------------------------------------------------
// Stability
//-----------------------------------------------------------------------------

#[test]
fn identical_requests_get_byte_identical_bodies() {
    let router = serve_router();

    let first = get(&router, "/assets/repeat.txt", Some("zstd"));
    let second = get(&router, "/assets/repeat.txt", Some("zstd"));

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, second.body);
    assert_eq!(
        first.header(&header::CONTENT_ENCODING),
        second.header(&header::CONTENT_ENCODING)
    );
}

#[test]
fn compressed_bodies_are_smaller_than_raw() {
    let router = serve_router();

    let raw = get(&router, "/assets/repeat.txt", None);
    let compressed = get(&router, "/assets/repeat.txt", Some("gzip"));

    assert!(compressed.body.len() < raw.body.len());
}
