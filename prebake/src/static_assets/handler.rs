use http::{header, HeaderValue, Method, StatusCode};

use crate::coding::Coding;
use crate::ctx::RequestContext;
use crate::route::Handler;

use super::accept::parse_accept_encoding;
use super::asset::{Catalog, StaticAsset};
use super::negotiate::negotiate;
use super::options::HandlerConfig;
use super::path::clean_url_path;

/// Serves the preloaded catalog. Everything here is immutable after
/// registration and shared across concurrent requests without locks.
pub struct StaticHandler {
    prefix: String,
    index_file: String,
    cache_control: Option<String>,
    encodings: Vec<Coding>,
    assets: Catalog,
}

impl StaticHandler {
    pub(crate) fn new(prefix: String, cfg: HandlerConfig, assets: Catalog) -> Self {
        Self {
            prefix,
            index_file: cfg.index_file,
            cache_control: cfg.cache_control,
            encodings: cfg.encodings,
            assets,
        }
    }

    /// Maps the request path to a catalog entry, falling back to the index
    /// file for directory-style paths.
    fn resolve_asset(&self, ctx: &dyn RequestContext) -> Option<&StaticAsset> {
        let mut relative = ctx.wildcard().unwrap_or_default().to_string();
        if relative.is_empty() && self.prefix != "/" {
            // The non-wildcard route form carries no capture; strip the
            // prefix off the raw request path instead.
            let path = ctx.path();
            relative = path.strip_prefix(&self.prefix).unwrap_or(path).to_string();
        }

        let relative = relative.replace('\\', "/");
        let mut relative = relative.trim_start_matches('/');
        if relative.is_empty() {
            relative = self.index_file.as_str();
        }

        let key = clean_url_path(relative);
        if let Some(asset) = self.assets.get(&key) {
            return Some(asset);
        }

        // Directory requests resolve to their index file, so `/docs` and
        // `/docs/` both land on `/docs/index.html`.
        let clean = key.trim_start_matches('/');
        if clean != self.index_file {
            let index_key = if clean.is_empty() {
                format!("/{}", self.index_file)
            } else {
                format!("/{}/{}", clean, self.index_file)
            };
            if let Some(asset) = self.assets.get(&index_key) {
                return Some(asset);
            }
        }

        None
    }
}

impl Handler for StaticHandler {
    fn handle(&self, ctx: &mut dyn RequestContext) {
        let Some(asset) = self.resolve_asset(&*ctx) else {
            ctx.set_status(StatusCode::NOT_FOUND);
            return;
        };

        let accept = ctx.header(&header::ACCEPT_ENCODING).unwrap_or_default();
        let specs = parse_accept_encoding(accept);
        let Some(coding) = negotiate(&specs, &self.encodings, &asset.variants) else {
            ctx.set_status(StatusCode::NOT_ACCEPTABLE);
            return;
        };

        let body = asset.variants[&coding].clone();

        ctx.append_header(header::VARY, HeaderValue::from_static("Accept-Encoding"));
        ctx.insert_header(
            header::CONTENT_TYPE,
            HeaderValue::from_str(&asset.content_type).unwrap(),
        );
        if let Some(cache_control) = &self.cache_control {
            ctx.insert_header(
                header::CACHE_CONTROL,
                HeaderValue::from_str(cache_control).unwrap(),
            );
        }
        if coding != Coding::Identity {
            ctx.insert_header(
                header::CONTENT_ENCODING,
                HeaderValue::from_static(coding.as_str()),
            );
        }

        if *ctx.method() == Method::HEAD {
            ctx.insert_header(header::CONTENT_LENGTH, HeaderValue::from(body.len()));
            return;
        }

        ctx.write_body(body);
    }
}
