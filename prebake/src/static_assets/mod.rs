//! Pre-compressed static asset serving: preload, negotiation, handler.

mod accept;
mod asset;
mod compress;
mod handler;
mod media_type;
mod negotiate;
mod options;
mod path;
mod preload;

pub use asset::StaticAsset;
pub use handler::StaticHandler;
pub use options::StaticOptions;

use std::sync::Arc;

use http::Method;
use tracing::info;

use crate::error::RegisterError;
use crate::fs::ReadOnlyFs;
use crate::route::Router;

use options::{normalize_route_prefix, HandlerConfig};
use preload::preload_assets;

/// Registers a static handler backed by a read-only source tree.
///
/// Every file under `dir` is read and compressed under every enabled coding
/// during this call; requests are then served entirely from memory with
/// `Accept-Encoding` negotiation against the configured preference order.
/// The handler is bound for `GET` and `HEAD` under `prefix` and `prefix/*`.
///
/// On error, nothing is installed on the router.
pub fn register_embedded_static<R>(
    router: &mut R,
    prefix: &str,
    source: &dyn ReadOnlyFs,
    dir: &str,
    options: Option<StaticOptions>,
) -> Result<(), RegisterError>
where
    R: Router + ?Sized,
{
    let cfg = HandlerConfig::from_options(options)?;
    let prefix = normalize_route_prefix(prefix)?;

    let sub;
    let source: &dyn ReadOnlyFs = if dir.is_empty() || dir == "." {
        source
    } else {
        sub = source
            .sub(dir)
            .map_err(|err| RegisterError::SourceOpen {
                dir: dir.to_string(),
                source: err,
            })?;
        sub.as_ref()
    };

    let assets = preload_assets(source, &cfg.encodings)?;

    info!(
        prefix = %prefix,
        assets = assets.len(),
        encodings = ?cfg.encodings,
        "registered embedded static assets"
    );

    let handler = Arc::new(StaticHandler::new(prefix.clone(), cfg, assets));
    for route in static_routes(&prefix) {
        router.bind(Method::GET, &route, handler.clone());
        router.bind(Method::HEAD, &route, handler.clone());
    }

    Ok(())
}

fn static_routes(prefix: &str) -> Vec<String> {
    if prefix == "/" {
        vec!["/".to_string(), "/*".to_string()]
    } else {
        vec![prefix.to_string(), format!("{prefix}/*")]
    }
}
