//! Embedded static assets, pre-compressed at registration time.
//!
//! At registration the library walks a read-only source tree, builds every
//! representation of every file under the configured content codings, and
//! binds a handler onto a host router. At request time the handler resolves
//! the path against the in-memory catalog, negotiates `Accept-Encoding`
//! against the server's preference order, and serves the pre-built variant.
//! Nothing touches the source filesystem after registration.

pub mod app;
pub mod coding;
pub mod ctx;
pub mod error;
pub mod fs;
pub mod logging;
pub mod route;
pub mod static_assets;

pub use coding::{normalize_encoding_order, Coding, DEFAULT_ENCODING_ORDER};
pub use ctx::RequestContext;
pub use error::{PreloadError, RegisterError};
pub use fs::{DiskFs, MemoryFs, ReadOnlyFs};
pub use route::{Handler, Router};
pub use static_assets::{register_embedded_static, StaticAsset, StaticHandler, StaticOptions};
