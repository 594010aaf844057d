use http::HeaderValue;
use serde::Deserialize;

use crate::coding::{normalize_encoding_order, Coding, DEFAULT_ENCODING_ORDER};
use crate::error::RegisterError;

use super::path::clean_url_path;

pub(crate) const DEFAULT_INDEX_FILE: &str = "index.html";

/// Knobs for one static registration. All fields are optional; the record is
/// serde-deserializable so hosts can keep it in their config files, and the
/// `with_*` modifiers return copies for inline construction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StaticOptions {
    /// File served when the requested path points at a directory.
    /// Default: `index.html`.
    pub index_file: Option<String>,

    /// Optional `Cache-Control` response header value, sent verbatim.
    pub cache_control: Option<String>,

    /// Server-side preferred encoding order, most preferred first.
    /// Supported values: `zstd`, `br`, `gzip`, `deflate`, `identity`.
    /// Empty means every supported encoding, in the default order.
    pub encodings: Vec<String>,
}

impl StaticOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index_file(mut self, index_file: impl Into<String>) -> Self {
        self.index_file = Some(index_file.into());
        self
    }

    pub fn with_cache_control(mut self, cache_control: impl Into<String>) -> Self {
        self.cache_control = Some(cache_control.into());
        self
    }

    pub fn with_encodings<I, S>(mut self, encodings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.encodings = encodings.into_iter().map(Into::into).collect();
        self
    }
}

/// The validated, normalized form the handler is built from.
#[derive(Debug, Clone)]
pub(crate) struct HandlerConfig {
    pub(crate) index_file: String,
    pub(crate) cache_control: Option<String>,
    pub(crate) encodings: Vec<Coding>,
}

impl HandlerConfig {
    pub(crate) fn from_options(options: Option<StaticOptions>) -> Result<Self, RegisterError> {
        let options = options.unwrap_or_default();

        let index_file = match options.index_file.as_deref() {
            None | Some("") => DEFAULT_INDEX_FILE.to_string(),
            Some(value) => clean_url_path(value).trim_start_matches('/').to_string(),
        };

        let cache_control = match options.cache_control {
            Some(value) if !value.is_empty() => {
                // Validated once here so the serving path can set it blindly.
                if HeaderValue::from_str(&value).is_err() {
                    return Err(RegisterError::InvalidCacheControl);
                }
                Some(value)
            }
            _ => None,
        };

        let encodings = if options.encodings.is_empty() {
            DEFAULT_ENCODING_ORDER.to_vec()
        } else {
            normalize_encoding_order(&options.encodings)?
        };

        Ok(Self {
            index_file,
            cache_control,
            encodings,
        })
    }
}

/// Normalizes the route prefix: trims, requires it non-empty and
/// wildcard-free, roots it, and lexically cleans it.
pub(crate) fn normalize_route_prefix(prefix: &str) -> Result<String, RegisterError> {
    let prefix = prefix.trim();
    if prefix.is_empty() {
        return Err(RegisterError::EmptyPrefix);
    }
    if prefix.contains('*') {
        return Err(RegisterError::WildcardPrefix);
    }

    let rooted = if prefix.starts_with('/') {
        prefix.to_string()
    } else {
        format!("/{prefix}")
    };

    Ok(clean_url_path(&rooted))
}
