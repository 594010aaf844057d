use std::io;

use crate::coding::Coding;

/// Failure during static-asset registration. Nothing is installed on the
/// router when registration fails.
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("prefix cannot be empty")]
    EmptyPrefix,

    #[error("prefix cannot contain wildcard")]
    WildcardPrefix,

    #[error("unsupported encoding {0:?}")]
    UnsupportedEncoding(String),

    #[error("encodings cannot be empty")]
    EmptyEncodings,

    #[error("cache-control value contains invalid characters")]
    InvalidCacheControl,

    #[error("failed to create zstd encoder: {0}")]
    ZstdEncoder(#[source] io::Error),

    #[error("failed to open static directory {dir:?}: {source}")]
    SourceOpen {
        dir: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to preload static assets: {0}")]
    Preload(#[source] PreloadError),

    #[error("no static files found")]
    EmptyCatalog,
}

/// Cause of a preload failure: walking, reading, or compressing a file.
#[derive(Debug, thiserror::Error)]
pub enum PreloadError {
    #[error("failed to compress {file:?} with {coding}: {source}")]
    Compress {
        file: String,
        coding: Coding,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
