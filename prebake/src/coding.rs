//! Content coding registry: canonical wire names, aliases, and the server's
//! default preference order.

use std::fmt;

use crate::error::RegisterError;

/// A supported HTTP content coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coding {
    /// No transformation; the raw file bytes.
    Identity,
    Gzip,
    Deflate,
    Brotli,
    Zstd,
}

/// Default server preference order, descending by typical compression ratio
/// for text assets.
pub const DEFAULT_ENCODING_ORDER: [Coding; 5] = [
    Coding::Zstd,
    Coding::Brotli,
    Coding::Gzip,
    Coding::Deflate,
    Coding::Identity,
];

impl Coding {
    /// The canonical name used on the wire in `Content-Encoding`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Coding::Identity => "identity",
            Coding::Gzip => "gzip",
            Coding::Deflate => "deflate",
            Coding::Brotli => "br",
            Coding::Zstd => "zstd",
        }
    }

    /// Canonicalizes a coding name: trims, matches case-insensitively, and
    /// maps the legacy `x-gzip`/`x-deflate` aliases. Returns `None` for
    /// anything unrecognized; callers decide whether that is fatal (server
    /// configuration) or ignorable (client headers).
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("identity") {
            Some(Coding::Identity)
        } else if value.eq_ignore_ascii_case("gzip") || value.eq_ignore_ascii_case("x-gzip") {
            Some(Coding::Gzip)
        } else if value.eq_ignore_ascii_case("deflate") || value.eq_ignore_ascii_case("x-deflate") {
            Some(Coding::Deflate)
        } else if value.eq_ignore_ascii_case("br") {
            Some(Coding::Brotli)
        } else if value.eq_ignore_ascii_case("zstd") {
            Some(Coding::Zstd)
        } else {
            None
        }
    }
}

impl fmt::Display for Coding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalizes a user-supplied encoding order: canonicalizes every entry,
/// drops duplicates keeping the first occurrence, and appends `identity` at
/// the end when it was not listed. The result is never empty.
///
/// Idempotent: feeding the output back in yields the same order.
pub fn normalize_encoding_order<S: AsRef<str>>(encodings: &[S]) -> Result<Vec<Coding>, RegisterError> {
    let mut normalized = Vec::with_capacity(encodings.len() + 1);

    for raw in encodings {
        let coding = Coding::parse(raw.as_ref())
            .ok_or_else(|| RegisterError::UnsupportedEncoding(raw.as_ref().to_string()))?;
        if !normalized.contains(&coding) {
            normalized.push(coding);
        }
    }

    if normalized.is_empty() {
        return Err(RegisterError::EmptyEncodings);
    }
    if !normalized.contains(&Coding::Identity) {
        normalized.push(Coding::Identity);
    }

    Ok(normalized)
}
