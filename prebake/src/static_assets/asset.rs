use std::collections::HashMap;

use bytes::Bytes;

use crate::coding::Coding;

/// One logical file with every representation built at registration time.
///
/// The identity variant is always present and holds the raw file bytes;
/// every other variant is strictly smaller than identity. Variants are never
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct StaticAsset {
    pub(crate) content_type: String,
    pub(crate) variants: HashMap<Coding, Bytes>,
}

impl StaticAsset {
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn variant(&self, coding: Coding) -> Option<&Bytes> {
        self.variants.get(&coding)
    }

    /// Codings this asset can be served under.
    pub fn codings(&self) -> impl Iterator<Item = Coding> + '_ {
        self.variants.keys().copied()
    }
}

/// Canonical URL path to asset, built once and read-only thereafter.
pub(crate) type Catalog = HashMap<String, StaticAsset>;
