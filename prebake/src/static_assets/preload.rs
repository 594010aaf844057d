use std::collections::HashMap;

use bytes::Bytes;
use tracing::debug;

use crate::coding::Coding;
use crate::error::{PreloadError, RegisterError};
use crate::fs::ReadOnlyFs;

use super::asset::{Catalog, StaticAsset};
use super::compress::Compressors;
use super::media_type::media_type_for;
use super::path::clean_url_path;

/// Walks `source` and builds the catalog of pre-compressed assets, keyed by
/// canonical URL path.
pub(crate) fn preload_assets(
    source: &dyn ReadOnlyFs,
    encodings: &[Coding],
) -> Result<Catalog, RegisterError> {
    let mut compressors = Compressors::new(encodings)?;

    let files = source
        .walk_files()
        .map_err(|err| RegisterError::Preload(PreloadError::Io(err)))?;

    let mut assets = Catalog::new();
    for file in files {
        let raw = source
            .read_file(&file)
            .map_err(|err| RegisterError::Preload(PreloadError::Io(err)))?;

        // OS-native separators collapse into URL slashes before cleaning.
        let key = clean_url_path(&file.replace('\\', "/"));

        let asset = build_asset(raw, &file, encodings, &mut compressors)?;
        debug!(
            key = %key,
            content_type = %asset.content_type,
            variants = asset.variants.len(),
            "preloaded static asset"
        );
        assets.insert(key, asset);
    }

    if assets.is_empty() {
        return Err(RegisterError::EmptyCatalog);
    }

    Ok(assets)
}

/// Builds every effective representation of one raw file.
fn build_asset(
    raw: Vec<u8>,
    file: &str,
    encodings: &[Coding],
    compressors: &mut Compressors,
) -> Result<StaticAsset, RegisterError> {
    let content_type = media_type_for(file, &raw);

    let mut variants = HashMap::with_capacity(encodings.len());
    for &coding in encodings {
        if coding == Coding::Identity {
            continue;
        }
        let compressed = compressors.compress(coding, &raw).map_err(|source| {
            RegisterError::Preload(PreloadError::Compress {
                file: file.to_string(),
                coding,
                source,
            })
        })?;
        // Effective-only policy: a representation that did not get smaller
        // is never offered.
        if compressed.len() >= raw.len() {
            continue;
        }
        variants.insert(coding, Bytes::from(compressed));
    }

    variants.insert(Coding::Identity, Bytes::from(raw));

    Ok(StaticAsset {
        content_type,
        variants,
    })
}
