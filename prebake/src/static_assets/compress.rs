use std::io::{self, Write};

use flate2::write::{DeflateEncoder, GzEncoder};
use flate2::Compression;

use crate::coding::Coding;
use crate::error::RegisterError;

// Size-optimized profiles throughout: compression runs once at registration,
// so latency is irrelevant.
const BROTLI_QUALITY: i32 = 11;
const BROTLI_LG_WINDOW: i32 = 22;
const ZSTD_LEVEL: i32 = 19;

/// Compressor table for one preload pass. The zstd encoder is created once
/// and reused across files; dropping the table releases it.
pub(crate) struct Compressors {
    zstd: Option<zstd::bulk::Compressor<'static>>,
}

impl Compressors {
    pub(crate) fn new(encodings: &[Coding]) -> Result<Self, RegisterError> {
        let zstd = if encodings.contains(&Coding::Zstd) {
            Some(zstd::bulk::Compressor::new(ZSTD_LEVEL).map_err(RegisterError::ZstdEncoder)?)
        } else {
            None
        };

        Ok(Self { zstd })
    }

    pub(crate) fn compress(&mut self, coding: Coding, raw: &[u8]) -> io::Result<Vec<u8>> {
        match coding {
            Coding::Identity => Err(io::Error::other("identity has no compressor")),
            Coding::Gzip => compress_gzip(raw),
            Coding::Deflate => compress_deflate(raw),
            Coding::Brotli => compress_brotli(raw),
            Coding::Zstd => match self.zstd.as_mut() {
                Some(encoder) => encoder.compress(raw),
                None => Err(io::Error::other("zstd encoder was not prepared")),
            },
        }
    }
}

fn compress_gzip(raw: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::with_capacity(raw.len()), Compression::best());
    encoder.write_all(raw)?;
    encoder.finish()
}

// Raw deflate, not zlib-wrapped: that is what clients expect after
// `Content-Encoding: deflate` in practice.
fn compress_deflate(raw: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::with_capacity(raw.len()), Compression::best());
    encoder.write_all(raw)?;
    encoder.finish()
}

fn compress_brotli(raw: &[u8]) -> io::Result<Vec<u8>> {
    let params = brotli::enc::BrotliEncoderParams {
        quality: BROTLI_QUALITY,
        lgwin: BROTLI_LG_WINDOW,
        ..Default::default()
    };
    let mut output = Vec::with_capacity(raw.len());
    brotli::enc::BrotliCompress(&mut io::Cursor::new(raw), &mut output, &params)?;
    Ok(output)
}
