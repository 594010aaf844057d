use std::io::{self, Read};

use prebake::Coding;

/// Decompresses a response body according to its negotiated coding, so tests
/// can assert the round trip back to the raw fixture bytes.
pub fn decompress(coding: Option<Coding>, data: &[u8]) -> io::Result<Vec<u8>> {
    match coding {
        None | Some(Coding::Identity) => Ok(data.to_vec()),
        Some(Coding::Gzip) => {
            let mut out = Vec::new();
            flate2::bufread::GzDecoder::new(data).read_to_end(&mut out)?;
            Ok(out)
        }
        Some(Coding::Deflate) => {
            let mut out = Vec::new();
            flate2::bufread::DeflateDecoder::new(data).read_to_end(&mut out)?;
            Ok(out)
        }
        Some(Coding::Brotli) => {
            let mut out = Vec::new();
            brotli::Decompressor::new(data, 4096).read_to_end(&mut out)?;
            Ok(out)
        }
        Some(Coding::Zstd) => zstd::decode_all(data),
    }
}
