/// Resolves the media type for a file: extension lookup first, first-bytes
/// sniffing when the extension is unknown. Never returns an empty string.
pub(crate) fn media_type_for(path: &str, raw: &[u8]) -> String {
    if let Some(mime) = mime_guess::from_path(path).first() {
        return mime.to_string();
    }
    sniff_content_type(raw).to_string()
}

/// Minimal content sniffing for extensionless files: a handful of magic
/// numbers, an HTML check, then a text/binary split.
pub(crate) fn sniff_content_type(raw: &[u8]) -> &'static str {
    const SIGNATURES: [(&[u8], &str); 9] = [
        (b"\x89PNG\r\n\x1a\n", "image/png"),
        (b"\xff\xd8\xff", "image/jpeg"),
        (b"GIF87a", "image/gif"),
        (b"GIF89a", "image/gif"),
        (b"%PDF-", "application/pdf"),
        (b"\x1f\x8b\x08", "application/x-gzip"),
        (b"PK\x03\x04", "application/zip"),
        (b"wOFF", "font/woff"),
        (b"wOF2", "font/woff2"),
    ];

    for (magic, content_type) in SIGNATURES {
        if raw.starts_with(magic) {
            return content_type;
        }
    }

    let body = raw.strip_prefix(b"\xef\xbb\xbf").unwrap_or(raw);
    let start = body
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(body.len());
    let body = &body[start..];
    if starts_with_ignore_case(body, b"<!doctype html")
        || starts_with_ignore_case(body, b"<html")
        || starts_with_ignore_case(body, b"<head")
        || starts_with_ignore_case(body, b"<body")
    {
        return "text/html; charset=utf-8";
    }

    let prefix = &raw[..raw.len().min(512)];
    match std::str::from_utf8(prefix) {
        Ok(_) => "text/plain; charset=utf-8",
        // A multi-byte character cut off by the 512-byte window is still text.
        Err(err) if err.error_len().is_none() => "text/plain; charset=utf-8",
        Err(_) => "application/octet-stream",
    }
}

fn starts_with_ignore_case(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.len() >= needle.len() && haystack[..needle.len()].eq_ignore_ascii_case(needle)
}
