use prebake::MemoryFs;

pub const HELLO_BODY: &str = "Hello from embedded static file.\n";
pub const ROOT_INDEX_BODY: &str = "<h1>root index</h1>\n";
pub const DOCS_INDEX_BODY: &str = "<h1>docs index</h1>\n";

/// Highly compressible text, long enough that every codec beats identity.
pub fn repeat_body() -> String {
    "Hello from embedded static file. This line repeats and repeats.\n".repeat(64)
}

/// The embedded source tree shared by the serving tests: a tiny greeting
/// whose compressed forms are all larger than the raw bytes, a compressible
/// file, and index files at the root and under `docs/`.
pub fn fixture_fs() -> MemoryFs {
    MemoryFs::new()
        .with_file("static/hello.txt", HELLO_BODY)
        .with_file("static/repeat.txt", repeat_body())
        .with_file("static/index.html", ROOT_INDEX_BODY)
        .with_file("static/docs/index.html", DOCS_INDEX_BODY)
}
