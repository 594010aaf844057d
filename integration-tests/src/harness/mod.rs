mod codec;
mod fixture;
mod router;

pub use codec::decompress;
pub use fixture::{fixture_fs, repeat_body, DOCS_INDEX_BODY, HELLO_BODY, ROOT_INDEX_BODY};
pub use router::{TestResponse, TestRouter};
