//! Read-only source trees handed to registration.

mod disk;
mod memory;

pub use disk::DiskFs;
pub use memory::MemoryFs;

use std::io;

/// Source filesystem capability: open a subtree, enumerate regular files,
/// read one file in full. Implementations are only consulted during the
/// preload pass; the serving path never sees them.
pub trait ReadOnlyFs: Send + Sync + std::fmt::Debug {
    /// Opens a view rooted at `dir`. An empty `dir` or `"."` returns an
    /// equivalent view of the whole tree.
    fn sub(&self, dir: &str) -> io::Result<Box<dyn ReadOnlyFs>>;

    /// Relative paths of every regular file under the root, in a
    /// deterministic order.
    fn walk_files(&self) -> io::Result<Vec<String>>;

    /// Full contents of the file at `path`, relative to the root.
    fn read_file(&self, path: &str) -> io::Result<Vec<u8>>;
}
