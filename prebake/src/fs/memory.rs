use std::collections::BTreeMap;
use std::io;

use bytes::Bytes;

use super::ReadOnlyFs;

/// In-memory file tree keyed by forward-slash relative paths.
///
/// This is the embedded counterpart of [`DiskFs`](super::DiskFs): bundles
/// produced by `include_bytes!` or generated at build time are collected here
/// and handed to registration.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    files: BTreeMap<String, Bytes>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the tree with `path` added.
    pub fn with_file(mut self, path: impl Into<String>, contents: impl Into<Bytes>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ReadOnlyFs for MemoryFs {
    fn sub(&self, dir: &str) -> io::Result<Box<dyn ReadOnlyFs>> {
        if dir.is_empty() || dir == "." {
            return Ok(Box::new(self.clone()));
        }

        let prefix = format!("{}/", dir.trim_end_matches('/'));
        let files: BTreeMap<String, Bytes> = self
            .files
            .iter()
            .filter_map(|(path, contents)| {
                path.strip_prefix(&prefix)
                    .map(|rel| (rel.to_string(), contents.clone()))
            })
            .collect();

        if files.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {dir}"),
            ));
        }

        Ok(Box::new(Self { files }))
    }

    fn walk_files(&self) -> io::Result<Vec<String>> {
        // BTreeMap iteration is already sorted, hence deterministic.
        Ok(self.files.keys().cloned().collect())
    }

    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        self.files.get(path).map(|contents| contents.to_vec()).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file: {path}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> MemoryFs {
        MemoryFs::new()
            .with_file("a.txt", "alpha")
            .with_file("static/b.txt", "beta")
            .with_file("static/docs/c.txt", "gamma")
    }

    #[test]
    fn walk_lists_files_in_sorted_order() {
        let fs = tree();

        let files = fs.walk_files().unwrap();

        assert_eq!(files, vec!["a.txt", "static/b.txt", "static/docs/c.txt"]);
    }

    #[test]
    fn sub_scopes_to_a_directory() {
        let fs = tree();

        let sub = fs.sub("static").unwrap();

        assert_eq!(sub.walk_files().unwrap(), vec!["b.txt", "docs/c.txt"]);
        assert_eq!(sub.read_file("b.txt").unwrap(), b"beta");
    }

    #[test]
    fn sub_of_dot_is_the_whole_tree() {
        let fs = tree();

        let sub = fs.sub(".").unwrap();

        assert_eq!(sub.walk_files().unwrap().len(), 3);
    }

    #[test]
    fn sub_of_missing_directory_fails() {
        let fs = tree();

        let err = fs.sub("missing").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn read_of_missing_file_fails() {
        let fs = tree();

        let err = fs.read_file("nope.txt").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
