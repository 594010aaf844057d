use std::io;
use std::path::PathBuf;

use walkdir::WalkDir;

use super::ReadOnlyFs;

/// Directory-backed source tree. All reads happen during the preload pass;
/// the serving path never goes back to disk.
#[derive(Debug, Clone)]
pub struct DiskFs {
    root: PathBuf,
}

impl DiskFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ReadOnlyFs for DiskFs {
    fn sub(&self, dir: &str) -> io::Result<Box<dyn ReadOnlyFs>> {
        if dir.is_empty() || dir == "." {
            return Ok(Box::new(self.clone()));
        }

        let root = self.root.join(dir);
        if !root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", root.display()),
            ));
        }

        Ok(Box::new(Self { root }))
    }

    fn walk_files(&self) -> io::Result<Vec<String>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(io::Error::other)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .map_err(io::Error::other)?;
            files.push(relative.to_string_lossy().into_owned());
        }

        files.sort();
        Ok(files)
    }

    fn read_file(&self, path: &str) -> io::Result<Vec<u8>> {
        std::fs::read(self.root.join(path))
    }
}
