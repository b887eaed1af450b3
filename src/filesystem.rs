//! Filesystem operations used by project generation.
//! Kept behind a trait so generation can run against an in-memory tree.

use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Filesystem operations needed to materialize a project.
pub trait Filesystem {
    /// Returns true if anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Creates a single directory, failing with `AlreadyExists` if present.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Writes `content` to `path`, replacing any previous file.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Copies the file at `source` to `dest` byte for byte.
    fn copy(&self, source: &Path, dest: &Path) -> io::Result<()>;
}

/// Filesystem backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        debug!("Creating directory: {}", path.display());
        fs::create_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        debug!("Writing file: {}", path.display());
        fs::write(path, content)
    }

    fn copy(&self, source: &Path, dest: &Path) -> io::Result<()> {
        debug!("Copying file: {} -> {}", source.display(), dest.display());
        fs::copy(source, dest).map(|_| ())
    }
}
