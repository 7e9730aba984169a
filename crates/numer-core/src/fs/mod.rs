//! Filesystem access behind a small trait
//!
//! The tree walks in [`merge`] only ever touch one path at a time through
//! [`FileSystem`], so they run the same against the real disk ([`NativeFs`])
//! and against the in-memory fake used by tests ([`MemoryFs`]).

mod memory;
pub mod merge;
mod native;

use std::ffi::OsString;
use std::io;
use std::path::Path;

pub use memory::MemoryFs;
pub use merge::{clear_directory, copy_tree, is_empty};
pub use native::NativeFs;

/// What a path points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Sockets, devices, dangling links and the like
    Other,
}

/// Operations on a single path
pub trait FileSystem {
    /// Kind of the entry at `path`, following symlinks
    fn kind(&self, path: &Path) -> io::Result<EntryKind>;

    /// Names of the direct children of `path`, sorted
    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Create `path` and any missing parents; existing directories are fine
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Copy a regular file's bytes, overwriting `to`
    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Remove `path` recursively. A missing path is not an error.
    fn remove_all(&self, path: &Path) -> io::Result<()>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool {
        self.kind(path).is_ok()
    }

    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.kind(path), Ok(EntryKind::Dir))
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn kind(&self, path: &Path) -> io::Result<EntryKind> {
        (**self).kind(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        (**self).read_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).copy_file(from, to)
    }

    fn remove_all(&self, path: &Path) -> io::Result<()> {
        (**self).remove_all(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        (**self).write(path, contents)
    }
}
