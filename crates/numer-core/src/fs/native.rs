use super::{EntryKind, FileSystem};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

/// [`FileSystem`] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeFs;

impl FileSystem for NativeFs {
    fn kind(&self, path: &Path) -> io::Result<EntryKind> {
        let meta = match fs::metadata(path) {
            Ok(meta) => meta,
            // Dangling symlink: the link exists, its target does not
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                fs::symlink_metadata(path)?;
                return Ok(EntryKind::Other);
            }
            Err(err) => return Err(err),
        };

        Ok(if meta.is_dir() {
            EntryKind::Dir
        } else if meta.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        })
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut names = fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::copy(from, to).map(|_| ())
    }

    fn remove_all(&self, path: &Path) -> io::Result<()> {
        // Do not follow links: removing a link must not touch its target
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(err) => return Err(err),
        };

        let result = if meta.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };

        match result {
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}
