//! Directory checks, recursive copy and clearing

use super::{EntryKind, FileSystem};
use crate::error::{Result, ScaffoldError};
use std::path::Path;

/// Entry preserved by [`clear_directory`]
pub const VCS_DIR: &str = ".git";

/// True if the existing directory `dir` has no entries
pub fn is_empty<F: FileSystem>(fs: &F, dir: &Path) -> Result<bool> {
    let entries = fs
        .read_dir(dir)
        .map_err(|e| ScaffoldError::fs("read directory", dir, e))?;
    Ok(entries.is_empty())
}

/// Copy the file or directory at `src` to `dst`, recursively.
///
/// Directories are created (with parents) before their children are copied.
/// Entries that are neither files nor directories are skipped with a warning.
pub fn copy_tree<F: FileSystem>(fs: &F, src: &Path, dst: &Path) -> Result<()> {
    let kind = fs
        .kind(src)
        .map_err(|e| ScaffoldError::fs("inspect", src, e))?;

    match kind {
        EntryKind::Dir => {
            fs.create_dir_all(dst)
                .map_err(|e| ScaffoldError::fs("create directory", dst, e))?;
            let children = fs
                .read_dir(src)
                .map_err(|e| ScaffoldError::fs("read directory", src, e))?;
            for name in children {
                copy_tree(fs, &src.join(&name), &dst.join(&name))?;
            }
        }
        EntryKind::File => {
            tracing::debug!(from = %src.display(), to = %dst.display(), "copy file");
            fs.copy_file(src, dst)
                .map_err(|e| ScaffoldError::fs("copy file to", dst, e))?;
        }
        EntryKind::Other => {
            tracing::warn!(path = %src.display(), "skipping entry that is not a file or directory");
        }
    }

    Ok(())
}

/// Remove everything inside `dir` except a top-level `.git`.
///
/// A missing `dir` is left alone.
pub fn clear_directory<F: FileSystem>(fs: &F, dir: &Path) -> Result<()> {
    if !fs.exists(dir) {
        return Ok(());
    }

    let entries = fs
        .read_dir(dir)
        .map_err(|e| ScaffoldError::fs("read directory", dir, e))?;

    for name in entries {
        if name == VCS_DIR {
            continue;
        }
        let path = dir.join(&name);
        tracing::debug!(path = %path.display(), "remove");
        fs.remove_all(&path)
            .map_err(|e| ScaffoldError::fs("remove", &path, e))?;
    }

    Ok(())
}
