use super::{EntryKind, FileSystem};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    File(Vec<u8>),
    Dir,
}

/// In-memory [`FileSystem`] for tests.
///
/// Paths are taken literally (no normalisation), so callers should stick to
/// absolute, clean paths such as `/work/demo`.
#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
    denied: RefCell<Option<PathBuf>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories
    pub fn with_file(self, path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.insert_dirs(parent);
        }
        self.nodes
            .borrow_mut()
            .insert(path.to_path_buf(), Node::File(contents.as_ref().to_vec()));
        self
    }

    /// Add an empty directory, creating its parents
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.insert_dirs(path.as_ref());
        self
    }

    /// Make every mutation at or below `path` fail with `PermissionDenied`
    pub fn deny_writes(&self, path: impl Into<PathBuf>) {
        *self.denied.borrow_mut() = Some(path.into());
    }

    /// Contents of the file at `path`, if there is one
    pub fn file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.nodes.borrow().get(path.as_ref()) {
            Some(Node::File(bytes)) => Some(bytes.clone()),
            _ => None,
        }
    }

    /// Every path strictly below `root`, relative to it, in sorted order
    pub fn paths_under(&self, root: impl AsRef<Path>) -> Vec<PathBuf> {
        let root = root.as_ref();
        self.nodes
            .borrow()
            .keys()
            .filter(|p| p.as_path() != root)
            .filter_map(|p| p.strip_prefix(root).ok().map(Path::to_path_buf))
            .collect()
    }

    fn insert_dirs(&self, path: &Path) {
        let mut nodes = self.nodes.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
        }
    }

    fn check_writable(&self, path: &Path) -> io::Result<()> {
        match self.denied.borrow().as_deref() {
            Some(denied) if path.starts_with(denied) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("write denied: {}", path.display()),
            )),
            _ => Ok(()),
        }
    }

    fn require_parent_dir(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                match self.nodes.borrow().get(parent) {
                    Some(Node::Dir) => Ok(()),
                    Some(Node::File(_)) => Err(not_a_directory(parent)),
                    None => Err(not_found(parent)),
                }
            }
            _ => Ok(()),
        }
    }
}

impl FileSystem for MemoryFs {
    fn kind(&self, path: &Path) -> io::Result<EntryKind> {
        match self.nodes.borrow().get(path) {
            Some(Node::File(_)) => Ok(EntryKind::File),
            Some(Node::Dir) => Ok(EntryKind::Dir),
            None => Err(not_found(path)),
        }
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let nodes = self.nodes.borrow();
        match nodes.get(path) {
            Some(Node::Dir) => {}
            Some(Node::File(_)) => return Err(not_a_directory(path)),
            None => return Err(not_found(path)),
        }

        Ok(nodes
            .keys()
            .filter(|p| p.parent() == Some(path))
            .filter_map(|p| p.file_name().map(|n| n.to_os_string()))
            .collect())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.check_writable(path)?;
        for ancestor in path.ancestors() {
            if let Some(Node::File(_)) = self.nodes.borrow().get(ancestor) {
                return Err(not_a_directory(ancestor));
            }
        }
        self.insert_dirs(path);
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        let bytes = match self.nodes.borrow().get(from) {
            Some(Node::File(bytes)) => bytes.clone(),
            Some(Node::Dir) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("is a directory: {}", from.display()),
                ))
            }
            None => return Err(not_found(from)),
        };
        self.write(to, &bytes)
    }

    fn remove_all(&self, path: &Path) -> io::Result<()> {
        self.check_writable(path)?;
        self.nodes.borrow_mut().retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        match self.nodes.borrow().get(path) {
            Some(Node::File(bytes)) => String::from_utf8(bytes.clone())
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            Some(Node::Dir) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("is a directory: {}", path.display()),
            )),
            None => Err(not_found(path)),
        }
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        self.check_writable(path)?;
        self.require_parent_dir(path)?;
        let mut nodes = self.nodes.borrow_mut();
        if let Some(Node::Dir) = nodes.get(path) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("is a directory: {}", path.display()),
            ));
        }
        nodes.insert(path.to_path_buf(), Node::File(contents.to_vec()));
        Ok(())
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such file or directory: {}", path.display()),
    )
}

fn not_a_directory(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::Other,
        format!("not a directory: {}", path.display()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_file_creates_parents() {
        let fs = MemoryFs::new().with_file("/t/a/b.txt", "hi");
        assert!(fs.is_dir(Path::new("/t/a")));
        assert!(fs.is_dir(Path::new("/t")));
        assert_eq!(fs.read_to_string(Path::new("/t/a/b.txt")).unwrap(), "hi");
    }

    #[test]
    fn test_write_requires_parent() {
        let fs = MemoryFs::new().with_dir("/t");
        let err = fs.write(Path::new("/t/missing/x"), b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_remove_all_is_component_wise() {
        let fs = MemoryFs::new()
            .with_file("/t/app/x", "x")
            .with_file("/t/apple", "y");
        fs.remove_all(Path::new("/t/app")).unwrap();
        assert!(!fs.exists(Path::new("/t/app/x")));
        assert!(fs.exists(Path::new("/t/apple")));
    }

    #[test]
    fn test_denied_writes() {
        let fs = MemoryFs::new().with_dir("/t");
        fs.deny_writes("/t");
        let err = fs.write(Path::new("/t/x"), b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
    }
}
