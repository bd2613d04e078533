use std::path::Path;
use std::sync::Arc;

use crate::AppDataResult;

/* # Why is Fs a trait instead of a struct?

Code that reads and writes data files depends on the abstraction, not on a
concrete filesystem. MockFs implements Fs for fast, deterministic tests
without filesystem side effects, and without any global monkey-patching.
*/

/// Filesystem operations used by the data file accessor.
///
/// Implement this trait to provide custom filesystem behavior. Two
/// implementations are provided:
/// - `RealFs`: Uses the real filesystem via `std::fs`
/// - `MockFs`: In-memory implementation for testing
pub trait Fs: std::fmt::Debug + Send + Sync + 'static {
    /// Read the entire file at `path` into memory.
    fn read_file(&self, path: &Path) -> AppDataResult<Vec<u8>>;

    /// Write `contents` to the file at `path`, creating it if absent and
    /// fully replacing its content if present.
    fn write_file(&self, path: &Path, contents: &[u8]) -> AppDataResult<()>;

    /// Create a directory and all parent directories.
    /// Succeeds silently if the directory already exists.
    fn create_dir_all(&self, path: &Path) -> AppDataResult<()>;

    /// Probe `path` for accessibility. Returns `Ok(())` when the path is
    /// accessible and the underlying error otherwise. Used purely as an
    /// existence check, never to read content.
    fn probe(&self, path: &Path) -> AppDataResult<()>;

    /// Read entire file contents as a UTF-8 string.
    ///
    /// Convenience method with a default implementation: one underlying
    /// read, then UTF-8 validation.
    fn read_file_to_string(&self, path: &Path) -> AppDataResult<String> {
        let contents = self.read_file(path)?;
        String::from_utf8(contents)
            .map_err(|_e| crate::err!("File is not valid UTF-8: {}", path.display()))
    }
}

/* # Why use Arc<dyn Fs> with FsHandle?

Arc enables cheap cloning of the filesystem implementation so it can be
shared across accessors and threads. FsHandle wraps it for ergonomic Deref
access and Clone support, avoiding lifetime parameters throughout the
codebase.
*/

/// Handle to an `Fs` implementation, enabling shared ownership.
///
/// Internally wraps `Arc<dyn Fs>` for cheap cloning and thread-safe sharing.
///
/// # Examples
///
/// ```
/// use appdata::{FsHandle, RealFs};
///
/// let fs = FsHandle::new(RealFs::new());
/// let fs_clone = fs.clone(); // Cheap clone, shares the same implementation
/// ```
#[derive(Debug, Clone)]
pub struct FsHandle(Arc<dyn Fs>);

impl FsHandle {
    /// Create a new FsHandle from an Fs implementation.
    pub fn new(fs: impl Fs + 'static) -> Self {
        Self(Arc::new(fs))
    }
}

impl std::ops::Deref for FsHandle {
    type Target = dyn Fs;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
