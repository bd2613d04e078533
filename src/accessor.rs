/* # Why is the data root a constructor parameter?

Every operation resolves paths against one base directory, so the accessor
could read it from a process-wide global. Passing it explicitly instead keeps
the accessor free of global state and lets every test construct an isolated
accessor with its own root.
*/

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use crate::AppDataResult;
use crate::fs::FsHandle;

/// Resolves caller-supplied paths against an application data directory and
/// performs read, write, and existence checks against the resolved path.
///
/// Paths that are already absolute bypass the data root entirely; relative
/// paths are joined onto it. The accessor holds no state between calls —
/// the data root is immutable after construction and the filesystem handle
/// is shared, so concurrent use from multiple threads is safe.
///
/// # Examples
///
/// ```
/// use appdata::{DataFileAccessor, FsHandle, MockFs};
///
/// let fs = FsHandle::new(MockFs::new());
/// let accessor = DataFileAccessor::new("/app/data", fs);
///
/// accessor.write_data_file("networks/test.txt", b"test data").unwrap();
/// assert!(accessor.data_file_exists("networks/test.txt"));
/// let contents = accessor.read_data_file("networks/test.txt").unwrap();
/// assert_eq!(contents, b"test data");
/// ```
#[derive(Debug, Clone)]
pub struct DataFileAccessor {
    data_root: PathBuf,
    fs: FsHandle,
}

impl DataFileAccessor {
    /// Create an accessor rooted at `data_root`, performing all filesystem
    /// operations through `fs`.
    pub fn new(data_root: impl Into<PathBuf>, fs: FsHandle) -> Self {
        Self {
            data_root: data_root.into(),
            fs,
        }
    }

    /// The data root all relative paths are resolved against.
    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    /// Resolve a caller-supplied path to the absolute path an operation
    /// will act on.
    ///
    /// Absolute inputs are returned unchanged; relative inputs are joined
    /// onto the data root. Pure, no filesystem access, never fails.
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_root.join(path)
        }
    }

    /// Read the entire data file at `path` into memory.
    ///
    /// Issues exactly one underlying read, targeting the resolved path.
    /// Filesystem errors propagate to the caller untranslated — no retry,
    /// no fallback.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn read_data_file(&self, path: impl AsRef<Path>) -> AppDataResult<Vec<u8>> {
        let resolved = self.resolve_path(path);
        debug!(resolved = %resolved.display(), "reading data file");
        self.fs.read_file(&resolved)
    }

    /// Read the data file at `path` as a UTF-8 string.
    ///
    /// Same single-read contract as [`read_data_file`](Self::read_data_file),
    /// plus UTF-8 validation.
    pub fn read_data_file_to_string(&self, path: impl AsRef<Path>) -> AppDataResult<String> {
        let resolved = self.resolve_path(path);
        self.fs.read_file_to_string(&resolved)
    }

    /// Write `contents` to the data file at `path`, fully replacing any
    /// existing content.
    ///
    /// Missing ancestor directories of the resolved path are created first;
    /// directory creation is idempotent and always precedes the write.
    /// Failure of either step propagates the underlying filesystem error,
    /// with no partial-write cleanup.
    #[instrument(skip_all, fields(path = %path.as_ref().display(), bytes = contents.len()))]
    pub fn write_data_file(&self, path: impl AsRef<Path>, contents: &[u8]) -> AppDataResult<()> {
        let resolved = self.resolve_path(path);
        debug!(resolved = %resolved.display(), "writing data file");
        if let Some(parent) = resolved.parent() {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write_file(&resolved, contents)
    }

    /// Report whether a data file exists at `path`.
    ///
    /// Probes the filesystem at the resolved path. Any probe failure —
    /// missing file, permission denial, anything else — maps to `false`;
    /// this is the one operation that never surfaces an error, so callers
    /// cannot distinguish "does not exist" from "exists but inaccessible".
    pub fn data_file_exists(&self, path: impl AsRef<Path>) -> bool {
        let resolved = self.resolve_path(path);
        match self.fs.probe(&resolved) {
            Ok(()) => true,
            Err(e) => {
                debug!(resolved = %resolved.display(), error = %e, "probe failed, reporting absent");
                false
            }
        }
    }
}
