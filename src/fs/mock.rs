use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::AppDataError;
use crate::AppDataResult;

use super::traits::Fs;

/* # Why use HashMap storage for MockFs?

MockFs keeps file contents in memory behind Arc<Mutex<T>>:
- no filesystem I/O, so tests are fast and deterministic
- no side effects on the real filesystem
- thread-safe, so tests can run concurrently

On top of storage, MockFs records every call it receives and supports error
injection, so tests can assert exactly which primitives an operation invoked,
in which order, with which arguments.
*/

/// A single recorded filesystem call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsCall {
    Read(PathBuf),
    Write(PathBuf, Vec<u8>),
    CreateDirAll(PathBuf),
    Probe(PathBuf),
}

/// In-memory `Fs` implementation for testing.
///
/// Stores file contents in a HashMap and supports all Fs operations without
/// touching the real filesystem.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use appdata::{Fs, MockFs};
///
/// let mock = MockFs::new();
/// mock.add_file("test.txt", b"content".to_vec());
/// let content = mock.read_file_to_string(Path::new("test.txt")).unwrap();
/// assert_eq!(content, "content");
/// ```
#[derive(Debug, Clone)]
pub struct MockFs {
    files: Arc<Mutex<HashMap<PathBuf, Vec<u8>>>>,
    directories: Arc<Mutex<HashSet<PathBuf>>>,
    calls: Arc<Mutex<Vec<FsCall>>>,
    read_error: Arc<Mutex<Option<io::ErrorKind>>>,
    write_error: Arc<Mutex<Option<io::ErrorKind>>>,
    dir_error: Arc<Mutex<Option<io::ErrorKind>>>,
    probe_error: Arc<Mutex<Option<io::ErrorKind>>>,
}

impl MockFs {
    /// Create a new empty MockFs.
    pub fn new() -> Self {
        Self {
            files: Arc::new(Mutex::new(HashMap::new())),
            directories: Arc::new(Mutex::new(HashSet::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            read_error: Arc::new(Mutex::new(None)),
            write_error: Arc::new(Mutex::new(None)),
            dir_error: Arc::new(Mutex::new(None)),
            probe_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a file to the mock storage.
    pub fn add_file(&self, path: impl Into<PathBuf>, contents: Vec<u8>) {
        self.files.lock().unwrap().insert(path.into(), contents);
    }

    /// Add a directory to the mock storage.
    pub fn add_directory(&self, path: impl Into<PathBuf>) {
        self.directories.lock().unwrap().insert(path.into());
    }

    /// Returns the contents of a stored file, if present.
    pub fn file_contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    /// Returns `true` if a directory was created at `path`.
    pub fn has_directory(&self, path: impl AsRef<Path>) -> bool {
        self.directories.lock().unwrap().contains(path.as_ref())
    }

    /// Make every subsequent read fail with the given io error kind.
    pub fn fail_reads_with(&self, kind: io::ErrorKind) {
        *self.read_error.lock().unwrap() = Some(kind);
    }

    /// Make every subsequent write fail with the given io error kind.
    pub fn fail_writes_with(&self, kind: io::ErrorKind) {
        *self.write_error.lock().unwrap() = Some(kind);
    }

    /// Make every subsequent directory creation fail with the given io error kind.
    pub fn fail_dir_creation_with(&self, kind: io::ErrorKind) {
        *self.dir_error.lock().unwrap() = Some(kind);
    }

    /// Make every subsequent probe fail with the given io error kind.
    pub fn fail_probes_with(&self, kind: io::ErrorKind) {
        *self.probe_error.lock().unwrap() = Some(kind);
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<FsCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Paths of all reads received so far, in order.
    pub fn read_calls(&self) -> Vec<PathBuf> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                FsCall::Read(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// Path and contents of all writes received so far, in order.
    pub fn write_calls(&self) -> Vec<(PathBuf, Vec<u8>)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                FsCall::Write(p, contents) => Some((p, contents)),
                _ => None,
            })
            .collect()
    }

    /// Paths of all directory creations received so far, in order.
    pub fn dir_calls(&self) -> Vec<PathBuf> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                FsCall::CreateDirAll(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// Paths of all probes received so far, in order.
    pub fn probe_calls(&self) -> Vec<PathBuf> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                FsCall::Probe(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: FsCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn injected(slot: &Mutex<Option<io::ErrorKind>>, path: &Path) -> Option<Box<AppDataError>> {
        slot.lock().unwrap().map(|kind| {
            Box::new(AppDataError::file(
                path,
                io::Error::new(kind, "injected error"),
            ))
        })
    }
}

impl Default for MockFs {
    fn default() -> Self {
        Self::new()
    }
}

impl Fs for MockFs {
    fn read_file(&self, path: &Path) -> AppDataResult<Vec<u8>> {
        self.record(FsCall::Read(path.to_path_buf()));
        if let Some(err) = Self::injected(&self.read_error, path) {
            return Err(err);
        }
        let files = self.files.lock().unwrap();
        files.get(path).cloned().ok_or_else(|| {
            Box::new(AppDataError::file(
                path,
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("File not found: {}", path.display()),
                ),
            ))
        })
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> AppDataResult<()> {
        self.record(FsCall::Write(path.to_path_buf(), contents.to_vec()));
        if let Some(err) = Self::injected(&self.write_error, path) {
            return Err(err);
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> AppDataResult<()> {
        self.record(FsCall::CreateDirAll(path.to_path_buf()));
        if let Some(err) = Self::injected(&self.dir_error, path) {
            return Err(err);
        }
        self.directories.lock().unwrap().insert(path.to_path_buf());
        Ok(())
    }

    fn probe(&self, path: &Path) -> AppDataResult<()> {
        self.record(FsCall::Probe(path.to_path_buf()));
        if let Some(err) = Self::injected(&self.probe_error, path) {
            return Err(err);
        }
        let known = self.files.lock().unwrap().contains_key(path)
            || self.directories.lock().unwrap().contains(path);
        if known {
            Ok(())
        } else {
            Err(Box::new(AppDataError::file(
                path,
                io::Error::new(io::ErrorKind::NotFound, "file not found"),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_file() {
        let mock = MockFs::new();
        let contents = b"hello world".to_vec();
        mock.add_file("test.txt", contents.clone());

        let result = mock.read_file(Path::new("test.txt")).unwrap();
        assert_eq!(result, contents);
    }

    #[test]
    fn test_read_file_not_found() {
        let mock = MockFs::new();

        let err = mock.read_file(Path::new("nonexistent.txt")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_write_file_stores_contents() {
        let mock = MockFs::new();

        mock.write_file(Path::new("new.txt"), b"test content").unwrap();

        assert_eq!(mock.file_contents("new.txt").unwrap(), b"test content");
    }

    #[test]
    fn test_write_file_replaces_contents() {
        let mock = MockFs::new();
        mock.add_file("existing.txt", b"old".to_vec());

        mock.write_file(Path::new("existing.txt"), b"new").unwrap();

        assert_eq!(mock.file_contents("existing.txt").unwrap(), b"new");
    }

    #[test]
    fn test_create_dir_all() {
        let mock = MockFs::new();

        mock.create_dir_all(Path::new("a/b/c")).unwrap();

        assert!(mock.has_directory("a/b/c"));
    }

    #[test]
    fn test_probe_known_file() {
        let mock = MockFs::new();
        mock.add_file("test.txt", b"content".to_vec());

        assert!(mock.probe(Path::new("test.txt")).is_ok());
    }

    #[test]
    fn test_probe_unknown_path() {
        let mock = MockFs::new();

        let err = mock.probe(Path::new("missing.txt")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_calls_are_recorded_in_order() {
        let mock = MockFs::new();
        mock.add_file("a.txt", b"a".to_vec());

        mock.read_file(Path::new("a.txt")).unwrap();
        mock.create_dir_all(Path::new("dir")).unwrap();
        mock.write_file(Path::new("dir/b.txt"), b"b").unwrap();
        let _ = mock.probe(Path::new("dir/b.txt"));

        assert_eq!(
            mock.calls(),
            vec![
                FsCall::Read(PathBuf::from("a.txt")),
                FsCall::CreateDirAll(PathBuf::from("dir")),
                FsCall::Write(PathBuf::from("dir/b.txt"), b"b".to_vec()),
                FsCall::Probe(PathBuf::from("dir/b.txt")),
            ]
        );
    }

    #[test]
    fn test_injected_read_error() {
        let mock = MockFs::new();
        mock.add_file("test.txt", b"content".to_vec());
        mock.fail_reads_with(io::ErrorKind::PermissionDenied);

        let err = mock.read_file(Path::new("test.txt")).unwrap_err();
        assert!(err.is_permission_denied());
    }

    #[test]
    fn test_injected_write_error() {
        let mock = MockFs::new();
        mock.fail_writes_with(io::ErrorKind::PermissionDenied);

        let err = mock.write_file(Path::new("test.txt"), b"x").unwrap_err();
        assert!(err.is_permission_denied());
        // The failed write must not have stored anything.
        assert!(mock.file_contents("test.txt").is_none());
    }

    #[test]
    fn test_injected_dir_error() {
        let mock = MockFs::new();
        mock.fail_dir_creation_with(io::ErrorKind::PermissionDenied);

        let err = mock.create_dir_all(Path::new("dir")).unwrap_err();
        assert!(err.is_permission_denied());
        assert!(!mock.has_directory("dir"));
    }

    #[test]
    fn test_injected_probe_error() {
        let mock = MockFs::new();
        mock.add_file("test.txt", b"content".to_vec());
        mock.fail_probes_with(io::ErrorKind::PermissionDenied);

        let err = mock.probe(Path::new("test.txt")).unwrap_err();
        assert!(err.is_permission_denied());
    }

    #[test]
    fn test_clone_shares_storage() {
        let mock = MockFs::new();
        let clone = mock.clone();
        clone.add_file("shared.txt", b"content".to_vec());

        assert!(mock.probe(Path::new("shared.txt")).is_ok());
    }

    #[test]
    fn test_multiple_files() {
        let mock = MockFs::new();
        for i in 0..5 {
            mock.add_file(
                format!("file{}.txt", i),
                format!("content {}", i).into_bytes(),
            );
        }

        for i in 0..5 {
            let path = PathBuf::from(format!("file{}.txt", i));
            let content = mock.read_file_to_string(&path).unwrap();
            assert_eq!(content, format!("content {}", i));
        }
    }
}
