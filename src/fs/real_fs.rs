use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::AppDataError;
use crate::AppDataResult;

use super::traits::Fs;

/* # Why use std::fs instead of async or other crates?

std::fs is sufficient for whole-file operations of this size, requires no
runtime, and keeps the crate simple. Callers that need concurrency can share
the accessor across threads; all operations are stateless per call.
*/

/// Concrete `Fs` implementation using the real filesystem via `std::fs`.
///
/// Every operation opens, uses, and releases its own file handle; nothing is
/// held across calls.
#[derive(Debug, Default)]
pub struct RealFs;

impl RealFs {
    /// Create a new RealFs.
    pub fn new() -> Self {
        Self
    }
}

impl Fs for RealFs {
    #[instrument(skip_all, fields(path = %path.display()))]
    fn read_file(&self, path: &Path) -> AppDataResult<Vec<u8>> {
        debug!("reading file");
        let contents = fs::read(path).map_err(|e| {
            debug!(error = %e, "failed to read file");
            Box::new(AppDataError::file(path, e))
        })?;
        debug!(bytes = contents.len(), "file read successfully");
        Ok(contents)
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    fn write_file(&self, path: &Path, contents: &[u8]) -> AppDataResult<()> {
        debug!(bytes = contents.len(), "writing file");
        fs::write(path, contents).map_err(|e| {
            debug!(error = %e, "failed to write file");
            Box::new(AppDataError::file(path, e))
        })?;
        debug!("file written successfully");
        Ok(())
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    fn create_dir_all(&self, path: &Path) -> AppDataResult<()> {
        debug!("creating directory and parents");
        fs::create_dir_all(path).map_err(|e| {
            debug!(error = %e, "failed to create directory");
            Box::new(AppDataError::file(path, e))
        })?;
        debug!("directory created successfully");
        Ok(())
    }

    fn probe(&self, path: &Path) -> AppDataResult<()> {
        // metadata() is the std equivalent of an access(2) probe: it fails
        // for missing files and for permission errors without reading content.
        match fs::metadata(path) {
            Ok(_) => Ok(()),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "probe failed");
                Err(Box::new(AppDataError::file(path, e)))
            }
        }
    }
}
