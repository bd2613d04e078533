use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::AppDataResult;
use crate::accessor::DataFileAccessor;
use crate::err;
use crate::fs::FsHandle;

/// Configuration supplying the application data directory.
///
/// Loaded once at process start; the accessor treats the value as an opaque
/// constant thereafter.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Directory all relative data file paths are resolved against.
    pub data_root: PathBuf,
}

impl Config {
    /// Build a [`DataFileAccessor`] rooted at this configuration's data root.
    pub fn accessor(&self, fs: FsHandle) -> DataFileAccessor {
        DataFileAccessor::new(self.data_root.clone(), fs)
    }
}

/// Load configuration from a TOML file, read through the `Fs` abstraction.
///
/// # Arguments
/// * `fs` - Filesystem handle used to read the config file
/// * `path` - Path to the TOML configuration file
pub fn load_config(fs: &FsHandle, path: &Path) -> AppDataResult<Config> {
    let content = fs.read_file_to_string(path)?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| err!("Failed to parse config {}: {}", path.display(), e))?;

    if config.data_root.as_os_str().is_empty() {
        return Err(err!("data_root must not be empty in {}", path.display()));
    }

    debug!(data_root = %config.data_root.display(), "configuration loaded");
    Ok(config)
}
