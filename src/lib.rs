/* # What is appdata?

appdata resolves caller-supplied file paths against an application data
directory and performs read, write, and existence checks against the
resolved path. Filesystem access goes through an injectable trait so code
using the accessor can be tested without touching a real disk.
*/

pub mod accessor;
pub mod config;
pub mod error;
pub mod fs;
pub mod tracing;

// Re-export commonly used types for convenience
pub use accessor::DataFileAccessor;
pub use config::{Config, load_config};
pub use error::{AppDataError, AppDataResult, ResultExt};
pub use fs::{Fs, FsHandle, MockFs, RealFs};
