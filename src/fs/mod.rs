/* # What is the fs module?

A trait-based abstraction over the four filesystem primitives the data file
accessor depends on: whole-file read, whole-file write, recursive directory
creation, and an accessibility probe.

Two implementations are provided:
- RealFs: the real filesystem via std::fs
- MockFs: in-memory implementation for deterministic unit tests
*/

pub mod mock;
pub mod real_fs;
mod traits;

pub use mock::{FsCall, MockFs};
pub use real_fs::RealFs;
pub use traits::{Fs, FsHandle};
