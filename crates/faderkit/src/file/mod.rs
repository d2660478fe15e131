//! Filesystem helpers.
//!
//! Directory listings for sample and preset browsers. All functions here do
//! blocking I/O and are meant to run outside the event loop.

mod directory;
mod error;

pub use directory::{common_prefix_len, directories, directory_contents};
pub use error::{FileError, FileErrorKind, FileResult};
