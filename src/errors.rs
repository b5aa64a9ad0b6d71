//! Errors surfaced to the command-line driver.
//!
//! The search itself cannot fail: malformed positions decode leniently and
//! running out of time is an expected outcome. What remains is file I/O.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum JumpyError {
    /// The position file could not be opened or read.
    #[error("could not read board file {}: {source}", path.display())]
    ReadBoard { path: PathBuf, source: io::Error },

    /// The output file could not be created or written.
    #[error("could not write board file {}: {source}", path.display())]
    WriteBoard { path: PathBuf, source: io::Error },

    /// The position file holds no token at all.
    #[error("board file {} contains no position token", path.display())]
    MissingBoardToken { path: PathBuf },
}

pub type JumpyResult<T> = Result<T, JumpyError>;
