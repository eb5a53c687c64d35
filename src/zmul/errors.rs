use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors that can occur while patching an image on disk.
#[derive(Error, Debug)]
pub enum PatchError {
    /// The image could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, #[source] source: io::Error },

    /// The patched image could not be written back.
    #[error("cannot write {}: {source}", .path.display())]
    Write { path: PathBuf, #[source] source: io::Error },
}
