use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors. Any of these ends the run.
#[derive(Error, Debug)]
pub enum ListError {
    #[error("cannot determine working directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("cannot read directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot stat {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("cannot write listing: {0}")]
    Output(#[source] io::Error),
}
