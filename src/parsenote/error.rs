use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed note document: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Malformed note document: {0}")]
    Encoding(String),

    #[error("Note is missing required field: {0}")]
    MissingField(&'static str),

    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NoteError>;
