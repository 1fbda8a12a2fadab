use std::path::PathBuf;

use thiserror::Error;

use crate::vex::transform::FieldRef;

#[derive(Debug, Error)]
pub enum VexError {
    #[error("error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error parsing JSON in {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("error formatting {field} in {}: {source}", .path.display())]
    Timestamp {
        path: PathBuf,
        field: FieldRef,
        source: time::error::Parse,
    },

    #[error("error serializing JSON for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("error writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type VexResult<T> = Result<T, VexError>;
