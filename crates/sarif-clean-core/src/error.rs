use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions for a clean operation.
///
/// The transform itself never fails; only locating, reading, parsing and
/// writing documents can.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse JSON in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize cleaned document")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
