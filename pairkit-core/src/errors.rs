use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by pairkit operations.
///
/// Every operation fails synchronously with one of these kinds; nothing is
/// retried. Batch operations stop at the first `Io` failure and name the
/// file that failed.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not a readable directory: {}", .0.display())]
    InvalidDirectory(PathBuf),

    #[error("rename prefix is empty")]
    InvalidPrefix,

    #[error("no image files found in {}", .0.display())]
    NoImagesFound(PathBuf),

    #[error("trigger word is empty")]
    EmptyTrigger,

    #[error("no folder selected")]
    NoFolderSelected,

    #[error("no caption file selected")]
    NoFileSelected,

    #[error("refusing to overwrite {0}")]
    WouldOverwrite(String),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to convert {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
