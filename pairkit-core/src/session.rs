use crate::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Explicit editing-session state.
///
/// The original tool kept the selected folder and the open caption file in
/// ambient application state; here they are a value passed into each
/// operation. The rename engine updates `current_file` when the open caption
/// is among the renamed files, so the caller's editing session stays valid
/// across a batch rename.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Session {
    root: Option<PathBuf>,
    current_file: Option<PathBuf>,
}

impl Session {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            current_file: None,
        }
    }

    pub fn with_current_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.current_file = Some(file.into());
        self
    }

    /// The selected folder, or `NoFolderSelected`.
    pub fn root(&self) -> Result<&Path> {
        self.root.as_deref().ok_or(Error::NoFolderSelected)
    }

    /// The open caption file, or `NoFileSelected`.
    pub fn current_file(&self) -> Result<&Path> {
        self.current_file.as_deref().ok_or(Error::NoFileSelected)
    }

    /// Repoint `current_file` after a rename. Identity only; the caller is
    /// not expected to reload content.
    pub(crate) fn retarget_current_file(&mut self, from: &Path, to: &Path) {
        if self.current_file.as_deref() == Some(from) {
            self.current_file = Some(to.to_path_buf());
        }
    }
}
