//! Export location state.

use std::path::{Path, PathBuf};

/// Remembers where artifacts were saved.
///
/// Only `last_save_dir` survives restarts (via the settings coordinator).
#[derive(Debug, Clone, Default)]
pub struct ExportState {
    /// Directory of the most recent save
    last_save_dir: Option<PathBuf>,
    /// Full path of the most recent save in this session
    last_saved_file: Option<PathBuf>,
}

impl ExportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_last_dir(last_save_dir: Option<PathBuf>) -> Self {
        Self {
            last_save_dir,
            last_saved_file: None,
        }
    }

    pub fn last_save_dir(&self) -> Option<&Path> {
        self.last_save_dir.as_deref()
    }

    pub fn last_saved_file(&self) -> Option<&Path> {
        self.last_saved_file.as_deref()
    }

    /// Directory the save dialog should open in: the last used one, else the
    /// platform downloads directory.
    pub fn start_dir(&self) -> Option<PathBuf> {
        self.last_save_dir.clone().or_else(dirs::download_dir)
    }

    /// Records a successful save.
    pub fn record_save(&mut self, path: PathBuf) {
        tracing::info!(path = %path.display(), "artifact saved");
        self.last_save_dir = path.parent().map(Path::to_path_buf);
        self.last_saved_file = Some(path);
    }
}
