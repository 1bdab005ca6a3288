//! Centralized application state for the converter window.
//!
//! The conversion workflow itself lives in [`wordconv::WorkflowState`]; this
//! struct composes it with the UI-only state components.

use crate::state::{ExportState, NoticeState, ThemeState};
use std::path::PathBuf;
use wordconv::WorkflowState;

/// Main application state composed of focused state components.
pub struct AppState {
    /// Upload → format → name → convert → download state machine
    pub workflow: WorkflowState,

    /// Theme and styling state
    pub theme: ThemeState,

    /// Where artifacts were and should be saved
    pub export: ExportState,

    /// Transient informational notices (e.g. rejected drops)
    pub notice: NoticeState,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            workflow: WorkflowState::new(),
            theme: ThemeState::new(),
            export: ExportState::new(),
            notice: NoticeState::new(),
            error_message: None,
        }
    }

    /// Creates an AppState with settings restored from storage.
    pub fn with_settings(theme_name: String, last_save_dir: Option<PathBuf>) -> Self {
        Self {
            workflow: WorkflowState::new(),
            theme: ThemeState::with_theme(theme_name),
            export: ExportState::with_last_dir(last_save_dir),
            notice: NoticeState::new(),
            error_message: None,
        }
    }

    /// Clears messages left over from a previous action.
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.notice.clear();
    }
}
