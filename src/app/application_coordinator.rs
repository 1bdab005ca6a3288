//! Application-level coordination and workflow management.
//!
//! Turns panel interactions into workflow events, launches the background
//! conversion when the workflow asks for it, and applies its result.

use crate::app::AppState;
use crate::io::{ArtifactSaver, AsyncConverter, ConversionResult};
use std::path::Path;
use wordconv::{OutputFormat, Outcome, Rejection, SourceDocument, WorkflowEvent};

/// Coordinates application-level operations and workflows.
///
/// This struct is responsible for:
/// - Feeding user actions into the workflow state machine
/// - Starting and abandoning the background conversion
/// - Saving finished artifacts
/// - Managing error and notice messages
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Selects a document from a filesystem path (file dialog or command line).
    pub fn open_source_path(state: &mut AppState, path: &Path) {
        match SourceDocument::from_path(path) {
            Ok(source) => Self::select_source(state, source),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "cannot open source document");
                state.error_message = Some(format!("Error opening document: {}", e));
            }
        }
    }

    /// Offers a candidate document to the workflow.
    ///
    /// Non-Word candidates leave the workflow untouched; a notice is shown instead.
    pub fn select_source(state: &mut AppState, source: SourceDocument) {
        match state.workflow.dispatch(WorkflowEvent::SelectFile(source)) {
            Outcome::Ignored(Rejection::UnsupportedFile(name)) => {
                state.notice.show(format!("Unsupported file type: {}", name));
            }
            Outcome::Ignored(_) => {}
            Outcome::Applied | Outcome::StartConversion => state.clear_messages(),
        }
    }

    /// Sets the output format.
    pub fn choose_format(state: &mut AppState, format: OutputFormat) {
        state.workflow.dispatch(WorkflowEvent::ChooseFormat(format));
    }

    /// Opens the naming step if a document and a format are chosen.
    pub fn request_conversion(state: &mut AppState) {
        state.workflow.dispatch(WorkflowEvent::RequestConversion);
    }

    /// Replaces the output base name.
    pub fn edit_name(state: &mut AppState, name: String) {
        state.workflow.dispatch(WorkflowEvent::EditName(name));
    }

    /// Closes the naming step without starting.
    pub fn cancel_naming(state: &mut AppState) {
        state.workflow.dispatch(WorkflowEvent::CancelNaming);
    }

    /// Confirms the output name and launches the background conversion.
    pub fn confirm_name(
        state: &mut AppState,
        converter: &mut AsyncConverter,
        name: String,
        ctx: &egui::Context,
    ) {
        if state.workflow.dispatch(WorkflowEvent::ConfirmName(name)) != Outcome::StartConversion {
            return;
        }

        match (state.workflow.selected_file(), state.workflow.output_format()) {
            (Some(source), Some(format)) => {
                converter.start(source.clone(), format, ctx);
                state.clear_messages();
            }
            _ => {
                state.workflow.dispatch(WorkflowEvent::ConversionFailed);
            }
        }
    }

    /// Checks for conversion completion and applies the result to the workflow.
    ///
    /// Called once per frame. Returns true if a conversion finished (success or error).
    pub fn check_conversion_completion(state: &mut AppState, converter: &mut AsyncConverter) -> bool {
        match converter.check_completion() {
            ConversionResult::Success(payload) => {
                state.workflow.dispatch(WorkflowEvent::ConversionFinished(payload));
                true
            }
            ConversionResult::Error(error_msg) => {
                tracing::error!(error = %error_msg, "conversion failed");
                state.workflow.dispatch(WorkflowEvent::ConversionFailed);
                state.error_message = Some(format!("Error converting document: {}", error_msg));
                true
            }
            ConversionResult::None => false,
        }
    }

    /// Saves the finished artifact through a save dialog.
    pub fn download(state: &mut AppState) {
        let Some(artifact) = state.workflow.download_artifact() else {
            return;
        };

        match ArtifactSaver::save_with_dialog(&artifact, state.export.start_dir()) {
            Ok(Some(path)) => {
                state.error_message = None;
                state.export.record_save(path);
            }
            Ok(None) => tracing::debug!(file_name = artifact.file_name(), "save dialog dismissed"),
            Err(e) => {
                tracing::error!(error = ?e, "saving artifact failed");
                state.error_message = Some(format!("Error saving file: {:#}", e));
            }
        }
    }

    /// Clears the workflow and abandons any running conversion.
    pub fn reset(state: &mut AppState, converter: &mut AsyncConverter) {
        converter.abandon();
        state.workflow.dispatch(WorkflowEvent::Reset);
        state.clear_messages();
    }
}
