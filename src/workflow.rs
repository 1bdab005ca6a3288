//! Conversion workflow state machine.
//!
//! The workflow is a single value owned by the UI. Every user action (and the
//! completion of a background conversion) is a [`WorkflowEvent`]; applying an
//! event is a pure function from the current state to the next state plus an
//! [`Outcome`] telling the caller what happened:
//!
//! ```text
//! Idle ──file──▶ FileSelected ─┐
//!   └───format─▶ FormatChosen ─┴─▶ Ready ─request─▶ NamePending ─confirm─▶ Converting ─finish─▶ Complete
//!                                                                                              │
//!                                              Idle ◀──────────────── reset ───────────────────┘
//! ```
//!
//! Invalid events never fail: they leave the state untouched and report
//! [`Outcome::Ignored`] with the reason, so the UI can decide whether to show
//! anything.

use crate::conversion::{Artifact, PLACEHOLDER_MIME};
use crate::format::OutputFormat;
use crate::source::SourceDocument;
use tracing::{debug, info, warn};

/// Coarse phase derived from the workflow flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing chosen yet
    Idle,
    /// Source document chosen, no format
    FileSelected,
    /// Format chosen, no source document
    FormatChosen,
    /// Both chosen; conversion can be requested
    Ready,
    /// Waiting for the user to confirm the output name
    NamePending,
    /// Simulated conversion in flight
    Converting,
    /// Result ready for download
    Complete,
}

impl Phase {
    pub fn description(self) -> &'static str {
        match self {
            Phase::Idle => "Waiting for a document",
            Phase::FileSelected => "Document selected",
            Phase::FormatChosen => "Format selected",
            Phase::Ready => "Ready to convert",
            Phase::NamePending => "Naming output",
            Phase::Converting => "Converting",
            Phase::Complete => "Conversion complete",
        }
    }
}

/// Inputs to the workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowEvent {
    /// User picked or dropped a candidate file
    SelectFile(SourceDocument),
    /// User chose an output format
    ChooseFormat(OutputFormat),
    /// User edited the output base name
    EditName(String),
    /// User pressed "Begin Conversion"
    RequestConversion,
    /// User dismissed the naming dialog
    CancelNaming,
    /// User confirmed the output name
    ConfirmName(String),
    /// Background conversion delivered its payload
    ConversionFinished(Vec<u8>),
    /// Background conversion ended without a payload
    ConversionFailed,
    /// Clear everything
    Reset,
}

/// Why an event left the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Candidate file failed the Word filter
    UnsupportedFile(String),
    /// No source document has been selected
    MissingSource,
    /// No output format has been chosen
    MissingFormat,
    /// Output name is empty after trimming
    EmptyName,
    /// A conversion is running
    Busy,
    /// The result is already complete
    AlreadyComplete,
    /// The naming step is not open
    NotNaming,
    /// No conversion is running
    NotConverting,
}

/// Result of applying an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed
    Applied,
    /// State changed and the caller must launch the conversion
    StartConversion,
    /// Event ignored, state unchanged
    Ignored(Rejection),
}

/// Session-scoped state of the converter.
///
/// Invariants:
/// - `is_converting` and `conversion_complete` are never both true
/// - `naming` excludes both of them
/// - `payload` is present exactly when `conversion_complete` is true
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowState {
    selected_file: Option<SourceDocument>,
    output_format: Option<OutputFormat>,
    file_name: String,
    naming: bool,
    is_converting: bool,
    conversion_complete: bool,
    payload: Option<Vec<u8>>,
}

impl WorkflowState {
    /// Creates an empty workflow.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn selected_file(&self) -> Option<&SourceDocument> {
        self.selected_file.as_ref()
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output_format
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn is_naming(&self) -> bool {
        self.naming
    }

    pub fn is_converting(&self) -> bool {
        self.is_converting
    }

    pub fn is_complete(&self) -> bool {
        self.conversion_complete
    }

    /// True when "Begin Conversion" should be enabled.
    pub fn can_request_conversion(&self) -> bool {
        self.check_request().is_ok()
    }

    /// Name the artifact would get with the current name buffer.
    ///
    /// Falls back to `"filename"` while the buffer is empty.
    pub fn preview_file_name(&self) -> String {
        let base = if self.file_name.is_empty() { "filename" } else { self.file_name.as_str() };
        match self.output_format {
            Some(format) => format.file_name_for(base),
            None => base.to_string(),
        }
    }

    pub fn phase(&self) -> Phase {
        if self.conversion_complete {
            Phase::Complete
        } else if self.is_converting {
            Phase::Converting
        } else if self.naming {
            Phase::NamePending
        } else {
            match (self.selected_file.is_some(), self.output_format.is_some()) {
                (true, true) => Phase::Ready,
                (true, false) => Phase::FileSelected,
                (false, true) => Phase::FormatChosen,
                (false, false) => Phase::Idle,
            }
        }
    }

    /// Builds the downloadable artifact once the conversion is complete.
    pub fn download_artifact(&self) -> Option<Artifact> {
        if !self.conversion_complete {
            return None;
        }
        let format = self.output_format?;
        let payload = self.payload.as_ref()?;
        Some(Artifact::new(format.file_name_for(&self.file_name), payload.clone(), PLACEHOLDER_MIME))
    }

    // ===== Transitions =====

    /// Computes the state that results from `event` without touching `self`.
    pub fn apply(&self, event: WorkflowEvent) -> (WorkflowState, Outcome) {
        let mut next = self.clone();
        let outcome = next.step(event);
        if matches!(outcome, Outcome::Ignored(_)) {
            return (self.clone(), outcome);
        }
        (next, outcome)
    }

    /// Applies `event` in place and returns its outcome.
    pub fn dispatch(&mut self, event: WorkflowEvent) -> Outcome {
        let (next, outcome) = self.apply(event);
        match &outcome {
            Outcome::Ignored(reason) => debug!(?reason, phase = ?self.phase(), "workflow event ignored"),
            _ => debug!(from = ?self.phase(), to = ?next.phase(), "workflow transition"),
        }
        *self = next;
        outcome
    }

    fn step(&mut self, event: WorkflowEvent) -> Outcome {
        match event {
            WorkflowEvent::SelectFile(candidate) => self.select_file(candidate),
            WorkflowEvent::ChooseFormat(format) => {
                self.output_format = Some(format);
                Outcome::Applied
            }
            WorkflowEvent::EditName(name) => {
                if let Err(reason) = self.check_idle() {
                    return Outcome::Ignored(reason);
                }
                self.file_name = name;
                Outcome::Applied
            }
            WorkflowEvent::RequestConversion => match self.check_request() {
                Ok(()) => {
                    self.naming = true;
                    Outcome::Applied
                }
                Err(reason) => Outcome::Ignored(reason),
            },
            WorkflowEvent::CancelNaming => {
                if !self.naming {
                    return Outcome::Ignored(Rejection::NotNaming);
                }
                self.naming = false;
                Outcome::Applied
            }
            WorkflowEvent::ConfirmName(name) => self.confirm_name(name),
            WorkflowEvent::ConversionFinished(payload) => {
                if !self.is_converting {
                    return Outcome::Ignored(Rejection::NotConverting);
                }
                self.is_converting = false;
                self.conversion_complete = true;
                self.payload = Some(payload);
                info!(file_name = %self.file_name, "conversion complete");
                Outcome::Applied
            }
            WorkflowEvent::ConversionFailed => {
                if !self.is_converting {
                    return Outcome::Ignored(Rejection::NotConverting);
                }
                self.is_converting = false;
                Outcome::Applied
            }
            WorkflowEvent::Reset => {
                *self = WorkflowState::new();
                Outcome::Applied
            }
        }
    }

    fn select_file(&mut self, candidate: SourceDocument) -> Outcome {
        if self.is_converting {
            return Outcome::Ignored(Rejection::Busy);
        }
        if !candidate.is_word_document() {
            warn!(name = candidate.name(), mime = ?candidate.mime(), "rejected non-Word document");
            return Outcome::Ignored(Rejection::UnsupportedFile(candidate.name().to_string()));
        }

        info!(name = candidate.name(), size = candidate.size_bytes(), "source document selected");
        self.file_name = candidate.default_base_name();
        self.selected_file = Some(candidate);
        self.naming = false;
        self.conversion_complete = false;
        self.payload = None;
        Outcome::Applied
    }

    fn confirm_name(&mut self, name: String) -> Outcome {
        if !self.naming {
            return Outcome::Ignored(Rejection::NotNaming);
        }
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Outcome::Ignored(Rejection::EmptyName);
        }

        self.file_name = trimmed.to_string();
        self.naming = false;
        self.is_converting = true;
        info!(file_name = %self.file_name, format = ?self.output_format, "conversion started");
        Outcome::StartConversion
    }

    fn check_idle(&self) -> Result<(), Rejection> {
        if self.is_converting {
            Err(Rejection::Busy)
        } else if self.conversion_complete {
            Err(Rejection::AlreadyComplete)
        } else {
            Ok(())
        }
    }

    fn check_request(&self) -> Result<(), Rejection> {
        self.check_idle()?;
        if self.selected_file.is_none() {
            return Err(Rejection::MissingSource);
        }
        if self.output_format.is_none() {
            return Err(Rejection::MissingFormat);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::PLACEHOLDER_PAYLOAD;

    fn docx(name: &str) -> SourceDocument {
        SourceDocument::new(name, 2048, None)
    }

    fn ready_state(name: &str, format: OutputFormat) -> WorkflowState {
        let mut state = WorkflowState::new();
        state.dispatch(WorkflowEvent::SelectFile(docx(name)));
        state.dispatch(WorkflowEvent::ChooseFormat(format));
        state
    }

    #[test]
    fn test_initial_state_is_idle() {
        let state = WorkflowState::new();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.selected_file().is_none());
        assert!(state.output_format().is_none());
        assert_eq!(state.file_name(), "");
        assert!(!state.is_converting());
        assert!(!state.is_complete());
    }

    #[test]
    fn test_select_derives_base_name() {
        let mut state = WorkflowState::new();
        let outcome = state.dispatch(WorkflowEvent::SelectFile(docx("report.docx")));
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(state.file_name(), "report");
        assert_eq!(state.phase(), Phase::FileSelected);
    }

    #[test]
    fn test_unsupported_file_leaves_state_unchanged() {
        let mut state = WorkflowState::new();
        state.dispatch(WorkflowEvent::ChooseFormat(OutputFormat::Txt));
        let before = state.clone();

        let outcome = state.dispatch(WorkflowEvent::SelectFile(SourceDocument::new(
            "photo.png",
            10,
            Some("image/png".to_string()),
        )));

        assert_eq!(outcome, Outcome::Ignored(Rejection::UnsupportedFile("photo.png".to_string())));
        assert_eq!(state, before);
    }

    #[test]
    fn test_mime_alone_is_enough() {
        let mut state = WorkflowState::new();
        let candidate = SourceDocument::new("upload", 10, Some("application/msword".to_string()));
        assert_eq!(state.dispatch(WorkflowEvent::SelectFile(candidate)), Outcome::Applied);
        assert_eq!(state.file_name(), "upload");
    }

    #[test]
    fn test_format_before_file() {
        let mut state = WorkflowState::new();
        state.dispatch(WorkflowEvent::ChooseFormat(OutputFormat::Html));
        assert_eq!(state.phase(), Phase::FormatChosen);
        state.dispatch(WorkflowEvent::SelectFile(docx("a.doc")));
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn test_request_without_preconditions_is_noop() {
        let mut state = WorkflowState::new();
        let before = state.clone();
        assert_eq!(
            state.dispatch(WorkflowEvent::RequestConversion),
            Outcome::Ignored(Rejection::MissingSource)
        );
        assert_eq!(state, before);

        state.dispatch(WorkflowEvent::SelectFile(docx("a.docx")));
        let before = state.clone();
        assert_eq!(
            state.dispatch(WorkflowEvent::RequestConversion),
            Outcome::Ignored(Rejection::MissingFormat)
        );
        assert_eq!(state, before);

        let mut format_only = WorkflowState::new();
        format_only.dispatch(WorkflowEvent::ChooseFormat(OutputFormat::Pdf));
        let before = format_only.clone();
        format_only.dispatch(WorkflowEvent::RequestConversion);
        assert_eq!(format_only, before);
    }

    #[test]
    fn test_request_opens_naming_with_default_name() {
        let mut state = ready_state("thesis.docx", OutputFormat::Pdf);
        assert!(state.can_request_conversion());
        assert_eq!(state.dispatch(WorkflowEvent::RequestConversion), Outcome::Applied);
        assert_eq!(state.phase(), Phase::NamePending);
        assert_eq!(state.file_name(), "thesis");
        assert_eq!(state.preview_file_name(), "thesis.pdf");
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut state = ready_state("a.docx", OutputFormat::Pdf);
        state.dispatch(WorkflowEvent::RequestConversion);

        for name in ["", "   ", "\t\n"] {
            let outcome = state.dispatch(WorkflowEvent::ConfirmName(name.to_string()));
            assert_eq!(outcome, Outcome::Ignored(Rejection::EmptyName));
            assert_eq!(state.phase(), Phase::NamePending);
        }
    }

    #[test]
    fn test_confirm_trims_and_starts() {
        let mut state = ready_state("a.docx", OutputFormat::Rtf);
        state.dispatch(WorkflowEvent::RequestConversion);
        let outcome = state.dispatch(WorkflowEvent::ConfirmName("  final  ".to_string()));
        assert_eq!(outcome, Outcome::StartConversion);
        assert_eq!(state.file_name(), "final");
        assert!(state.is_converting());
        assert!(!state.is_complete());
        assert!(!state.is_naming());
    }

    #[test]
    fn test_cancel_naming_returns_to_ready() {
        let mut state = ready_state("a.docx", OutputFormat::Rtf);
        state.dispatch(WorkflowEvent::RequestConversion);
        state.dispatch(WorkflowEvent::EditName("draft".to_string()));
        assert_eq!(state.dispatch(WorkflowEvent::CancelNaming), Outcome::Applied);
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.file_name(), "draft");
        assert_eq!(
            state.dispatch(WorkflowEvent::CancelNaming),
            Outcome::Ignored(Rejection::NotNaming)
        );
    }

    #[test]
    fn test_busy_while_converting() {
        let mut state = ready_state("a.docx", OutputFormat::Odt);
        state.dispatch(WorkflowEvent::RequestConversion);
        state.dispatch(WorkflowEvent::ConfirmName("out".to_string()));

        assert_eq!(
            state.dispatch(WorkflowEvent::RequestConversion),
            Outcome::Ignored(Rejection::Busy)
        );
        assert_eq!(
            state.dispatch(WorkflowEvent::SelectFile(docx("b.docx"))),
            Outcome::Ignored(Rejection::Busy)
        );
        assert_eq!(
            state.dispatch(WorkflowEvent::EditName("other".to_string())),
            Outcome::Ignored(Rejection::Busy)
        );
        assert!(!state.can_request_conversion());
        assert_eq!(state.file_name(), "out");
    }

    #[test]
    fn test_finish_only_when_converting() {
        let mut state = ready_state("a.docx", OutputFormat::Odt);
        let outcome = state.dispatch(WorkflowEvent::ConversionFinished(PLACEHOLDER_PAYLOAD.to_vec()));
        assert_eq!(outcome, Outcome::Ignored(Rejection::NotConverting));
        assert!(!state.is_complete());
        assert!(state.download_artifact().is_none());
    }

    #[test]
    fn test_failed_conversion_returns_to_ready() {
        let mut state = ready_state("a.docx", OutputFormat::Pdf);
        state.dispatch(WorkflowEvent::RequestConversion);
        state.dispatch(WorkflowEvent::ConfirmName("out".to_string()));
        assert_eq!(state.dispatch(WorkflowEvent::ConversionFailed), Outcome::Applied);
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(
            state.dispatch(WorkflowEvent::ConversionFailed),
            Outcome::Ignored(Rejection::NotConverting)
        );
    }

    #[test]
    fn test_full_run_produces_artifact() {
        let mut state = ready_state("essay.docx", OutputFormat::Pdf);
        state.dispatch(WorkflowEvent::RequestConversion);
        state.dispatch(WorkflowEvent::ConfirmName("final-essay".to_string()));
        state.dispatch(WorkflowEvent::ConversionFinished(PLACEHOLDER_PAYLOAD.to_vec()));

        assert_eq!(state.phase(), Phase::Complete);
        assert!(!state.is_converting());
        let artifact = state.download_artifact().unwrap();
        assert_eq!(artifact.file_name(), "final-essay.pdf");
        assert_eq!(artifact.bytes(), PLACEHOLDER_PAYLOAD);
    }

    #[test]
    fn test_name_locked_after_complete() {
        let mut state = ready_state("essay.docx", OutputFormat::Pdf);
        state.dispatch(WorkflowEvent::RequestConversion);
        state.dispatch(WorkflowEvent::ConfirmName("final-essay".to_string()));
        state.dispatch(WorkflowEvent::ConversionFinished(PLACEHOLDER_PAYLOAD.to_vec()));

        let outcome = state.dispatch(WorkflowEvent::EditName("other".to_string()));
        assert_eq!(outcome, Outcome::Ignored(Rejection::AlreadyComplete));
        assert_eq!(state.file_name(), "final-essay");
        assert_eq!(state.download_artifact().unwrap().file_name(), "final-essay.pdf");
    }

    #[test]
    fn test_format_change_after_complete_renames_download() {
        let mut state = ready_state("essay.docx", OutputFormat::Pdf);
        state.dispatch(WorkflowEvent::RequestConversion);
        state.dispatch(WorkflowEvent::ConfirmName("final-essay".to_string()));
        state.dispatch(WorkflowEvent::ConversionFinished(PLACEHOLDER_PAYLOAD.to_vec()));

        assert_eq!(state.dispatch(WorkflowEvent::ChooseFormat(OutputFormat::Txt)), Outcome::Applied);
        assert!(state.is_complete());
        let artifact = state.download_artifact().unwrap();
        assert_eq!(artifact.file_name(), "final-essay.txt");
        assert_eq!(artifact.bytes(), PLACEHOLDER_PAYLOAD);
    }

    #[test]
    fn test_new_file_after_complete_clears_progress() {
        let mut state = ready_state("essay.docx", OutputFormat::Epub);
        state.dispatch(WorkflowEvent::RequestConversion);
        state.dispatch(WorkflowEvent::ConfirmName("x".to_string()));
        state.dispatch(WorkflowEvent::ConversionFinished(PLACEHOLDER_PAYLOAD.to_vec()));

        state.dispatch(WorkflowEvent::SelectFile(docx("second.doc")));
        assert!(!state.is_complete());
        assert!(state.download_artifact().is_none());
        assert_eq!(state.file_name(), "second");
        assert_eq!(state.output_format(), Some(OutputFormat::Epub));
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn test_reset_is_total_and_idempotent() {
        let mut state = ready_state("essay.docx", OutputFormat::Markdown);
        state.dispatch(WorkflowEvent::RequestConversion);
        state.dispatch(WorkflowEvent::ConfirmName("notes".to_string()));
        state.dispatch(WorkflowEvent::ConversionFinished(PLACEHOLDER_PAYLOAD.to_vec()));

        state.dispatch(WorkflowEvent::Reset);
        assert_eq!(state, WorkflowState::new());
        state.dispatch(WorkflowEvent::Reset);
        assert_eq!(state, WorkflowState::new());
    }

    #[test]
    fn test_apply_is_pure() {
        let state = ready_state("a.docx", OutputFormat::Txt);
        let (next, outcome) = state.apply(WorkflowEvent::RequestConversion);
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(next.phase(), Phase::NamePending);
    }

    #[test]
    fn test_preview_placeholder_name() {
        let mut state = ready_state("a.docx", OutputFormat::Html);
        state.dispatch(WorkflowEvent::EditName(String::new()));
        assert_eq!(state.preview_file_name(), "filename.html");
    }
}
