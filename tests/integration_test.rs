use anyhow::Result;
use std::fs;
use std::sync::mpsc::channel;
use std::time::{Duration, Instant};
use wordconv::{
    CancelToken, Converter, ConvertError, OutputFormat, Outcome, Phase, Rejection, SimulatedConverter,
    SourceDocument, WorkflowEvent, WorkflowState, PLACEHOLDER_PAYLOAD,
};

/// Drives the workflow the way the GUI does, running the converter inline.
fn run_conversion(state: &mut WorkflowState, converter: &dyn Converter) -> Result<()> {
    let source = state.selected_file().cloned().expect("source selected");
    let format = state.output_format().expect("format chosen");
    let payload = converter.convert(&source, format, None, &CancelToken::new())?;
    state.dispatch(WorkflowEvent::ConversionFinished(payload));
    Ok(())
}

#[test]
fn test_essay_to_pdf_end_to_end() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let source_path = dir.path().join("essay.docx");
    fs::write(&source_path, b"fake word document")?;

    let mut state = WorkflowState::new();
    assert_eq!(
        state.dispatch(WorkflowEvent::SelectFile(SourceDocument::from_path(&source_path)?)),
        Outcome::Applied
    );
    assert_eq!(state.file_name(), "essay");

    state.dispatch(WorkflowEvent::ChooseFormat(OutputFormat::Pdf));
    state.dispatch(WorkflowEvent::RequestConversion);
    assert_eq!(state.phase(), Phase::NamePending);

    let outcome = state.dispatch(WorkflowEvent::ConfirmName("final-essay".to_string()));
    assert_eq!(outcome, Outcome::StartConversion);
    assert_eq!(state.phase(), Phase::Converting);

    let converter = SimulatedConverter::new(Duration::from_millis(100));
    let started = Instant::now();
    run_conversion(&mut state, &converter)?;
    assert!(started.elapsed() >= Duration::from_millis(100));
    assert_eq!(state.phase(), Phase::Complete);

    let artifact = state.download_artifact().expect("artifact available");
    assert_eq!(artifact.file_name(), "final-essay.pdf");

    let out_dir = dir.path().join("out");
    fs::create_dir(&out_dir)?;
    let written = artifact.write_to(&out_dir)?;
    assert_eq!(written, out_dir.join("final-essay.pdf"));
    assert_eq!(fs::read(&written)?, PLACEHOLDER_PAYLOAD);

    // Source document is never modified
    assert_eq!(fs::read(&source_path)?, b"fake word document");
    Ok(())
}

#[test]
fn test_every_format_downloads_with_its_extension() -> Result<()> {
    let converter = SimulatedConverter::new(Duration::ZERO);
    let expected = [
        (OutputFormat::Pdf, "out.pdf"),
        (OutputFormat::Txt, "out.txt"),
        (OutputFormat::Html, "out.html"),
        (OutputFormat::Rtf, "out.rtf"),
        (OutputFormat::Odt, "out.odt"),
        (OutputFormat::Epub, "out.epub"),
        (OutputFormat::Markdown, "out.md"),
    ];

    for (format, file_name) in expected {
        let mut state = WorkflowState::new();
        state.dispatch(WorkflowEvent::SelectFile(SourceDocument::new("in.doc", 1, None)));
        state.dispatch(WorkflowEvent::ChooseFormat(format));
        state.dispatch(WorkflowEvent::RequestConversion);
        state.dispatch(WorkflowEvent::ConfirmName("out".to_string()));
        run_conversion(&mut state, &converter)?;

        let artifact = state.download_artifact().expect("artifact available");
        assert_eq!(artifact.file_name(), file_name);
        assert_eq!(artifact.bytes(), PLACEHOLDER_PAYLOAD);
    }
    Ok(())
}

#[test]
fn test_rejected_files_never_enter_the_workflow() {
    let mut state = WorkflowState::new();
    for (name, mime) in [
        ("photo.jpg", Some("image/jpeg")),
        ("notes.txt", None),
        ("report.docx.zip", Some("application/zip")),
    ] {
        let candidate = SourceDocument::new(name, 10, mime.map(str::to_string));
        let outcome = state.dispatch(WorkflowEvent::SelectFile(candidate));
        assert_eq!(outcome, Outcome::Ignored(Rejection::UnsupportedFile(name.to_string())));
        assert_eq!(state, WorkflowState::new());
    }
}

#[test]
fn test_reset_after_complete_and_twice() -> Result<()> {
    let mut state = WorkflowState::new();
    state.dispatch(WorkflowEvent::SelectFile(SourceDocument::new("a.docx", 1, None)));
    state.dispatch(WorkflowEvent::ChooseFormat(OutputFormat::Html));
    state.dispatch(WorkflowEvent::RequestConversion);
    state.dispatch(WorkflowEvent::ConfirmName("page".to_string()));
    run_conversion(&mut state, &SimulatedConverter::new(Duration::ZERO))?;
    assert!(state.is_complete());

    state.dispatch(WorkflowEvent::Reset);
    let once = state.clone();
    state.dispatch(WorkflowEvent::Reset);

    assert_eq!(once, WorkflowState::new());
    assert_eq!(state, once);
    assert!(state.selected_file().is_none());
    assert!(state.output_format().is_none());
    assert_eq!(state.file_name(), "");
    assert!(!state.is_converting());
    assert!(!state.is_complete());
    Ok(())
}

#[test]
fn test_cancelled_conversion_reports_progress_then_stops() {
    let converter = SimulatedConverter::new(Duration::from_secs(30));
    let cancel = CancelToken::new();
    let (tx, rx) = channel();

    let worker_cancel = cancel.clone();
    let handle = std::thread::spawn(move || {
        converter.convert(&SourceDocument::new("a.docx", 1, None), OutputFormat::Pdf, Some(&tx), &worker_cancel)
    });

    // Wait for the first progress report before cancelling
    let first = rx.recv_timeout(Duration::from_secs(5)).expect("progress reported");
    assert!(first.0 < 1.0);
    cancel.cancel();

    let result = handle.join().expect("worker thread");
    assert!(matches!(result, Err(ConvertError::Cancelled)));
}
