//! Asynchronous document conversion.
//!
//! Runs the conversion engine on a background thread so the GUI stays
//! responsive during the (simulated) work. The result comes back through a
//! channel that the update loop polls once per frame.

use eframe::egui;
use std::sync::mpsc::{channel, Receiver};
use std::sync::Arc;
use std::thread;
use wordconv::{CancelToken, Converter, ConvertError, OutputFormat, Progress, SourceDocument};

/// Result of polling for a finished conversion.
pub enum ConversionResult {
    /// Conversion produced a payload
    Success(Vec<u8>),
    /// Conversion failed with an error
    Error(String),
    /// No result available (still running or nothing started)
    None,
}

/// Manages the background conversion thread.
pub struct AsyncConverter {
    /// Engine shared with worker threads
    engine: Arc<dyn Converter>,

    /// Channel receiver for the conversion result
    result_receiver: Option<Receiver<Result<Vec<u8>, ConvertError>>>,

    /// Channel receiver for progress reports
    progress_receiver: Option<Receiver<Progress>>,

    /// Cancel token of the running conversion
    cancel: Option<CancelToken>,

    /// Latest progress fraction seen
    last_progress: f32,
}

impl AsyncConverter {
    /// Creates a runner around the given engine.
    pub fn new(engine: impl Converter + 'static) -> Self {
        Self {
            engine: Arc::new(engine),
            result_receiver: None,
            progress_receiver: None,
            cancel: None,
            last_progress: 0.0,
        }
    }

    /// True while a started conversion has not been collected or abandoned.
    pub fn is_converting(&self) -> bool {
        self.result_receiver.is_some()
    }

    /// Starts converting `source` to `format` on a background thread.
    ///
    /// Any conversion still running is abandoned first. Call
    /// `check_completion()` once per frame to collect the result.
    pub fn start(&mut self, source: SourceDocument, format: OutputFormat, ctx: &egui::Context) {
        self.abandon();

        let (result_tx, result_rx) = channel();
        let (progress_tx, progress_rx) = channel();
        let cancel = CancelToken::new();

        self.result_receiver = Some(result_rx);
        self.progress_receiver = Some(progress_rx);
        self.cancel = Some(cancel.clone());
        self.last_progress = 0.0;

        let engine = Arc::clone(&self.engine);
        let ctx_handle = ctx.clone();

        tracing::debug!(source = source.name(), %format, "spawning conversion worker");
        thread::spawn(move || {
            let result = engine.convert(&source, format, Some(&progress_tx), &cancel);

            // Receiver is gone if the conversion was abandoned
            let _ = result_tx.send(result);

            ctx_handle.request_repaint();
        });
    }

    /// Latest progress fraction of the running conversion, in `0.0..=1.0`.
    pub fn progress(&mut self) -> f32 {
        if let Some(receiver) = &self.progress_receiver {
            while let Ok(Progress(fraction)) = receiver.try_recv() {
                self.last_progress = fraction;
            }
        }
        self.last_progress
    }

    /// Cancels the running conversion and drops its channels.
    ///
    /// A result produced afterwards is never delivered.
    pub fn abandon(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            if self.is_converting() {
                tracing::info!("abandoning running conversion");
            }
            cancel.cancel();
        }
        self.result_receiver = None;
        self.progress_receiver = None;
        self.last_progress = 0.0;
    }

    /// Checks if the background conversion has completed and returns the result if available.
    pub fn check_completion(&mut self) -> ConversionResult {
        let Some(receiver) = &self.result_receiver else {
            return ConversionResult::None;
        };

        let result = match receiver.try_recv() {
            Ok(result) => result,
            Err(std::sync::mpsc::TryRecvError::Empty) => return ConversionResult::None,
            Err(std::sync::mpsc::TryRecvError::Disconnected) => Err(ConvertError::WorkerLost),
        };

        self.result_receiver = None;
        self.progress_receiver = None;
        self.cancel = None;

        match result {
            Ok(payload) => {
                self.last_progress = 1.0;
                ConversionResult::Success(payload)
            }
            Err(e) => ConversionResult::Error(e.to_string()),
        }
    }
}
