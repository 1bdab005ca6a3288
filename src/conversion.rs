//! Conversion engine seam.
//!
//! No real transcoding exists. [`SimulatedConverter`] waits a fixed delay and
//! returns [`PLACEHOLDER_PAYLOAD`] for every format. The [`Converter`] trait
//! carries a cancel token and a progress channel so that a real engine can be
//! dropped in behind the same interface.

use crate::error::ConvertError;
use crate::format::OutputFormat;
use crate::source::SourceDocument;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Bytes written for every converted document.
pub const PLACEHOLDER_PAYLOAD: &[u8] = b"Converted file content";

/// Content type of [`PLACEHOLDER_PAYLOAD`].
pub const PLACEHOLDER_MIME: &str = "text/plain";

const TICK: Duration = Duration::from_millis(50);

/// Shared flag used to abandon a running conversion.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Fraction of work done, in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress(pub f32);

/// A conversion engine.
///
/// Implementations run on a worker thread and must return promptly once
/// `cancel` is set.
pub trait Converter: Send + Sync {
    fn convert(
        &self,
        source: &SourceDocument,
        format: OutputFormat,
        progress: Option<&Sender<Progress>>,
        cancel: &CancelToken,
    ) -> Result<Vec<u8>, ConvertError>;
}

/// Stand-in engine: sleeps for `delay`, then yields the placeholder payload.
#[derive(Debug, Clone)]
pub struct SimulatedConverter {
    delay: Duration,
}

impl SimulatedConverter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedConverter {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_DELAY_MS))
    }
}

impl Converter for SimulatedConverter {
    fn convert(
        &self,
        source: &SourceDocument,
        format: OutputFormat,
        progress: Option<&Sender<Progress>>,
        cancel: &CancelToken,
    ) -> Result<Vec<u8>, ConvertError> {
        debug!(source = source.name(), %format, delay_ms = self.delay.as_millis() as u64, "simulating conversion");
        let started = Instant::now();

        loop {
            if cancel.is_cancelled() {
                info!(source = source.name(), "conversion cancelled");
                return Err(ConvertError::Cancelled);
            }

            let elapsed = started.elapsed();
            if elapsed >= self.delay {
                break;
            }

            if let Some(tx) = progress {
                let fraction = elapsed.as_secs_f32() / self.delay.as_secs_f32();
                // Receiver may be gone; progress is advisory
                let _ = tx.send(Progress(fraction.min(1.0)));
            }

            thread::sleep(TICK.min(self.delay - elapsed));
        }

        if let Some(tx) = progress {
            let _ = tx.send(Progress(1.0));
        }
        Ok(PLACEHOLDER_PAYLOAD.to_vec())
    }
}

/// A finished, downloadable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    file_name: String,
    bytes: Vec<u8>,
    mime: &'static str,
}

impl Artifact {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>, mime: &'static str) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Writes the artifact to an explicit destination path.
    pub fn write_to_path(&self, path: &Path) -> Result<(), ConvertError> {
        std::fs::write(path, &self.bytes).map_err(|e| ConvertError::io(path, e))?;
        info!(path = %path.display(), bytes = self.bytes.len(), "artifact written");
        Ok(())
    }

    /// Writes the artifact under `dir` using its own file name.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, ConvertError> {
        let path = dir.join(&self.file_name);
        self.write_to_path(&path)?;
        Ok(path)
    }
}
