//! I/O modules for background conversion and artifact saving.

pub mod async_converter;
pub mod artifact_saver;

// Re-export commonly used types
pub use async_converter::{AsyncConverter, ConversionResult};
pub use artifact_saver::ArtifactSaver;
