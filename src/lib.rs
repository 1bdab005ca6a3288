pub mod error;
pub mod format;
pub mod source;
pub mod workflow;
pub mod conversion;
pub mod config;
pub mod theme;

// Export error type
pub use error::ConvertError;

// Export format table
pub use format::OutputFormat;

// Export source document handling
pub use source::{SourceDocument, is_word_document, derive_base_name};

// Export workflow state machine
pub use workflow::{WorkflowState, WorkflowEvent, Outcome, Rejection, Phase};

// Export conversion seam
pub use conversion::{
    Converter, SimulatedConverter, CancelToken, Progress, Artifact,
    PLACEHOLDER_PAYLOAD, PLACEHOLDER_MIME
};

// Export runtime configuration
pub use config::ConverterConfig;

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, with_alpha};
