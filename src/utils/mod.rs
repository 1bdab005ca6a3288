//! Utility modules for the converter window.

pub mod formatting;

// Re-export commonly used functions
pub use formatting::{format_size_mb, get_current_memory_mb, format_memory_mb};
