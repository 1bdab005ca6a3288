//! State management modules for the converter window.
//!
//! This module contains UI-only state (the conversion workflow itself lives in
//! the library):
//! - Theme state (theme manager, current theme)
//! - Export state (last save directory, last saved file)
//! - Notice state (transient informational messages)

mod theme_state;
mod export_state;
mod notice_state;

pub use theme_state::ThemeState;
pub use export_state::ExportState;
pub use notice_state::NoticeState;
