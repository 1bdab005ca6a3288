//! UI panel rendering subsystem
//!
//! This module contains all panel rendering for the converter window:
//! - Header panel (title, theme selector, error line)
//! - Source panel (drop zone and document picker)
//! - Format panel (output format selector)
//! - Action panel (begin conversion, progress, download)
//! - Name dialog (output name confirmation)
//! - Feature strip (informational cards)
//! - Status bar (workflow phase, notices, memory)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod source_panel;
pub mod format_panel;
pub mod action_panel;
pub mod name_dialog;
pub mod feature_strip;
pub mod status_bar;
pub mod panel_manager;
