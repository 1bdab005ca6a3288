//! Status bar UI rendering
//!
//! Shows process memory, the workflow phase, conversion progress, the last
//! saved file and any transient notice.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use crate::io::AsyncConverter;
use crate::utils::{format_memory_mb, get_current_memory_mb};

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState, converter: &mut AsyncConverter) {
    let colors = state.theme.colors();

    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());
        ui.label(RichText::new("|").strong());

        let phase = state.workflow.phase().description();
        if state.workflow.is_converting() {
            let percent = (converter.progress() * 100.0).round() as u32;
            ui.label(RichText::new(format!("{} ({}%)", phase, percent)).strong());
        } else {
            ui.label(RichText::new(phase).strong());
        }

        if let Some(path) = state.export.last_saved_file() {
            ui.label(RichText::new("|").strong());
            ui.label(format!("Saved: {}", path.display()));
        }

        if let Some(message) = state.notice.message() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(message).strong().color(colors.warning));
        }
    });
}
