//! Source document panel
//!
//! The drop zone: shows the selected document, or invites the user to drop a
//! file or browse for one.

use eframe::egui;
use egui::{RichText, Stroke};
use std::path::PathBuf;
use crate::app::AppState;
use crate::utils::format_size_mb;
use wordconv::{with_alpha, SourceDocument};

/// Result of user interaction with the source panel
pub enum SourcePanelInteraction {
    /// A file was chosen in the file dialog
    Picked(PathBuf),
    /// User asked to choose a different file
    ChooseDifferent,
}

/// Renders the drop zone.
pub fn render_source_panel(ui: &mut egui::Ui, state: &AppState) -> Option<SourcePanelInteraction> {
    let mut interaction = None;
    let colors = state.theme.colors();
    let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());

    ui.label(RichText::new("Source Document").size(17.0).strong());
    ui.add_space(6.0);

    let (fill, border) = match state.workflow.selected_file() {
        Some(_) => (colors.success_background, colors.success_border),
        None if hovering => (colors.drop_hover, colors.accent),
        None => (with_alpha(colors.drop_hover, 0), colors.drop_border),
    };

    egui::Frame::default()
        .fill(fill)
        .stroke(Stroke::new(2.0, border))
        .corner_radius(12.0)
        .inner_margin(egui::Margin::same(24))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| match state.workflow.selected_file() {
                Some(source) => {
                    ui.label(RichText::new("✔").size(40.0).color(colors.success));
                    ui.label(RichText::new(source.name()).strong().color(colors.text_strong));
                    ui.label(
                        RichText::new(format!("{} • Ready for conversion", format_size_mb(source.size_bytes())))
                            .color(colors.text_dim),
                    );
                    ui.add_space(6.0);
                    let busy = state.workflow.is_converting();
                    if ui.add_enabled(!busy, egui::Button::new("Choose Different File")).clicked() {
                        interaction = Some(SourcePanelInteraction::ChooseDifferent);
                    }
                }
                None => {
                    ui.label(RichText::new("⬆").size(48.0).color(colors.text_dim));
                    ui.label(RichText::new("Drop your Word document here").size(17.0).strong());
                    ui.label(RichText::new("or click to browse your files").color(colors.text_dim));
                    ui.add_space(8.0);

                    let button = egui::Button::new(RichText::new("Select Document").color(colors.on_accent))
                        .fill(colors.accent);
                    if ui.add(button).clicked() {
                        if let Some(path) = pick_word_document() {
                            interaction = Some(SourcePanelInteraction::Picked(path));
                        }
                    }
                }
            });
        });

    interaction
}

/// Opens a file dialog filtered to Word documents.
fn pick_word_document() -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .add_filter("Word Documents", &["doc", "docx"])
        .add_filter("All Files", &["*"]);

    if let Some(dir) = dirs::document_dir() {
        dialog = dialog.set_directory(dir);
    }

    dialog.pick_file()
}

/// Takes the first file dropped onto the window this frame, if any.
///
/// Files with a path are described from disk (size and guessed MIME type);
/// otherwise the name, bytes and MIME type supplied with the drop are used.
pub fn take_dropped_source(ctx: &egui::Context) -> Option<SourceDocument> {
    let dropped = ctx.input(|i| i.raw.dropped_files.first().cloned())?;

    if let Some(path) = &dropped.path {
        match SourceDocument::from_path(path) {
            Ok(source) => return Some(source),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "cannot stat dropped file"),
        }
    }

    let name = if dropped.name.is_empty() {
        dropped
            .path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        dropped.name.clone()
    };
    let size = dropped.bytes.as_ref().map(|b| b.len() as u64).unwrap_or(0);

    Some(SourceDocument::new(name, size, Some(dropped.mime.clone())))
}
