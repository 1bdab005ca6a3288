//! "Name Your File" dialog
//!
//! Shown while the workflow is in the naming step. Edits go straight back to
//! the workflow; the extension is appended automatically.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

/// Result of user interaction with the name dialog
pub enum NameDialogInteraction {
    /// Name text changed
    Edited(String),
    /// Dialog dismissed
    Cancelled,
    /// "Start Conversion" pressed (or Enter)
    Confirmed(String),
}

/// Renders the dialog if the naming step is open.
pub fn render_name_dialog(ctx: &egui::Context, state: &AppState) -> Option<NameDialogInteraction> {
    if !state.workflow.is_naming() {
        return None;
    }

    let mut interaction = None;
    let colors = state.theme.colors();
    let mut name = state.workflow.file_name().to_string();
    let mut open = true;

    egui::Window::new(RichText::new("Name Your File").size(19.0).strong())
        .id(egui::Id::new("name_dialog"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(420.0)
        .show(ctx, |ui| {
            ui.label(
                RichText::new(
                    "Choose a name for your converted document. The appropriate file extension will be added automatically.",
                )
                .color(colors.text_dim),
            );
            ui.add_space(10.0);

            ui.label(RichText::new("File Name").strong());
            let response = ui.add(
                egui::TextEdit::singleline(&mut name)
                    .hint_text("Enter file name")
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                interaction = Some(NameDialogInteraction::Edited(name.clone()));
            }

            let preview = state.workflow.preview_file_name();
            ui.label(RichText::new(format!("Final name: {}", preview)).color(colors.text_dim));
            ui.add_space(10.0);

            let valid = !name.trim().is_empty();
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let start = egui::Button::new(RichText::new("Start Conversion").color(colors.on_accent))
                    .fill(colors.accent);
                if ui.add_enabled(valid, start).clicked() || (valid && enter) {
                    interaction = Some(NameDialogInteraction::Confirmed(name.clone()));
                }
                if ui.button("Cancel").clicked() {
                    interaction = Some(NameDialogInteraction::Cancelled);
                }
            });
        });

    if !open {
        interaction = Some(NameDialogInteraction::Cancelled);
    }

    interaction
}
