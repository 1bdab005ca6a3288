//! Header panel UI rendering
//!
//! Shows the application title and tagline, the theme selector, and the
//! current error message.

use eframe::egui;
use egui::RichText;
use crate::app::AppState;

/// Renders the application header.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) {
    let colors = state.theme.colors().clone();

    ui.horizontal(|ui| {
        ui.label(RichText::new("📄").size(28.0));
        ui.label(
            RichText::new("Document Converter")
                .size(26.0)
                .strong()
                .color(colors.text_strong),
        );

        // Push theme selector to the right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let old_theme = state.theme.current_theme_name().to_string();
            let mut current_theme = old_theme.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(&current_theme)
                .show_ui(ui, |ui| {
                    for theme_name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut current_theme, theme_name.to_string(), theme_name);
                    }
                });

            if old_theme != current_theme {
                tracing::debug!(theme = %current_theme, "theme changed");
                state.theme.set_theme(current_theme);
                ui.ctx().request_repaint();
            }

            ui.label("Theme:");
        });
    });

    ui.label(
        RichText::new(
            "Transform your Word documents into any format with professional precision and elegant simplicity.",
        )
        .color(colors.text_dim),
    );

    if let Some(err) = &state.error_message {
        ui.colored_label(colors.error, err);
    }
    ui.add_space(4.0);
}
