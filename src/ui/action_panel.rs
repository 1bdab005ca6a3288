//! Conversion actions
//!
//! Before completion: the "Begin Conversion" button, replaced by a spinner
//! while the conversion runs. After completion: the success banner with
//! download and restart buttons.

use eframe::egui;
use egui::{RichText, Stroke};
use crate::app::AppState;
use wordconv::ThemeColors;

/// Result of user interaction with the action panel
pub enum ActionPanelInteraction {
    BeginConversion,
    Download,
    ConvertAnother,
}

/// Fills buttons with the accent colour, darkening or lightening on hover and press.
fn apply_primary_button_style(style: &mut egui::Style, colors: &ThemeColors) {
    let widgets = &mut style.visuals.widgets;
    widgets.inactive.weak_bg_fill = colors.accent;
    widgets.hovered.weak_bg_fill = colors.accent_hover;
    widgets.active.weak_bg_fill = colors.accent_hover;
}

/// Renders the action area.
pub fn render_action_panel(ui: &mut egui::Ui, state: &AppState) -> Option<ActionPanelInteraction> {
    let mut interaction = None;
    let colors = state.theme.colors();
    let workflow = &state.workflow;
    let full_width = egui::vec2(ui.available_width(), 48.0);

    if !workflow.is_complete() {
        let label = if workflow.is_converting() {
            "Converting Document..."
        } else {
            "⚙  Begin Conversion"
        };
        let button = egui::Button::new(RichText::new(label).size(18.0).strong().color(colors.on_accent))
            .min_size(full_width);

        let enabled = workflow.can_request_conversion();
        let response = ui
            .scope(|ui| {
                apply_primary_button_style(ui.style_mut(), colors);
                ui.add_enabled(enabled, button)
            })
            .inner;
        if workflow.is_converting() {
            let spinner_rect = egui::Rect::from_center_size(
                response.rect.left_center() + egui::vec2(28.0, 0.0),
                egui::vec2(20.0, 20.0),
            );
            ui.put(spinner_rect, egui::Spinner::new().color(colors.on_accent));
        }
        if response.clicked() {
            interaction = Some(ActionPanelInteraction::BeginConversion);
        }
        return interaction;
    }

    egui::Frame::default()
        .fill(colors.success_background)
        .stroke(Stroke::new(1.0, colors.success_border))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("✔").size(22.0).color(colors.success));
                ui.vertical(|ui| {
                    ui.label(RichText::new("Conversion Complete!").strong().color(colors.success));
                    ui.label(RichText::new("Your document is ready for download.").color(colors.success));
                });
            });
        });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let another_width = 160.0;
        let spacing = ui.spacing().item_spacing.x;
        let download_width = (ui.available_width() - another_width - spacing).max(120.0);

        let download = egui::Button::new(RichText::new("⬇  Download File").size(16.0).color(egui::Color32::WHITE))
            .fill(colors.success)
            .min_size(egui::vec2(download_width, 42.0));
        if ui.add(download).clicked() {
            interaction = Some(ActionPanelInteraction::Download);
        }

        let another = egui::Button::new(RichText::new("Convert Another").size(16.0))
            .min_size(egui::vec2(another_width, 42.0));
        if ui.add(another).clicked() {
            interaction = Some(ActionPanelInteraction::ConvertAnother);
        }
    });

    interaction
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordconv::ThemeManager;

    #[test]
    fn test_primary_button_hover_uses_accent_hover() {
        let manager = ThemeManager::new();
        for name in manager.list_themes() {
            let colors = &manager.theme_or_default(name).colors;
            let mut style = egui::Style::default();
            apply_primary_button_style(&mut style, colors);

            let widgets = &style.visuals.widgets;
            assert_eq!(widgets.inactive.weak_bg_fill, colors.accent);
            assert_eq!(widgets.hovered.weak_bg_fill, colors.accent_hover);
            assert_eq!(widgets.active.weak_bg_fill, colors.accent_hover);
            assert_ne!(colors.accent, colors.accent_hover, "{name}");
        }
    }
}
