//! Output format selector

use eframe::egui;
use egui::RichText;
use crate::app::AppState;
use wordconv::OutputFormat;

/// Renders the format selector and returns a newly chosen format.
pub fn render_format_panel(ui: &mut egui::Ui, state: &AppState) -> Option<OutputFormat> {
    let colors = state.theme.colors();
    let current = state.workflow.output_format();
    let mut selected = current;

    ui.label(RichText::new("Output Format").size(17.0).strong());
    ui.add_space(6.0);

    let selected_text = match current {
        Some(format) => RichText::new(format.label()),
        None => RichText::new("Choose your desired format").color(colors.text_dim),
    };

    egui::ComboBox::from_id_salt("output_format")
        .selected_text(selected_text)
        .width(ui.available_width())
        .height(320.0)
        .show_ui(ui, |ui| {
            for format in OutputFormat::ALL {
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut selected, Some(format), RichText::new(format.label()).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        egui::Frame::default()
                            .fill(colors.badge)
                            .corner_radius(6.0)
                            .inner_margin(egui::Margin::symmetric(6, 2))
                            .show(ui, |ui| {
                                ui.label(RichText::new(format.extension()).small().monospace());
                            });
                    });
                });
            }
        });

    if selected != current {
        selected
    } else {
        None
    }
}
