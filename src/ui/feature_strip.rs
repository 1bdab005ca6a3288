//! Informational cards below the conversion studio

use eframe::egui;
use egui::RichText;
use wordconv::ThemeColors;

const FEATURES: [(&str, &str, &str); 3] = [
    ("📄", "Multiple Formats", "Convert to PDF, HTML, TXT, and more professional formats."),
    ("✔", "High Quality", "Preserve formatting and maintain document integrity."),
    ("⚙", "Easy to Use", "Simple drag-and-drop interface with instant results."),
];

pub fn render_feature_strip(ui: &mut egui::Ui, colors: &ThemeColors) {
    let accents = [colors.accent, colors.success, colors.warning];

    ui.columns(FEATURES.len(), |columns| {
        for (column, ((icon, title, blurb), accent)) in columns.iter_mut().zip(FEATURES.iter().zip(accents)) {
            egui::Frame::default()
                .fill(colors.card_background)
                .corner_radius(10.0)
                .inner_margin(egui::Margin::same(16))
                .show(column, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(*icon).size(24.0).color(accent));
                        ui.label(RichText::new(*title).strong().color(colors.text_strong));
                        ui.label(RichText::new(*blurb).small().color(colors.text_dim));
                    });
                });
        }
    });
}
