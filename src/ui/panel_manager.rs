//! Panel orchestration and layout management.
//!
//! Lays out the header, the conversion studio card, the feature strip, the
//! status bar and the naming dialog, and funnels every user action into a
//! single [`PanelInteraction`] per frame.

use crate::app::AppState;
use crate::io::AsyncConverter;
use crate::ui::{action_panel, feature_strip, format_panel, header, name_dialog, source_panel, status_bar};
use egui::{RichText, Stroke};
use std::path::PathBuf;
use std::time::Instant;
use wordconv::{OutputFormat, SourceDocument};

/// Result of panel interactions that need to be handled by the application coordinator.
pub enum PanelInteraction {
    /// A document was picked in the file dialog
    SourcePicked(PathBuf),
    /// A file was dropped onto the window
    SourceDropped(SourceDocument),
    /// An output format was chosen
    FormatChosen(OutputFormat),
    /// "Begin Conversion" pressed
    ConversionRequested,
    /// Name text edited in the naming dialog
    NameEdited(String),
    /// Naming dialog dismissed
    NamingCancelled,
    /// Naming dialog confirmed
    NameConfirmed(String),
    /// "Download File" pressed
    DownloadRequested,
    /// "Choose Different File" or "Convert Another" pressed
    ResetRequested,
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called from `eframe::App::update()`. Later interactions in a frame
    /// take precedence over earlier ones.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        converter: &mut AsyncConverter,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        state.notice.expire(Instant::now());
        if state.notice.message().is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(500));
        }

        if let Some(source) = source_panel::take_dropped_source(ctx) {
            interaction = Some(PanelInteraction::SourceDropped(source));
        }

        let colors = state.theme.colors().clone();

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::default().fill(colors.background).inner_margin(egui::Margin::same(12)))
            .show(ctx, |ui| {
                header::render_header(ui, state);
            });

        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state, converter);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(colors.background).inner_margin(egui::Margin::same(16)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    egui::Frame::default()
                        .fill(colors.card_background)
                        .stroke(Stroke::new(1.0, colors.border))
                        .corner_radius(14.0)
                        .inner_margin(egui::Margin::same(24))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.label(RichText::new("⚙ Conversion Studio").size(21.0).strong().color(colors.text_strong));
                            ui.label(
                                RichText::new(
                                    "Upload your document, select the desired format, and let our advanced converter handle the rest.",
                                )
                                .color(colors.text_dim),
                            );
                            ui.add_space(16.0);

                            if let Some(source_interaction) = source_panel::render_source_panel(ui, state) {
                                interaction = Some(match source_interaction {
                                    source_panel::SourcePanelInteraction::Picked(path) => {
                                        PanelInteraction::SourcePicked(path)
                                    }
                                    source_panel::SourcePanelInteraction::ChooseDifferent => {
                                        PanelInteraction::ResetRequested
                                    }
                                });
                            }

                            ui.add_space(12.0);
                            ui.separator();
                            ui.add_space(12.0);

                            if let Some(format) = format_panel::render_format_panel(ui, state) {
                                interaction = Some(PanelInteraction::FormatChosen(format));
                            }

                            ui.add_space(12.0);
                            ui.separator();
                            ui.add_space(12.0);

                            if let Some(action) = action_panel::render_action_panel(ui, state) {
                                interaction = Some(match action {
                                    action_panel::ActionPanelInteraction::BeginConversion => {
                                        PanelInteraction::ConversionRequested
                                    }
                                    action_panel::ActionPanelInteraction::Download => {
                                        PanelInteraction::DownloadRequested
                                    }
                                    action_panel::ActionPanelInteraction::ConvertAnother => {
                                        PanelInteraction::ResetRequested
                                    }
                                });
                            }
                        });

                    ui.add_space(20.0);
                    feature_strip::render_feature_strip(ui, &colors);
                });
            });

        if let Some(dialog_interaction) = name_dialog::render_name_dialog(ctx, state) {
            interaction = Some(match dialog_interaction {
                name_dialog::NameDialogInteraction::Edited(name) => PanelInteraction::NameEdited(name),
                name_dialog::NameDialogInteraction::Cancelled => PanelInteraction::NamingCancelled,
                name_dialog::NameDialogInteraction::Confirmed(name) => PanelInteraction::NameConfirmed(name),
            });
        }

        interaction
    }
}
