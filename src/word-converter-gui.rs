//! Word Document Converter GUI Application
//!
//! Desktop front end for converting Word documents, built on egui. The window
//! walks the user through a short workflow:
//! - Pick or drop a `.doc`/`.docx` file
//! - Choose one of the supported output formats
//! - Name the output file and start the (simulated) conversion
//! - Save the result through a native save dialog

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and coordinators (workflow, theme, settings)
//! - `io/` - Background conversion runner and artifact saving
//! - `state/` - UI-only state (theme, export location, notices)
//! - `ui/` - Panel rendering and the naming dialog
//! - `utils/` - Formatting helpers

use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordconv::{ConverterConfig, SimulatedConverter};

mod utils;
mod io;
mod app;
mod state;
mod ui;

use app::{AppState, ApplicationCoordinator, ThemeCoordinator, SettingsCoordinator};
use io::AsyncConverter;
use ui::panel_manager::{PanelInteraction, PanelManager};

const LAST_SAVE_DIR_KEY: &str = "last_save_dir";

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "word-converter-gui", about = "Convert Word documents to other formats")]
struct Cli {
    /// Word document to preselect on startup
    document: Option<PathBuf>,

    /// Length of the simulated conversion in milliseconds
    #[arg(long = "delay-ms", default_value_t = wordconv::config::DEFAULT_DELAY_MS)]
    delay_ms: u64,

    /// Theme to use instead of the stored preference ("Light" or "Dark")
    #[arg(long)]
    theme: Option<String>,
}

/// Main application entry point that initializes logging and launches the converter window.
fn main() -> eframe::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = ConverterConfig::with_delay_ms(cli.delay_ms);
    tracing::info!(?config, document = ?cli.document, "starting document converter");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 820.0])
            .with_min_inner_size([640.0, 600.0])
            .with_title("Document Converter")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Document Converter",
        options,
        Box::new(move |cc| Ok(Box::new(ConverterApp::new(cc, cli, config)))),
    )
}

/// The converter application.
///
/// Delegates to coordinators:
/// - `ApplicationCoordinator` drives the workflow and the background conversion
/// - `ThemeCoordinator` handles theme persistence and application
/// - `PanelManager` lays out and renders the panels
struct ConverterApp {
    /// Centralized application state
    state: AppState,
    /// Background conversion runner
    converter: AsyncConverter,
    /// Optional document to select on first frame
    pending_document: Option<PathBuf>,
}

impl ConverterApp {
    /// Creates the app with theme and export settings restored from persistent storage.
    fn new(cc: &eframe::CreationContext, cli: Cli, config: ConverterConfig) -> Self {
        let theme_name = cli
            .theme
            .unwrap_or_else(|| ThemeCoordinator::load_theme_from_storage(cc.storage));
        let last_save_dir: Option<PathBuf> =
            SettingsCoordinator::try_load_setting(cc.storage, LAST_SAVE_DIR_KEY);

        let engine = SimulatedConverter::new(config.conversion_delay());

        Self {
            state: AppState::with_settings(theme_name, last_save_dir),
            converter: AsyncConverter::new(engine),
            pending_document: cli.document,
        }
    }

    /// Routes a panel interaction to the matching coordinator operation.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::SourcePicked(path) => {
                ApplicationCoordinator::open_source_path(&mut self.state, &path);
            }
            PanelInteraction::SourceDropped(source) => {
                ApplicationCoordinator::select_source(&mut self.state, source);
            }
            PanelInteraction::FormatChosen(format) => {
                ApplicationCoordinator::choose_format(&mut self.state, format);
            }
            PanelInteraction::ConversionRequested => {
                ApplicationCoordinator::request_conversion(&mut self.state);
            }
            PanelInteraction::NameEdited(name) => {
                ApplicationCoordinator::edit_name(&mut self.state, name);
            }
            PanelInteraction::NamingCancelled => {
                ApplicationCoordinator::cancel_naming(&mut self.state);
            }
            PanelInteraction::NameConfirmed(name) => {
                ApplicationCoordinator::confirm_name(&mut self.state, &mut self.converter, name, ctx);
            }
            PanelInteraction::DownloadRequested => {
                ApplicationCoordinator::download(&mut self.state);
            }
            PanelInteraction::ResetRequested => {
                ApplicationCoordinator::reset(&mut self.state, &mut self.converter);
            }
        }
    }
}

impl eframe::App for ConverterApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        if let Some(dir) = self.state.export.last_save_dir() {
            SettingsCoordinator::save_setting(storage, LAST_SAVE_DIR_KEY, &dir);
        }
    }

    /// Main update loop:
    /// 1. Apply a finished background conversion
    /// 2. Apply theme
    /// 3. Select the command-line document (first frame only)
    /// 4. Render panels and handle the resulting interaction
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ApplicationCoordinator::check_conversion_completion(&mut self.state, &mut self.converter);

        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        if let Some(path) = self.pending_document.take() {
            ApplicationCoordinator::open_source_path(&mut self.state, &path);
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state, &mut self.converter) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}
