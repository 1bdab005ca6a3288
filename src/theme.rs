//! Theme support for the converter GUI
//!
//! Provides the colour palettes used by the conversion studio (drop zone,
//! primary actions, success banner, format badges) and a small manager that
//! applies them to egui visuals. Two built-in themes ship: "Light" (slate on
//! white) and "Dark".
//!
//! # Examples
//!
//! ```
//! use wordconv::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let light = manager.get_theme("Light").unwrap();
//! println!("Light accent: {:?}", light.colors.accent);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Colour palette for every element of the converter window
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Surfaces
    pub background: Color32,
    pub card_background: Color32,
    pub extreme_background: Color32,

    // Text
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Primary action (slate button)
    pub accent: Color32,
    pub accent_hover: Color32,
    pub on_accent: Color32,

    // Drop zone
    pub drop_border: Color32,
    pub drop_hover: Color32,

    // Completed state (emerald)
    pub success: Color32,
    pub success_background: Color32,
    pub success_border: Color32,

    // Misc
    pub badge: Color32,
    pub border: Color32,
    pub error: Color32,
    pub warning: Color32,
}

/// A named palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Registry of the built-in themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    fallback: Theme,
}

impl ThemeManager {
    /// Creates a manager holding all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());

        Self {
            themes,
            fallback: light_theme(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns the theme with the given name, or "Light" if it does not exist
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes.get(name).unwrap_or(&self.fallback)
    }

    /// Returns a sorted list of all theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's colours to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.card_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.drop_hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = with_alpha(colors.accent, 60);
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.card_background;
        visuals.widgets.noninteractive.bg_stroke.color = colors.border;
        visuals.widgets.inactive.weak_bg_fill = colors.drop_hover;
        visuals.widgets.hovered.weak_bg_fill = colors.drop_border;

        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.warning;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Slate-on-white palette
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Slate on white with emerald highlights".to_string(),
        colors: ThemeColors {
            // slate-50 / white
            background: hex_to_color32("#f8fafc"),
            card_background: hex_to_color32("#ffffff"),
            extreme_background: hex_to_color32("#ffffff"),

            // slate-700 / slate-500 / slate-900
            text: hex_to_color32("#334155"),
            text_dim: hex_to_color32("#64748b"),
            text_strong: hex_to_color32("#0f172a"),

            // slate-900 / slate-800
            accent: hex_to_color32("#0f172a"),
            accent_hover: hex_to_color32("#1e293b"),
            on_accent: Color32::WHITE,

            // slate-300 / slate-50
            drop_border: hex_to_color32("#cbd5e1"),
            drop_hover: hex_to_color32("#f1f5f9"),

            // emerald-600 / emerald-50 / emerald-300
            success: hex_to_color32("#059669"),
            success_background: hex_to_color32("#ecfdf5"),
            success_border: hex_to_color32("#6ee7b7"),

            badge: hex_to_color32("#e2e8f0"),
            border: hex_to_color32("#e2e8f0"),
            error: hex_to_color32("#dc2626"),
            warning: hex_to_color32("#d97706"),
        },
    }
}

/// Dark palette
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark slate with emerald highlights".to_string(),
        colors: ThemeColors {
            background: hex_to_color32("#0f172a"),
            card_background: hex_to_color32("#1e293b"),
            extreme_background: hex_to_color32("#020617"),

            text: hex_to_color32("#cbd5e1"),
            text_dim: hex_to_color32("#94a3b8"),
            text_strong: hex_to_color32("#f8fafc"),

            accent: hex_to_color32("#e2e8f0"),
            accent_hover: hex_to_color32("#f8fafc"),
            on_accent: hex_to_color32("#0f172a"),

            drop_border: hex_to_color32("#475569"),
            drop_hover: hex_to_color32("#334155"),

            success: hex_to_color32("#34d399"),
            success_background: hex_to_color32("#064e3b"),
            success_border: hex_to_color32("#047857"),

            badge: hex_to_color32("#334155"),
            border: hex_to_color32("#334155"),
            error: hex_to_color32("#f87171"),
            warning: hex_to_color32("#fbbf24"),
        },
    }
}

/// Converts a hex colour string (like "#0f172a") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}

/// Sets the alpha channel of a colour
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
