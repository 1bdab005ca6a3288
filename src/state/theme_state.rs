//! Theme and styling state management.

use wordconv::{Theme, ThemeColors, ThemeManager};

/// State related to visual theme and styling.
pub struct ThemeState {
    /// Theme manager instance
    theme_manager: ThemeManager,
    /// Name of currently selected theme
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state with the light theme.
    pub fn new() -> Self {
        Self::with_theme("Light".to_string())
    }

    /// Creates a new theme state with a specific theme.
    ///
    /// Unknown names fall back to "Light".
    pub fn with_theme(theme_name: String) -> Self {
        let theme_manager = ThemeManager::new();
        let current_theme_name = if theme_manager.get_theme(&theme_name).is_some() {
            theme_name
        } else {
            tracing::warn!(theme = %theme_name, "unknown theme, using Light");
            "Light".to_string()
        };

        Self {
            theme_manager,
            current_theme_name,
        }
    }

    // ===== Theme Queries =====

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    pub fn current_theme(&self) -> &Theme {
        self.theme_manager.theme_or_default(&self.current_theme_name)
    }

    /// Palette of the current theme.
    pub fn colors(&self) -> &ThemeColors {
        &self.current_theme().colors
    }

    // ===== Theme Mutations =====

    /// Sets the current theme by name.
    pub fn set_theme(&mut self, theme_name: String) {
        self.current_theme_name = theme_name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back() {
        let state = ThemeState::with_theme("Neon".to_string());
        assert_eq!(state.current_theme_name(), "Light");
    }

    #[test]
    fn test_set_theme() {
        let mut state = ThemeState::new();
        state.set_theme("Dark".to_string());
        assert_eq!(state.current_theme().name, "Dark");
    }
}
