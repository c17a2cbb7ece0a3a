pub mod colors;
pub mod tokens;
pub mod visuals;

use egui::Visuals;
use serde::{Deserialize, Serialize};

use colors::ThemeColors;
use tokens::Palette;

/// Theme selected in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
    HighContrast,
    /// Follow the OS light/dark preference at start-up.
    System,
}

impl ThemeMode {
    pub fn display_name(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Dark",
            ThemeMode::Light => "Light",
            ThemeMode::HighContrast => "High Contrast",
            ThemeMode::System => "System",
        }
    }

    /// Replace `System` with what the OS reports; unknown counts as dark.
    pub fn resolve(self) -> Self {
        if self != ThemeMode::System {
            return self;
        }
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            Ok(_) => ThemeMode::Dark,
            Err(e) => {
                log::debug!("System theme detection failed: {e}");
                ThemeMode::Dark
            }
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Dark | ThemeMode::System => &tokens::NAVY,
            ThemeMode::Light => &tokens::PAPER,
            ThemeMode::HighContrast => &tokens::HIGH_CONTRAST,
        }
    }

    pub fn visuals(self) -> Visuals {
        visuals::build_visuals(self.palette())
    }

    pub fn colors(self) -> ThemeColors {
        ThemeColors::from(self.palette())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_modes_resolve_to_themselves() {
        for mode in [ThemeMode::Dark, ThemeMode::Light, ThemeMode::HighContrast] {
            assert_eq!(mode.resolve(), mode);
        }
    }

    #[test]
    fn system_draws_with_dark_palette_until_resolved() {
        assert_eq!(ThemeMode::System.palette(), ThemeMode::Dark.palette());
    }

    #[test]
    fn high_contrast_uses_pure_black_canvas() {
        assert_eq!(ThemeMode::HighContrast.colors().canvas, egui::Color32::BLACK);
        assert!(!ThemeMode::Light.visuals().dark_mode);
    }

    #[test]
    fn theme_mode_parses_from_config_names() {
        let m: ThemeMode = serde_json::from_str("\"HighContrast\"").unwrap();
        assert_eq!(m, ThemeMode::HighContrast);
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }
}
