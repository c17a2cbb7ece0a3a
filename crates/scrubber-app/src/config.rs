use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::timeline::TimelineStyle;
use crate::ui::theme::ThemeMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

/// Which transport controls are created. A disabled control is treated as a
/// missing element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub play_button: bool,
    pub volume: bool,
    pub speed: bool,
    pub fullscreen: bool,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            play_button: true,
            volume: true,
            speed: true,
            fullscreen: true,
        }
    }
}

/// Parameters of the simulated media source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Length in seconds; absent for a stream of unknown length.
    pub duration: Option<f64>,
    /// Seconds before metadata becomes available.
    pub metadata_delay: f64,
    pub volume: f64,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            duration: Some(212.0),
            metadata_delay: 0.4,
            volume: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub theme: ThemeMode,
    pub timeline: TimelineStyle,
    pub controls: ControlsConfig,
    pub speeds: Vec<String>,
    pub media: MediaConfig,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Dark,
            timeline: TimelineStyle::default(),
            controls: ControlsConfig::default(),
            speeds: ["0.5×", "0.75×", "1×", "1.25×", "1.5×", "2×"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            media: MediaConfig::default(),
        }
    }
}

impl PlayerConfig {
    /// Default location: `<config dir>/scrubber/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("scrubber").join("config.json"))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `explicit` or the default path. Falls back to defaults on any
    /// failure; a missing default file is not worth a warning.
    pub fn load(explicit: Option<&Path>) -> Self {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => {
                    log::info!("No config file, using defaults");
                    return Self::default();
                }
            },
        };
        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e}, using defaults");
                Self::default()
            }
        }
    }
}

pub fn parse_hex_color(text: &str) -> Result<Color32, ConfigError> {
    let invalid = || ConfigError::InvalidColor(text.to_string());
    let hex = text.trim().strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

pub fn format_hex_color(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// Serde adapter storing colors as `#rrggbb` strings.
pub mod hex_color {
    use egui::Color32;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    pub fn serialize<S: Serializer>(color: &Color32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_hex_color(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color32, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_hex_color(&text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_hex_color("#7a7fff").unwrap(), Color32::from_rgb(0x7a, 0x7f, 0xff));
        assert_eq!(parse_hex_color(" #4CC9F0 ").unwrap(), Color32::from_rgb(0x4c, 0xc9, 0xf0));
        assert!(matches!(parse_hex_color("7a7fff"), Err(ConfigError::InvalidColor(_))));
        assert!(parse_hex_color("#7a7ff").is_err());
        assert!(parse_hex_color("#zz7fff").is_err());
        assert!(parse_hex_color("#é7fff").is_err());
    }

    #[test]
    fn hex_format() {
        assert_eq!(format_hex_color(Color32::from_rgb(0x1d, 0x2a, 0x4e)), "#1d2a4e");
    }

    #[test]
    fn defaults_match_player_palette() {
        let c = PlayerConfig::default();
        assert_eq!(c.timeline.accent_start, Color32::from_rgb(0x7a, 0x7f, 0xff));
        assert_eq!(c.timeline.seek_steps, 20);
        assert!((c.timeline.knob_scale - 0.45).abs() < 1e-6);
        assert_eq!(c.speeds.len(), 6);
        assert!(c.controls.fullscreen);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r##"{
            "theme": "Light",
            "timeline": { "accent_end": "#ff0000", "seek_steps": 10 },
            "controls": { "speed": false },
            "media": { "duration": null }
        }"##;
        let c: PlayerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(c.theme, ThemeMode::Light);
        assert_eq!(c.timeline.accent_end, Color32::from_rgb(0xff, 0, 0));
        assert_eq!(c.timeline.accent_start, Color32::from_rgb(0x7a, 0x7f, 0xff));
        assert_eq!(c.timeline.seek_steps, 10);
        assert!(!c.controls.speed);
        assert!(c.controls.volume);
        assert_eq!(c.media.duration, None);
        assert_eq!(c.speeds.len(), 6);
    }

    #[test]
    fn bad_color_rejected() {
        let json = r#"{ "timeline": { "knob_color": "white" } }"#;
        let err = serde_json::from_str::<PlayerConfig>(json).unwrap_err();
        assert!(err.to_string().contains("invalid color"));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "speeds": ["1×", "2×"] }}"#).unwrap();
        let c = PlayerConfig::load_from(file.path()).unwrap();
        assert_eq!(c.speeds, vec!["1×".to_string(), "2×".to_string()]);
    }

    #[test]
    fn load_from_reports_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(PlayerConfig::load_from(&missing), Err(ConfigError::Io { .. })));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(PlayerConfig::load_from(&broken), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn load_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "[]").unwrap();
        assert_eq!(PlayerConfig::load(Some(&broken)), PlayerConfig::default());
    }

    #[test]
    fn serde_roundtrip_keeps_colors() {
        let c = PlayerConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let back: PlayerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
