//! file: config.rs
//! author: Jacob Xie
//! date: 2025/12/21 10:02:36 Sunday
//! brief: window and animation settings read from TOML

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

const CONFIG_ENV: &str = "GPUI_MATCH_CONFIG";
const MIN_CARD_PX: f32 = 24.0;
const MIN_WINDOW_PX: f32 = 320.0;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub animation: AnimationSettings,
    pub board: BoardSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 720.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub reveal_ms: u64,
    pub conceal_ms: u64,
    /// Pause before a conceal starts, so a mismatch stays readable.
    pub conceal_delay_ms: u64,
    pub frame_ms: u64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            reveal_ms: 400,
            conceal_ms: 500,
            conceal_delay_ms: 500,
            frame_ms: 16,
        }
    }
}

impl AnimationSettings {
    pub fn reveal(&self) -> Duration {
        Duration::from_millis(self.reveal_ms)
    }

    pub fn conceal(&self) -> Duration {
        Duration::from_millis(self.conceal_ms)
    }

    pub fn conceal_delay(&self) -> Duration {
        Duration::from_millis(self.conceal_delay_ms)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub card_px: f32,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self { card_px: 96.0 }
    }
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut settings: Settings = toml::from_str(content).context("malformed settings")?;
        settings.clamp();
        Ok(settings)
    }

    fn clamp(&mut self) {
        let animation = &mut self.animation;
        for (name, value) in [
            ("reveal_ms", &mut animation.reveal_ms),
            ("conceal_ms", &mut animation.conceal_ms),
            ("frame_ms", &mut animation.frame_ms),
        ] {
            if *value == 0 {
                warn!(setting = name, "zero duration, using 1ms");
                *value = 1;
            }
        }

        let window = &mut self.window;
        for (name, value) in [("width", &mut window.width), ("height", &mut window.height)] {
            if value.is_nan() || *value < MIN_WINDOW_PX {
                warn!(setting = name, value = *value, min = MIN_WINDOW_PX, "window too small, clamping");
                *value = MIN_WINDOW_PX;
            }
        }

        if self.board.card_px.is_nan() || self.board.card_px < MIN_CARD_PX {
            warn!(card_px = self.board.card_px, min = MIN_CARD_PX, "card size too small, clamping");
            self.board.card_px = MIN_CARD_PX;
        }
    }
}

/// `$GPUI_MATCH_CONFIG`, else `<config_dir>/gpui-match/config.toml`.
pub fn settings_path() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV).map(PathBuf::from).or_else(|| {
        dirs::config_dir().map(|dir| dir.join("gpui-match").join("config.toml"))
    })
}

pub fn load_settings() -> Result<Settings> {
    match settings_path() {
        Some(path) => load_from(&path),
        None => Ok(Settings::default()),
    }
}

pub fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    Settings::from_toml(&content)
        .with_context(|| format!("failed to load settings from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_flip_timings() {
        let settings = Settings::default();

        assert_eq!(settings.animation.reveal(), Duration::from_millis(400));
        assert_eq!(settings.animation.conceal(), Duration::from_millis(500));
        assert_eq!(settings.animation.conceal_delay(), Duration::from_millis(500));
        assert_eq!(settings.board.card_px, 96.0);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml(
            r#"
            [animation]
            reveal_ms = 250

            [window]
            width = 800.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.animation.reveal_ms, 250);
        assert_eq!(settings.animation.conceal_ms, 500);
        assert_eq!(settings.window.width, 800.0);
        assert_eq!(settings.window.height, 720.0);
        assert_eq!(settings.board, BoardSettings::default());
    }

    #[test]
    fn zero_durations_and_tiny_cards_are_clamped() {
        let settings = Settings::from_toml(
            r#"
            [animation]
            reveal_ms = 0
            frame_ms = 0
            conceal_delay_ms = 0

            [board]
            card_px = 2.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.animation.reveal_ms, 1);
        assert_eq!(settings.animation.frame_ms, 1);
        assert_eq!(settings.animation.conceal_delay_ms, 0);
        assert_eq!(settings.board.card_px, MIN_CARD_PX);
    }

    #[test]
    fn bad_window_sizes_are_clamped() {
        let settings = Settings::from_toml(
            r#"
            [window]
            width = 0.0
            height = -40.0
            "#,
        )
        .unwrap();

        assert_eq!(settings.window.width, MIN_WINDOW_PX);
        assert_eq!(settings.window.height, MIN_WINDOW_PX);
        assert_eq!(
            Settings::from_toml("[window]\nwidth = nan").unwrap().window.width,
            MIN_WINDOW_PX
        );
        assert_eq!(Settings::from_toml("").unwrap().window, WindowSettings::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(Settings::from_toml("[animation]\nreveal_ms = \"fast\"").is_err());
    }

    #[test]
    fn missing_file_means_defaults() {
        let path = env::temp_dir().join("gpui-match-missing").join("config.toml");

        assert_eq!(load_from(&path).unwrap(), Settings::default());
    }
}
