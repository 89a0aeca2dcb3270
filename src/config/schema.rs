use serde::{Deserialize, Serialize};

use crate::content::Track;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/sonic-universe/config.toml` or
/// `~/.config/sonic-universe/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SONIC__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub catalog: CatalogSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume applied when the page loads, in `[0.0, 1.0]`.
    pub initial_volume: f32,
    /// Increment used by the volume keys and the slider.
    pub volume_step: f32,
    /// How often the audio thread reports elapsed time (milliseconds).
    pub tick_ms: u64,
    /// Frequency of the embedded fallback tone (Hz).
    pub fallback_tone_hz: f32,
    /// Length of the embedded fallback tone (milliseconds).
    pub fallback_length_ms: u64,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            initial_volume: 0.7,
            volume_step: 0.1,
            tick_ms: 250,
            fallback_tone_hz: 440.0,
            fallback_length_ms: 3_000,
            quit_fade_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered in the hero banner box title.
    pub header_text: String,
    /// Fraction of a section that must be on screen before it is revealed.
    pub visibility_threshold: f32,
    /// When false every section is shown immediately, without the
    /// scroll-triggered entrance animation.
    pub entrance_animations: bool,
    /// Number of rows a revealed section unrolls per frame.
    pub reveal_rows_per_frame: u16,
    /// Rows scrolled by `j` / `k` and the mouse wheel.
    pub scroll_step: u16,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ Sonic Universe ~ ".to_string(),
            visibility_threshold: 0.1,
            entrance_animations: true,
            reveal_rows_per_frame: 2,
            scroll_step: 3,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Ordered track list. Sources may be local paths or `file://` URIs.
    pub tracks: Vec<Track>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            tracks: crate::content::showcase_tracks(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Whether to write a log file at all.
    pub enabled: bool,
    /// Default filter directive; `RUST_LOG` wins when set.
    pub level: String,
    /// Optional explicit log file path.
    pub file: Option<String>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            file: None,
        }
    }
}
