use std::{
    env,
    path::{Path, PathBuf},
};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file and then applies
/// environment variables (prefix `SONIC__`) on top, falling back to struct
/// defaults.
impl Settings {
    /// Load settings from the discovered config path and the environment.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Load settings from `path` (if any) and the environment.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("SONIC")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.audio.initial_volume) {
            return Err("audio.initial_volume must be within 0.0..=1.0".to_string());
        }
        if !(self.audio.volume_step > 0.0 && self.audio.volume_step <= 1.0) {
            return Err("audio.volume_step must be within (0.0, 1.0]".to_string());
        }
        if self.audio.tick_ms == 0 {
            return Err("audio.tick_ms must be >= 1".to_string());
        }
        if self.audio.fallback_length_ms == 0 {
            return Err("audio.fallback_length_ms must be >= 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.ui.visibility_threshold) {
            return Err("ui.visibility_threshold must be within 0.0..=1.0".to_string());
        }
        if self.ui.reveal_rows_per_frame == 0 {
            return Err("ui.reveal_rows_per_frame must be >= 1".to_string());
        }
        if self.catalog.tracks.is_empty() {
            return Err("catalog.tracks must contain at least one track".to_string());
        }
        Ok(())
    }

    /// Render the settings as TOML, e.g. to seed a config file.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Resolve the config path from `SONIC_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("SONIC_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under
/// `$XDG_CONFIG_HOME/sonic-universe/config.toml` or
/// `~/.config/sonic-universe/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("sonic-universe").join("config.toml"))
}

/// Compute the default log file path under
/// `$XDG_STATE_HOME/sonic-universe/` or `~/.local/state/sonic-universe/`.
pub fn default_log_path() -> Option<PathBuf> {
    let state_home = if let Some(xdg) = env::var_os("XDG_STATE_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("state"))
    };

    state_home.map(|d| d.join("sonic-universe").join("sonic-universe.log"))
}
