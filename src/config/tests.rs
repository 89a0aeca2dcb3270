use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_sonic_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("SONIC_CONFIG_PATH", "/tmp/sonic-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/sonic-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("sonic-universe")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("sonic-universe")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_uses_state_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_STATE_HOME", "/tmp/xdg-state");
    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-state/sonic-universe/sonic-universe.log")
    );

    let _g2 = EnvGuard::remove("XDG_STATE_HOME");
    let _g3 = EnvGuard::set("HOME", "/tmp/home-dir");
    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.local/state/sonic-universe/sonic-universe.log")
    );
}

#[test]
fn defaults_are_valid_and_match_the_showcase() {
    let s = Settings::default();
    assert!(s.validate().is_ok());
    assert_eq!(s.audio.initial_volume, 0.7);
    assert_eq!(s.ui.visibility_threshold, 0.1);
    assert_eq!(s.catalog.tracks.len(), 3);
    assert_eq!(s.catalog.tracks[0].name, "Ethereal Waves");
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
initial_volume = 0.4
tick_ms = 100
quit_fade_out_ms = 0

[ui]
header_text = "hello"
visibility_threshold = 0.5
entrance_animations = false

[logging]
level = "debug"

[[catalog.tracks]]
name = "Local One"
artist = "Me"
source = "/music/one.flac"

[[catalog.tracks]]
name = "Local Two"
artist = "Me"
duration_label = "1:23"
source = "file:///music/two.ogg"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SONIC_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("SONIC__AUDIO__INITIAL_VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.initial_volume, 0.4);
    assert_eq!(s.audio.tick_ms, 100);
    assert_eq!(s.audio.quit_fade_out_ms, 0);
    // Untouched keys keep their defaults.
    assert_eq!(s.audio.volume_step, 0.1);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.visibility_threshold, 0.5);
    assert!(!s.ui.entrance_animations);
    assert_eq!(s.logging.level, "debug");
    assert_eq!(s.catalog.tracks.len(), 2);
    assert_eq!(s.catalog.tracks[0].duration_label, "");
    assert_eq!(s.catalog.tracks[1].source, "file:///music/two.ogg");
    assert!(s.validate().is_ok());
}

#[test]
fn missing_config_file_yields_defaults() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let _g = EnvGuard::remove("SONIC__AUDIO__INITIAL_VOLUME");

    let s = Settings::load_from(Some(&dir.path().join("absent.toml"))).unwrap();
    assert_eq!(s.audio.initial_volume, 0.7);
    assert_eq!(s.catalog.tracks.len(), 3);
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
initial_volume = 0.2
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SONIC__AUDIO__INITIAL_VOLUME", "0.9");

    let s = Settings::load_from(Some(&cfg_path)).unwrap();
    assert_eq!(s.audio.initial_volume, 0.9);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    s.audio.initial_volume = 1.5;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.ui.visibility_threshold = -0.1;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.ui.reveal_rows_per_frame = 0;
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.catalog.tracks.clear();
    assert!(s.validate().unwrap_err().contains("catalog"));
}

#[test]
fn to_toml_reloads_to_the_same_settings() {
    let _lock = env_lock();
    let _g = EnvGuard::remove("SONIC__AUDIO__INITIAL_VOLUME");

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    let mut s = Settings::default();
    s.ui.header_text = "dumped".to_string();
    std::fs::write(&cfg_path, s.to_toml().unwrap()).unwrap();

    let loaded = Settings::load_from(Some(&cfg_path)).unwrap();
    assert_eq!(loaded.ui.header_text, "dumped");
    assert_eq!(loaded.catalog.tracks, s.catalog.tracks);
}
