use std::path::Path;

use tracing::warn;

use crate::config;

/// Load settings, falling back to defaults on any problem.
///
/// Returns the settings plus a message describing why defaults were used,
/// so the caller can log it once logging is up.
pub fn load_settings(path: Option<&Path>) -> (config::Settings, Option<String>) {
    let loaded = match path {
        Some(p) => config::Settings::load_from(Some(p)),
        None => config::Settings::load(),
    };
    match loaded {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                (config::Settings::default(), Some(format!("invalid config, using defaults: {msg}")))
            } else {
                (s, None)
            }
        }
        // Config is optional; failures should not prevent the app from starting.
        Err(e) => (config::Settings::default(), Some(format!("failed to load config, using defaults: {e}"))),
    }
}

/// Log a deferred settings problem.
pub fn report(problem: Option<String>) {
    if let Some(msg) = problem {
        warn!("{msg}");
    }
}
