//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and composes the playback
//! controller, the visibility tracker and the page viewport.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
