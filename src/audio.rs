//! Audio backend: the production `MediaResource`.
//!
//! A dedicated thread owns the `rodio` output stream and the current sink.
//! The UI thread talks to it through `AudioPlayer`, which forwards commands
//! over a channel and hands back the thread's status events.

mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;
