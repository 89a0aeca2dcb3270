//! Commands understood by the audio thread.

use crate::playback::{LoadId, MediaSource, PlayToken};

#[derive(Debug)]
pub enum AudioCmd {
    /// Replace the current source; playback stops.
    Load { load: LoadId, source: MediaSource },
    /// Start (or resume) the current source and report the outcome.
    Play { token: PlayToken },
    /// Pause, keeping the position.
    Pause,
    /// Jump to the given position in seconds.
    Seek(f64),
    /// Set the output volume, `0.0..=1.0`.
    SetVolume(f32),
    /// Quit the audio thread, fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}
