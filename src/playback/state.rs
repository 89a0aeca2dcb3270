/// Transport state owned by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub current_track_index: usize,
    /// Intended state; the resource may still be starting or may fail.
    pub is_playing: bool,
    /// Elapsed seconds in the current track.
    pub current_time: f64,
    /// Total seconds, `None` until the resource reports metadata.
    pub duration: Option<f64>,
    pub volume: f32,
}

impl PlaybackState {
    pub fn new(volume: f32) -> Self {
        Self {
            current_track_index: 0,
            is_playing: false,
            current_time: 0.0,
            duration: None,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    /// Fraction of the track already played, `0.0` while the length is unknown.
    pub fn progress(&self) -> f64 {
        match self.duration {
            Some(d) if d.is_finite() && d > 0.0 => (self.current_time / d).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(0.7)
    }
}

/// The controller's state-machine label, derived from `PlaybackState` and
/// the outstanding start request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not playing, at the start of the track.
    Idle,
    /// Not playing, somewhere inside the track.
    Paused,
    /// A start request is waiting for the resource.
    Switching,
    Playing,
}
