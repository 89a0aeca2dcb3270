//! Contract between the controller and whatever actually produces sound.
//!
//! Commands are fire-and-forget. The only command with an outcome is
//! `play`, whose result comes back later as `ResourceEventKind::PlayResolved`
//! carrying the same `PlayToken`.

use std::fmt;

/// Identifies one `load` call. Status events carry the id of the source
/// they were produced for.
pub type LoadId = u64;

/// Identifies one start-playback request.
pub type PlayToken = u64;

/// What the resource should play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// A catalog entry's source locator.
    Uri(String),
    /// The embedded tone that is always available.
    Fallback,
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaSource::Uri(uri) => f.write_str(uri),
            MediaSource::Fallback => f.write_str("<fallback tone>"),
        }
    }
}

/// Why a start-playback request was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartError {
    /// The locator scheme cannot be played (e.g. remote streams).
    Unsupported(String),
    /// The source could not be opened.
    Unreachable(String),
    /// The source was opened but could not be decoded.
    Decode(String),
    /// There is no audio output to play on.
    NoOutputDevice,
    /// A start was requested before anything was loaded.
    NothingLoaded,
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartError::Unsupported(src) => write!(f, "unsupported source: {src}"),
            StartError::Unreachable(msg) => write!(f, "source unreachable: {msg}"),
            StartError::Decode(msg) => write!(f, "cannot decode source: {msg}"),
            StartError::NoOutputDevice => write!(f, "no audio output device"),
            StartError::NothingLoaded => write!(f, "no source loaded"),
        }
    }
}

impl std::error::Error for StartError {}

#[derive(Debug, Clone, PartialEq)]
pub enum ResourceEventKind {
    /// Playback position moved (seconds).
    TimeUpdate(f64),
    /// Total length became known (seconds).
    MetadataLoaded(f64),
    /// The source played to its natural end.
    Ended,
    /// Outcome of the start request identified by `token`.
    PlayResolved {
        token: PlayToken,
        result: Result<(), StartError>,
    },
}

/// A status report emitted by the resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceEvent {
    pub load: LoadId,
    pub kind: ResourceEventKind,
}

impl ResourceEvent {
    pub fn time_update(load: LoadId, seconds: f64) -> Self {
        Self {
            load,
            kind: ResourceEventKind::TimeUpdate(seconds),
        }
    }

    pub fn metadata(load: LoadId, duration: f64) -> Self {
        Self {
            load,
            kind: ResourceEventKind::MetadataLoaded(duration),
        }
    }

    pub fn ended(load: LoadId) -> Self {
        Self {
            load,
            kind: ResourceEventKind::Ended,
        }
    }

    pub fn play_resolved(load: LoadId, token: PlayToken, result: Result<(), StartError>) -> Self {
        Self {
            load,
            kind: ResourceEventKind::PlayResolved { token, result },
        }
    }
}

/// A single media playback handle, exclusively driven by the controller.
pub trait MediaResource {
    /// Replace the current source. Playback stops until the next `play`.
    fn load(&mut self, load: LoadId, source: &MediaSource);
    /// Ask the resource to start; the outcome arrives as `PlayResolved`.
    fn play(&mut self, token: PlayToken);
    fn pause(&mut self);
    /// Jump to `position` seconds into the current source.
    fn seek(&mut self, position: f64);
    fn set_volume(&mut self, volume: f32);
}
