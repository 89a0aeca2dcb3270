//! Utilities for turning a `MediaSource` into a playing `rodio` sink.
//!
//! Only local files are decoded. Remote locators are rejected up front so
//! the controller can fall back to the embedded tone.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::file::AudioFile;
use rodio::source::SineWave;
use rodio::{Decoder, OutputStream, Sink, Source};

use crate::config::AudioSettings;
use crate::playback::{MediaSource, StartError};

/// A source the audio thread knows how to open.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Playable {
    File(PathBuf),
    Tone { hz: f32, length: Duration },
}

/// Work out how to play `source` without touching the audio device.
pub(super) fn resolve(source: &MediaSource, settings: &AudioSettings) -> Result<Playable, StartError> {
    let uri = match source {
        MediaSource::Fallback => {
            return Ok(Playable::Tone {
                hz: settings.fallback_tone_hz,
                length: Duration::from_millis(settings.fallback_length_ms),
            });
        }
        MediaSource::Uri(uri) => uri.trim(),
    };

    if let Some(path) = uri.strip_prefix("file://") {
        return Ok(Playable::File(PathBuf::from(path)));
    }
    // Anything else with a scheme (http, https, data, ...) needs a network
    // stack or an inline decoder we do not have.
    if uri.contains("://") || uri.starts_with("data:") {
        return Err(StartError::Unsupported(uri.to_string()));
    }
    if uri.is_empty() {
        return Err(StartError::Unreachable("empty source".to_string()));
    }
    Ok(Playable::File(PathBuf::from(uri)))
}

/// Length of `playable` as far as it can be known before decoding.
pub(super) fn probe_duration(playable: &Playable) -> Option<Duration> {
    match playable {
        Playable::Tone { length, .. } => Some(*length),
        Playable::File(path) => probe_file_duration(path),
    }
}

fn probe_file_duration(path: &Path) -> Option<Duration> {
    let tagged = lofty::read_from_path(path).ok()?;
    let d = tagged.properties().duration();
    (!d.is_zero()).then_some(d)
}

/// Create a paused `Sink` for `playable` that starts playback at `start_at`.
///
/// Also returns the decoder's own length estimate, if any.
pub(super) fn create_sink_at(
    stream: &OutputStream,
    playable: &Playable,
    start_at: Duration,
) -> Result<(Sink, Option<Duration>), StartError> {
    let sink = Sink::connect_new(stream.mixer());

    let total = match playable {
        Playable::File(path) => {
            let file = File::open(path)
                .map_err(|e| StartError::Unreachable(format!("{}: {e}", path.display())))?;
            let decoder = Decoder::new(BufReader::new(file))
                .map_err(|e| StartError::Decode(format!("{}: {e}", path.display())))?;
            let total = decoder.total_duration();
            // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
            sink.append(decoder.skip_duration(start_at));
            total
        }
        Playable::Tone { hz, length } => {
            let tone = SineWave::new(*hz)
                .take_duration(*length)
                .amplify(0.2)
                .skip_duration(start_at);
            sink.append(tone);
            Some(*length)
        }
    };

    sink.pause();
    Ok((sink, total))
}
