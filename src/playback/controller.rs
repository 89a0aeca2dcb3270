use tracing::{debug, info, trace, warn};

use crate::content::Track;

use super::catalog::Catalog;
use super::resource::{
    LoadId, MediaResource, MediaSource, PlayToken, ResourceEvent, ResourceEventKind,
};
use super::state::{Phase, PlaybackState};

/// Mediates every playback intent against a single `MediaResource`.
///
/// All methods run on the UI thread. The resource answers asynchronously
/// through `handle_event`; answers for replaced sources or superseded start
/// requests are dropped.
pub struct Controller<R: MediaResource> {
    catalog: Catalog,
    state: PlaybackState,
    resource: R,
    active: Option<MediaSource>,
    load_id: LoadId,
    next_token: PlayToken,
    /// The single start request currently in flight, if any.
    pending: Option<PlayToken>,
}

impl<R: MediaResource> Controller<R> {
    pub fn new(catalog: Catalog, resource: R, volume: f32) -> Self {
        Self {
            catalog,
            state: PlaybackState::new(volume),
            resource,
            active: None,
            load_id: 0,
            next_token: 1,
            pending: None,
        }
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn resource_mut(&mut self) -> &mut R {
        &mut self.resource
    }

    pub fn current_track(&self) -> &Track {
        &self.catalog.tracks()[self.state.current_track_index]
    }

    /// The source the resource currently holds, `None` before `mount`.
    pub fn active_source(&self) -> Option<&MediaSource> {
        self.active.as_ref()
    }

    pub fn is_start_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn phase(&self) -> Phase {
        if self.pending.is_some() {
            Phase::Switching
        } else if self.state.is_playing {
            Phase::Playing
        } else if self.state.current_time > 0.0 {
            Phase::Paused
        } else {
            Phase::Idle
        }
    }

    /// Load the initial track into the resource. Calling it twice is a no-op.
    pub fn mount(&mut self) {
        if self.active.is_some() {
            return;
        }
        self.change_track(self.state.current_track_index, false);
    }

    /// Start playback when stopped, pause it when playing.
    ///
    /// Pressing again while a start is still outstanding withdraws that
    /// request instead of issuing a second one.
    pub fn toggle_play_pause(&mut self) {
        if self.state.is_playing {
            self.pending = None;
            self.resource.pause();
            self.state.is_playing = false;
            debug!(time = self.state.current_time, "paused");
        } else if let Some(token) = self.pending.take() {
            self.resource.pause();
            debug!(token, "start request withdrawn");
        } else if self.active.is_none() {
            debug!("play requested before a source was loaded");
        } else {
            self.request_start();
        }
    }

    pub fn next_track(&mut self) {
        let index = self.catalog.next_index(self.state.current_track_index);
        let resume = self.intends_to_play();
        self.change_track(index, resume);
    }

    pub fn previous_track(&mut self) {
        let index = self.catalog.previous_index(self.state.current_track_index);
        let resume = self.intends_to_play();
        self.change_track(index, resume);
    }

    /// Jump to `ratio` (0.0 = start, 1.0 = end) of the current track.
    ///
    /// Ignored until the track length is known.
    pub fn seek(&mut self, ratio: f64) {
        let Some(duration) = self.state.duration.filter(|d| d.is_finite() && *d > 0.0) else {
            trace!("seek ignored: duration unknown");
            return;
        };
        if self.active.is_none() || !ratio.is_finite() {
            return;
        }

        let target = ratio.clamp(0.0, 1.0) * duration;
        self.resource.seek(target);
        self.state.current_time = target;
        debug!(target, "seek");
    }

    pub fn set_volume(&mut self, volume: f32) {
        if volume.is_nan() {
            return;
        }
        let volume = volume.clamp(0.0, 1.0);
        self.state.volume = volume;
        self.resource.set_volume(volume);
    }

    /// Apply a status report from the resource.
    pub fn handle_event(&mut self, event: ResourceEvent) {
        if event.load != self.load_id {
            trace!(load = event.load, current = self.load_id, "dropping event for a replaced source");
            return;
        }

        match event.kind {
            ResourceEventKind::TimeUpdate(seconds) => {
                if !seconds.is_finite() {
                    return;
                }
                let mut t = seconds.max(0.0);
                if let Some(d) = self.state.duration {
                    t = t.min(d);
                }
                self.state.current_time = t;
            }
            ResourceEventKind::MetadataLoaded(duration) => {
                if duration.is_finite() && duration > 0.0 {
                    self.state.duration = Some(duration);
                    self.state.current_time = self.state.current_time.min(duration);
                } else {
                    self.state.duration = None;
                }
            }
            ResourceEventKind::Ended => self.on_ended(),
            ResourceEventKind::PlayResolved { token, result } => {
                if self.pending != Some(token) {
                    debug!(token, "dropping superseded start result");
                    return;
                }
                self.pending = None;
                match result {
                    Ok(()) => {
                        self.state.is_playing = true;
                        debug!(token, "playback started");
                    }
                    Err(e) => {
                        warn!(error = %e, source = ?self.active, "playback failed to start, switching to fallback");
                        self.state.is_playing = false;
                        self.load(MediaSource::Fallback);
                    }
                }
            }
        }
    }

    fn intends_to_play(&self) -> bool {
        self.state.is_playing || self.pending.is_some()
    }

    fn on_ended(&mut self) {
        let index = self.state.current_track_index;
        let was_playing = self.state.is_playing;
        self.state.current_time = 0.0;

        if self.catalog.is_last(index) {
            self.pending = None;
            self.state.is_playing = false;
            info!(index, "end of catalog reached");
        } else {
            self.change_track(index + 1, was_playing);
        }
    }

    /// Point the controller at `index` and reload the resource. Playback is
    /// restarted only when `resume` is set.
    fn change_track(&mut self, index: usize, resume: bool) {
        self.state.current_track_index = index;
        let source = MediaSource::Uri(self.current_track().source.clone());
        info!(index, track = %self.current_track().name, resume, "track changed");
        self.load(source);
        if resume {
            self.request_start();
        }
    }

    fn load(&mut self, source: MediaSource) {
        self.load_id += 1;
        self.pending = None;
        self.state.current_time = 0.0;
        self.state.duration = None;
        self.resource.load(self.load_id, &source);
        self.resource.set_volume(self.state.volume);
        self.active = Some(source);
    }

    fn request_start(&mut self) {
        let token = self.next_token;
        self.next_token += 1;
        self.pending = Some(token);
        self.resource.play(token);
        debug!(token, load = self.load_id, "start requested");
    }
}
