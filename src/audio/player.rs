use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::warn;

use crate::config::AudioSettings;
use crate::playback::{LoadId, MediaResource, MediaSource, PlayToken, ResourceEvent};

use super::thread::spawn_audio_thread;
use super::types::AudioCmd;

/// Handle to the audio thread.
pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    events: Receiver<ResourceEvent>,
    join: Option<JoinHandle<()>>,
}

impl AudioPlayer {
    pub fn new(settings: AudioSettings) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, events) = mpsc::channel::<ResourceEvent>();
        let join = spawn_audio_thread(rx, event_tx, settings);

        Self {
            tx,
            events,
            join: Some(join),
        }
    }

    /// Status events produced since the last call, without blocking.
    pub fn drain_events(&self) -> Vec<ResourceEvent> {
        self.events.try_iter().collect()
    }

    fn send(&self, cmd: AudioCmd) {
        if let Err(e) = self.tx.send(cmd) {
            warn!(cmd = ?e.0, "audio thread is gone");
        }
    }

    /// Fade out, stop the thread and wait for it.
    pub fn quit_softly(&mut self, fade_out: Duration) {
        self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Some(h) = self.join.take() {
            let _ = h.join();
        }
    }
}

impl MediaResource for AudioPlayer {
    fn load(&mut self, load: LoadId, source: &MediaSource) {
        self.send(AudioCmd::Load {
            load,
            source: source.clone(),
        });
    }

    fn play(&mut self, token: PlayToken) {
        self.send(AudioCmd::Play { token });
    }

    fn pause(&mut self) {
        self.send(AudioCmd::Pause);
    }

    fn seek(&mut self, position: f64) {
        self.send(AudioCmd::Seek(position));
    }

    fn set_volume(&mut self, volume: f32) {
        self.send(AudioCmd::SetVolume(volume));
    }
}
