use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, info, warn};

use crate::config::AudioSettings;
use crate::playback::{LoadId, MediaSource, ResourceEvent, StartError};

use super::sink::{Playable, create_sink_at, probe_duration, resolve};
use super::types::AudioCmd;

/// Everything the thread knows about the source currently loaded.
struct Loaded {
    load: LoadId,
    source: MediaSource,
    playable: Result<Playable, StartError>,
    duration_known: bool,
}

/// Playback position bookkeeping for the current sink.
#[derive(Default)]
struct Clock {
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl Clock {
    fn elapsed(&self) -> Duration {
        self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed())
    }

    fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    fn stop(&mut self) {
        self.accumulated = self.elapsed();
        self.started_at = None;
    }

    fn reset_to(&mut self, at: Duration, running: bool) {
        self.accumulated = at;
        self.started_at = running.then(Instant::now);
    }
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<ResourceEvent>,
    settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when OutputStream is dropped, which would
                // scribble over the TUI.
                stream.log_on_drop(false);
                Some(stream)
            }
            Err(e) => {
                warn!(error = %e, "no audio output device, playback disabled");
                None
            }
        };

        let mut current: Option<Loaded> = None;
        let mut sink: Option<Sink> = None;
        let mut paused = true;
        let mut clock = Clock::default();
        let mut volume: f32 = 1.0;

        let tick = Duration::from_millis(settings.tick_ms.max(1));

        let emit = |event: ResourceEvent| {
            // The receiver only goes away during shutdown.
            let _ = events.send(event);
        };

        loop {
            match rx.recv_timeout(tick) {
                Ok(cmd) => match cmd {
                    AudioCmd::Load { load, source } => {
                        if let Some(s) = sink.take() {
                            s.stop();
                        }
                        paused = true;
                        clock = Clock::default();

                        let playable = resolve(&source, &settings);
                        let duration = playable.as_ref().ok().and_then(probe_duration);
                        if let Some(d) = duration {
                            emit(ResourceEvent::metadata(load, d.as_secs_f64()));
                        }
                        debug!(load, %source, ?duration, "source loaded");
                        current = Some(Loaded {
                            load,
                            source,
                            playable,
                            duration_known: duration.is_some(),
                        });
                    }

                    AudioCmd::Play { token } => {
                        let Some(loaded) = current.as_mut() else {
                            emit(ResourceEvent::play_resolved(0, token, Err(StartError::NothingLoaded)));
                            continue;
                        };
                        let result = start(
                            stream.as_ref(),
                            loaded,
                            &mut sink,
                            &mut paused,
                            &mut clock,
                            volume,
                            &emit,
                        );
                        if let Err(ref e) = result {
                            info!(load = loaded.load, source = %loaded.source, error = %e, "start failed");
                        }
                        emit(ResourceEvent::play_resolved(loaded.load, token, result));
                    }

                    AudioCmd::Pause => {
                        if let Some(ref s) = sink {
                            if !paused {
                                s.pause();
                                clock.stop();
                                paused = true;
                            }
                        }
                        if let Some(ref loaded) = current {
                            emit(ResourceEvent::time_update(loaded.load, clock.elapsed().as_secs_f64()));
                        }
                    }

                    AudioCmd::Seek(position) => {
                        let Some(ref loaded) = current else {
                            continue;
                        };
                        if !position.is_finite() {
                            continue;
                        }
                        let target = Duration::from_secs_f64(position.max(0.0));

                        // Scrubbing: rebuild the current sink and skip into the source.
                        if sink.is_some() {
                            if let (Some(stream), Ok(playable)) = (stream.as_ref(), loaded.playable.as_ref()) {
                                if let Some(s) = sink.take() {
                                    s.stop();
                                }
                                match create_sink_at(stream, playable, target) {
                                    Ok((new_sink, _)) => {
                                        new_sink.set_volume(volume);
                                        if !paused {
                                            new_sink.play();
                                        }
                                        sink = Some(new_sink);
                                    }
                                    Err(e) => {
                                        warn!(error = %e, "seek failed to reopen source");
                                        paused = true;
                                    }
                                }
                            }
                        }
                        clock.reset_to(target, !paused);
                        emit(ResourceEvent::time_update(loaded.load, target.as_secs_f64()));
                    }

                    AudioCmd::SetVolume(v) => {
                        volume = v.clamp(0.0, 1.0);
                        if let Some(ref s) = sink {
                            s.set_volume(volume);
                        }
                    }

                    AudioCmd::Quit { fade_out_ms } => {
                        if let Some(ref s) = sink {
                            if !paused {
                                fade_out_sink(s, volume, fade_out_ms);
                            }
                            s.stop();
                        }
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {
                    let Some(ref loaded) = current else {
                        continue;
                    };
                    if paused {
                        continue;
                    }
                    let Some(ref s) = sink else {
                        continue;
                    };

                    if s.empty() {
                        // Natural end of the source.
                        sink = None;
                        paused = true;
                        clock = Clock::default();
                        emit(ResourceEvent::ended(loaded.load));
                    } else {
                        emit(ResourceEvent::time_update(loaded.load, clock.elapsed().as_secs_f64()));
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}

/// Start or resume the loaded source.
fn start(
    stream: Option<&OutputStream>,
    loaded: &mut Loaded,
    sink: &mut Option<Sink>,
    paused: &mut bool,
    clock: &mut Clock,
    volume: f32,
    emit: &impl Fn(ResourceEvent),
) -> Result<(), StartError> {
    let stream = stream.ok_or(StartError::NoOutputDevice)?;
    let playable = loaded.playable.as_ref().map_err(Clone::clone)?;

    if sink.is_none() {
        let (new_sink, total) = create_sink_at(stream, playable, clock.elapsed())?;
        if !loaded.duration_known {
            if let Some(total) = total {
                emit(ResourceEvent::metadata(loaded.load, total.as_secs_f64()));
                loaded.duration_known = true;
            }
        }
        *sink = Some(new_sink);
    }

    if let Some(s) = sink.as_ref() {
        if *paused {
            s.set_volume(volume);
            s.play();
            clock.start();
            *paused = false;
        }
    }
    Ok(())
}

fn fade_out_sink(sink: &Sink, from: f32, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(from * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
