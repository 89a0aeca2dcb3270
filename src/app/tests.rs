use super::*;
use crate::config::Settings;
use crate::content::Track;
use crate::page::{CONTROLS_INDENT, PROGRESS_ROW, Section, VOLUME_LABEL_WIDTH, VOLUME_ROW};
use crate::playback::{Catalog, Controller, LoadId, MediaResource, MediaSource, PlayToken, ResourceEvent};
use ratatui::layout::Rect;

#[derive(Default)]
struct NullResource {
    last_load: LoadId,
    seeks: Vec<f64>,
}

impl MediaResource for NullResource {
    fn load(&mut self, load: LoadId, _source: &MediaSource) {
        self.last_load = load;
    }
    fn play(&mut self, _token: PlayToken) {}
    fn pause(&mut self) {}
    fn seek(&mut self, position: f64) {
        self.seeks.push(position);
    }
    fn set_volume(&mut self, _volume: f32) {}
}

fn app_with(settings: Settings) -> App<NullResource> {
    let catalog = Catalog::new(vec![
        Track::new("A", "X", "1:00", "/a.wav"),
        Track::new("B", "Y", "2:00", "/b.wav"),
    ])
    .unwrap();
    let controller = Controller::new(catalog, NullResource::default(), settings.audio.initial_volume);
    App::new(controller, &settings)
}

fn app() -> App<NullResource> {
    app_with(Settings::default())
}

#[test]
fn mount_loads_track_and_reveals_nothing_below_the_fold() {
    let mut app = app();
    app.mount(10);
    assert!(app.controller.active_source().is_some());
    // Hero fills the first 16 rows; a 10 row viewport sees no tagged section.
    assert_eq!(app.tracker.map().len(), 0);
    assert_eq!(app.revealed_rows(Section::Gallery), 0);
    assert_eq!(app.revealed_rows(Section::Hero), Section::Hero.height());
}

#[test]
fn scrolling_reveals_sections_and_animation_unrolls() {
    let mut app = app();
    app.mount(20);
    // 4 rows of the gallery are visible at scroll 0 (20%).
    assert!(app.tracker.is_visible("gallery"));
    assert_eq!(app.revealed_rows(Section::Gallery), 2);

    app.tick();
    assert_eq!(app.revealed_rows(Section::Gallery), 4);
    for _ in 0..20 {
        app.tick();
    }
    assert!(app.is_revealed(Section::Gallery));
}

#[test]
fn revealed_section_stays_revealed_after_scrolling_back() {
    let mut app = app();
    app.mount(20);
    app.scroll_to_bottom();
    assert!(app.tracker.is_visible("features"));
    app.scroll_to_top();
    assert!(app.tracker.is_visible("features"));
}

#[test]
fn disabled_animations_reveal_everything_at_mount() {
    let mut settings = Settings::default();
    settings.ui.entrance_animations = false;
    let mut app = app_with(settings);
    app.mount(5);
    for s in Section::ALL {
        assert!(app.is_revealed(s));
    }
}

#[test]
fn teardown_stops_revealing() {
    let mut app = app();
    app.mount(10);
    app.teardown();
    app.scroll_to_bottom();
    assert!(!app.tracker.is_visible("features"));
}

#[test]
fn volume_keys_move_on_the_step_grid() {
    let mut app = app();
    app.mount(10);
    app.volume_up();
    assert!((app.controller.state().volume - 0.8).abs() < 1e-4);
    for _ in 0..5 {
        app.volume_up();
    }
    assert_eq!(app.controller.state().volume, 1.0);
    for _ in 0..15 {
        app.volume_down();
    }
    assert_eq!(app.controller.state().volume, 0.0);
}

#[test]
fn digit_seek_uses_tenths_of_duration() {
    let mut app = app();
    app.mount(10);
    let load = app.controller.resource().last_load;
    app.apply_events([ResourceEvent::metadata(load, 100.0)]);
    app.seek_to_tenth(3);
    assert!((app.controller.state().current_time - 30.0).abs() < 1e-9);
}

#[test]
fn clicks_on_controls_seek_and_set_volume() {
    let mut settings = Settings::default();
    settings.ui.entrance_animations = false;
    let mut app = app_with(settings);
    app.mount(30);

    let controls = app.layout.span(Section::Controls);
    app.viewport.scroll = controls.top;
    app.page_area = Some(Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 30,
    });
    let load = app.controller.resource().last_load;
    app.apply_events([ResourceEvent::metadata(load, 39.0)]);

    assert!(app.click(CONTROLS_INDENT + 13, PROGRESS_ROW));
    assert!((app.controller.state().current_time - 13.0).abs() < 1e-9);

    assert!(app.click(CONTROLS_INDENT + VOLUME_LABEL_WIDTH + 3, VOLUME_ROW));
    assert!((app.controller.state().volume - 0.3).abs() < 1e-6);

    assert!(!app.click(0, 0));
}

#[test]
fn clicks_are_ignored_before_the_controls_are_revealed() {
    let mut app = app();
    app.mount(10);
    app.page_area = Some(Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 10,
    });
    assert!(!app.click(CONTROLS_INDENT, PROGRESS_ROW));
    assert!(app.controller.resource().seeks.is_empty());
}
