use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::playback::MediaResource;
use crate::ui;

/// State tracked by the runtime event loop across iterations.
#[derive(Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
}

/// Main terminal event loop: applies audio status, draws, and handles
/// input. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App<AudioPlayer>,
) -> anyhow::Result<()> {
    let mut state = EventLoopState::default();

    loop {
        let events = app.controller.resource().drain_events();
        app.apply_events(events);

        let mut page_area = None;
        terminal.draw(|f| page_area = Some(ui::draw(f, app)))?;
        app.page_area = page_area;
        app.tick();

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app, &mut state) {
                    break;
                }
            }
            Event::Mouse(mouse) => handle_mouse_event(mouse, app),
            Event::Resize(_, rows) => app.resize(ui::page_height_for(rows)),
            _ => {}
        }
    }

    Ok(())
}

/// Apply one key press. Returns true when the user asked to quit.
pub fn handle_key_event<R: MediaResource>(key: KeyEvent, app: &mut App<R>, state: &mut EventLoopState) -> bool {
    if key.code != KeyCode::Char('g') {
        state.pending_gg = false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Char(' ') | KeyCode::Char('p') => app.controller.toggle_play_pause(),
        KeyCode::Char('l') | KeyCode::Right => app.controller.next_track(),
        KeyCode::Char('h') | KeyCode::Left => app.controller.previous_track(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.volume_up(),
        KeyCode::Char('-') => app.volume_down(),
        KeyCode::Char(c @ '0'..='9') => app.seek_to_tenth(c as u8 - b'0'),
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(),
        KeyCode::Char('g') => {
            if state.pending_gg {
                state.pending_gg = false;
                app.scroll_to_top();
            } else {
                state.pending_gg = true;
            }
        }
        _ => {}
    }
    false
}

pub fn handle_mouse_event<R: MediaResource>(mouse: MouseEvent, app: &mut App<R>) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll_down(),
        MouseEventKind::ScrollUp => app.scroll_up(),
        MouseEventKind::Down(MouseButton::Left) => {
            app.click(mouse.column, mouse.row);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::config::Settings;
    use crate::playback::{Catalog, Controller, LoadId, MediaSource, PlayToken};

    #[derive(Default)]
    struct Silent;

    impl MediaResource for Silent {
        fn load(&mut self, _load: LoadId, _source: &MediaSource) {}
        fn play(&mut self, _token: PlayToken) {}
        fn pause(&mut self) {}
        fn seek(&mut self, _position: f64) {}
        fn set_volume(&mut self, _volume: f32) {}
    }

    fn app() -> App<Silent> {
        let settings = Settings::default();
        let catalog = Catalog::new(settings.catalog.tracks.clone()).unwrap();
        let mut app = App::new(Controller::new(catalog, Silent, 0.7), &settings);
        app.mount(20);
        app
    }

    fn press(c: KeyCode) -> KeyEvent {
        KeyEvent::new(c, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys_stop_the_loop() {
        let mut app = app();
        let mut state = EventLoopState::default();
        assert!(handle_key_event(press(KeyCode::Char('q')), &mut app, &mut state));
        assert!(!handle_key_event(press(KeyCode::Char('j')), &mut app, &mut state));
    }

    #[test]
    fn double_g_scrolls_to_top() {
        let mut app = app();
        let mut state = EventLoopState::default();
        handle_key_event(press(KeyCode::Char('G')), &mut app, &mut state);
        assert!(app.viewport.scroll > 0);

        handle_key_event(press(KeyCode::Char('g')), &mut app, &mut state);
        assert!(app.viewport.scroll > 0);
        handle_key_event(press(KeyCode::Char('g')), &mut app, &mut state);
        assert_eq!(app.viewport.scroll, 0);
    }

    #[test]
    fn track_keys_move_through_the_catalog() {
        let mut app = app();
        let mut state = EventLoopState::default();
        handle_key_event(press(KeyCode::Char('h')), &mut app, &mut state);
        assert_eq!(app.controller.state().current_track_index, 2);
        handle_key_event(press(KeyCode::Char('l')), &mut app, &mut state);
        assert_eq!(app.controller.state().current_track_index, 0);
    }

    #[test]
    fn space_requests_a_start() {
        let mut app = app();
        let mut state = EventLoopState::default();
        handle_key_event(press(KeyCode::Char(' ')), &mut app, &mut state);
        assert!(app.controller.is_start_pending());
        assert!(!app.controller.state().is_playing);
    }

    #[test]
    fn wheel_scrolls_the_page() {
        let mut app = app();
        let wheel = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(wheel(MouseEventKind::ScrollDown), &mut app);
        assert_eq!(app.viewport.scroll, 3);
        handle_mouse_event(wheel(MouseEventKind::ScrollUp), &mut app);
        assert_eq!(app.viewport.scroll, 0);
    }
}
