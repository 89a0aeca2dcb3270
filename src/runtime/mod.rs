use std::path::PathBuf;

use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size as terminal_size};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::config::Settings;
use crate::logging;
use crate::playback::{Catalog, Controller};
use crate::ui;

mod event_loop;
mod settings;

pub use settings::load_settings;

/// Build the page, run the terminal UI until the user quits, then tear down.
pub fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let (settings, problem) = settings::load_settings(config_path.as_deref());
    // A broken log file should not keep the page from opening.
    if let Err(e) = logging::init(&settings.logging) {
        eprintln!("sonic-universe: logging disabled: {e:#}");
    }
    settings::report(problem);

    let catalog = match Catalog::new(settings.catalog.tracks.clone()) {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "using the built-in showcase catalog");
            Catalog::new(Settings::default().catalog.tracks).context("built-in catalog")?
        }
    };
    info!(tracks = catalog.len(), "starting sonic universe");

    let player = AudioPlayer::new(settings.audio.clone());
    let controller = Controller::new(catalog, player, settings.audio.initial_volume);
    let mut app = App::new(controller, &settings);

    let (_, rows) = terminal_size().context("reading terminal size")?;
    app.mount(ui::page_height_for(rows));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &mut app);

    app.teardown();
    app.controller
        .resource_mut()
        .quit_softly(std::time::Duration::from_millis(settings.audio.quit_fade_out_ms));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("bye");
    run_result
}
