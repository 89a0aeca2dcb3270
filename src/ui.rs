//! UI rendering helpers for the terminal user interface.
//!
//! The page is drawn as one tall column of lines. Each section builds
//! exactly `Section::height()` lines; the viewport then picks the rows that
//! are on screen. Tagged sections stay blank until the tracker reveals them.

use rand::Rng;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::content::{COPYRIGHT, FEATURES, FOOTER_TAGLINE, GALLERY, SOCIAL_LINKS, TAGLINE};
use crate::page::{
    CONTROLS_INDENT, PROGRESS_WIDTH, Section, VOLUME_CELLS, VOLUME_LABEL_WIDTH,
};
use crate::playback::{MediaResource, MediaSource, Phase, format_optional_time, format_time};

const BAR_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

const CONTROLS: [(&str, &str); 8] = [
    ("space/p", "play/pause"),
    ("h/l", "prev/next track"),
    ("0-9", "seek"),
    ("+/-", "volume"),
    ("j/k", "scroll"),
    ("gg/G", "top/bottom"),
    ("click", "seek/volume"),
    ("q", "quit"),
];

/// Render the controls help text.
fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{}] {}", k, v))
        .collect::<Vec<String>>()
        .join(" | ")
}

fn accent() -> Style {
    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
}

fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}

fn indent() -> String {
    " ".repeat(CONTROLS_INDENT as usize)
}

/// A row of visualizer bars. Heights are random while playing and a calm
/// fixed wave otherwise.
fn visualizer_row(width: usize, playing: bool) -> String {
    let mut rng = rand::thread_rng();
    (0..width)
        .map(|i| {
            let level = if playing {
                rng.gen_range(0..BAR_GLYPHS.len())
            } else {
                [0, 1, 2, 1][i % 4]
            };
            BAR_GLYPHS[level]
        })
        .collect()
}

/// Equalizer block: `rows` stacked rows of `bars` columns.
fn equalizer(bars: usize, rows: usize, playing: bool) -> Vec<Line<'static>> {
    let mut rng = rand::thread_rng();
    let heights: Vec<usize> = (0..bars)
        .map(|i| {
            if playing {
                rng.gen_range(1..=rows * BAR_GLYPHS.len())
            } else {
                1 + (i % 3)
            }
        })
        .collect();

    (0..rows)
        .rev()
        .map(|row| {
            let base = row * BAR_GLYPHS.len();
            let mut s = indent();
            for h in &heights {
                let c = if *h >= base + BAR_GLYPHS.len() {
                    '█'
                } else if *h > base {
                    BAR_GLYPHS[h - base - 1]
                } else {
                    ' '
                };
                s.push(c);
                s.push(c);
            }
            Line::styled(s, Style::default().fg(Color::Cyan))
        })
        .collect()
}

/// Pad or cut `lines` to exactly `height` rows.
fn fit(mut lines: Vec<Line<'static>>, height: u16) -> Vec<Line<'static>> {
    lines.resize(height as usize, Line::default());
    lines
}

fn hero_lines<R: MediaResource>(app: &App<R>, width: u16) -> Vec<Line<'static>> {
    let state = app.controller.state();
    let track = app.controller.current_track();
    let playing = state.is_playing;

    let button = match app.controller.phase() {
        Phase::Playing => "[ ❚❚ Pause ]",
        Phase::Switching => "[ … Starting ]",
        Phase::Idle | Phase::Paused => "[ ▶ Play ]",
    };
    let label = if playing { "Now Playing:" } else { "Ready to Play:" };
    let viz_width = (width as usize).saturating_sub(8).min(60);

    vec![
        Line::styled(app.ui.header_text.clone(), dim()).centered(),
        Line::styled("✦ Premium Audio Experience ✦", Style::default().fg(Color::Blue)).centered(),
        Line::default(),
        Line::styled("S O N I C", accent()).centered(),
        Line::styled("U N I V E R S E", accent()).centered(),
        Line::default(),
        Line::raw(TAGLINE).centered(),
        Line::default(),
        Line::from(vec![
            Span::styled(button, Style::default().add_modifier(Modifier::REVERSED)),
            Span::styled("  (space)", dim()),
        ])
        .centered(),
        Line::from(vec![
            Span::styled(label, dim()),
            Span::raw(" "),
            Span::styled(track.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ])
        .centered(),
        Line::styled(format!("by {}", track.artist), dim()).centered(),
        Line::default(),
        Line::styled(visualizer_row(viz_width, playing), Style::default().fg(Color::Blue)).centered(),
        Line::styled(visualizer_row(viz_width, playing), Style::default().fg(Color::Magenta)).centered(),
        Line::default(),
        Line::styled("↓ scroll (j/k)", dim()).centered(),
    ]
}

fn gallery_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        Line::styled("VISUAL SYMPHONY", accent()).centered(),
        Line::styled("Where technology meets artistry in perfect harmony", dim()).centered(),
        Line::default(),
    ];
    for item in &GALLERY {
        lines.push(Line::from(vec![
            Span::raw(indent()),
            Span::raw("┌ "),
            Span::styled(item.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::raw(format!("{}│ {}", indent(), item.description)));
        lines.push(Line::from(vec![
            Span::raw(format!("{}│ ", indent())),
            Span::styled(format!("🖼  {}", item.image), dim()),
        ]));
        lines.push(Line::raw(format!("{}└{}", indent(), "─".repeat(40))));
        lines.push(Line::default());
    }
    lines
}

fn progress_bar(progress: f64) -> String {
    let width = PROGRESS_WIDTH as usize;
    let head = (progress.clamp(0.0, 1.0) * (width - 1) as f64).round() as usize;
    (0..width)
        .map(|i| match i.cmp(&head) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        })
        .collect()
}

fn volume_slider(volume: f32) -> String {
    let knob = (volume.clamp(0.0, 1.0) * (VOLUME_CELLS - 1) as f32).round() as u16;
    (0..VOLUME_CELLS)
        .map(|i| match i.cmp(&knob) {
            std::cmp::Ordering::Less => '━',
            std::cmp::Ordering::Equal => '●',
            std::cmp::Ordering::Greater => '─',
        })
        .collect()
}

fn controls_lines<R: MediaResource>(app: &App<R>) -> Vec<Line<'static>> {
    let state = app.controller.state();
    let track = app.controller.current_track();
    let catalog_len = app.controller.catalog().len();

    let phase = match app.controller.phase() {
        Phase::Idle => "stopped",
        Phase::Paused => "paused",
        Phase::Switching => "starting…",
        Phase::Playing => "playing",
    };
    let play_label = if state.is_playing { "❚❚ pause" } else { "▶ play" };

    let elapsed = format_time(state.current_time);
    let total = format_optional_time(state.duration);
    let gap = (PROGRESS_WIDTH as usize).saturating_sub(elapsed.chars().count() + total.chars().count());

    let source_note = match app.controller.active_source() {
        Some(MediaSource::Fallback) => Line::styled(
            format!("{}source unavailable, fallback tone loaded (space to retry)", indent()),
            Style::default().fg(Color::Yellow),
        ),
        _ => Line::default(),
    };

    let mut lines = vec![
        Line::default(),
        Line::styled("◆ AUDIO CONTROL ◆", accent()).centered(),
        Line::default(),
    ];
    lines.extend(equalizer(20, 3, state.is_playing));
    lines.extend([
        Line::default(),
        Line::from(vec![
            Span::raw(indent()),
            Span::styled(track.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::styled(format!("{}by {} · {}", indent(), track.artist, phase), dim()),
        Line::default(),
        Line::styled(
            format!(
                "{}Track {}/{} · {}",
                indent(),
                state.current_track_index + 1,
                catalog_len,
                track.duration_label
            ),
            dim(),
        ),
        Line::from(vec![
            Span::raw(indent()),
            Span::styled(progress_bar(state.progress()), Style::default().fg(Color::Magenta)),
        ]),
        Line::raw(format!("{}{}{}{}", indent(), elapsed, " ".repeat(gap), total)),
        Line::default(),
        Line::raw(format!("{}⏮ prev [h]    {} [space]    next [l] ⏭", indent(), play_label)),
        Line::default(),
        Line::from(vec![
            Span::raw(indent()),
            Span::styled(
                format!("{:<width$}", "Volume", width = VOLUME_LABEL_WIDTH as usize),
                dim(),
            ),
            Span::styled(volume_slider(state.volume), Style::default().fg(Color::Blue)),
            Span::raw(format!(" {:>3}%", (state.volume * 100.0).round() as u32)),
        ]),
        source_note,
    ]);
    lines
}

fn features_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        Line::styled("SOUND INNOVATION", accent()).centered(),
        Line::default(),
    ];
    for feature in &FEATURES {
        lines.push(Line::from(vec![
            Span::raw(indent()),
            Span::raw(format!("{}  ", feature.icon)),
            Span::styled(feature.title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::default());
    }
    lines
}

fn footer_lines(width: u16) -> Vec<Line<'static>> {
    vec![
        Line::styled("─".repeat(width as usize), dim()),
        Line::styled("SONIC UNIVERSE", accent()).centered(),
        Line::styled(FOOTER_TAGLINE, dim()).centered(),
        Line::default(),
        Line::raw(SOCIAL_LINKS.join("  ·  ")).centered(),
        Line::default(),
        Line::styled(COPYRIGHT, dim()).centered(),
    ]
}

fn section_lines<R: MediaResource>(app: &App<R>, section: Section, width: u16) -> Vec<Line<'static>> {
    let lines = match section {
        Section::Hero => hero_lines(app, width),
        Section::Gallery => gallery_lines(),
        Section::Controls => controls_lines(app),
        Section::Features => features_lines(),
        Section::Footer => footer_lines(width),
    };
    let mut lines = fit(lines, section.height());

    // Entrance animation: rows not yet unrolled stay blank.
    let shown = app.revealed_rows(section) as usize;
    for line in lines.iter_mut().skip(shown) {
        *line = Line::default();
    }
    lines
}

/// Lines of the whole page that fall inside the viewport.
fn viewport_lines<R: MediaResource>(app: &App<R>, width: u16) -> Vec<Line<'static>> {
    let vp = app.viewport;
    let mut out = Vec::with_capacity(vp.height as usize);
    for span in app.layout.spans() {
        if vp.overlap(span.top, span.height) == 0 {
            continue;
        }
        let first = vp.scroll.saturating_sub(span.top) as usize;
        let count = vp.overlap(span.top, span.height) as usize;
        out.extend(
            section_lines(app, span.section, width)
                .into_iter()
                .skip(first)
                .take(count),
        );
    }
    out
}

fn status_text<R: MediaResource>(app: &App<R>) -> String {
    let state = app.controller.state();
    let track = app.controller.current_track();
    let mut parts: Vec<String> = vec![" Sonic Universe".to_string()];

    let transport = match app.controller.phase() {
        Phase::Playing => "▶ Playing",
        Phase::Switching => "… Starting",
        Phase::Paused => "❚❚ Paused",
        Phase::Idle => "■ Stopped",
    };
    parts.push(transport.to_string());
    parts.push(format!(
        "{} [{} / {}]",
        track.name,
        format_time(state.current_time),
        format_optional_time(state.duration)
    ));
    parts.push(format!("Vol: {}%", (state.volume * 100.0).round() as u32));

    let max = app.viewport.max_scroll(app.layout.height());
    if max > 0 {
        parts.push(format!("{}%", u32::from(app.viewport.scroll) * 100 / u32::from(max)));
    }
    parts.join(" • ")
}

/// Render the entire UI into `frame` and return the area the page occupies.
pub fn draw<R: MediaResource>(frame: &mut Frame, app: &App<R>) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    let status = Paragraph::new(status_text(app)).reversed();
    frame.render_widget(status, chunks[0]);

    let page_area = chunks[1];
    let page = Paragraph::new(viewport_lines(app, page_area.width));
    frame.render_widget(page, page_area);

    let footer = Paragraph::new(controls_text()).style(dim());
    frame.render_widget(footer, chunks[2]);

    page_area
}

/// Height available to the page for a terminal of `total_height` rows.
pub fn page_height_for(total_height: u16) -> u16 {
    total_height.saturating_sub(2).max(1)
}
