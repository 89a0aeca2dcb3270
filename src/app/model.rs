//! Application model: the top-level state shared by the UI and the runtime.
//!
//! `App` owns the two independent subsystems (playback and visibility) and
//! the page viewport. The controller and the tracker never see each other;
//! they are only composed here.

use std::collections::HashMap;

use ratatui::layout::Rect;
use tracing::debug;

use crate::config::{Settings, UiSettings};
use crate::page::{PageLayout, Section, Viewport};
use crate::playback::{Controller, MediaResource, ResourceEvent};
use crate::visibility::VisibilityTracker;

/// The main application model.
pub struct App<R: MediaResource> {
    pub controller: Controller<R>,
    pub tracker: VisibilityTracker,
    pub layout: PageLayout,
    pub viewport: Viewport,
    pub ui: UiSettings,
    /// Frame counter, advanced once per redraw.
    pub frame: u64,
    /// Where the page was last drawn; used for mouse hit tests.
    pub page_area: Option<Rect>,

    volume_step: f32,
    /// Frame at which each region was first revealed.
    reveals: HashMap<String, u64>,
}

impl<R: MediaResource> App<R> {
    /// Create a new `App` around `controller`.
    pub fn new(controller: Controller<R>, settings: &Settings) -> Self {
        Self {
            controller,
            tracker: VisibilityTracker::new(settings.ui.visibility_threshold),
            layout: PageLayout::new(),
            viewport: Viewport::default(),
            ui: settings.ui.clone(),
            frame: 0,
            page_area: None,
            volume_step: settings.audio.volume_step,
            reveals: HashMap::new(),
        }
    }

    /// Load the first track and start observing the tagged sections.
    pub fn mount(&mut self, viewport_height: u16) {
        self.controller.mount();
        self.viewport = Viewport::new(viewport_height);
        self.tracker.observe(self.layout.regions());
        if !self.ui.entrance_animations {
            for region in self.tracker.reveal_all() {
                self.reveals.insert(region, self.frame);
            }
        }
        self.observe_viewport();
    }

    /// Release observation; nothing is revealed after this.
    pub fn teardown(&mut self) {
        self.tracker.disconnect();
    }

    /// Feed status reports from the media resource to the controller.
    pub fn apply_events(&mut self, events: impl IntoIterator<Item = ResourceEvent>) {
        for event in events {
            self.controller.handle_event(event);
        }
    }

    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Report the current viewport to the tracker and remember newly
    /// revealed regions.
    pub fn observe_viewport(&mut self) {
        let batch = self.layout.intersections(&self.viewport);
        for region in self.tracker.on_intersections(&batch) {
            debug!(%region, frame = self.frame, "starting entrance animation");
            self.reveals.insert(region, self.frame);
        }
    }

    pub fn resize(&mut self, viewport_height: u16) {
        self.viewport.resize(viewport_height, self.layout.height());
        self.observe_viewport();
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.viewport.scroll_by(delta, self.layout.height());
        self.observe_viewport();
    }

    pub fn scroll_down(&mut self) {
        self.scroll_by(i32::from(self.ui.scroll_step));
    }

    pub fn scroll_up(&mut self) {
        self.scroll_by(-i32::from(self.ui.scroll_step));
    }

    pub fn page_down(&mut self) {
        self.viewport.page_down(self.layout.height());
        self.observe_viewport();
    }

    pub fn page_up(&mut self) {
        self.viewport.page_up(self.layout.height());
        self.observe_viewport();
    }

    pub fn scroll_to_top(&mut self) {
        self.viewport.top();
        self.observe_viewport();
    }

    pub fn scroll_to_bottom(&mut self) {
        self.viewport.bottom(self.layout.height());
        self.observe_viewport();
    }

    /// Number of rows of `section` that should be drawn this frame.
    ///
    /// Untagged sections are always complete. Tagged sections stay blank
    /// until revealed and then unroll a few rows per frame, once.
    pub fn revealed_rows(&self, section: Section) -> u16 {
        let height = section.height();
        let Some(region) = section.region() else {
            return height;
        };
        let Some(&at) = self.reveals.get(region) else {
            return 0;
        };
        if !self.ui.entrance_animations {
            return height;
        }
        let frames = self.frame.saturating_sub(at).saturating_add(1);
        let rows = frames.saturating_mul(u64::from(self.ui.reveal_rows_per_frame));
        rows.min(u64::from(height)) as u16
    }

    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed_rows(section) == section.height()
    }

    pub fn volume_up(&mut self) {
        self.step_volume(1.0);
    }

    pub fn volume_down(&mut self) {
        self.step_volume(-1.0);
    }

    /// Move the volume one slider step, staying on the step grid.
    fn step_volume(&mut self, direction: f32) {
        let step = self.volume_step;
        let current = self.controller.state().volume;
        let next = ((current / step).round() + direction) * step;
        self.controller.set_volume(next.clamp(0.0, 1.0));
    }

    /// Seek to `digit` tenths of the track (`0` = start).
    pub fn seek_to_tenth(&mut self, digit: u8) {
        self.controller.seek(f64::from(digit.min(9)) / 10.0);
    }

    /// Handle a left click at a screen cell. Returns true when it hit a
    /// control.
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        let Some(area) = self.page_area else {
            return false;
        };
        if !self.is_revealed(Section::Controls) {
            return false;
        }
        if let Some(ratio) = self.layout.seek_ratio_at(&self.viewport, area, column, row) {
            self.controller.seek(ratio);
            return true;
        }
        if let Some(volume) = self.layout.volume_at(&self.viewport, area, column, row) {
            self.controller.set_volume(volume);
            return true;
        }
        false
    }
}
