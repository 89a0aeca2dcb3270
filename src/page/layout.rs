use ratatui::layout::Rect;

use crate::visibility::IntersectionEntry;

use super::viewport::Viewport;

/// The page sections, top to bottom.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    Gallery,
    Controls,
    Features,
    Footer,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Gallery,
        Section::Controls,
        Section::Features,
        Section::Footer,
    ];

    /// Region id for sections with an entrance animation.
    pub fn region(self) -> Option<&'static str> {
        match self {
            Section::Gallery => Some("gallery"),
            Section::Controls => Some("controls"),
            Section::Features => Some("features"),
            Section::Hero | Section::Footer => None,
        }
    }

    /// Height in terminal rows.
    pub fn height(self) -> u16 {
        match self {
            Section::Hero => 16,
            Section::Gallery => 20,
            Section::Controls => 19,
            Section::Features => 12,
            Section::Footer => 8,
        }
    }
}

/// Row of the progress bar inside the controls section.
pub const PROGRESS_ROW: u16 = 11;
/// Row of the volume slider inside the controls section.
pub const VOLUME_ROW: u16 = 16;
/// Left indent of the interactive controls.
pub const CONTROLS_INDENT: u16 = 4;
pub const PROGRESS_WIDTH: u16 = 40;
/// Column (relative to the indent) where the volume slider starts.
pub const VOLUME_LABEL_WIDTH: u16 = 8;
/// One cell per 0.1 step, from 0.0 to 1.0.
pub const VOLUME_CELLS: u16 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    /// First page row of the section.
    pub top: u16,
    pub height: u16,
}

/// Sections stacked on a virtual page.
#[derive(Debug, Clone)]
pub struct PageLayout {
    spans: Vec<SectionSpan>,
}

impl PageLayout {
    pub fn new() -> Self {
        let mut top = 0;
        let spans = Section::ALL
            .iter()
            .map(|&section| {
                let span = SectionSpan {
                    section,
                    top,
                    height: section.height(),
                };
                top += section.height();
                span
            })
            .collect();
        Self { spans }
    }

    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    pub fn span(&self, section: Section) -> SectionSpan {
        self.spans
            .iter()
            .copied()
            .find(|s| s.section == section)
            .unwrap_or(SectionSpan {
                section,
                top: 0,
                height: section.height(),
            })
    }

    pub fn height(&self) -> u16 {
        self.spans.iter().map(|s| s.height).sum()
    }

    /// Visible fraction of `section` in `viewport`.
    pub fn intersection_ratio(&self, section: Section, viewport: &Viewport) -> f32 {
        let span = self.span(section);
        if span.height == 0 {
            return 0.0;
        }
        f32::from(viewport.overlap(span.top, span.height)) / f32::from(span.height)
    }

    /// One report per tagged section.
    pub fn intersections(&self, viewport: &Viewport) -> Vec<IntersectionEntry> {
        self.spans
            .iter()
            .filter_map(|s| {
                s.section
                    .region()
                    .map(|id| IntersectionEntry::new(id, self.intersection_ratio(s.section, viewport)))
            })
            .collect()
    }

    /// Ids of every tagged section.
    pub fn regions(&self) -> Vec<&'static str> {
        self.spans.iter().filter_map(|s| s.section.region()).collect()
    }

    /// Map a screen cell to the section under it and the row inside it.
    ///
    /// `area` is where the viewport is drawn.
    pub fn hit(&self, viewport: &Viewport, area: Rect, column: u16, row: u16) -> Option<(Section, u16, u16)> {
        if column < area.x || column >= area.x + area.width || row < area.y || row >= area.y + area.height {
            return None;
        }
        let page_row = viewport.scroll + (row - area.y);
        let col = column - area.x;
        self.spans
            .iter()
            .find(|s| page_row >= s.top && page_row < s.top + s.height)
            .map(|s| (s.section, page_row - s.top, col))
    }

    /// Seek ratio for a click on the progress bar, `None` elsewhere.
    pub fn seek_ratio_at(&self, viewport: &Viewport, area: Rect, column: u16, row: u16) -> Option<f64> {
        let (section, r, col) = self.hit(viewport, area, column, row)?;
        if section != Section::Controls || r != PROGRESS_ROW {
            return None;
        }
        let offset = col.checked_sub(CONTROLS_INDENT)?;
        if offset >= PROGRESS_WIDTH {
            return None;
        }
        Some(f64::from(offset) / f64::from(PROGRESS_WIDTH - 1))
    }

    /// Volume for a click on the slider, on the 0.1 grid; `None` elsewhere.
    pub fn volume_at(&self, viewport: &Viewport, area: Rect, column: u16, row: u16) -> Option<f32> {
        let (section, r, col) = self.hit(viewport, area, column, row)?;
        if section != Section::Controls || r != VOLUME_ROW {
            return None;
        }
        let offset = col.checked_sub(CONTROLS_INDENT + VOLUME_LABEL_WIDTH)?;
        if offset >= VOLUME_CELLS {
            return None;
        }
        Some(f32::from(offset) / f32::from(VOLUME_CELLS - 1))
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::new()
    }
}
