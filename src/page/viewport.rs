/// The window of page rows currently drawn on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First page row shown.
    pub scroll: u16,
    /// Number of rows shown.
    pub height: u16,
}

impl Viewport {
    pub fn new(height: u16) -> Self {
        Self { scroll: 0, height }
    }

    pub fn max_scroll(&self, page_height: u16) -> u16 {
        page_height.saturating_sub(self.height)
    }

    /// Update the height after a terminal resize, keeping the scroll valid.
    pub fn resize(&mut self, height: u16, page_height: u16) {
        self.height = height;
        self.scroll = self.scroll.min(self.max_scroll(page_height));
    }

    /// Scroll by `delta` rows (negative = up), clamped to the page.
    pub fn scroll_by(&mut self, delta: i32, page_height: u16) {
        let max = i32::from(self.max_scroll(page_height));
        let next = (i32::from(self.scroll) + delta).clamp(0, max);
        self.scroll = next as u16;
    }

    pub fn page_down(&mut self, page_height: u16) {
        let step = self.height.saturating_sub(1).max(1);
        self.scroll_by(i32::from(step), page_height);
    }

    pub fn page_up(&mut self, page_height: u16) {
        let step = self.height.saturating_sub(1).max(1);
        self.scroll_by(-i32::from(step), page_height);
    }

    pub fn top(&mut self) {
        self.scroll = 0;
    }

    pub fn bottom(&mut self, page_height: u16) {
        self.scroll = self.max_scroll(page_height);
    }

    /// Number of rows of `[top, top + height)` inside the viewport.
    pub fn overlap(&self, top: u16, height: u16) -> u16 {
        let start = top.max(self.scroll);
        let end = top
            .saturating_add(height)
            .min(self.scroll.saturating_add(self.height));
        end.saturating_sub(start)
    }
}
