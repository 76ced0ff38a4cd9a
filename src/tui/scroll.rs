// Scroll state for the JSON block
//
// The block owns its ScrollState; the renderer feeds it content/viewport
// sizes every frame and input handlers move the offset. Content never grows
// at runtime, so there is no auto-follow mode.
//
// Lines are never wrapped; long ones are panned with a column offset.

/// Columns moved per horizontal step
const COLUMN_STEP: usize = 4;

/// Scroll position plus the sizes needed to clamp it
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    /// Line index at the top of the viewport
    offset: usize,

    /// Total number of lines in content
    total: usize,

    /// Number of lines visible in viewport
    viewport: usize,

    /// Display column at the left edge of the viewport
    column: usize,

    /// Display width of the widest line
    width: usize,

    /// Number of columns visible in viewport
    view_width: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the widest line and the visible width; same cadence as `update_dimensions`
    pub fn update_width(&mut self, width: usize, view_width: usize) {
        self.width = width;
        self.view_width = view_width;
        self.column = self.column.min(self.max_column());
    }

    pub fn scroll_left(&mut self) {
        self.column = self.column.saturating_sub(COLUMN_STEP);
    }

    pub fn scroll_right(&mut self) {
        if self.width == 0 {
            self.column += COLUMN_STEP;
        } else {
            self.column = (self.column + COLUMN_STEP).min(self.max_column());
        }
    }

    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        // Before the first render sizes are unknown; render clamps later
        if self.total == 0 || self.offset < self.max_offset() {
            self.offset += 1;
        }
    }

    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
    }

    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
    }

    /// Back to the first line and the first column
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.column = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    pub fn column(&self) -> usize {
        self.column
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    fn max_column(&self) -> usize {
        self.width.saturating_sub(self.view_width)
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport(&self) -> usize {
        self.viewport
    }
}
