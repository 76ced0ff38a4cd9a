// Components module - UI building blocks
//
// - Events card: title, copy button, scrollable JSON block
// - Status bar: key hints and the newest log line
// - Toast: transient overlay for failures and theme changes
// - Scrollbar: shared vertical scrollbar

pub mod events_card;
pub mod scrollbar;
pub mod status_bar;
pub mod toast;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
