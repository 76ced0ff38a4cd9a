// UI rendering
//
// Layout, top to bottom:
// - Events card (fills remaining space, capped width, centered)
// - Status bar (1 line)
// The toast, if any, is drawn last on top of everything.

use super::app::App;
use super::components::events_card::CARD_MAX_WIDTH;
use super::components::render_status;
use super::traits::{Component, RenderContext};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

/// Draw one frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        area,
    );

    let [main, status] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
    let [card_area] = Layout::horizontal([Constraint::Max(CARD_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(main);

    let ctx = RenderContext {
        theme: &app.theme,
        copied: app.feedback.is_copied(),
        copy_label: app.feedback.label(),
    };
    app.card.render(f, card_area, &ctx);

    render_status(f, status, app);

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
}
