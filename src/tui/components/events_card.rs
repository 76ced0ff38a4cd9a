//! Calendar events card
//!
//! ```text
//! ╭──────────────────────────────────────────────╮
//! │  Calendar Events                [ Copy JSON ] │
//! │                                               │
//! │  [                                           ↑│
//! │    {                                         █│
//! │      "summary": "GS Setup",                   │
//! │  ...                                         ↓│
//! ╰──────────────────────────────────────────────╯
//! ```
//!
//! The JSON block is produced by `Catalog::to_json` on every render, the same
//! call the clipboard export makes, so what is shown is what gets copied.

use super::scrollbar::render_scrollbar;
use crate::catalog::Catalog;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, Handled, Interactive, RenderContext, Scrollable, ScrollableInteractive,
};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Card never grows wider than this many columns
pub const CARD_MAX_WIDTH: u16 = 100;

pub const CARD_TITLE: &str = "Calendar Events";

pub struct EventsCard {
    catalog: Catalog<'static>,
    scroll: ScrollState,
    /// Where the copy button landed on the last render (for mouse clicks)
    button_area: Rect,
}

impl EventsCard {
    pub fn new(catalog: Catalog<'static>) -> Self {
        Self {
            catalog,
            scroll: ScrollState::new(),
            button_area: Rect::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog<'static> {
        &self.catalog
    }

    /// Text for the preformatted block
    pub fn display_text(&self) -> String {
        match self.catalog.to_json() {
            Ok(json) => json,
            Err(e) => format!("{:#}", e),
        }
    }

    /// Whether a terminal cell lies on the copy button
    pub fn button_hit(&self, column: u16, row: u16) -> bool {
        self.button_area.contains(Position::new(column, row))
    }

    fn render_header(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;

        let label = format!(" {} ", ctx.copy_label);
        let width = (label.width() as u16).min(area.width);
        let button_area = Rect::new(area.right().saturating_sub(width), area.y, width, 1);

        let title = Paragraph::new(CARD_TITLE).style(
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(title, area);

        let button_bg = if ctx.copied {
            theme.button_done_bg
        } else {
            theme.button_bg
        };
        let button = Paragraph::new(label).style(
            Style::default()
                .bg(button_bg)
                .fg(theme.button_fg)
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(button, button_area);

        self.button_area = button_area;
    }

    fn render_json(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let text = self.display_text();

        let block = Block::default()
            .padding(Padding::horizontal(2))
            .style(Style::default().bg(theme.code_bg));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let widest = text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
        self.scroll
            .update_dimensions(text.lines().count(), inner.height as usize);
        self.scroll.update_width(widest, inner.width as usize);

        // Not wrapped: indentation must survive, long descriptions pan instead
        let json = Paragraph::new(text)
            .style(Style::default().fg(theme.code_fg))
            .scroll((self.scroll.offset() as u16, self.scroll.column() as u16));
        f.render_widget(json, inner);

        render_scrollbar(f, area, &self.scroll);
    }
}

impl Component for EventsCard {
    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let card_area = Rect {
            width: area.width.min(CARD_MAX_WIDTH),
            ..area
        };

        let card = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.background).fg(theme.foreground));
        let inner = card.inner(card_area).inner(Margin {
            horizontal: 2,
            vertical: 1,
        });
        f.render_widget(card, card_area);

        let [header, _gap, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        self.render_header(f, header, ctx);
        self.render_json(f, body, ctx);
    }
}

impl Scrollable for EventsCard {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for EventsCard {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("c:copy  ↑↓←→/PgUp/PgDn:scroll  t:theme  q:quit")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::Theme;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(card: &mut EventsCard, copied: bool, width: u16, height: u16) -> String {
        let theme = Theme::dark();
        let ctx = RenderContext {
            theme: &theme,
            copied,
            copy_label: if copied { "Copied!" } else { "Copy JSON" },
        };
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| card.render(f, f.area(), &ctx))
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    #[test]
    fn shows_title_button_and_first_record() {
        let mut card = EventsCard::new(Catalog::builtin());
        let screen = render(&mut card, false, 100, 30);
        assert!(screen.contains("Calendar Events"));
        assert!(screen.contains("Copy JSON"));
        assert!(screen.contains(r#""summary": "GS Setup","#));
    }

    #[test]
    fn button_label_follows_copied_flag() {
        let mut card = EventsCard::new(Catalog::builtin());
        let screen = render(&mut card, true, 100, 30);
        assert!(screen.contains("Copied!"));
        assert!(!screen.contains("Copy JSON"));
    }

    #[test]
    fn display_text_is_the_export_text() {
        let card = EventsCard::new(Catalog::builtin());
        assert_eq!(card.display_text(), Catalog::builtin().to_json().unwrap());
    }

    #[test]
    fn button_hit_area_is_recorded_on_render() {
        let mut card = EventsCard::new(Catalog::builtin());
        assert!(!card.button_hit(0, 0));

        render(&mut card, false, 100, 30);
        let area = card.button_area;
        assert_eq!(area.width, " Copy JSON ".len() as u16);
        assert!(card.button_hit(area.x, area.y));
        assert!(card.button_hit(area.right() - 1, area.y));
        assert!(!card.button_hit(area.x, area.y + 1));
    }

    #[test]
    fn scroll_keys_move_the_block() {
        let mut card = EventsCard::new(Catalog::builtin());
        render(&mut card, false, 100, 20);
        assert_eq!(card.scroll_state().offset(), 0);
        assert!(card.scroll_state().needs_scrollbar());

        let down = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE);
        assert_eq!(card.handle_key(down), Handled::Yes);
        assert_eq!(card.scroll_state().offset(), 1);

        let end = KeyEvent::new(KeyCode::End, KeyModifiers::NONE);
        card.handle_key(end);
        let screen = render(&mut card, false, 100, 20);
        assert!(screen.contains("We may move this location onsite"));

        let other = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(card.handle_key(other), Handled::No);
    }

    #[test]
    fn narrow_terminal_does_not_panic() {
        let mut card = EventsCard::new(Catalog::builtin());
        let screen = render(&mut card, false, 12, 6);
        assert!(!screen.is_empty());
    }

    #[test]
    fn long_description_pans_into_view() {
        let mut card = EventsCard::new(Catalog::builtin());
        let tail = "see if anyone has any issues";
        assert!(!render(&mut card, false, 120, 400).contains(tail));

        let right = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE);
        for _ in 0..50 {
            assert_eq!(card.handle_key(right), Handled::Yes);
        }
        let panned = render(&mut card, false, 120, 400);
        assert!(panned.contains(tail));
        assert!(card.scroll_state().column() > 0);

        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        for _ in 0..50 {
            card.handle_key(left);
        }
        assert_eq!(card.scroll_state().column(), 0);
        let back = render(&mut card, false, 120, 400);
        assert!(!back.contains(tail));
        assert!(back.contains(r#""summary": "GS Setup","#));
    }
}
