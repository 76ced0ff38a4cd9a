// Status bar component
//
// One line at the bottom: key hints on the left, the newest log entry on the
// right when there is room for it.

use crate::logging::{LogEntry, LogLevel};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::tui::traits::Interactive;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let hint = format!(" {}", app.card.focus_hint().unwrap_or("q:quit"));

    let mut spans = vec![Span::styled(
        hint.clone(),
        Style::default().fg(theme.status_bar),
    )];

    if let Some(entry) = app.log_buffer.latest() {
        let log = format_entry(&entry);
        let used = hint.width() + 3;
        let room = (area.width as usize).saturating_sub(used);
        if room >= 12 {
            spans.push(Span::styled(" │ ", Style::default().fg(theme.muted)));
            spans.push(Span::styled(
                truncate(&log, room),
                Style::default().fg(level_color(entry.level, theme)),
            ));
        }
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.background));
    f.render_widget(status, area);
}

fn format_entry(entry: &LogEntry) -> String {
    format!(
        "{} {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn level_color(level: LogLevel, theme: &Theme) -> ratatui::style::Color {
    match level {
        LogLevel::Error | LogLevel::Warn => theme.error,
        LogLevel::Info => theme.foreground,
        LogLevel::Debug | LogLevel::Trace => theme.muted,
    }
}

/// Cut to `max` display columns, marking the cut with an ellipsis
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn entry_shows_time_level_and_message() {
        let entry = LogEntry {
            timestamp: Utc.with_ymd_and_hms(2025, 2, 17, 9, 5, 3).unwrap(),
            level: LogLevel::Warn,
            message: "Copy failed".to_string(),
        };
        assert_eq!(format_entry(&entry), "09:05:03 WARN  Copy failed");
    }

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        assert_eq!(truncate("✓✓✓✓", 3), "✓✓…");
    }
}
