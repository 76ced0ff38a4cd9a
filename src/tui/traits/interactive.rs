//! Interactive trait for components that handle keyboard input

use super::{Component, Scrollable};
use crossterm::event::{KeyCode, KeyEvent};

/// Result of handling a key event
///
/// Tells the event loop whether the component consumed the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

/// Trait for components that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// Event loop (global keys: q, c, t)
///    │
///    │ if not handled
///    ▼
/// Focused component (via Interactive)
/// ```
pub trait Interactive: Component {
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Keybind hints shown in the status bar
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}

/// Standard scroll keys for anything that is both Interactive and Scrollable
pub trait ScrollableInteractive: Interactive + Scrollable {
    /// Returns `Handled::Yes` for: Up, Down, Left, Right, k, j, h, l, g, G, Home, End, PageUp, PageDown
    fn handle_scroll_keys(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(),
            KeyCode::Left | KeyCode::Char('h') => self.scroll_left(),
            KeyCode::Right | KeyCode::Char('l') => self.scroll_right(),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll_to_bottom(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            _ => return Handled::No,
        }
        Handled::Yes
    }
}

// Blanket implementation: anything that implements both traits gets this for free
impl<T: Interactive + Scrollable> ScrollableInteractive for T {}
