//! Core component trait - the foundation of the UI system

use crate::tui::theme::Theme;
use ratatui::{layout::Rect, Frame};

/// Immutable context passed to components during rendering
///
/// Components only see what they need - no access to mutable app state.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Whether the last copy is still being acknowledged
    pub copied: bool,

    /// Label for the copy control
    pub copy_label: &'a str,
}

/// Base trait for all UI components
///
/// Render takes `&mut self` because components record layout facts
/// (viewport height, hit areas) that input handling needs afterwards.
pub trait Component {
    /// Render the component to the given area
    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &RenderContext);
}
