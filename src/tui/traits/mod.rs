//! Component trait system for the TUI
//!
//! The card declares its own capabilities through traits instead of the
//! event loop knowing how to render or scroll it.
//!
//! - [`Component`] - Base trait: render
//! - [`Scrollable`] - Components with scrollable content
//! - [`Interactive`] - Components that handle keyboard input
//! - [`ScrollableInteractive`] - Standard scroll keys, blanket-implemented

mod component;
mod interactive;
mod scrollable;

pub use component::{Component, RenderContext};
pub use interactive::{Handled, Interactive, ScrollableInteractive};
pub use scrollable::Scrollable;
