//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first navigation throughout.

pub mod theme;
pub mod search;
pub mod grid;
pub mod detail;
pub mod screen;

pub use screen::render_ui;
pub use theme::Theme;
