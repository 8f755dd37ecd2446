//! Search box component

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{InputMode, SearchState};
use crate::ui::Theme;

pub const PLACEHOLDER: &str = "Search movies by title or genre...";

/// Render the search input; the cursor is drawn while editing
pub fn render_search(frame: &mut Frame, area: Rect, search: &SearchState, mode: &InputMode) {
    let editing = *mode == InputMode::Editing;

    let text = if editing {
        let (before, after) = search.query.split_at(search.byte_cursor());
        format!("⌕ {}│{}", before, after)
    } else if search.query.is_empty() {
        format!("⌕ {}  (/ to type)", PLACEHOLDER)
    } else {
        format!("⌕ {}", search.query)
    };

    let (text_style, border_style) = if editing {
        (Theme::input().fg(Theme::PRIMARY), Theme::border_focused())
    } else if search.query.is_empty() {
        (Theme::input().fg(Theme::DIM), Theme::border())
    } else {
        (Theme::input(), Theme::border())
    };

    let search_box = Paragraph::new(text).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(" SEARCH ", Theme::title())),
    );
    frame.render_widget(search_box, area);
}
