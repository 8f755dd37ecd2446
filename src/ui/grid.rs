//! Card grid for the list view
//!
//! One bordered card per filtered movie, laid out row-major. The column
//! count follows the terminal width.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::GridState;
use crate::models::Movie;
use crate::ui::Theme;

/// Rows taken by one card, borders included
pub const CARD_HEIGHT: u16 = 6;

/// Message shown when the filter leaves nothing
pub const NO_RESULTS: &str = "No movies found matching your search.";

/// Cards per row for a given width
pub fn columns_for_width(width: u16) -> usize {
    if width < 80 {
        1
    } else if width < 120 {
        2
    } else {
        3
    }
}

/// Render the grid of `movies`, keeping the selected card in view
pub fn render_grid(frame: &mut Frame, area: Rect, movies: &[Movie], grid: &GridState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(
            format!(" MOVIES ({}) ", movies.len()),
            Theme::title(),
        ));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if movies.is_empty() {
        let empty = Paragraph::new(NO_RESULTS)
            .style(Theme::dimmed())
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let columns = grid.columns.max(1);
    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    let first_row = grid.first_visible_row(visible_rows);

    let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(inner);
    for (r, row_area) in rows.iter().enumerate() {
        let cells =
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(*row_area);
        for (c, cell) in cells.iter().enumerate() {
            let idx = (first_row + r) * columns + c;
            let Some(movie) = movies.get(idx) else {
                return;
            };
            frame.render_widget(movie_card(movie, idx == grid.selected), *cell);
        }
    }
}

/// Build a single card
/// Format:
///   Title
///   2010  ·  Sci-Fi
///   ★ 8.8
///   ▣ poster url        (only when the record has one)
pub fn movie_card(movie: &Movie, selected: bool) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            movie.title.clone(),
            Theme::card_title(selected),
        )),
        Line::from(vec![
            Span::styled(movie.year_display(), Theme::year()),
            Span::styled("  ·  ", Theme::dimmed()),
            Span::styled(movie.genre.clone(), Theme::genre()),
        ]),
        Line::from(Span::styled(
            format!("★ {}", movie.rating_display()),
            Theme::rating(movie.rating),
        )),
    ];

    if let Some(poster) = movie.card_poster() {
        lines.push(Line::from(Span::styled(
            format!("▣ {}", poster),
            Theme::poster(),
        )));
    }

    let border_style = if selected {
        Theme::border_focused()
    } else {
        Theme::border()
    };

    Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    )
}
