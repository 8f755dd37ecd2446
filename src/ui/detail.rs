//! Detail view for a single movie
//!
//! Every attribute of the selected record, with placeholders for the
//! missing ones, under a back control.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::models::Movie;
use crate::ui::Theme;

/// Label of the back control
pub const BACK_LABEL: &str = "← Back to Movies";

/// Render the detail panel for `movie`
pub fn render_detail(frame: &mut Frame, area: Rect, movie: &Movie) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused())
        .title(Span::styled(format!(" {} ", movie.title), Theme::title()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content = Paragraph::new(detail_lines(movie)).wrap(Wrap { trim: true });
    frame.render_widget(content, inner);
}

/// Lines of the detail panel, top to bottom
pub fn detail_lines(movie: &Movie) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!(" {} ", BACK_LABEL), Theme::keybind()),
            Span::styled("  (Esc)", Theme::dimmed()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            movie.title.clone(),
            Style::default()
                .fg(Theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("[{}]", movie.year_display()), Theme::year()),
            Span::raw(" "),
            Span::styled(format!("[{}]", movie.genre), Theme::genre()),
            Span::raw(" "),
            Span::styled(
                format!("★ {}", movie.rating_display()),
                Theme::rating(movie.rating),
            ),
        ]),
        Line::from(""),
    ];

    section(&mut lines, "Director", movie.director_display());
    section(&mut lines, "Plot", movie.plot_display());
    if let Some(cast) = movie.cast_display() {
        section(&mut lines, "Cast", cast);
    }

    lines.push(Line::from(vec![
        Span::styled("Poster ", Theme::heading()),
        Span::styled(movie.detail_poster().to_string(), Theme::poster()),
    ]));

    lines
}

fn section(lines: &mut Vec<Line<'static>>, heading: &'static str, body: &str) {
    lines.push(Line::from(Span::styled(heading, Theme::heading())));
    lines.push(Line::from(Span::styled(body.to_string(), Theme::text())));
    lines.push(Line::from(""));
}
