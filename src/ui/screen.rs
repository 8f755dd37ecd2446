//! Top-level screen: header, content for the current state, status bar

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, InputMode, LoadState, View};
use crate::ui::detail::render_detail;
use crate::ui::grid::render_grid;
use crate::ui::search::render_search;
use crate::ui::Theme;

/// Shown while the catalog request is in flight
pub const LOADING_TEXT: &str = "Loading...";

/// Main render function - dispatches on load state, then on view
pub fn render_ui(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(Theme::BACKGROUND)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_content(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let logo = Paragraph::new(Line::from(vec![
        Span::styled(
            "MOVIE ",
            Style::default()
                .fg(Theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "DATABASE",
            Style::default()
                .fg(Theme::SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border()),
    );
    frame.render_widget(logo, area);
}

fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    match &app.load {
        LoadState::Loading => render_message(frame, area, LOADING_TEXT, Theme::loading()),
        LoadState::Failed(msg) => {
            render_message(frame, area, &format!("Error: {}", msg), Theme::error())
        }
        LoadState::Loaded(catalog) => match app.view {
            View::List => {
                let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(1)])
                    .split(area);
                render_search(frame, chunks[0], &app.search, &app.input_mode);
                render_grid(frame, chunks[1], &catalog.filtered, &app.grid);
            }
            View::Detail(idx) => match catalog.movies.get(idx) {
                Some(movie) => render_detail(frame, area, movie),
                None => render_message(frame, area, "Movie not found", Theme::error()),
            },
        },
    }
}

/// Centered single message (loading and error states)
fn render_message(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let top = inner.height.saturating_sub(1) / 2;
    let line_area = Rect {
        y: inner.y + top,
        height: inner.height - top,
        ..inner
    };

    let message = Paragraph::new(text.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, line_area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode_indicator = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::PRIMARY),
        ),
        InputMode::Editing => Span::styled(
            " SEARCH ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::ACCENT),
        ),
    };

    let (state, help) = match (&app.load, app.view) {
        (LoadState::Loading, _) => (" LOADING ".to_string(), " q:quit "),
        (LoadState::Failed(_), _) => (" ERROR ".to_string(), " q:quit "),
        (LoadState::Loaded(c), View::List) => (
            format!(" LIST {}/{} ", c.filtered.len(), c.movies.len()),
            " q:quit  /:search  ←↑↓→:move  ↵:open ",
        ),
        (LoadState::Loaded(_), View::Detail(_)) => (" DETAIL ".to_string(), " q:quit  ESC:back "),
    };

    let status_line = Line::from(vec![
        mode_indicator,
        Span::styled(state, Style::default().fg(Theme::DIM)),
        Span::raw(" │ "),
        Span::styled(help, Theme::dimmed()),
    ]);

    frame.render_widget(Paragraph::new(status_line).style(Theme::status_bar()), area);
}
