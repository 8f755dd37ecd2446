//! CLI Command Handlers
//!
//! Each handler loads the catalog through the given client, applies the
//! same filter the TUI uses, and returns an ExitCode.

use serde::Serialize;

use crate::api::MoviesClient;
use crate::cli::{ExitCode, Output, SearchCmd, ShowCmd};
use crate::config::Config;
use crate::filter::filter_movies;
use crate::models::Movie;

/// Build the catalog client from config plus an optional endpoint override
pub fn build_client(config: &Config, api_url: Option<&str>) -> MoviesClient {
    let client = MoviesClient::with_url(config.resolve_api_url(api_url));
    match config.request_timeout() {
        Some(timeout) => client.with_timeout(timeout),
        None => client,
    }
}

// =============================================================================
// List Command
// =============================================================================

pub async fn list_cmd(client: &MoviesClient, output: &Output) -> ExitCode {
    output.info(format!("Fetching catalog from {}", client.url()));

    match client.fetch_movies().await {
        Ok(movies) => print_or_fail(output, movies, |m| format_table(m)),
        Err(e) => output.error(e.to_string(), ExitCode::NetworkError),
    }
}

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(cmd: SearchCmd, client: &MoviesClient, output: &Output) -> ExitCode {
    output.info(format!("Searching for: {}", cmd.term));

    match client.fetch_movies().await {
        Ok(movies) => {
            let filtered = filter_movies(&movies, &cmd.term);
            print_or_fail(output, filtered, |m| {
                if m.is_empty() {
                    "No movies found matching your search.".to_string()
                } else {
                    format_table(m)
                }
            })
        }
        Err(e) => output.error(e.to_string(), ExitCode::NetworkError),
    }
}

// =============================================================================
// Show Command
// =============================================================================

/// Fully expanded movie, placeholders applied
#[derive(Debug, Serialize)]
pub struct MovieView {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub year: String,
    pub rating: String,
    pub director: String,
    pub plot: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<String>,
    pub poster_url: String,
}

impl From<&Movie> for MovieView {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.to_string(),
            title: movie.title.clone(),
            genre: movie.genre.clone(),
            year: movie.year_display(),
            rating: movie.rating_display(),
            director: movie.director_display().to_string(),
            plot: movie.plot_display().to_string(),
            cast: movie.cast_display().map(str::to_string),
            poster_url: movie.detail_poster().to_string(),
        }
    }
}

pub async fn show_cmd(cmd: ShowCmd, client: &MoviesClient, output: &Output) -> ExitCode {
    let movies = match client.fetch_movies().await {
        Ok(movies) => movies,
        Err(e) => return output.error(e.to_string(), ExitCode::NetworkError),
    };

    match movies.iter().find(|m| m.id.matches(&cmd.id)) {
        Some(movie) => print_or_fail(output, MovieView::from(movie), format_detail),
        None => output.error(format!("No movie with id {}", cmd.id), ExitCode::InvalidArgs),
    }
}

// =============================================================================
// Formatting
// =============================================================================

fn print_or_fail<T: Serialize>(
    output: &Output,
    data: T,
    human: impl FnOnce(&T) -> String,
) -> ExitCode {
    match output.print(data, human) {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to serialize: {}", e), ExitCode::Error),
    }
}

/// One movie per line: id, title, year, genre, rating
pub fn format_table(movies: &[Movie]) -> String {
    movies
        .iter()
        .map(|m| {
            format!(
                "{:>5}  {} ({}) [{}] ★ {}",
                m.id.to_string(),
                m.title,
                m.year_display(),
                m.genre,
                m.rating_display()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_detail(view: &MovieView) -> String {
    let mut out = format!(
        "{}\n{} · {} · ★ {}\n\nDirector: {}\nPlot: {}\n",
        view.title, view.year, view.genre, view.rating, view.director, view.plot
    );
    if let Some(cast) = &view.cast {
        out.push_str(&format!("Cast: {}\n", cast));
    }
    out.push_str(&format!("Poster: {}", view.poster_url));
    out
}
