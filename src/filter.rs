//! Title/genre search filter
//!
//! Case-insensitive substring match over title and genre. Pure and total:
//! every input, including an empty or non-ASCII term, yields a result.

use crate::models::Movie;

/// True when the movie's title or genre contains `needle`.
///
/// `needle` must already be lowercased.
pub fn matches(movie: &Movie, needle: &str) -> bool {
    movie.title.to_lowercase().contains(needle) || movie.genre.to_lowercase().contains(needle)
}

/// Filter `movies` by `term`, preserving order. An empty term keeps everything.
pub fn filter_movies(movies: &[Movie], term: &str) -> Vec<Movie> {
    let needle = term.to_lowercase();
    movies
        .iter()
        .filter(|m| matches(m, &needle))
        .cloned()
        .collect()
}
