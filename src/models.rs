//! Data structures for MovieTUI
//!
//! The movie record as served by the catalog endpoint, plus the display
//! fallbacks used by both the TUI and the CLI.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

// =============================================================================
// Placeholders
// =============================================================================

/// Shown for a missing year or rating
pub const NOT_AVAILABLE: &str = "N/A";

/// Shown for a missing director
pub const UNKNOWN_DIRECTOR: &str = "Unknown";

/// Shown for a missing plot
pub const NO_PLOT: &str = "No plot description available.";

/// Poster placeholder on grid cards
pub const CARD_POSTER_PLACEHOLDER: &str = "/api/placeholder/300/200";

/// Poster placeholder in the detail view
pub const DETAIL_POSTER_PLACEHOLDER: &str = "/api/placeholder/400/600";

// =============================================================================
// Movie Models
// =============================================================================

/// Movie identifier. The catalog may send either a number or a string.
///
/// Numbers that don't fit `u64` (negative, fractional) are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum MovieId {
    Num(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for MovieId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(n) => Ok(n
                .as_u64()
                .map(MovieId::Num)
                .unwrap_or_else(|| MovieId::Text(n.to_string()))),
            Value::String(s) => Ok(MovieId::Text(s)),
            other => Err(de::Error::custom(format!(
                "invalid movie id {}, expected a number or string",
                other
            ))),
        }
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovieId::Num(n) => write!(f, "{}", n),
            MovieId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for MovieId {
    fn from(n: u64) -> Self {
        MovieId::Num(n)
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        MovieId::Text(s.to_string())
    }
}

impl MovieId {
    /// Match against user input such as `42` or `tt0133093`
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            MovieId::Num(n) => raw.trim().parse::<u64>().map(|r| r == *n).unwrap_or(false),
            MovieId::Text(s) => s == raw.trim(),
        }
    }
}

/// A single catalog entry.
///
/// `title` and `genre` are required: a record without them fails to
/// deserialize, so a malformed catalog is rejected at load time. The
/// other attributes are display-only and accept whatever JSON shape the
/// catalog sends; values that can't be shown fall back to placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genre: String,
    #[serde(default, deserialize_with = "lenient_year", skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(default, deserialize_with = "lenient_rating", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub cast: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
}

impl Movie {
    /// Minimal record, mostly useful for tests and fixtures
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            genre: genre.into(),
            year: None,
            rating: None,
            director: None,
            plot: None,
            cast: None,
            poster_url: None,
        }
    }

    pub fn year_display(&self) -> String {
        self.year
            .map(|y| y.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Rating with one decimal, `N/A` when absent or zero
    pub fn rating_display(&self) -> String {
        match self.rating {
            Some(r) if r > 0.0 => format!("{:.1}", r),
            _ => NOT_AVAILABLE.to_string(),
        }
    }

    pub fn director_display(&self) -> &str {
        non_empty(&self.director).unwrap_or(UNKNOWN_DIRECTOR)
    }

    pub fn plot_display(&self) -> &str {
        non_empty(&self.plot).unwrap_or(NO_PLOT)
    }

    /// Cast line, `None` when the detail view should skip the section
    pub fn cast_display(&self) -> Option<&str> {
        non_empty(&self.cast)
    }

    /// Poster line for a grid card; cards without a poster show none
    pub fn card_poster(&self) -> Option<&str> {
        self.poster_url.as_ref().map(|_| {
            non_empty(&self.poster_url).unwrap_or(CARD_POSTER_PLACEHOLDER)
        })
    }

    pub fn detail_poster(&self) -> &str {
        non_empty(&self.poster_url).unwrap_or(DETAIL_POSTER_PLACEHOLDER)
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year_str = self.year.map(|y| format!(" ({})", y)).unwrap_or_default();
        write!(f, "{}{} [{}]", self.title, year_str, self.genre)
    }
}

/// Treat `Some("")` and whitespace-only strings as missing
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

// =============================================================================
// Lenient Attribute Decoding
// =============================================================================

/// Render a JSON value as display text. Arrays are joined with `, `;
/// `null` and objects have no text.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(value_text).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
    }
}

/// Numbers, or strings holding a number
fn value_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(value_text))
}

fn lenient_year<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u16>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(value_number)
        .filter(|y| y.fract() == 0.0 && *y >= 0.0 && *y <= f64::from(u16::MAX))
        .map(|y| y as u16))
}

fn lenient_rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f32>, D::Error> {
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(value_number)
        .map(|r| r as f32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_movie() {
        let json = r#"{"id": 1, "title": "Inception", "genre": "Sci-Fi", "year": 2010}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, MovieId::Num(1));
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.year, Some(2010));
        assert!(movie.director.is_none());
    }

    #[test]
    fn test_deserialize_string_id_and_poster_url() {
        let json = r#"{
            "id": "tt0133093",
            "title": "The Matrix",
            "genre": "Action",
            "posterUrl": "https://img.example/matrix.jpg",
            "imdbUrl": "ignored"
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, MovieId::Text("tt0133093".into()));
        assert_eq!(
            movie.poster_url.as_deref(),
            Some("https://img.example/matrix.jpg")
        );
    }

    #[test]
    fn test_missing_genre_is_rejected() {
        let json = r#"{"id": 1, "title": "Nameless"}"#;
        assert!(serde_json::from_str::<Movie>(json).is_err());
    }

    #[test]
    fn test_placeholders() {
        let mut movie = Movie::new(1, "Inception", "Sci-Fi");
        assert_eq!(movie.year_display(), "N/A");
        assert_eq!(movie.rating_display(), "N/A");
        assert_eq!(movie.director_display(), "Unknown");
        assert_eq!(movie.plot_display(), "No plot description available.");
        assert_eq!(movie.cast_display(), None);
        assert_eq!(movie.card_poster(), None);
        assert_eq!(movie.detail_poster(), DETAIL_POSTER_PLACEHOLDER);

        movie.director = Some("   ".into());
        movie.poster_url = Some(String::new());
        assert_eq!(movie.director_display(), "Unknown");
        assert_eq!(movie.card_poster(), Some(CARD_POSTER_PLACEHOLDER));
    }

    #[test]
    fn test_present_attributes() {
        let mut movie = Movie::new(1, "Inception", "Sci-Fi");
        movie.year = Some(2010);
        movie.rating = Some(8.8);
        movie.director = Some("Christopher Nolan".into());
        assert_eq!(movie.year_display(), "2010");
        assert_eq!(movie.rating_display(), "8.8");
        assert_eq!(movie.director_display(), "Christopher Nolan");
        assert_eq!(movie.to_string(), "Inception (2010) [Sci-Fi]");
    }

    #[test]
    fn test_optional_attributes_accept_any_shape() {
        let json = r#"{
            "id": 1,
            "title": "Inception",
            "genre": "Sci-Fi",
            "year": "2010",
            "rating": "8.8",
            "director": 42,
            "cast": ["Leonardo DiCaprio", "Elliot Page"],
            "plot": {"short": "dreams"}
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.year, Some(2010));
        assert_eq!(movie.rating, Some(8.8));
        assert_eq!(movie.director_display(), "42");
        assert_eq!(movie.cast_display(), Some("Leonardo DiCaprio, Elliot Page"));
        assert_eq!(movie.plot_display(), NO_PLOT);
    }

    #[test]
    fn test_unusable_numbers_fall_back_to_placeholder() {
        let json = r#"{"id": 1, "title": "Heat", "genre": "Crime", "year": "mid-90s", "rating": true}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.year_display(), NOT_AVAILABLE);
        assert_eq!(movie.rating_display(), NOT_AVAILABLE);

        let json = r#"{"id": 1, "title": "Heat", "genre": "Crime", "year": 1995.5}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.year, None);
    }

    #[test]
    fn test_non_u64_ids_kept_as_text() {
        let movie: Movie =
            serde_json::from_str(r#"{"id": -7, "title": "A", "genre": "B"}"#).unwrap();
        assert_eq!(movie.id, MovieId::Text("-7".into()));
        assert!(movie.id.matches("-7"));

        let movie: Movie =
            serde_json::from_str(r#"{"id": 1.5, "title": "A", "genre": "B"}"#).unwrap();
        assert_eq!(movie.id, MovieId::Text("1.5".into()));

        assert!(serde_json::from_str::<Movie>(r#"{"id": null, "title": "A", "genre": "B"}"#).is_err());
        assert!(serde_json::from_str::<Movie>(r#"{"title": "A", "genre": "B"}"#).is_err());
    }

    #[test]
    fn test_movie_id_matches() {
        assert!(MovieId::Num(42).matches("42"));
        assert!(MovieId::Num(42).matches(" 42 "));
        assert!(!MovieId::Num(42).matches("abc"));
        assert!(MovieId::from("tt1").matches("tt1"));
        assert!(!MovieId::from("tt1").matches("tt2"));
    }
}
