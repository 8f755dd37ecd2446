//! MovieTUI - browse and filter a remote movie catalog
//!
//! Fetches the catalog once, filters it by title or genre on every
//! keystroke, and switches between a card grid and a detail view.
//!
//! # Modules
//!
//! - `models` - Movie record and display placeholders
//! - `api` - Catalog HTTP client
//! - `filter` - Title/genre substring filter
//! - `app` - Application state and transitions
//! - `ui` - TUI components
//! - `cli` / `commands` - Scriptable CLI mode
//! - `config` / `logging` - Ambient setup

pub mod models;
pub mod api;
pub mod filter;
pub mod app;
pub mod ui;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use models::{Movie, MovieId};
pub use api::{MoviesClient, MoviesError};
pub use app::{Action, App, LoadState, View};
pub use filter::filter_movies;
