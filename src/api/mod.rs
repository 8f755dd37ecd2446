//! API clients for external services
//!
//! - Movies: the remote catalog the whole session is built on

pub mod movies;

pub use movies::{MoviesClient, MoviesError, DEFAULT_MOVIES_URL};
