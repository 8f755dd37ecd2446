//! App state and core application logic
//!
//! Holds the catalog load lifecycle, the search query and the list/detail
//! view machine. Every change goes through [`App::apply`] so transitions can
//! be exercised without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, warn};

use crate::filter::filter_movies;
use crate::models::Movie;

// =============================================================================
// View
// =============================================================================

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Search box plus card grid
    #[default]
    List,
    /// Full attributes of one movie; the index points into the full catalog
    Detail(usize),
}

// =============================================================================
// Input Mode
// =============================================================================

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

// =============================================================================
// Loading State
// =============================================================================

/// Movies as loaded, plus the currently visible subsequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    /// Full catalog, never mutated after load
    pub movies: Vec<Movie>,
    /// Movies matching the current query, in catalog order
    pub filtered: Vec<Movie>,
}

impl Catalog {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            filtered: movies.clone(),
            movies,
        }
    }
}

/// Catalog load lifecycle. Exactly one arm holds at any time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Catalog),
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            LoadState::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

// =============================================================================
// Grid Selection State
// =============================================================================

/// Selection within the card grid, laid out row-major in `columns` columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    /// Currently selected card index
    pub selected: usize,
    /// Total number of cards
    pub len: usize,
    /// Cards per row
    pub columns: usize,
}

impl Default for GridState {
    fn default() -> Self {
        Self {
            selected: 0,
            len: 0,
            columns: 1,
        }
    }
}

impl GridState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    /// Move one card left
    pub fn left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move one card right
    pub fn right(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    /// Move one row up
    pub fn up(&mut self) {
        if self.selected >= self.columns {
            self.selected -= self.columns;
        }
    }

    /// Move one row down, landing on the last card if the next row is short
    pub fn down(&mut self) {
        if self.len == 0 {
            return;
        }
        let last_row = (self.len - 1) / self.columns;
        if self.selected / self.columns < last_row {
            self.selected = (self.selected + self.columns).min(self.len - 1);
        }
    }

    /// Move up by `rows` rows
    pub fn page_up(&mut self, rows: usize) {
        self.selected = self.selected.saturating_sub(rows * self.columns);
    }

    /// Move down by `rows` rows
    pub fn page_down(&mut self, rows: usize) {
        if self.len > 0 {
            self.selected = (self.selected + rows * self.columns).min(self.len - 1);
        }
    }

    /// Jump to first card
    pub fn first(&mut self) {
        self.selected = 0;
    }

    /// Jump to last card
    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// Row holding the selection
    pub fn selected_row(&self) -> usize {
        self.selected / self.columns
    }

    /// First row to draw so the selection stays visible
    pub fn first_visible_row(&self, visible_rows: usize) -> usize {
        let row = self.selected_row();
        if visible_rows == 0 || row < visible_rows {
            0
        } else {
            row + 1 - visible_rows
        }
    }

    /// Update length (e.g., when the filter changes)
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Change the column count; the selected index is kept
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }
}

// =============================================================================
// Search Input State
// =============================================================================

/// Search box contents. The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    /// Search query as typed
    pub query: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl SearchState {
    fn char_len(&self) -> usize {
        self.query.chars().count()
    }

    /// Byte offset of the cursor, for splitting the query when rendering
    pub fn byte_cursor(&self) -> usize {
        self.query
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }

    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_cursor();
        self.query.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_cursor();
            self.query.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_cursor();
            self.query.remove(at);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Replace the query, moving the cursor to the end
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.cursor_end();
    }
}

// =============================================================================
// Actions
// =============================================================================

/// Discrete state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The catalog request succeeded
    CatalogLoaded(Vec<Movie>),
    /// The catalog request failed with a display message
    CatalogFailed(String),
    /// The search term changed
    Search(String),
    /// Open the card at this index of the filtered list
    Select(usize),
    /// Leave the detail view
    Back,
    /// End the session
    Quit,
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Catalog load lifecycle
    pub load: LoadState,
    /// Search box
    pub search: SearchState,
    /// Card grid selection
    pub grid: GridState,
    /// Current screen
    pub view: View,
}

impl Default for App {
    fn default() -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            load: LoadState::Loading,
            search: SearchState::default(),
            grid: GridState::default(),
            view: View::List,
        }
    }
}

impl App {
    /// Create a new App instance, waiting for the catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Full catalog, empty until loaded
    pub fn movies(&self) -> &[Movie] {
        self.load.catalog().map(|c| c.movies.as_slice()).unwrap_or(&[])
    }

    /// Movies matching the current query, empty until loaded
    pub fn filtered(&self) -> &[Movie] {
        self.load
            .catalog()
            .map(|c| c.filtered.as_slice())
            .unwrap_or(&[])
    }

    /// Movie shown in the detail view
    pub fn selected_movie(&self) -> Option<&Movie> {
        match self.view {
            View::Detail(idx) => self.movies().get(idx),
            View::List => None,
        }
    }

    /// Card currently highlighted in the grid
    pub fn highlighted_movie(&self) -> Option<&Movie> {
        self.filtered().get(self.grid.selected)
    }

    pub fn is_detail(&self) -> bool {
        matches!(self.view, View::Detail(_))
    }

    /// Apply one transition. Returns false when the action does not apply
    /// in the current state.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::CatalogLoaded(movies) => {
                if !self.load.is_loading() {
                    warn!("ignoring catalog delivered after load finished");
                    return false;
                }
                debug!(count = movies.len(), "catalog loaded");
                self.grid.set_len(movies.len());
                self.load = LoadState::Loaded(Catalog::new(movies));
                true
            }
            Action::CatalogFailed(msg) => {
                if !self.load.is_loading() {
                    return false;
                }
                debug!(error = %msg, "catalog failed");
                self.load = LoadState::Failed(msg);
                true
            }
            Action::Search(term) => {
                if self.is_detail() {
                    return false;
                }
                let LoadState::Loaded(catalog) = &mut self.load else {
                    return false;
                };
                catalog.filtered = filter_movies(&catalog.movies, &term);
                debug!(term = %term, matches = catalog.filtered.len(), "filter applied");
                self.grid.set_len(catalog.filtered.len());
                if self.search.query != term {
                    self.search.set_query(term);
                }
                true
            }
            Action::Select(idx) => {
                if self.is_detail() {
                    return false;
                }
                let Some(catalog) = self.load.catalog() else {
                    return false;
                };
                let Some(card) = catalog.filtered.get(idx) else {
                    return false;
                };
                let Some(pos) = catalog.movies.iter().position(|m| m.id == card.id) else {
                    return false;
                };
                debug!(id = %card.id, "opening detail");
                self.grid.selected = idx;
                self.view = View::Detail(pos);
                self.input_mode = InputMode::Normal;
                true
            }
            Action::Back => {
                if !self.is_detail() {
                    return false;
                }
                self.view = View::List;
                true
            }
            Action::Quit => {
                self.running = false;
                true
            }
        }
    }

    /// Focus search input
    pub fn focus_search(&mut self) {
        if self.load.catalog().is_some() && !self.is_detail() {
            self.input_mode = InputMode::Editing;
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns true if event was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return self.apply(Action::Quit);
        }

        if self.input_mode == InputMode::Editing {
            return self.handle_editing_key(key);
        }

        if key.code == KeyCode::Char('q') {
            return self.apply(Action::Quit);
        }

        match self.view {
            _ if self.load.catalog().is_none() => false,
            View::List => self.handle_list_key(key),
            View::Detail(_) => self.handle_detail_key(key),
        }
    }

    /// Handle keys in editing (text input) mode; every edit re-filters
    fn handle_editing_key(&mut self, key: KeyEvent) -> bool {
        let before = self.search.query.clone();
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
                self.input_mode = InputMode::Normal;
                return true;
            }
            KeyCode::Down => {
                self.input_mode = InputMode::Normal;
                return true;
            }
            KeyCode::Char(c) => self.search.insert(c),
            KeyCode::Backspace => self.search.backspace(),
            KeyCode::Delete => self.search.delete(),
            KeyCode::Left => self.search.cursor_left(),
            KeyCode::Right => self.search.cursor_right(),
            KeyCode::Home => self.search.cursor_home(),
            KeyCode::End => self.search.cursor_end(),
            _ => return false,
        }
        if self.search.query != before {
            let term = self.search.query.clone();
            self.apply(Action::Search(term));
        }
        true
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.focus_search();
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.grid.up();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.grid.down();
                true
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.grid.left();
                true
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.grid.right();
                true
            }
            KeyCode::PageUp => {
                self.grid.page_up(5);
                true
            }
            KeyCode::PageDown => {
                self.grid.page_down(5);
                true
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.grid.first();
                true
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.grid.last();
                true
            }
            KeyCode::Enter => self.apply(Action::Select(self.grid.selected)),
            _ => false,
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc
            | KeyCode::Backspace
            | KeyCode::Left
            | KeyCode::Char('b')
            | KeyCode::Char('h') => self.apply(Action::Back),
            _ => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new();
        app.apply(Action::CatalogLoaded(vec![
            Movie::new(1, "Inception", "Sci-Fi"),
            Movie::new(2, "Heat", "Crime"),
            Movie::new(3, "Interstellar", "Sci-Fi"),
            Movie::new(4, "Casablanca", "Romance"),
        ]));
        app
    }

    // -------------------------------------------------------------------------
    // GridState Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_grid_single_column_navigation() {
        let mut grid = GridState::new(3);
        grid.down();
        grid.down();
        assert_eq!(grid.selected, 2);

        // Can't go past end
        grid.down();
        assert_eq!(grid.selected, 2);

        grid.up();
        assert_eq!(grid.selected, 1);

        grid.first();
        assert_eq!(grid.selected, 0);
        grid.last();
        assert_eq!(grid.selected, 2);
    }

    #[test]
    fn test_grid_multi_column_navigation() {
        let mut grid = GridState::new(7);
        grid.set_columns(3);

        grid.down();
        assert_eq!(grid.selected, 3);
        grid.right();
        grid.right();
        assert_eq!(grid.selected, 5);

        // Last row only holds index 6
        grid.down();
        assert_eq!(grid.selected, 6);
        grid.down();
        assert_eq!(grid.selected, 6);

        grid.up();
        assert_eq!(grid.selected, 3);
        grid.left();
        assert_eq!(grid.selected, 2);
    }

    #[test]
    fn test_grid_empty() {
        let mut grid = GridState::new(0);
        grid.down();
        grid.right();
        grid.last();
        grid.page_down(3);
        assert_eq!(grid.selected, 0);
    }

    #[test]
    fn test_grid_set_len_clamps() {
        let mut grid = GridState::new(10);
        grid.selected = 8;
        grid.set_len(5);
        assert_eq!(grid.selected, 4);
        grid.set_len(0);
        assert_eq!(grid.selected, 0);
    }

    #[test]
    fn test_grid_first_visible_row() {
        let mut grid = GridState::new(20);
        grid.set_columns(2);
        grid.selected = 3;
        assert_eq!(grid.first_visible_row(3), 0);
        grid.selected = 11;
        assert_eq!(grid.first_visible_row(3), 3);
    }

    // -------------------------------------------------------------------------
    // SearchState Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_search_state_editing() {
        let mut search = SearchState::default();
        for c in "hello".chars() {
            search.insert(c);
        }
        assert_eq!(search.query, "hello");
        assert_eq!(search.cursor, 5);

        search.cursor_left();
        search.cursor_left();
        search.insert('X');
        assert_eq!(search.query, "helXlo");

        search.backspace();
        assert_eq!(search.query, "hello");

        search.cursor_home();
        search.delete();
        assert_eq!(search.query, "ello");
    }

    #[test]
    fn test_search_state_unicode_cursor() {
        let mut search = SearchState::default();
        for c in "amé".chars() {
            search.insert(c);
        }
        search.insert('l');
        assert_eq!(search.query, "amél");
        assert_eq!(search.cursor, 4);
        assert_eq!(search.byte_cursor(), 5);

        search.cursor_left();
        search.backspace();
        assert_eq!(search.query, "aml");
    }

    // -------------------------------------------------------------------------
    // Load Lifecycle Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_starts_loading() {
        let app = App::new();
        assert!(app.load.is_loading());
        assert!(app.filtered().is_empty());
        assert_eq!(app.view, View::List);
    }

    #[test]
    fn test_loaded_sets_movies_and_filtered() {
        let app = loaded_app();
        assert_eq!(app.movies().len(), 4);
        assert_eq!(app.filtered(), app.movies());
        assert_eq!(app.grid.len, 4);
    }

    #[test]
    fn test_failed_records_message() {
        let mut app = App::new();
        assert!(app.apply(Action::CatalogFailed("HTTP error! Status: 500".into())));
        assert_eq!(app.load.message(), Some("HTTP error! Status: 500"));
        assert!(app.filtered().is_empty());
    }

    #[test]
    fn test_load_applies_once() {
        let mut app = loaded_app();
        assert!(!app.apply(Action::CatalogLoaded(vec![])));
        assert!(!app.apply(Action::CatalogFailed("late".into())));
        assert_eq!(app.movies().len(), 4);
    }

    #[test]
    fn test_keys_ignored_while_loading() {
        let mut app = App::new();
        assert!(!press(&mut app, KeyCode::Char('/')));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(!app.apply(Action::Search("x".into())));
        assert!(!app.apply(Action::Select(0)));
    }

    // -------------------------------------------------------------------------
    // View Machine Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_search_filters_on_each_keystroke() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Editing);

        // "s" hits both Sci-Fi genres and Casablanca's title
        type_str(&mut app, "s");
        assert_eq!(app.filtered().len(), 3);
        type_str(&mut app, "ci");
        assert_eq!(app.filtered().len(), 2);
        type_str(&mut app, "x");
        assert!(app.filtered().is_empty());

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.filtered().len(), 2);
        assert_eq!(app.search.query, "sci");
    }

    #[test]
    fn test_select_and_back_preserve_search() {
        let mut app = loaded_app();
        app.apply(Action::Search("sci".into()));
        app.grid.selected = 1;

        assert!(app.apply(Action::Select(1)));
        assert_eq!(app.view, View::Detail(2));
        assert_eq!(app.selected_movie().map(|m| m.title.as_str()), Some("Interstellar"));

        // Detail never touches the filter
        assert!(!app.apply(Action::Search("heat".into())));

        assert!(app.apply(Action::Back));
        assert_eq!(app.view, View::List);
        assert_eq!(app.search.query, "sci");
        assert_eq!(app.filtered().len(), 2);
        assert_eq!(app.grid.selected, 1);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut app = loaded_app();
        app.apply(Action::Search("zzz".into()));
        assert!(!app.apply(Action::Select(0)));
        assert_eq!(app.view, View::List);
    }

    #[test]
    fn test_back_from_list_is_noop() {
        let mut app = loaded_app();
        assert!(!app.apply(Action::Back));
    }

    #[test]
    fn test_enter_opens_highlighted_card() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.highlighted_movie().map(|m| m.title.as_str()), Some("Heat"));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selected_movie().map(|m| m.title.as_str()), Some("Heat"));

        press(&mut app, KeyCode::Esc);
        assert!(!app.is_detail());
    }

    #[test]
    fn test_editing_keys_do_not_navigate() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "q");
        assert!(app.running);
        assert_eq!(app.search.query, "q");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.search.query, "q");
    }

    #[test]
    fn test_app_quit_key() {
        let mut app = loaded_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn test_app_quit_ctrl_c_while_editing() {
        let mut app = loaded_app();
        app.focus_search();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_quit_while_loading() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
