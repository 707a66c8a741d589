//! Application state structures.
//!
//! - **`ViewState`**: everything the views render from (articles, loading,
//!   error, categories, search query, view mode, AI availability)
//! - **`SearchInputState`**: the search box's local text buffer
//! - **`SidebarState`** / **`ArticlesState`**: keyboard cursors
//! - **`LayoutState`**: dynamic layout dimensions
//!
//! `ViewState` is only mutated through its transition methods, which the
//! action handlers on `App` call. The views never write to it.

use tui_textarea::TextArea;

use crate::app::layout::BrowserLayout;
use crate::core::{Article, GatewayError, Health};

/// Category selected when the application starts.
pub const DEFAULT_CATEGORY: &str = "news";

/// Placeholder shown in the search box when AI search is available.
pub const AI_SEARCH_PLACEHOLDER: &str =
    "Try 'Aravali Hills Supreme Court', 'Artificial Intelligence', 'Climate Change'...";

/// Placeholder shown in the search box otherwise.
pub const PLAIN_SEARCH_PLACEHOLDER: &str = "Search articles...";

/// Article layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Bordered cards arranged in columns.
    #[default]
    Grid,
    /// Compact two-line entries.
    List,
}

impl ViewMode {
    /// Switches to the other layout.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }

    /// Returns the display name for this mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grid => "Grid",
            Self::List => "List",
        }
    }

    /// Returns the toggle button icon for this mode.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Grid => "⊞",
            Self::List => "≡",
        }
    }
}

/// Which kind of article fetch produced a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchKind {
    /// Articles for a category.
    Category(String),
    /// Articles for a search query.
    Search(String),
}

impl FetchKind {
    /// Returns the fixed user-facing message shown when this fetch fails.
    #[must_use]
    pub const fn failure_message(&self) -> &'static str {
        match self {
            Self::Category(_) => "Failed to fetch articles. Please try again.",
            Self::Search(_) => "Search failed. Please try again.",
        }
    }
}

/// Completions sent from spawned gateway calls back to the UI loop.
#[derive(Debug)]
pub enum BrowserEvent {
    /// Category list call completed.
    Categories(Result<Vec<String>, GatewayError>),
    /// Health probe completed.
    Health(Result<Health, GatewayError>),
    /// Article listing or search completed.
    Articles {
        /// What was fetched.
        kind: FetchKind,
        /// The outcome.
        result: Result<Vec<Article>, GatewayError>,
    },
}

/// The browser's view state.
///
/// Created once at startup with [`ViewState::default`]. Invariants:
/// - `error` is cleared when a fetch starts
/// - after a terminal transition, `articles` is non-empty or `error` is set,
///   never both
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Articles from the most recently applied fetch.
    pub articles: Vec<Article>,
    /// Whether an article fetch is in flight.
    pub loading: bool,
    /// Static message for the last failed fetch.
    pub error: Option<String>,
    /// Category used for category fetches.
    pub selected_category: String,
    /// Categories as returned by the backend, in display order.
    pub categories: Vec<String>,
    /// Last submitted search query (empty when browsing a category).
    pub search_query: String,
    /// Article layout.
    pub view_mode: ViewMode,
    /// Whether the AI search backend reported itself available.
    pub ai_available: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            articles: Vec::new(),
            loading: false,
            error: None,
            selected_category: DEFAULT_CATEGORY.to_string(),
            categories: Vec::new(),
            search_query: String::new(),
            view_mode: ViewMode::default(),
            ai_available: false,
        }
    }
}

impl ViewState {
    /// Returns true if a non-blank search query is active.
    #[must_use]
    pub fn is_searching(&self) -> bool {
        !self.search_query.trim().is_empty()
    }

    /// Marks an article fetch as started.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies a successful article fetch.
    pub fn finish_fetch(&mut self, articles: Vec<Article>) {
        self.articles = articles;
        self.error = None;
        self.loading = false;
    }

    /// Applies a failed article fetch.
    pub fn fail_fetch(&mut self, kind: &FetchKind) {
        self.articles.clear();
        self.error = Some(kind.failure_message().to_string());
        self.loading = false;
    }
}

/// Which pane receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Category navigation.
    #[default]
    Sidebar,
    /// Search box.
    Search,
    /// Article list.
    Articles,
}

impl Focus {
    /// Returns the next pane in Tab order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Sidebar => Self::Search,
            Self::Search => Self::Articles,
            Self::Articles => Self::Sidebar,
        }
    }

    /// Returns the previous pane in Tab order.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Sidebar => Self::Articles,
            Self::Search => Self::Sidebar,
            Self::Articles => Self::Search,
        }
    }
}

/// The search box's local buffer.
///
/// The buffer belongs to the input, not to [`ViewState`]: typing never
/// touches the store, and submitting leaves the text in place.
pub struct SearchInputState {
    /// Single-line text area.
    pub textarea: TextArea<'static>,
}

impl SearchInputState {
    /// Creates an empty search box with the placeholder for `ai_available`.
    #[must_use]
    pub fn new(ai_available: bool) -> Self {
        let mut state = Self {
            textarea: TextArea::default(),
        };
        state.set_ai_available(ai_available);
        state
    }

    /// Updates the placeholder to match AI availability.
    pub fn set_ai_available(&mut self, ai_available: bool) {
        self.textarea.set_placeholder_text(placeholder_text(ai_available));
    }

    /// Returns the buffered text.
    #[must_use]
    pub fn text(&self) -> String {
        self.textarea.lines().join(" ")
    }
}

/// Returns the search placeholder for the given AI availability.
#[must_use]
pub const fn placeholder_text(ai_available: bool) -> &'static str {
    if ai_available {
        AI_SEARCH_PLACEHOLDER
    } else {
        PLAIN_SEARCH_PLACEHOLDER
    }
}

/// Keyboard cursor in the category list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarState {
    /// Index of the highlighted category.
    pub cursor: usize,
}

/// Keyboard selection in the article list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArticlesState {
    /// Index of the highlighted article.
    pub selected: usize,
}

/// Dynamic layout dimensions, recalculated every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutState {
    /// Cached browser layout.
    pub browser: BrowserLayout,
}
