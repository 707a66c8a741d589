//! Main application state and logic.
//!
//! `App` is the article browser: it owns the [`ViewState`], talks to the
//! backend through an injected [`NewsGateway`], and renders the views.
//! Submodules:
//! - `events` - key handling and completion events
//! - `layout` - frame layout
//! - `render` - UI rendering
//! - `state` - state structures
//!
//! ## Fetch model
//!
//! Action handlers change state synchronously and then spawn the gateway
//! call as a Tokio task. Each task sends exactly one [`BrowserEvent`] back
//! over a channel; the UI loop drains it in [`App::process_events`] and
//! applies every event as one transition. Requests are never cancelled, so
//! when two article fetches overlap the one that completes last decides what
//! is shown.

pub mod events;
mod layout;
mod render;
pub mod state;

#[cfg(test)]
mod tests;

pub use layout::{BrowserLayout, calculate_browser_layout};

use std::sync::Arc;

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::core::NewsGateway;
use crate::tui::Theme;

pub use self::state::{
    ArticlesState, BrowserEvent, DEFAULT_CATEGORY, FetchKind, Focus, LayoutState,
    SearchInputState, SidebarState, ViewMode, ViewState,
};

/// Channel buffer size for completion events.
const EVENT_CHANNEL_SIZE: usize = 64;

/// Main application state.
///
/// Organized into component sub-structs:
/// - `view`: the store every view renders from
/// - `search`: the search box's local buffer
/// - `sidebar` / `articles`: keyboard cursors
/// - `layout`: dynamic layout dimensions updated each frame
pub struct App {
    /// Backend access.
    gateway: Arc<dyn NewsGateway>,
    /// Theme for styling.
    pub(crate) theme: Theme,
    /// Pane receiving key presses.
    pub(crate) focus: Focus,
    /// Should quit flag.
    should_quit: bool,
    /// Frame counter driving the loading spinner.
    pub(crate) ticks: u64,
    /// Spawned calls whose completion has not been applied yet.
    pending: usize,

    /// Completion receiver drained by the UI loop.
    event_rx: mpsc::Receiver<BrowserEvent>,
    /// Completion sender cloned into every spawned call.
    event_tx: mpsc::Sender<BrowserEvent>,

    /// The view-state store.
    pub(crate) view: ViewState,
    /// Search box buffer.
    pub(crate) search: SearchInputState,
    /// Category cursor.
    pub(crate) sidebar: SidebarState,
    /// Article selection.
    pub(crate) articles: ArticlesState,
    /// Dynamic layout dimensions.
    pub(crate) layout: LayoutState,
}

impl App {
    /// Creates the browser with default state. Nothing is fetched until
    /// [`App::initialize`] is called.
    #[must_use]
    pub fn new(gateway: Arc<dyn NewsGateway>) -> Self {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_SIZE);
        let view = ViewState::default();

        Self {
            gateway,
            theme: Theme::default(),
            focus: Focus::default(),
            should_quit: false,
            ticks: 0,
            pending: 0,
            event_rx,
            event_tx,
            search: SearchInputState::new(view.ai_available),
            view,
            sidebar: SidebarState::default(),
            articles: ArticlesState::default(),
            layout: LayoutState::default(),
        }
    }

    /// Returns the current view state.
    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// Returns the focused pane.
    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns true if the application should quit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the number of spawned calls not yet applied.
    #[must_use]
    pub const fn pending_requests(&self) -> usize {
        self.pending
    }

    /// Returns the search box's buffered text.
    #[must_use]
    pub fn search_text(&self) -> String {
        self.search.text()
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Issues the startup calls: categories, health probe, and articles for
    /// the default category. Must run inside a Tokio runtime.
    pub fn initialize(&mut self) {
        tracing::info!(category = %self.view.selected_category, "initializing browser");

        let gateway = Arc::clone(&self.gateway);
        self.spawn(async move { BrowserEvent::Categories(gateway.list_categories().await) });

        let gateway = Arc::clone(&self.gateway);
        self.spawn(async move { BrowserEvent::Health(gateway.health().await) });

        let category = self.view.selected_category.clone();
        self.fetch_by_category(category);
    }

    /// Selects a category, dropping any search context, and refetches.
    pub fn select_category(&mut self, category: &str) {
        self.view.selected_category = category.to_string();
        self.view.search_query.clear();
        if let Some(index) = self.view.categories.iter().position(|c| c == category) {
            self.sidebar.cursor = index;
        }
        self.fetch_by_category(category.to_string());
    }

    /// Records `query` and fetches search results, or refetches the current
    /// category when the query is blank.
    pub fn submit_search(&mut self, query: &str) {
        self.view.search_query = query.to_string();
        if query.trim().is_empty() {
            let category = self.view.selected_category.clone();
            self.fetch_by_category(category);
        } else {
            self.fetch_by_search(query.to_string());
        }
    }

    /// Sets the article layout. Never touches the network.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.view_mode = mode;
    }

    /// Switches between grid and list layout.
    pub fn toggle_view_mode(&mut self) {
        self.set_view_mode(self.view.view_mode.toggled());
    }

    /// Starts a category fetch.
    pub fn fetch_by_category(&mut self, category: String) {
        self.view.begin_fetch();
        tracing::debug!(%category, "fetching articles");

        let gateway = Arc::clone(&self.gateway);
        self.spawn(async move {
            let result = gateway.list_articles_by_category(&category).await;
            BrowserEvent::Articles {
                kind: FetchKind::Category(category),
                result,
            }
        });
    }

    /// Starts a search fetch.
    pub fn fetch_by_search(&mut self, query: String) {
        self.view.begin_fetch();
        tracing::debug!(%query, "searching articles");

        let gateway = Arc::clone(&self.gateway);
        self.spawn(async move {
            let result = gateway.search_articles(&query).await;
            BrowserEvent::Articles {
                kind: FetchKind::Search(query),
                result,
            }
        });
    }

    /// Spawns a gateway call whose completion is sent back as an event.
    fn spawn<F>(&mut self, call: F)
    where
        F: Future<Output = BrowserEvent> + Send + 'static,
    {
        self.pending += 1;
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = call.await;
            let _ = event_tx.send(event).await;
        });
    }

    // =========================================================================
    // Frame
    // =========================================================================

    /// Calculates and caches the layout based on terminal dimensions.
    ///
    /// Should be called once per frame before rendering.
    pub fn update_layout(&mut self, terminal_area: Rect) {
        self.layout.browser = calculate_browser_layout(terminal_area, self.view.ai_available);
    }

    /// Advances the spinner.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }
}
