//! Event handling logic for the App.
//!
//! Two kinds of events reach the browser: key presses from the terminal and
//! completions from spawned gateway calls.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use crate::app::state::{BrowserEvent, FetchKind, Focus, ViewMode};

/// Articles skipped by `PageUp`/`PageDown`.
const ARTICLE_PAGE_SIZE: usize = 5;

impl App {
    // =========================================================================
    // Completions
    // =========================================================================

    /// Applies every completion that has already arrived. Never blocks.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply_event(event);
        }
    }

    /// Waits for the next completion and applies it.
    ///
    /// Returns `false` if nothing is pending.
    pub async fn next_event(&mut self) -> bool {
        if self.pending == 0 {
            return false;
        }
        match self.event_rx.recv().await {
            Some(event) => {
                self.apply_event(event);
                true
            }
            None => false,
        }
    }

    /// Waits until every spawned call has completed and been applied.
    pub async fn settle(&mut self) {
        while self.next_event().await {}
    }

    /// Applies one completion as a single state transition.
    pub(crate) fn apply_event(&mut self, event: BrowserEvent) {
        self.pending = self.pending.saturating_sub(1);

        match event {
            BrowserEvent::Categories(Ok(categories)) => {
                tracing::info!(count = categories.len(), "categories loaded");
                if let Some(index) = categories
                    .iter()
                    .position(|c| *c == self.view.selected_category)
                {
                    self.sidebar.cursor = index;
                }
                self.view.categories = categories;
            }
            BrowserEvent::Categories(Err(e)) => {
                tracing::error!(error = %e, "failed to fetch categories");
            }
            BrowserEvent::Health(Ok(health)) => {
                tracing::info!(ai_available = health.ai_available, "health probe");
                self.view.ai_available = health.ai_available;
                self.search.set_ai_available(health.ai_available);
            }
            BrowserEvent::Health(Err(e)) => {
                tracing::warn!(error = %e, "health probe failed, AI search disabled");
            }
            BrowserEvent::Articles {
                kind,
                result: Ok(articles),
            } => {
                tracing::info!(?kind, count = articles.len(), "articles loaded");
                self.view.finish_fetch(articles);
                self.articles.selected = 0;
            }
            BrowserEvent::Articles {
                kind,
                result: Err(e),
            } => {
                match &kind {
                    FetchKind::Category(category) => {
                        tracing::error!(error = %e, %category, "error fetching articles");
                    }
                    FetchKind::Search(query) => {
                        tracing::error!(error = %e, %query, "error searching articles");
                    }
                }
                self.view.fail_fetch(&kind);
                self.articles.selected = 0;
            }
        }
    }

    // =========================================================================
    // Keys
    // =========================================================================

    /// Handles pasted text.
    ///
    /// Only the search box accepts pastes. Newlines become spaces and other
    /// control characters are dropped, keeping the buffer single-line.
    pub fn handle_paste(&mut self, text: &str) {
        if self.focus != Focus::Search || text.is_empty() {
            return;
        }

        let filtered: String = text
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .filter(|c| !c.is_control())
            .collect();

        self.search.textarea.insert_str(&filtered);
    }

    /// Handles a key event.
    ///
    /// `Ctrl+C` always quits and `Tab`/`Shift+Tab` always move focus; every
    /// other key goes to the focused pane.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::Sidebar => {
                if !self.handle_common_key(key) {
                    self.handle_sidebar_key(key);
                }
            }
            Focus::Articles => {
                if !self.handle_common_key(key) {
                    self.handle_articles_key(key);
                }
            }
        }
    }

    /// Keys shared by the sidebar and the article list.
    ///
    /// Returns `true` if the key was consumed.
    fn handle_common_key(&mut self, key: KeyEvent) -> bool {
        if !key.modifiers.is_empty() && key.modifiers != KeyModifiers::SHIFT {
            return false;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('g') => self.set_view_mode(ViewMode::Grid),
            KeyCode::Char('l') => self.set_view_mode(ViewMode::List),
            KeyCode::Char('v') => self.toggle_view_mode(),
            _ => return false,
        }
        true
    }

    /// Keys for category navigation.
    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        let count = self.view.categories.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.sidebar.cursor = self.sidebar.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if count > 0 {
                    self.sidebar.cursor = (self.sidebar.cursor + 1).min(count - 1);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(category) = self.view.categories.get(self.sidebar.cursor).cloned() {
                    self.select_category(&category);
                }
            }
            _ => {}
        }
    }

    /// Keys for the article list.
    fn handle_articles_key(&mut self, key: KeyEvent) {
        let last = self.view.articles.len().saturating_sub(1);
        let selected = &mut self.articles.selected;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => *selected = selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => *selected = (*selected + 1).min(last),
            KeyCode::PageUp => *selected = selected.saturating_sub(ARTICLE_PAGE_SIZE),
            KeyCode::PageDown => *selected = (*selected + ARTICLE_PAGE_SIZE).min(last),
            KeyCode::Home => *selected = 0,
            KeyCode::End => *selected = last,
            _ => {}
        }
    }

    /// Keys for the search box.
    ///
    /// `Ctrl+M` and `Ctrl+J` submit like `Enter`, keeping the buffer on one
    /// line.
    fn handle_search_key(&mut self, key: KeyEvent) {
        let is_newline_chord = key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('m' | 'j'));

        match key.code {
            _ if is_newline_chord => {
                let query = self.search.text();
                self.submit_search(&query);
            }
            KeyCode::Enter => {
                let query = self.search.text();
                self.submit_search(&query);
            }
            KeyCode::Esc => self.focus = Focus::Sidebar,
            _ => {
                self.search.textarea.input(key);
            }
        }
    }
}
