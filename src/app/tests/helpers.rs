//! Shared test utilities for the app module.
//!
//! - `MockGateway` - canned gateway responses with call recording and gates
//! - `create_test_app` - builds an `App` on top of a mock
//! - `render_app_to_terminal` - renders the app to a `TestBackend`
//! - Key event helpers (`char_key`, `key`, `ctrl_key`)

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};
use tokio::sync::Notify;

use crate::app::App;
use crate::core::{Article, ArticleId, ArticleKind, GatewayError, Health, NewsGateway};

/// Creates a [`KeyEvent`] for a character key with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Creates a [`KeyEvent`] for a key with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Creates a [`KeyEvent`] for `Ctrl` + a character.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Types `text` into the focused pane one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(char_key(c));
    }
}

/// Creates an aggregated article.
pub fn article(id: i64, title: &str) -> Article {
    Article {
        id: ArticleId::Number(id),
        title: title.to_string(),
        description: format!("About {title}"),
        source: "Wire".to_string(),
        category: "news".to_string(),
        link: format!("https://example.com/{id}"),
        published: "2025-01-05T10:00:00Z".to_string(),
        kind: ArticleKind::Aggregated,
    }
}

/// Creates an AI-generated article.
pub fn ai_article(id: i64, title: &str) -> Article {
    Article {
        kind: ArticleKind::AiGenerated,
        source: "Gemini AI".to_string(),
        ..article(id, title)
    }
}

/// A gateway returning canned responses.
///
/// Every call is counted and its argument recorded. A category or query can
/// be gated so that its response is held back until [`MockGateway::release`]
/// is called, which lets tests choose the order in which overlapping
/// requests complete.
#[derive(Default)]
pub struct MockGateway {
    /// Categories returned by `list_categories`; `None` fails the call.
    pub categories: Option<Vec<String>>,
    /// Health returned by `health`; `None` fails the call.
    pub health: Option<Health>,
    /// Articles per category. Unknown categories return no articles.
    pub by_category: HashMap<String, Vec<Article>>,
    /// Articles per query. Unknown queries return no articles.
    pub by_query: HashMap<String, Vec<Article>>,
    /// Categories and queries answered with HTTP 500.
    pub failing: HashSet<String>,
    /// Categories and queries answered with `success: false`.
    pub rejected: HashSet<String>,

    gates: Mutex<HashMap<String, Arc<Notify>>>,

    pub category_list_calls: AtomicU32,
    pub health_calls: AtomicU32,
    pub category_calls: AtomicU32,
    pub search_calls: AtomicU32,
    /// Arguments of article calls in call order, as `category:x` or `search:x`.
    pub recorded: Mutex<Vec<String>>,
}

impl MockGateway {
    /// A healthy backend with three categories and AI search available.
    pub fn healthy() -> Self {
        Self {
            categories: Some(vec![
                "news".to_string(),
                "tech".to_string(),
                "science".to_string(),
            ]),
            health: Some(Health { ai_available: true }),
            ..Self::default()
        }
    }

    /// Makes `list_categories` fail.
    pub fn without_categories(mut self) -> Self {
        self.categories = None;
        self
    }

    /// Makes the health probe fail.
    pub fn without_health(mut self) -> Self {
        self.health = None;
        self
    }

    /// Sets the health probe result.
    pub fn with_health(mut self, health: Health) -> Self {
        self.health = Some(health);
        self
    }

    /// Sets the articles returned for `category`.
    pub fn with_category(mut self, category: &str, articles: Vec<Article>) -> Self {
        self.by_category.insert(category.to_string(), articles);
        self
    }

    /// Sets the articles returned for `query`.
    pub fn with_query(mut self, query: &str, articles: Vec<Article>) -> Self {
        self.by_query.insert(query.to_string(), articles);
        self
    }

    /// Makes calls for `key` fail with HTTP 500.
    pub fn failing(mut self, key: &str) -> Self {
        self.failing.insert(key.to_string());
        self
    }

    /// Makes calls for `key` answer with an unsuccessful envelope.
    pub fn rejecting(mut self, key: &str) -> Self {
        self.rejected.insert(key.to_string());
        self
    }

    /// Holds back responses for `key` until released.
    pub fn gated(self, key: &str) -> Self {
        self.gates
            .lock()
            .unwrap()
            .insert(key.to_string(), Arc::new(Notify::new()));
        self
    }

    /// Lets the held-back response for `key` complete.
    pub fn release(&self, key: &str) {
        if let Some(gate) = self.gates.lock().unwrap().get(key) {
            gate.notify_one();
        }
    }

    /// Returns the recorded article calls.
    pub fn recorded(&self) -> Vec<String> {
        self.recorded.lock().unwrap().clone()
    }

    async fn wait_gate(&self, key: &str) {
        let gate = self.gates.lock().unwrap().get(key).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }
    }

    fn outcome(
        &self,
        key: &str,
        table: &HashMap<String, Vec<Article>>,
    ) -> Result<Vec<Article>, GatewayError> {
        if self.failing.contains(key) {
            return Err(GatewayError::Status(500));
        }
        if self.rejected.contains(key) {
            return Err(GatewayError::Rejected);
        }
        Ok(table.get(key).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl NewsGateway for MockGateway {
    async fn list_categories(&self) -> Result<Vec<String>, GatewayError> {
        self.category_list_calls.fetch_add(1, Ordering::SeqCst);
        self.categories.clone().ok_or(GatewayError::Status(503))
    }

    async fn health(&self) -> Result<Health, GatewayError> {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        self.health.ok_or(GatewayError::Status(503))
    }

    async fn list_articles_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Article>, GatewayError> {
        self.category_calls.fetch_add(1, Ordering::SeqCst);
        self.recorded
            .lock()
            .unwrap()
            .push(format!("category:{category}"));
        self.wait_gate(category).await;
        self.outcome(category, &self.by_category)
    }

    async fn search_articles(&self, query: &str) -> Result<Vec<Article>, GatewayError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.recorded.lock().unwrap().push(format!("search:{query}"));
        self.wait_gate(query).await;
        self.outcome(query, &self.by_query)
    }
}

/// Creates an `App` backed by `mock`, returning both.
pub fn create_test_app(mock: MockGateway) -> (App, Arc<MockGateway>) {
    let mock = Arc::new(mock);
    let app = App::new(Arc::clone(&mock) as Arc<dyn NewsGateway>);
    (app, mock)
}

/// Creates an `App` and applies the startup calls.
pub async fn initialized_app(mock: MockGateway) -> (App, Arc<MockGateway>) {
    let (mut app, mock) = create_test_app(mock);
    app.initialize();
    app.settle().await;
    (app, mock)
}

/// Renders the app to a `TestBackend` terminal.
///
/// Calls `update_layout()` before rendering, as the main loop does.
///
/// # Errors
///
/// Returns an error if terminal creation or rendering fails.
pub fn render_app_to_terminal(
    app: &mut App,
    width: u16,
    height: u16,
) -> Result<Terminal<TestBackend>> {
    use ratatui::layout::Rect;

    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend)?;

    app.update_layout(Rect::new(0, 0, width, height));
    terminal.draw(|f| app.render(f))?;

    Ok(terminal)
}

/// Renders the app and returns the screen as text.
///
/// # Errors
///
/// Returns an error if rendering fails.
pub fn render_to_text(app: &mut App, width: u16, height: u16) -> Result<String> {
    let terminal = render_app_to_terminal(app, width, height)?;
    Ok(crate::tui::widgets::buffer_text(terminal.backend().buffer()))
}
