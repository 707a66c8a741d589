//! Rendering methods for the App.
//!
//! The whole screen is drawn from `ViewState` plus the local search buffer
//! and keyboard cursors:
//! - **Header**: title, AI badge, tagline
//! - **Sidebar**: category navigation
//! - **Search**: search box and AI hint
//! - **Controls**: view toggle and article count, error banner
//! - **Articles**: grid/list view, or the loading indicator while fetching
//! - **Footer**: key hints for the focused pane

mod browser;

#[cfg(test)]
pub(crate) use browser::{AI_POWERED_BADGE, AI_SEARCH_HINT, TITLE};

use ratatui::Frame;

use super::App;

impl App {
    /// Renders the application UI.
    pub fn render(&self, frame: &mut Frame) {
        let layout = self.layout.browser;

        self.render_header(frame, layout.header);
        self.render_sidebar(frame, layout.sidebar);
        self.render_search(frame, layout.search, layout.hint);
        self.render_controls(frame, layout.controls);
        self.render_error(frame, layout.error);
        self.render_articles(frame, layout.articles);
        self.render_footer(frame, layout.footer);
    }
}
