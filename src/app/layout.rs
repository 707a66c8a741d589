//! Layout calculation helpers for the TUI.
//!
//! Single source of truth for where each view goes, shared by
//! `App::update_layout` and rendering.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the category sidebar, borders included.
const SIDEBAR_WIDTH: u16 = 26;

/// Layout of the browser screen.
///
/// ```text
/// +---------------- header ----------------+
/// | sidebar | search                       |
/// |         | hint (AI only)               |
/// |         | controls                     |
/// |         | error                        |
/// |         | articles                     |
/// +---------------- footer ----------------+
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLayout {
    /// Title, AI badge and tagline (2 lines).
    pub header: Rect,
    /// Category navigation.
    pub sidebar: Rect,
    /// Search box (bordered, 3 lines).
    pub search: Rect,
    /// "Powered by" hint below the search box; zero height without AI.
    pub hint: Rect,
    /// View toggle and article count (1 line).
    pub controls: Rect,
    /// Error banner (1 line, blank when there is no error).
    pub error: Rect,
    /// Article view or loading indicator.
    pub articles: Rect,
    /// Key hints (1 line).
    pub footer: Rect,
}

/// Calculates the browser layout.
///
/// The hint row only takes space when AI search is available.
#[must_use]
pub fn calculate_browser_layout(area: Rect, ai_available: bool) -> BrowserLayout {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(area);

    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Fill(1)]).areas(body);

    let hint_height = u16::from(ai_available);
    let [search, hint, controls, error, articles] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(hint_height),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
    ])
    .areas(main);

    BrowserLayout {
        header,
        sidebar,
        search,
        hint,
        controls,
        error,
        articles,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_terminal() {
        let layout = calculate_browser_layout(Rect::new(0, 0, 100, 30), false);

        assert_eq!(layout.header.height, 2);
        assert_eq!(layout.footer.height, 1);
        assert_eq!(layout.footer.y, 29);
        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.sidebar.height, 27);
        assert_eq!(layout.search.height, 3);
        assert_eq!(layout.hint.height, 0);
        assert_eq!(layout.controls.height, 1);
        assert_eq!(layout.error.height, 1);
        // 27 - 3 - 0 - 1 - 1
        assert_eq!(layout.articles.height, 22);
        assert_eq!(layout.articles.width, 100 - SIDEBAR_WIDTH);
        assert_eq!(layout.articles.x, SIDEBAR_WIDTH);
    }

    #[test]
    fn hint_row_only_with_ai() {
        let layout = calculate_browser_layout(Rect::new(0, 0, 100, 30), true);
        assert_eq!(layout.hint.height, 1);
        assert_eq!(layout.articles.height, 21);
    }

    #[test]
    fn small_terminal_does_not_panic() {
        let layout = calculate_browser_layout(Rect::new(0, 0, 20, 8), true);
        assert!(layout.articles.height <= 8);
        assert_eq!(layout.header.height, 2);
    }
}
