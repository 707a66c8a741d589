//! Browser screen rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::app::{App, Focus, ViewMode};
use crate::tui::widgets::{ArticleListWidget, LoadingWidget, SidebarWidget};

/// Application title.
pub(crate) const TITLE: &str = "📰 ArticleHub";

/// Badge next to the title when AI search is available.
pub(crate) const AI_POWERED_BADGE: &str = "✨ AI-Powered";

/// Line below the title.
pub(crate) const TAGLINE: &str = "Discover, Search & Explore Articles from Around the World";

/// Hint below the search box when AI search is available.
pub(crate) const AI_SEARCH_HINT: &str = "✨ Powered by Google Gemini AI";

impl App {
    /// Renders the two-line header.
    pub(super) fn render_header(&self, frame: &mut Frame, area: Rect) {
        let mut title = vec![Span::styled(TITLE, self.theme.header_style())];
        if self.view.ai_available {
            title.push(Span::raw("  "));
            title.push(Span::styled(AI_POWERED_BADGE, self.theme.ai_style()));
        }

        let lines = vec![
            Line::from(title),
            Line::from(Span::styled(TAGLINE, self.theme.muted_style())),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Renders the category sidebar.
    pub(super) fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let sidebar = SidebarWidget::new(
            &self.view.categories,
            &self.view.selected_category,
            self.view.is_searching(),
            &self.theme,
        )
        .cursor(self.sidebar.cursor, self.focus == Focus::Sidebar);
        frame.render_widget(sidebar, area);
    }

    /// Renders the search box and, when AI search is available, the hint.
    pub(super) fn render_search(&self, frame: &mut Frame, area: Rect, hint_area: Rect) {
        let focused = self.focus == Focus::Search;
        let border_style = if focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::bordered()
            .title(" Search ")
            .title_style(self.theme.header_style())
            .border_style(border_style);

        let mut textarea = self.search.textarea.clone();
        textarea.set_block(block);
        textarea.set_style(self.theme.normal_style());
        textarea.set_cursor_line_style(ratatui::style::Style::default());
        textarea.set_placeholder_style(self.theme.placeholder_style());
        if !focused {
            textarea.set_cursor_style(ratatui::style::Style::default());
        }
        frame.render_widget(&textarea, area);

        if self.view.ai_available {
            let hint = Paragraph::new(Span::styled(AI_SEARCH_HINT, self.theme.ai_style()));
            frame.render_widget(hint, hint_area);
        }
    }

    /// Renders the view toggle and the article count.
    pub(super) fn render_controls(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for mode in [ViewMode::Grid, ViewMode::List] {
            let label = format!("[{} {}]", mode.icon(), mode.name());
            let style = if mode == self.view.view_mode {
                self.theme.highlight_style()
            } else {
                self.theme.muted_style()
            };
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
        }

        if !self.view.articles.is_empty() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!("{} articles found", self.view.articles.len()),
                self.theme.muted_style(),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Renders the error banner, if any.
    pub(super) fn render_error(&self, frame: &mut Frame, area: Rect) {
        let Some(error) = &self.view.error else {
            return;
        };
        let banner = Line::from(vec![
            Span::styled("⚠ ", self.theme.warning_style()),
            Span::styled(error.as_str(), self.theme.error_style()),
        ]);
        frame.render_widget(Paragraph::new(banner), area);
    }

    /// Renders the articles, or the loading indicator while fetching.
    pub(super) fn render_articles(&self, frame: &mut Frame, area: Rect) {
        if self.view.loading {
            frame.render_widget(LoadingWidget::new(self.ticks, &self.theme), area);
            return;
        }

        let articles =
            ArticleListWidget::new(&self.view.articles, self.view.view_mode, &self.theme)
                .selected(self.articles.selected, self.focus == Focus::Articles);
        frame.render_widget(articles, area);
    }

    /// Renders key hints for the focused pane.
    pub(super) fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hints: &[(&str, &str)] = match self.focus {
            Focus::Search => &[
                ("[Enter] ", "Search  "),
                ("[Esc] ", "Back  "),
                ("[Tab] ", "Next pane"),
            ],
            Focus::Sidebar => &[
                ("[↑/↓] ", "Move  "),
                ("[Enter] ", "Select  "),
                ("[/] ", "Search  "),
                ("[v] ", "Grid/List  "),
                ("[Tab] ", "Next pane  "),
                ("[q] ", "Quit"),
            ],
            Focus::Articles => &[
                ("[↑/↓] ", "Move  "),
                ("[PgUp/PgDn] ", "Page  "),
                ("[v] ", "Grid/List  "),
                ("[Tab] ", "Next pane  "),
                ("[q] ", "Quit"),
            ],
        };

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in hints {
            spans.push(Span::styled(*key, self.theme.highlight_style()));
            spans.push(Span::styled(*label, self.theme.muted_style()));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
