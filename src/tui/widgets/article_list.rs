//! Article renderer for grid and list layouts.
//!
//! The widget is a pure function of the article slice and the view mode
//! (plus theme and keyboard selection). Both layouts show the same fields:
//! badges, title, description, publish date and link. Grid draws bordered
//! cards in up to [`MAX_GRID_COLUMNS`] columns; list draws compact entries.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::ViewMode;
use crate::core::Article;
use crate::tui::Theme;

/// Heading of the empty state.
pub const EMPTY_TITLE: &str = "No articles found";

/// Hint below the empty state heading.
pub const EMPTY_HINT: &str = "Try searching for a topic or selecting a different category.";

/// Badge text marking AI-generated articles.
pub const AI_BADGE: &str = "⚡ AI";

/// Maximum number of card columns in grid mode.
pub const MAX_GRID_COLUMNS: usize = 3;

/// Minimum card width before dropping a column.
const CARD_MIN_WIDTH: u16 = 36;

/// Card height: borders, badges, title, two description lines, footer.
const CARD_HEIGHT: u16 = 7;

/// List entry height: title line and meta line.
const LIST_ITEM_HEIGHT: u16 = 2;

/// Returns how many card columns fit in `width`.
#[must_use]
pub fn grid_columns(width: u16) -> usize {
    usize::from(width / CARD_MIN_WIDTH).clamp(1, MAX_GRID_COLUMNS)
}

/// Truncates `text` to `max_width` display columns, ending with `…` when cut.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Builds the badge spans for an article: source, category, and AI when
/// the article is AI-generated.
#[must_use]
pub fn badge_spans(article: &Article, theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = vec![
        Span::styled(format!(" {} ", article.source), theme.source_badge_style()),
        Span::raw(" "),
        Span::styled(
            format!(" {} ", article.category),
            theme.category_badge_style(),
        ),
    ];
    if article.is_ai_generated() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(AI_BADGE, theme.ai_style()));
    }
    spans
}

/// Renders articles in the active layout.
pub struct ArticleListWidget<'a> {
    articles: &'a [Article],
    view_mode: ViewMode,
    selected: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ArticleListWidget<'a> {
    /// Creates the widget.
    #[must_use]
    pub const fn new(articles: &'a [Article], view_mode: ViewMode, theme: &'a Theme) -> Self {
        Self {
            articles,
            view_mode,
            selected: 0,
            focused: false,
            theme,
        }
    }

    /// Sets the highlighted article and whether the list has focus.
    #[must_use]
    pub const fn selected(mut self, selected: usize, focused: bool) -> Self {
        self.selected = selected;
        self.focused = focused;
        self
    }

    fn footer_line(&self, article: &Article, width: usize) -> Line<'static> {
        let date = format!("🕒 {}", article.published_label());
        let link_room = width.saturating_sub(date.width() + 2);
        Line::from(vec![
            Span::styled(date, self.theme.muted_style()),
            Span::raw("  "),
            Span::styled(
                truncate_to_width(&article.link, link_room),
                self.theme.link_style(),
            ),
        ])
    }

    fn render_empty(&self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::default(),
            Line::from("🔍"),
            Line::from(Span::styled(EMPTY_TITLE, self.theme.title_style())),
            Line::from(Span::styled(EMPTY_HINT, self.theme.muted_style())),
        ];
        Paragraph::new(lines)
            .centered()
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    fn render_card(&self, article: &Article, is_selected: bool, area: Rect, buf: &mut Buffer) {
        let border_style = if is_selected && self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::bordered().border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let [badges, title, description, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);
        let width = usize::from(inner.width);

        Paragraph::new(Line::from(badge_spans(article, self.theme))).render(badges, buf);
        Paragraph::new(Span::styled(
            truncate_to_width(&article.title, width),
            self.theme.title_style(),
        ))
        .render(title, buf);
        Paragraph::new(article.description.as_str())
            .style(self.theme.normal_style())
            .wrap(Wrap { trim: true })
            .render(description, buf);
        Paragraph::new(self.footer_line(article, width)).render(footer, buf);
    }

    fn render_grid(&self, area: Rect, buf: &mut Buffer) {
        let columns = grid_columns(area.width);
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
        let selected_row = self.selected / columns;
        let first_row = selected_row.saturating_sub(visible_rows - 1);

        let column_constraints = vec![Constraint::Fill(1); columns];
        let rows = self
            .articles
            .chunks(columns)
            .enumerate()
            .skip(first_row)
            .take(visible_rows);

        let mut y = area.y;
        for (row_index, row_articles) in rows {
            let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            let row_area = Rect::new(area.x, y, area.width, height);
            let cells = Layout::horizontal(column_constraints.clone()).split(row_area);

            for (col, article) in row_articles.iter().enumerate() {
                let index = row_index * columns + col;
                self.render_card(article, index == self.selected, cells[col], buf);
            }
            y = y.saturating_add(CARD_HEIGHT);
        }
    }

    fn list_entry(
        &self,
        article: &Article,
        is_selected: bool,
        width: usize,
    ) -> Vec<Line<'static>> {
        let marker = if is_selected && self.focused {
            "▸ "
        } else {
            "  "
        };
        let mut title_line = vec![Span::styled(marker, self.theme.highlight_style())];
        let badges = badge_spans(article, self.theme);
        let badges_width: usize = badges.iter().map(|s| s.content.width()).sum();
        title_line.extend(badges);
        title_line.push(Span::raw(" "));
        title_line.push(Span::styled(
            truncate_to_width(
                &article.title,
                width.saturating_sub(marker.width() + badges_width + 1),
            ),
            self.theme.title_style(),
        ));

        let mut meta_line = self.footer_line(article, width.saturating_sub(2));
        meta_line.spans.insert(0, Span::raw("  "));
        let description_room = width
            .saturating_sub(meta_line.width())
            .saturating_sub(3);
        if description_room > 0 && !article.description.is_empty() {
            meta_line.spans.push(Span::raw(" · "));
            meta_line.spans.push(Span::styled(
                truncate_to_width(&article.description, description_room),
                self.theme.normal_style(),
            ));
        }

        vec![Line::from(title_line), meta_line]
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let visible = usize::from((area.height / LIST_ITEM_HEIGHT).max(1));
        let first = self.selected.saturating_sub(visible - 1);
        let width = usize::from(area.width);

        let lines: Vec<Line<'static>> = self
            .articles
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
            .flat_map(|(i, article)| self.list_entry(article, i == self.selected, width))
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}

impl Widget for ArticleListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.articles.is_empty() {
            self.render_empty(area, buf);
            return;
        }

        match self.view_mode {
            ViewMode::Grid => self.render_grid(area, buf),
            ViewMode::List => self.render_list(area, buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ArticleKind;
    use crate::tui::widgets::buffer_text;

    fn article(title: &str, kind: ArticleKind) -> Article {
        Article {
            title: title.to_string(),
            description: format!("About {title}"),
            source: "BBC".to_string(),
            category: "news".to_string(),
            link: "https://example.com/story".to_string(),
            published: "2025-01-05T10:30:00Z".to_string(),
            kind,
            ..Article::default()
        }
    }

    fn render(widget: ArticleListWidget<'_>, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buffer_text(&buf)
    }

    mod helpers {
        use super::*;

        #[test]
        fn columns_depend_on_width() {
            assert_eq!(grid_columns(20), 1);
            assert_eq!(grid_columns(72), 2);
            assert_eq!(grid_columns(200), MAX_GRID_COLUMNS);
        }

        #[test]
        fn truncation() {
            assert_eq!(truncate_to_width("short", 10), "short");
            assert_eq!(truncate_to_width("abcdefgh", 5), "abcd…");
            assert_eq!(truncate_to_width("abc", 0), "");
        }

        #[test]
        fn truncation_counts_wide_chars() {
            // Each CJK character is two columns wide.
            assert_eq!(truncate_to_width("日本語です", 5), "日本…");
        }

        #[test]
        fn ai_badge_only_for_ai_articles() {
            let theme = Theme::default();

            let ai = badge_spans(&article("a", ArticleKind::AiGenerated), &theme);
            assert!(ai.iter().any(|s| s.content == AI_BADGE));

            let feed = badge_spans(&article("b", ArticleKind::Aggregated), &theme);
            assert!(!feed.iter().any(|s| s.content == AI_BADGE));
            assert_eq!(feed.len(), 3);
        }
    }

    mod rendering {
        use super::*;

        #[test]
        fn empty_state() {
            let theme = Theme::default();
            let text = render(ArticleListWidget::new(&[], ViewMode::Grid, &theme), 80, 10);
            assert!(text.contains(EMPTY_TITLE));
        }

        #[test]
        fn grid_shows_card_fields() {
            let theme = Theme::default();
            let articles = vec![article("Rates held", ArticleKind::AiGenerated)];
            let text = render(
                ArticleListWidget::new(&articles, ViewMode::Grid, &theme),
                60,
                CARD_HEIGHT,
            );

            assert!(text.contains("Rates held"));
            assert!(text.contains("BBC"));
            assert!(text.contains("AI"));
            assert!(text.contains("About Rates held"));
            assert!(text.contains("Jan 5, 2025"));
            assert!(text.contains("https://example.com/story"));
        }

        #[test]
        fn unparsable_date_renders_recently() {
            let theme = Theme::default();
            let mut bad = article("Old", ArticleKind::Aggregated);
            bad.published = "yesterday-ish".to_string();
            let articles = vec![bad];

            for mode in [ViewMode::Grid, ViewMode::List] {
                let text = render(ArticleListWidget::new(&articles, mode, &theme), 80, 10);
                assert!(text.contains("Recently"), "{mode:?} should fall back");
            }
        }

        #[test]
        fn list_shows_every_title() {
            let theme = Theme::default();
            let articles: Vec<Article> = (0..3)
                .map(|i| article(&format!("Story {i}"), ArticleKind::Aggregated))
                .collect();
            let text = render(
                ArticleListWidget::new(&articles, ViewMode::List, &theme),
                80,
                10,
            );

            for i in 0..3 {
                assert!(text.contains(&format!("Story {i}")));
            }
        }

        #[test]
        fn selection_scrolls_into_view() {
            let theme = Theme::default();
            let articles: Vec<Article> = (0..10)
                .map(|i| article(&format!("Story {i}"), ArticleKind::Aggregated))
                .collect();
            // Two entries fit; selecting the last must show it.
            let text = render(
                ArticleListWidget::new(&articles, ViewMode::List, &theme).selected(9, true),
                80,
                LIST_ITEM_HEIGHT * 2,
            );

            assert!(text.contains("Story 9"));
            assert!(!text.contains("Story 0"));
        }

        #[test]
        fn non_ai_article_has_no_ai_badge() {
            let theme = Theme::default();
            let articles = vec![article("Plain", ArticleKind::Aggregated)];
            let text = render(
                ArticleListWidget::new(&articles, ViewMode::List, &theme),
                80,
                4,
            );
            assert!(!text.contains(AI_BADGE));
        }
    }
}
