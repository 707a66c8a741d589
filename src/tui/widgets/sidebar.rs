//! Category navigation sidebar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::tui::Theme;

/// Icon for categories missing from the lookup.
pub const DEFAULT_CATEGORY_ICON: &str = "📌";

/// Text shown while a search query is active.
pub const SEARCHING_INDICATOR: &str = "Searching...";

const TIPS: [&str; 2] = [
    "🔍 Use specific keywords for better results",
    "✨ AI-powered search understands complex queries",
];

/// Returns the icon for a category.
#[must_use]
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "news" => "📰",
        "tech" => "💻",
        "business" => "💼",
        "science" => "🔬",
        "general" => "🌍",
        _ => DEFAULT_CATEGORY_ICON,
    }
}

/// Capitalizes the first character of a category for display.
#[must_use]
pub fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Sidebar listing categories with the selected one highlighted.
pub struct SidebarWidget<'a> {
    categories: &'a [String],
    selected_category: &'a str,
    searching: bool,
    cursor: usize,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SidebarWidget<'a> {
    /// Creates a sidebar for the given categories. `searching` shows the
    /// "Searching..." indicator.
    #[must_use]
    pub const fn new(
        categories: &'a [String],
        selected_category: &'a str,
        searching: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            categories,
            selected_category,
            searching,
            cursor: 0,
            focused: false,
            theme,
        }
    }

    /// Sets the keyboard cursor and whether the sidebar has focus.
    #[must_use]
    pub const fn cursor(mut self, cursor: usize, focused: bool) -> Self {
        self.cursor = cursor;
        self.focused = focused;
        self
    }

    fn entry_line(&self, index: usize, category: &str) -> Line<'static> {
        let is_selected = category == self.selected_category;
        let marker = if self.focused && index == self.cursor {
            "▸ "
        } else {
            "  "
        };
        let label_style = if is_selected {
            self.theme.highlight_style()
        } else {
            self.theme.normal_style()
        };

        Line::from(vec![
            Span::styled(marker, self.theme.highlight_style()),
            Span::raw(format!("{} ", category_icon(category))),
            Span::styled(category_label(category), label_style),
        ])
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut header = vec![Span::styled("Categories", self.theme.header_style())];
        if self.searching {
            header.push(Span::raw(" "));
            header.push(Span::styled(SEARCHING_INDICATOR, self.theme.warning_style()));
        }

        let mut lines = vec![Line::from(header), Line::default()];
        lines.extend(
            self.categories
                .iter()
                .enumerate()
                .map(|(i, c)| self.entry_line(i, c)),
        );

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Tips", self.theme.header_style())));
        lines.extend(
            TIPS.iter()
                .map(|tip| Line::from(Span::styled(*tip, self.theme.muted_style()))),
        );
        lines
    }
}

impl Widget for SidebarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.focused_border_style()
        } else {
            self.theme.border_style()
        };
        let block = Block::bordered().border_style(border_style);

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
