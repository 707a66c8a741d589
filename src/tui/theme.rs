//! Centralized theme and styling.

use ratatui::style::{Color, Modifier, Style};

/// Application theme with consistent colors and styles.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Accent/highlight color.
    pub accent: Color,
    /// Color of the AI badge and AI hints.
    pub ai: Color,
    /// Warning color (yellow).
    pub warning: Color,
    /// Error color (red).
    pub error: Color,
    /// Muted/secondary text color.
    pub muted: Color,
    /// Source badge background.
    pub source_badge: Color,
    /// Category badge background.
    pub category_badge: Color,
    /// Link color.
    pub link: Color,
    /// Border color.
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            ai: Color::Magenta,
            warning: Color::Yellow,
            error: Color::Red,
            muted: Color::DarkGray,
            source_badge: Color::Blue,
            category_badge: Color::DarkGray,
            link: Color::LightBlue,
            border: Color::Gray,
        }
    }
}

impl Theme {
    /// Style for the header/title.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text.
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Style for muted/secondary text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for article titles.
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    /// Style for warnings such as the "Searching..." indicator.
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Style for the error banner.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    /// Style for borders.
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the border of the focused pane or selected card.
    #[must_use]
    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for highlighted/selected items.
    #[must_use]
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the source badge.
    #[must_use]
    pub fn source_badge_style(&self) -> Style {
        Style::default().fg(Color::White).bg(self.source_badge)
    }

    /// Style for the category badge.
    #[must_use]
    pub fn category_badge_style(&self) -> Style {
        Style::default().fg(Color::White).bg(self.category_badge)
    }

    /// Style for the AI badge and AI hints.
    #[must_use]
    pub fn ai_style(&self) -> Style {
        Style::default().fg(self.ai).add_modifier(Modifier::BOLD)
    }

    /// Style for outbound links.
    #[must_use]
    pub fn link_style(&self) -> Style {
        Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Style for placeholder text (visible on both light and dark backgrounds).
    #[must_use]
    pub fn placeholder_style(&self) -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
    }
}
