//! Loading indicator shown in place of the article view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::Theme;

/// Message below the spinner.
pub const LOADING_MESSAGE: &str = "Fetching amazing articles for you...";

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner, "Loading" label and message, centered.
pub struct LoadingWidget<'a> {
    ticks: u64,
    theme: &'a Theme,
}

impl<'a> LoadingWidget<'a> {
    /// Creates the indicator; `ticks` selects the spinner frame.
    #[must_use]
    pub const fn new(ticks: u64, theme: &'a Theme) -> Self {
        Self { ticks, theme }
    }

    fn spinner(&self) -> &'static str {
        let len = SPINNER_FRAMES.len() as u64;
        // Index is always < len, which fits in usize.
        #[allow(clippy::cast_possible_truncation)]
        SPINNER_FRAMES[(self.ticks % len) as usize]
    }
}

impl Widget for LoadingWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let top_padding = usize::from(area.height.saturating_sub(3) / 2);
        let mut lines = vec![Line::default(); top_padding];
        lines.push(Line::from(vec![
            Span::styled(self.spinner(), self.theme.highlight_style()),
            Span::styled(" Loading", self.theme.header_style()),
        ]));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            LOADING_MESSAGE,
            self.theme.muted_style(),
        )));

        Paragraph::new(lines).centered().render(area, buf);
    }
}
