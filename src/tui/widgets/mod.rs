//! Custom TUI widgets.

pub mod article_list;
pub mod loading;
pub mod sidebar;

pub use article_list::{AI_BADGE, ArticleListWidget, EMPTY_HINT, EMPTY_TITLE, badge_spans};
pub use loading::{LOADING_MESSAGE, LoadingWidget};
pub use sidebar::{SEARCHING_INDICATOR, SidebarWidget, category_icon, category_label};

/// Flattens a buffer into newline-separated rows of text.
///
/// Cells hidden behind wide characters are skipped so that rendered text
/// can be matched with plain substrings.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    use unicode_width::UnicodeWidthStr;

    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut skip = 0;
        for x in area.left()..area.right() {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = buf[(x, y)].symbol();
            out.push_str(symbol);
            skip = symbol.width().saturating_sub(1);
        }
        out.push('\n');
    }
    out
}
