//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::Paragraph,
    Frame,
};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, annotation_open: bool, colors: &ThemeColors) {
    let keymap_text = if annotation_open {
        "Enter:toggle | Esc:close | y:copy | Tab:next event | h/l:year | q:quit"
    } else {
        "q:quit | h/l:prev/next year | gg/G:first/last | Tab:select event | Enter:annotate | T:theme | ?:help"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
