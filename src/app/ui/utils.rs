#[cfg(test)]
#[path = "utils_test.rs"]
mod tests;

use ratatui::layout::{Constraint, Flex, Layout, Rect};

pub fn notice_area(area: Rect, percent_width: u16) -> Rect {
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_width)]).flex(Flex::End);
    let [area] = horizontal.areas(area);
    area
}

/// Centers a `width` x `height` box inside `area`, shrinking it to fit.
pub fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Spaces needed to pad `used` columns up to `width`.
pub fn fill(width: usize, used: usize) -> String {
    " ".repeat(width.saturating_sub(used))
}

/// Cuts `text` to at most `max_width` columns, marking the cut with an ellipsis.
pub fn truncate(text: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if unicode_width::UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    let mut ret = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        width += w;
        ret.push(c);
    }
    ret.push('…');
    ret
}
