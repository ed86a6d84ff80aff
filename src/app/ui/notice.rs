#[cfg(test)]
#[path = "notice_test.rs"]
mod tests;

use std::time::{self, Duration};

use crate::models::{NoticeKind, NoticeMessage};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use super::utils;

struct MessageWrapper {
    value: NoticeMessage,
    created_at: chrono::DateTime<chrono::Utc>,
}

/// Stack of auto-dismissing notices drawn in the top-right corner.
pub struct Notice {
    notices: Vec<MessageWrapper>,
    display_duration: time::Duration,
}

impl Notice {
    pub fn new(display_duration: time::Duration) -> Notice {
        Notice {
            display_duration,
            ..Default::default()
        }
    }

    pub fn add_message(&mut self, msg: NoticeMessage) {
        let now = chrono::Utc::now();
        self.notices.push(MessageWrapper {
            value: msg,
            created_at: now,
        });
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    fn sync(&mut self) {
        let now = chrono::Utc::now();
        self.notices.retain(|msg| {
            let elapsed = now.signed_duration_since(msg.created_at);
            elapsed.num_milliseconds()
                < msg
                    .value
                    .duration()
                    .unwrap_or(self.display_duration)
                    .as_millis() as i64
        });
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        self.sync();
        if self.notices.is_empty() || area.width < 8 || area.height < 3 {
            return;
        }

        let max_width = area.width as usize - 2;
        let max_height = area.height as usize;

        let items = build_list_items(&self.notices, max_width, max_height);
        let list = List::new(items);
        f.render_widget(list, area);
    }
}

impl Default for Notice {
    fn default() -> Self {
        Self {
            notices: vec![],
            display_duration: Duration::from_secs(2),
        }
    }
}

fn build_list_items<'a>(
    notices: &[MessageWrapper],
    max_width: usize,
    max_height: usize,
) -> Vec<ListItem<'a>> {
    let mut items = vec![];
    let mut current_height = 0;

    // Newest first
    for item in notices.iter().rev() {
        let lines = build_bubble(&item.value, max_width);

        current_height += lines.len();
        if current_height > max_height {
            break;
        }

        items.push(ListItem::new(lines));
    }
    items
}

fn build_bubble<'a>(notice: &NoticeMessage, max_width: usize) -> Vec<Line<'a>> {
    let kind = notice.kind();
    let text_style = Style::default().fg(kind.text_color());

    let mut lines = vec![];
    if let Some(title) = notice.title() {
        lines.push(Span::styled(
            utils::truncate(title, max_width - 2),
            text_style.add_modifier(Modifier::BOLD),
        ));
    }

    let mut line = String::new();
    for word in notice.message().replace('\n', " ").split(' ') {
        if !line.is_empty() && line.width() + word.width() > max_width - 2 {
            lines.push(Span::styled(line.trim().to_string(), text_style));
            line = String::new();
        }
        line.push_str(word);
        line.push(' ');
    }

    if !line.trim().is_empty() {
        lines.push(Span::styled(line.trim().to_string(), text_style));
    }

    wrap_bubble(lines, max_width, kind)
}

fn wrap_bubble<'a>(lines: Vec<Span<'a>>, max_width: usize, kind: NoticeKind) -> Vec<Line<'a>> {
    let border = Style::default().fg(kind.border_color());
    let bar = "─".repeat(max_width);

    let mut wrapped_lines = vec![Line::from(Span::styled(format!("╭{bar}╮"), border))];
    for span in lines {
        let fill = utils::fill(max_width - 2, span.content.width());
        wrapped_lines.push(Line::from(vec![
            Span::styled("│ ", border),
            span,
            Span::raw(fill),
            Span::styled(" │", border),
        ]));
    }

    wrapped_lines.push(Line::from(Span::styled(format!("╰{bar}╯"), border)));
    wrapped_lines
}
