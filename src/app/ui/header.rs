use crate::models::Status;
use crate::store::{StatusFilter, StatusTally};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// One-line summary above the board: per-status counts, the active filter and
/// the search query.
pub struct Header<'a> {
    pub tally: StatusTally,
    pub filter: StatusFilter,
    pub query: &'a str,
    pub loading: bool,
}

impl Header<'_> {
    pub fn render(&self, f: &mut Frame, area: Rect) {
        f.render_widget(Paragraph::new(self.line()), area);
    }

    fn line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for status in Status::ALL {
            spans.push(Span::styled(
                format!("{}: {}", status, self.tally.get(status)),
                Style::default().fg(status.color()).bold(),
            ));
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("Total: {}", self.tally.total()),
            Style::default().bold(),
        ));
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!("Filter: {}", self.filter)));

        if !self.query.is_empty() {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(format!("Search: {}", self.query)).italic());
        }

        if self.loading {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw("Loading...").yellow());
        }
        Line::from(spans)
    }
}
