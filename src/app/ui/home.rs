use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use ratatui_macros::span;

use crate::config;

/// Landing view shown before the task board.
pub struct HomeScreen;

impl HomeScreen {
    pub fn render(f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightBlue))
            .title(Line::from(format!(" {} ", config::APP_NAME)).bold())
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(format!(" {} ", config::version())).dark_gray());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [_, content, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .areas(inner);

        let text = Text::from(vec![
            Line::from("Manage Your Task.").bold().light_blue(),
            Line::default(),
            Line::from(vec![
                span!("Press "),
                span!("Enter").green().bold(),
                span!(" to get started, "),
                span!("q").green().bold(),
                span!(" to quit"),
            ]),
        ]);
        f.render_widget(Paragraph::new(text).alignment(Alignment::Center), content);
    }
}
