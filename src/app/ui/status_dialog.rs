#[cfg(test)]
#[path = "status_dialog_test.rs"]
mod tests;

use crate::models::{Event, Intent, Status, Task, TaskId};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};
use ratatui_macros::span;
use tui_textarea::Key;

use super::{Outcome, utils};

#[derive(Default)]
pub struct StatusDialog {
    showing: bool,
    task_id: TaskId,
    task_title: String,
    choice: Status,
}

impl StatusDialog {
    pub fn showing(&self) -> bool {
        self.showing
    }

    /// Opens the dialog for `task`, preselecting its current status.
    pub fn open(&mut self, task: &Task) {
        self.task_id = task.id();
        self.task_title = task.title().to_string();
        self.choice = task.status();
        self.showing = true;
    }

    pub fn close(&mut self) {
        self.showing = false;
    }

    pub fn handle_key_event(&mut self, event: &Event) -> Outcome {
        if !self.showing {
            return Outcome::None;
        }

        match event {
            Event::KeyboardEsc | Event::KeyboardCtrlC => {
                self.close();
                return Outcome::Cancel;
            }
            Event::KeyboardEnter => {
                self.close();
                return Outcome::Submit(Intent::PatchStatus {
                    id: self.task_id,
                    status: self.choice,
                });
            }
            Event::UiScrollDown | Event::KeyboardTab => self.choice = self.choice.next(),
            Event::UiScrollUp => self.choice = self.choice.prev(),
            Event::KeyboardCharInput(input) => match input.key {
                Key::Char('j') => self.choice = self.choice.next(),
                Key::Char('k') => self.choice = self.choice.prev(),
                Key::Char('1') => self.choice = Status::ToDo,
                Key::Char('2') => self.choice = Status::InProgress,
                Key::Char('3') => self.choice = Status::Done,
                Key::Char('q') => {
                    self.close();
                    return Outcome::Cancel;
                }
                _ => {}
            },
            _ => {}
        }
        Outcome::None
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if !self.showing {
            return;
        }

        let area = utils::centered_area(area, 44, 9);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().light_blue())
            .padding(Padding::symmetric(1, 0))
            .title(Line::from(" Change Status ").bold())
            .title_alignment(Alignment::Center)
            .title_bottom(vec![
                span!(" "),
                span!("Enter").green().bold(),
                span!(" to save, ").white(),
                span!("Esc").green().bold(),
                span!(" to cancel ").white(),
            ]);

        f.render_widget(Clear, area);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let heading = utils::truncate(
            &format!("Task {}: {}", self.task_id, self.task_title),
            inner.width as usize,
        );
        let mut lines = vec![Line::from(heading).italic(), Line::default()];
        for (i, status) in Status::ALL.iter().enumerate() {
            let selected = *status == self.choice;
            let mut style = Style::default().fg(status.color());
            if selected {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            let marker = if selected { "> " } else { "  " };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{}. {}", i + 1, status), style),
            ]));
        }

        f.render_widget(Paragraph::new(Text::from(lines)), inner);
    }
}
