#[cfg(test)]
#[path = "task_form_test.rs"]
mod tests;

use crate::models::{Event, Intent, NewTask, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};
use ratatui_macros::span;
use tui_textarea::{Key, TextArea};

use super::{Outcome, utils};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Focus {
    #[default]
    Title,
    Description,
    Status,
}

impl Focus {
    fn next(&self) -> Focus {
        match self {
            Focus::Title => Focus::Description,
            Focus::Description => Focus::Status,
            Focus::Status => Focus::Title,
        }
    }

    fn prev(&self) -> Focus {
        match self {
            Focus::Title => Focus::Status,
            Focus::Description => Focus::Title,
            Focus::Status => Focus::Description,
        }
    }
}

/// The create-task popup.
#[derive(Default)]
pub struct TaskForm<'a> {
    showing: bool,
    focus: Focus,
    title: TextArea<'a>,
    description: TextArea<'a>,
    status: Status,
}

impl TaskForm<'_> {
    pub fn showing(&self) -> bool {
        self.showing
    }

    pub fn open(&mut self) {
        self.title = build_input("Task title");
        self.description = build_input("Task description");
        self.status = Status::default();
        self.focus = Focus::default();
        self.showing = true;
    }

    pub fn close(&mut self) {
        self.showing = false;
    }

    fn draft(&self) -> NewTask {
        NewTask::new(
            self.title.lines().join(" "),
            self.description.lines().join(" "),
        )
        .with_status(self.status)
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
                return Outcome::Submit(Intent::CreateTask(self.draft()));
            }
            Event::KeyboardTab | Event::UiScrollDown => self.focus = self.focus.next(),
            Event::UiScrollUp => self.focus = self.focus.prev(),
            Event::KeyboardPaste(text) => {
                let text = text.replace(['\r', '\n'], " ");
                match self.focus {
                    Focus::Title => {
                        self.title.insert_str(text);
                    }
                    Focus::Description => {
                        self.description.insert_str(text);
                    }
                    Focus::Status => {}
                }
            }
            Event::KeyboardCharInput(input) => match self.focus {
                Focus::Title => {
                    self.title.input(input.clone());
                }
                Focus::Description => {
                    self.description.input(input.clone());
                }
                Focus::Status => match input.key {
                    Key::Right | Key::Char('l') | Key::Char(' ') => {
                        self.status = self.status.next()
                    }
                    Key::Left | Key::Char('h') => self.status = self.status.prev(),
                    _ => {}
                },
            },
            _ => {}
        }
        Outcome::None
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if !self.showing {
            return;
        }

        let area = utils::centered_area(area, (area.width / 2).max(60), 14);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().light_blue())
            .padding(Padding::symmetric(1, 0))
            .title(Line::from(" Add New Task ").bold())
            .title_alignment(Alignment::Center)
            .title_bottom(vec![
                span!(" "),
                span!("Tab").green().bold(),
                span!(" next field, ").white(),
                span!("Enter").green().bold(),
                span!(" to add, ").white(),
                span!("Esc").green().bold(),
                span!(" to cancel ").white(),
            ]);

        f.render_widget(Clear, area);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let [title_area, description_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .areas(inner);

        let focus = self.focus;
        self.title
            .set_block(field_block(" Title ", focus == Focus::Title));
        self.description
            .set_block(field_block(" Description ", focus == Focus::Description));
        self.title.set_cursor_style(cursor_style(focus == Focus::Title));
        self.description
            .set_cursor_style(cursor_style(focus == Focus::Description));

        f.render_widget(&self.title, title_area);
        f.render_widget(&self.description, description_area);
        f.render_widget(
            Paragraph::new(status_line(self.status))
                .block(field_block(" Status ", focus == Focus::Status)),
            status_area,
        );
    }
}

fn build_input<'a>(placeholder: &str) -> TextArea<'a> {
    let mut text_area = TextArea::default();
    text_area.set_placeholder_text(placeholder);
    text_area.set_cursor_line_style(Style::default());
    text_area
}

fn field_block<'a>(title: &'a str, focused: bool) -> Block<'a> {
    let color = if focused {
        Color::LightMagenta
    } else {
        Color::DarkGray
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .padding(Padding::symmetric(1, 0))
        .title(title)
}

fn cursor_style(focused: bool) -> Style {
    if focused {
        Style::default().reversed()
    } else {
        Style::default()
    }
}

fn status_line<'a>(current: Status) -> Line<'a> {
    let mut spans = vec![];
    for status in Status::ALL {
        let (marker, style) = if status == current {
            ("(*) ", Style::default().fg(status.color()).bold())
        } else {
            ("( ) ", Style::default())
        };
        spans.push(Span::styled(marker, style));
        spans.push(Span::styled(status.as_str(), style));
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}
