#[cfg(test)]
#[path = "task_table_test.rs"]
mod tests;

use crate::models::{Event, Intent, Task, TaskField, TaskId};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Cell, Padding, Paragraph, Row, Table, TableState},
};
use ratatui_macros::span;
use tui_textarea::Key;

use super::input_box::{self, InputBox};
use super::utils;

const PAGE_SIZE: usize = 10;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    #[default]
    Title,
    Description,
    Status,
    Action,
}

impl Column {
    pub const ALL: [Column; 5] = [
        Column::Id,
        Column::Title,
        Column::Description,
        Column::Status,
        Column::Action,
    ];

    fn index(&self) -> usize {
        Column::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    pub fn next(&self) -> Column {
        Column::ALL[(self.index() + 1).min(Column::ALL.len() - 1)]
    }

    pub fn prev(&self) -> Column {
        Column::ALL[self.index().saturating_sub(1)]
    }

    pub fn header(&self) -> &'static str {
        match self {
            Column::Id => "Task ID",
            Column::Title => "Title",
            Column::Description => "Description",
            Column::Status => "Status",
            Column::Action => "Action",
        }
    }

    fn width(&self) -> Constraint {
        match self {
            Column::Id => Constraint::Length(9),
            Column::Title => Constraint::Fill(3),
            Column::Description => Constraint::Fill(2),
            Column::Status => Constraint::Length(13),
            Column::Action => Constraint::Length(8),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellEdit {
    id: TaskId,
    field: TaskField,
}

/// Grid over the visible tasks with a row and a column cursor. Title and
/// description cells are edited in place; status and action cells turn into
/// intents for the owner.
pub struct TaskTable<'a> {
    state: TableState,
    column: Column,
    editing: Option<CellEdit>,
    input: InputBox<'a>,
}

impl<'a> TaskTable<'a> {
    pub fn new() -> TaskTable<'a> {
        TaskTable {
            state: TableState::default().with_selected(0),
            column: Column::default(),
            editing: None,
            input: InputBox::default().with_border_color(Color::LightBlue),
        }
    }

    pub fn editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn column(&self) -> Column {
        self.column
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Keeps the row cursor inside a list of `len` rows.
    pub fn sync(&mut self, len: usize) {
        let selected = match self.state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.state.select(selected);
    }

    fn next_row(&mut self, len: usize, step: usize) {
        if len == 0 {
            return;
        }
        let i = self.state.selected().map_or(0, |i| (i + step).min(len - 1));
        self.state.select(Some(i));
    }

    fn prev_row(&mut self, step: usize) {
        let i = self.state.selected().map_or(0, |i| i.saturating_sub(step));
        self.state.select(Some(i));
    }

    fn current<'t>(&self, rows: &[&'t Task]) -> Option<&'t Task> {
        self.state.selected().and_then(|i| rows.get(i).copied())
    }

    fn start_edit(&mut self, task: &Task, field: TaskField) {
        let title = format!(" Edit {} of task {} ", field, task.id());
        self.input.set_title(&title);
        self.input.open(task.field(field));
        self.editing = Some(CellEdit {
            id: task.id(),
            field,
        });
    }

    fn activate(&mut self, task: &Task) -> Option<Intent> {
        match self.column {
            Column::Id => None,
            Column::Title => {
                self.start_edit(task, TaskField::Title);
                None
            }
            Column::Description => {
                self.start_edit(task, TaskField::Description);
                None
            }
            Column::Status => Some(Intent::SelectForStatusChange(task.id())),
            Column::Action => Some(Intent::DeleteTask(task.id())),
        }
    }

    fn handle_edit_event(&mut self, edit: CellEdit, event: &Event) -> Option<Intent> {
        match event {
            Event::KeyboardEnter => {
                self.editing = None;
                let value = self.input.close().unwrap_or_default();
                Some(Intent::PatchField {
                    id: edit.id,
                    field: edit.field,
                    value,
                })
            }
            Event::KeyboardEsc | Event::KeyboardCtrlC => {
                self.editing = None;
                self.input.close();
                None
            }
            _ => {
                self.input.handle_key_event(event);
                None
            }
        }
    }

    pub fn handle_key_event(&mut self, event: &Event, rows: &[&Task]) -> Option<Intent> {
        if let Some(edit) = self.editing {
            return self.handle_edit_event(edit, event);
        }

        match event {
            Event::UiScrollDown => self.next_row(rows.len(), 1),
            Event::UiScrollUp => self.prev_row(1),
            Event::UiScrollPageDown => self.next_row(rows.len(), PAGE_SIZE),
            Event::UiScrollPageUp => self.prev_row(PAGE_SIZE),

            Event::KeyboardEnter => {
                let task = self.current(rows)?;
                return self.activate(task);
            }

            Event::KeyboardTab => self.column = self.column.next(),

            Event::KeyboardCharInput(input) => match input.key {
                Key::Char('j') => self.next_row(rows.len(), 1),
                Key::Char('k') => self.prev_row(1),
                Key::Char('g') | Key::Home => self.state.select(Some(0)),
                Key::Char('G') | Key::End => self.next_row(rows.len(), usize::MAX / 2),
                Key::Char('l') | Key::Right => self.column = self.column.next(),
                Key::Char('h') | Key::Left => self.column = self.column.prev(),
                Key::Char('s') => {
                    let task = self.current(rows)?;
                    return Some(Intent::SelectForStatusChange(task.id()));
                }
                Key::Char('d') | Key::Delete => {
                    let task = self.current(rows)?;
                    return Some(Intent::DeleteTask(task.id()));
                }
                _ => {}
            },
            _ => {}
        }
        None
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, rows: &[&Task], empty_text: &str) {
        self.sync(rows.len());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::LightBlue))
            .padding(Padding::symmetric(1, 0))
            .title(Line::from(format!(" Tasks ({}) ", rows.len())).bold())
            .title_alignment(Alignment::Center)
            .title_bottom(self.instructions());

        if rows.is_empty() {
            let inner = block.inner(area);
            f.render_widget(block, area);
            f.render_widget(
                Paragraph::new(empty_text.to_string())
                    .italic()
                    .alignment(Alignment::Center),
                utils::centered_area(inner, inner.width, 1),
            );
            return;
        }

        let selected = self.state.selected();
        let header = Row::new(
            Column::ALL
                .iter()
                .map(|c| Cell::from(c.header()).bold().underlined()),
        )
        .height(1);

        let table_rows = rows.iter().enumerate().map(|(i, task)| {
            let cells = Column::ALL.iter().map(|column| {
                let cell = build_cell(task, *column);
                if selected == Some(i) && *column == self.column {
                    cell.style(Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    cell
                }
            });
            Row::new(cells).height(1)
        });

        let table = Table::new(table_rows, Column::ALL.map(|c| c.width()))
            .header(header)
            .block(block)
            .column_spacing(1)
            .row_highlight_style(Style::default().add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        f.render_stateful_widget(table, area, &mut self.state);
        self.input.render(f, input_box::build_area(area));
    }

    fn instructions(&self) -> Line<'static> {
        if self.editing() {
            return Line::from(vec![
                span!(" "),
                span!("Enter").green().bold(),
                span!(" to save, ").white(),
                span!("Esc").green().bold(),
                span!(" to cancel ").white(),
            ]);
        }

        Line::from(vec![
            span!(" "),
            span!("a").green().bold(),
            span!(" add, ").white(),
            span!("Enter").green().bold(),
            span!(" edit cell, ").white(),
            span!("s").green().bold(),
            span!(" status, ").white(),
            span!("d").green().bold(),
            span!(" delete, ").white(),
            span!("/").green().bold(),
            span!(" search, ").white(),
            span!("f").green().bold(),
            span!(" filter, ").white(),
            span!("q").green().bold(),
            span!(" quit ").white(),
        ])
    }
}

impl Default for TaskTable<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn build_cell<'a>(task: &Task, column: Column) -> Cell<'a> {
    match column {
        Column::Id => Cell::from(task.id().to_string()),
        Column::Title => Cell::from(task.title().to_string()),
        Column::Description => Cell::from(task.description().to_string()),
        Column::Status => {
            let status = task.status();
            Cell::from(status.to_string()).fg(status.color())
        }
        Column::Action => Cell::from("  ✗").red().bold(),
    }
}
